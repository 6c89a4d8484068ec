use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use gofence_cli::GofenceCli;
use gofence_core::FenceOptions;
use gofence_core::FileProducer;
use gofence_core::GofenceConfig;
use gofence_core::GofenceError;
use gofence_core::GofenceResult;
use gofence_core::Producer;
use gofence_core::RewriteSummary;
use gofence_core::StdinProducer;
use gofence_core::rewrite;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

fn main() {
	let args = GofenceCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_tracing(args.verbose, use_color);

	match run(&args) {
		Ok(Some((path, summary))) => {
			let message = format!(
				"Wrote {} with {} fenced code block(s)",
				path.display(),
				summary.blocks
			);
			if use_color {
				eprintln!("{}", message.green());
			} else {
				eprintln!("{message}");
			}
		}
		Ok(None) => {}
		Err(GofenceError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
			tracing::debug!("output closed early");
			process::exit(1);
		}
		Err(e) => {
			let report: miette::Report = e.into();
			eprintln!("{report:?}");
			process::exit(1);
		}
	}
}

/// Logs go to stderr; stdout carries the rewritten markdown.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}

fn resolve_root(args: &GofenceCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Returns the output path and summary when the result went to a file.
fn run(args: &GofenceCli) -> GofenceResult<Option<(PathBuf, RewriteSummary)>> {
	let root = resolve_root(args);
	let config = GofenceConfig::load_or_default(&root)?;

	let mut options = config.fence_options()?;
	if let Some(language) = &args.language {
		options.language.clone_from(language);
	}

	let summary = if args.reads_stdin() {
		run_producer(args, StdinProducer, &options)?
	} else if let Some(input) = &args.input {
		run_producer(args, FileProducer::new(input), &options)?
	} else {
		let generator = config.generator(args.template.as_deref(), &root);
		run_producer(args, generator, &options)?
	};

	tracing::debug!(
		lines = summary.lines,
		blocks = summary.blocks,
		suppressed = summary.suppressed,
		"done"
	);

	Ok(args.output.clone().map(|path| (path, summary)))
}

/// The output is opened only once the producer has started, so a launch
/// failure leaves no empty output file behind.
fn run_producer<P: Producer>(
	args: &GofenceCli,
	mut producer: P,
	options: &FenceOptions,
) -> GofenceResult<RewriteSummary> {
	let stream = producer.produce()?;
	let output = open_output(args)?;
	let summary = rewrite(stream, output, options)?;
	producer.finish()?;

	Ok(summary)
}

fn open_output(args: &GofenceCli) -> GofenceResult<Box<dyn Write>> {
	let Some(path) = &args.output else {
		return Ok(Box::new(BufWriter::new(io::stdout().lock())));
	};

	let file = File::create(path).map_err(|source| {
		GofenceError::CreateOutput {
			path: path.display().to_string(),
			source,
		}
	})?;

	Ok(Box::new(BufWriter::new(file)))
}
