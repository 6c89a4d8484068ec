//! Sources of the byte stream fed to the rewriter.
//!
//! The rewriter only sees a [`Read`]. Everything about where that stream
//! comes from (a child process, a file, stdin) lives behind [`Producer`].

use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;
use std::process::Child;
use std::process::ChildStdout;
use std::process::Command;
use std::process::Stdio;

use crate::GofenceError;
use crate::GofenceResult;

/// Program run when no other generator is configured.
pub const DEFAULT_GENERATOR: &str = "godocdown";

/// Arguments placed before the template path.
pub const DEFAULT_GENERATOR_ARGS: [&str; 1] = ["-template"];

/// Template used when none is given on the command line or in config.
pub const DEFAULT_TEMPLATE: &str = "README.md.tmpl";

pub trait Producer {
	type Stream: Read;

	/// Start producing and hand back the stream to read from.
	fn produce(&mut self) -> GofenceResult<Self::Stream>;

	/// Release anything still held once the stream has been consumed.
	fn finish(&mut self) -> GofenceResult<()> {
		Ok(())
	}
}

/// Runs the documentation generator and streams its stdout.
#[derive(Debug)]
pub struct Generator {
	program: String,
	args: Vec<String>,
	template: PathBuf,
	working_dir: Option<PathBuf>,
	child: Option<Child>,
}

impl Generator {
	pub fn new(program: impl Into<String>, template: impl Into<PathBuf>) -> Self {
		Self {
			program: program.into(),
			args: Vec::new(),
			template: template.into(),
			working_dir: None,
			child: None,
		}
	}

	#[must_use]
	pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> Self {
		self.args = args.into_iter().collect();
		self
	}

	#[must_use]
	pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.working_dir = Some(dir.into());
		self
	}

	pub fn program(&self) -> &str {
		&self.program
	}

	pub fn template(&self) -> &Path {
		&self.template
	}

	fn command(&self) -> Command {
		let mut command = Command::new(&self.program);
		command
			.args(&self.args)
			.arg(&self.template)
			.stdin(Stdio::null())
			.stdout(Stdio::piped())
			.stderr(Stdio::inherit());

		if let Some(dir) = &self.working_dir {
			command.current_dir(dir);
		}

		command
	}
}

impl Producer for Generator {
	type Stream = ChildStdout;

	fn produce(&mut self) -> GofenceResult<ChildStdout> {
		tracing::debug!(
			program = %self.program,
			args = ?self.args,
			template = %self.template.display(),
			"starting generator"
		);

		let mut child = self.command().spawn().map_err(|source| {
			GofenceError::Launch {
				program: self.program.clone(),
				source,
			}
		})?;

		let Some(stdout) = child.stdout.take() else {
			let _ = child.kill();
			let _ = child.wait();
			return Err(GofenceError::MissingStdout {
				program: self.program.clone(),
			});
		};

		self.child = Some(child);

		Ok(stdout)
	}

	/// Wait for the generator to exit. Its status never fails the run; a
	/// non-zero exit is only logged.
	fn finish(&mut self) -> GofenceResult<()> {
		let Some(mut child) = self.child.take() else {
			return Ok(());
		};

		let status = child.wait()?;
		if status.success() {
			tracing::debug!(program = %self.program, "generator exited");
		} else {
			tracing::warn!(program = %self.program, %status, "generator exited unsuccessfully");
		}

		Ok(())
	}
}

/// Reads an already rendered document from disk.
#[derive(Debug, Clone)]
pub struct FileProducer {
	path: PathBuf,
}

impl FileProducer {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl Producer for FileProducer {
	type Stream = File;

	fn produce(&mut self) -> GofenceResult<File> {
		tracing::debug!(path = %self.path.display(), "reading input file");

		File::open(&self.path).map_err(|source| {
			GofenceError::OpenInput {
				path: self.path.display().to_string(),
				source,
			}
		})
	}
}

/// Reads the document from the process's standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinProducer;

impl Producer for StdinProducer {
	type Stream = io::Stdin;

	fn produce(&mut self) -> GofenceResult<io::Stdin> {
		tracing::debug!("reading input from stdin");

		Ok(io::stdin())
	}
}
