use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about = "Run godocdown and turn its indented code blocks into fenced ```go blocks.",
	long_about = "gofence runs godocdown on a template and rewrites the markdown it prints: \
	              every block indented by four spaces becomes a fenced ```go block, the \
	              indentation is removed and the blank line godocdown leaves after each block \
	              is dropped.\n\nThe result is written to stdout unless `--output` is \
	              given.\n\nExamples:\n  gofence                   Render README.md.tmpl\n  \
	              gofence DOC.tmpl > DOC.md  Render another template\n  gofence --input \
	              raw.md      Rewrite an already rendered file"
)]
pub struct GofenceCli {
	/// Template file passed to the generator. Defaults to the configured
	/// template, or `README.md.tmpl`.
	pub template: Option<PathBuf>,

	/// Rewrite an already rendered markdown file instead of running the
	/// generator. Use `-` to read from stdin.
	#[arg(long, short, conflicts_with = "template")]
	pub input: Option<PathBuf>,

	/// Write the result to this file instead of stdout.
	#[arg(long, short)]
	pub output: Option<PathBuf>,

	/// Language written after each opening fence.
	#[arg(long, short)]
	pub language: Option<String>,

	/// Project root used to find `gofence.toml` and to run the generator in.
	#[arg(long, short)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

impl GofenceCli {
	/// Whether `--input -` asked for stdin.
	pub fn reads_stdin(&self) -> bool {
		self.input
			.as_ref()
			.is_some_and(|input| input.as_os_str() == "-")
	}
}
