use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum GofenceError {
	#[error(transparent)]
	#[diagnostic(code(gofence::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to launch `{program}`: {source}")]
	#[diagnostic(
		code(gofence::launch),
		help(
			"make sure `{program}` is installed and on your PATH, e.g. `go install \
			 github.com/robertkrimen/godocdown/godocdown@latest`"
		)
	)]
	Launch {
		program: String,
		source: std::io::Error,
	},

	#[error("`{program}` was started without a readable stdout pipe")]
	#[diagnostic(code(gofence::missing_stdout))]
	MissingStdout { program: String },

	#[error("failed to open input `{path}`: {source}")]
	#[diagnostic(code(gofence::open_input))]
	OpenInput {
		path: String,
		source: std::io::Error,
	},

	#[error("failed to create output `{path}`: {source}")]
	#[diagnostic(code(gofence::create_output))]
	CreateOutput {
		path: String,
		source: std::io::Error,
	},

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(gofence::config_parse),
		help("check that gofence.toml is valid TOML with [generator] and/or [fence] sections")
	)]
	ConfigParse(String),

	#[error("the code block indent must not be empty")]
	#[diagnostic(
		code(gofence::invalid_indent),
		help("set `indent` in the [fence] section to the prefix that marks a code line, e.g. four spaces")
	)]
	InvalidIndent,
}

pub type GofenceResult<T> = Result<T, GofenceError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
