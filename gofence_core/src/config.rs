use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::CODE_PREFIX;
use crate::DEFAULT_GENERATOR;
use crate::DEFAULT_GENERATOR_ARGS;
use crate::DEFAULT_LANGUAGE;
use crate::DEFAULT_TEMPLATE;
use crate::FenceOptions;
use crate::Generator;
use crate::GofenceError;
use crate::GofenceResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["gofence.toml", ".gofence.toml", ".config/gofence.toml"];

/// Configuration loaded from a `gofence.toml` file.
///
/// ```toml
/// [generator]
/// command = "godocdown"
/// args = ["-template"]
/// template = "README.md.tmpl"
///
/// [fence]
/// language = "go"
/// indent = "    "
/// ```
///
/// Every key is optional. Missing keys fall back to the values shown above.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GofenceConfig {
	#[serde(default)]
	pub generator: GeneratorConfig,
	#[serde(default)]
	pub fence: FenceConfig,
}

/// How the documentation generator is invoked.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
	/// Program to run.
	#[serde(default = "default_command")]
	pub command: String,
	/// Arguments passed before the template path.
	#[serde(default = "default_args")]
	pub args: Vec<String>,
	/// Template used when none is given on the command line.
	#[serde(default = "default_template")]
	pub template: PathBuf,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			command: default_command(),
			args: default_args(),
			template: default_template(),
		}
	}
}

/// Which lines are code and how their fences are tagged.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FenceConfig {
	#[serde(default = "default_language")]
	pub language: String,
	#[serde(default = "default_indent")]
	pub indent: String,
}

impl Default for FenceConfig {
	fn default() -> Self {
		Self {
			language: default_language(),
			indent: default_indent(),
		}
	}
}

fn default_command() -> String {
	DEFAULT_GENERATOR.to_string()
}

fn default_args() -> Vec<String> {
	DEFAULT_GENERATOR_ARGS
		.iter()
		.map(ToString::to_string)
		.collect()
}

fn default_template() -> PathBuf {
	PathBuf::from(DEFAULT_TEMPLATE)
}

fn default_language() -> String {
	DEFAULT_LANGUAGE.to_string()
}

fn default_indent() -> String {
	CODE_PREFIX.to_string()
}

impl GofenceConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> GofenceResult<Option<GofenceConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		tracing::debug!(path = %config_path.display(), "loading config");

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::parse(&content)?;

		Ok(Some(config))
	}

	/// Like [`GofenceConfig::load`] but falls back to the defaults.
	pub fn load_or_default(root: &Path) -> GofenceResult<GofenceConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}

	pub fn parse(content: &str) -> GofenceResult<GofenceConfig> {
		let config: GofenceConfig =
			toml::from_str(content).map_err(|e| GofenceError::ConfigParse(e.to_string()))?;
		config.fence_options()?;

		Ok(config)
	}

	/// Fence options from the `[fence]` section.
	pub fn fence_options(&self) -> GofenceResult<FenceOptions> {
		FenceOptions::new(self.fence.indent.clone(), self.fence.language.clone())
	}

	/// Build the generator for `template`, or the configured template when
	/// `None`. The generator runs inside `root` so relative templates resolve
	/// against it.
	pub fn generator(&self, template: Option<&Path>, root: &Path) -> Generator {
		let template = template.unwrap_or(&self.generator.template);

		Generator::new(self.generator.command.clone(), template)
			.with_args(self.generator.args.iter().cloned())
			.with_working_dir(root)
	}
}
