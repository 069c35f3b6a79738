use serde::Deserialize;
use simpleui_common::CompileOptions;
use std::path::Path;

pub const DEFAULT_CONFIG_NAME: &str = "simpleui.config.json";

/// SimpleUI configuration file format, read from the input's directory
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Output directory, relative to the config file
    #[serde(default)]
    pub destination: Option<String>,

    /// Indentation used in generated files
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Treat node kinds without an implementation as errors
    #[serde(default)]
    pub fail_on_unsupported: bool,
}

fn default_indent() -> String {
    "  ".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let config_path = dir.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            indent: self.indent.clone(),
            fail_on_unsupported: self.fail_on_unsupported,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            destination: None,
            indent: default_indent(),
            fail_on_unsupported: false,
        }
    }
}
