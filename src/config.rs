use std::path::Path;

use serde::Deserialize;

use crate::cli::OutputFormat;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "symbol-kind.toml";

/// Configuration loaded from `symbol-kind.toml`.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SymbolKindConfig {
    /// Treat unknown kinds as errors. The `--strict` flag turns this on per invocation.
    pub strict: bool,
    /// Output format used when `--format` is not given.
    pub format: OutputFormat,
}

impl SymbolKindConfig {
    /// Load configuration from `path`.
    ///
    /// Returns a default configuration if the file does not exist or cannot be parsed.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Self>(&contents) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!(
                        "warning: failed to parse {}: {err}. Using defaults.",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(err) => {
                eprintln!(
                    "warning: failed to read {}: {err}. Using defaults.",
                    path.display()
                );
                Self::default()
            }
        }
    }
}
