use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".typedepsrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Type names to start the closure from, in addition to CLI `--type`.
    #[serde(default)]
    pub roots: Vec<String>,
    /// Glob patterns of reference names that are never looked up locally.
    #[serde(default)]
    pub externals: Vec<String>,
    #[serde(default)]
    pub follow_reexports: bool,
    /// Extensions tried when resolving a relative re-export specifier.
    #[serde(default = "default_module_extensions")]
    pub module_extensions: Vec<String>,
}

fn default_module_extensions() -> Vec<String> {
    [".ts", ".tsx", ".d.ts"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            externals: Vec::new(),
            follow_reexports: false,
            module_extensions: default_module_extensions(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `externals` is invalid.
    pub fn validate(&self) -> Result<()> {
        self.external_patterns()?;

        for ext in &self.module_extensions {
            if !ext.starts_with('.') {
                anyhow::bail!(
                    "Invalid entry in 'moduleExtensions': \"{}\" (must start with '.')",
                    ext
                );
            }
        }

        Ok(())
    }

    /// Compile `externals` into glob patterns.
    pub fn external_patterns(&self) -> Result<Vec<Pattern>> {
        self.externals
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'externals': \"{}\"", pattern)
                })
            })
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
