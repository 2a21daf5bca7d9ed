use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::eyre::WrapErr;
use cube_core::DEFAULT_SCRAMBLE_LENGTH;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Settings read from the optional TOML config file. Command-line flags take
/// precedence over anything set here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CubeConfig {
    /// Number of moves in a generated scramble.
    pub scramble_length: usize,
    /// Fixed scramble seed; a fresh one is drawn for every run when unset.
    pub seed: Option<u64>,
    /// Print the unfolded diagram next to every flat string.
    pub show_diagram: bool,
}

impl Default for CubeConfig {
    fn default() -> Self {
        CubeConfig {
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            seed: None,
            show_diagram: true,
        }
    }
}

impl CubeConfig {
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("facelet-cube");
        path.push("config.toml");
        Some(path)
    }

    /// Reads `path` if one was given. Otherwise reads the file at
    /// [`CubeConfig::default_path`] when it exists, and falls back to the
    /// defaults when it doesn't.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<CubeConfig> {
        if let Some(path) = path {
            return CubeConfig::read(path);
        }

        match CubeConfig::default_path() {
            Some(path) if path.is_file() => CubeConfig::read(&path),
            _ => {
                debug!("No config file found; using defaults");
                Ok(CubeConfig::default())
            }
        }
    }

    fn read(path: &Path) -> color_eyre::Result<CubeConfig> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
        let config = CubeConfig::parse(&text)
            .wrap_err_with(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn parse(text: &str) -> Result<CubeConfig, toml::de::Error> {
        toml::from_str(text)
    }
}
