// Configuration file loading and creation

use super::types::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("wrathbot");
    path.push("config.toml");
    path
}

/// Load configuration from the default location, or create it if it doesn't exist.
///
/// A file that fails to parse is reported and replaced by defaults in memory;
/// the file on disk is left alone so the user can fix it.
pub fn load_config() -> Result<Config> {
    let config_path = get_config_path();

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("reading {}", config_path.display()))?;
        match toml::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("Failed to parse config file {}: {}", config_path.display(), e);
                warn!("Using default configuration");
                Ok(Config::default())
            }
        }
    } else {
        create_default_config(&config_path)?;
        Ok(Config::default())
    }
}

/// Load configuration from an explicit path. Errors are not papered over.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let config = Config::default();
    let toml_string = toml::to_string_pretty(&config).context("serializing default config")?;

    let commented_toml = format!(
        "# WrathBot Configuration File\n\
         # Edit this file to tune the controller between matches\n\
         #\n\
         # Angles are in degrees, distances in arena pixels\n\
         # Colors: RGB values from 0-255\n\
         # Set movement.seed for reproducible movement\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml).with_context(|| format!("writing {}", path.display()))?;
    info!("Created default config file at: {}", path.display());
    Ok(())
}
