//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use venny::{VennyError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for VennyError {
    fn from(err: ConfigError) -> Self {
        VennyError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (venny/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or holds invalid values
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, VennyError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("venny/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "venny", "venny") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load and validate configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, VennyError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config
        .style()
        .validate()
        .map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use venny::Annotation;

    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_explicit_config() {
        let (_dir, path) = write_config(
            r#"
            fill = ["logic", "percent"]

            [style]
            colors = ["red", "rgba(0, 0, 255, 0.3)"]
            figsize = [4.0, 3.0]
            dpi = 50
            "#,
        );

        let config = load_config(Some(&path)).unwrap();
        assert!(config.fill().contains(Annotation::Logic));
        assert!(config.fill().contains(Annotation::Percent));
        assert!(!config.fill().contains(Annotation::Number));
        assert_eq!(config.style().dpi(), 50.0);
    }

    #[test]
    fn test_missing_explicit_config() {
        let dir = tempdir().unwrap();
        let result = load_config(Some(dir.path().join("nope.toml")));
        assert!(matches!(result, Err(VennyError::Config(msg)) if msg.contains("Missing")));
    }

    #[test]
    fn test_invalid_toml() {
        let (_dir, path) = write_config("fill = [");
        let result = load_config(Some(&path));
        assert!(matches!(result, Err(VennyError::Config(msg)) if msg.contains("parse")));
    }

    #[test]
    fn test_unknown_fill_value() {
        let (_dir, path) = write_config(r#"fill = ["area"]"#);
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_validation_errors() {
        for content in [
            "[style]\ndpi = 0",
            "[style]\nfigsize = [0.0, 3.0]",
            "[style]\nfontsize = -1",
            "[style]\ncolors = [\"not-a-color\"]",
        ] {
            let (_dir, path) = write_config(content);
            let result = load_config(Some(&path));
            assert!(
                matches!(&result, Err(VennyError::Config(msg)) if msg.contains("Validation")),
                "{content}: {result:?}"
            );
        }
    }
}
