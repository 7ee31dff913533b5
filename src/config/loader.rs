use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::BoilerplateConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".boilerplate.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<BoilerplateConfig, String> {
    let config = toml::from_str::<BoilerplateConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;
    config
        .validate()
        .map_err(|e| format!("Invalid {}: {}", CONFIG_FILE_NAME, e))?;
    Ok(config)
}

/// Try loading a discovered config file; failures fall back to defaults.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<BoilerplateConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Discover `.boilerplate.toml` from `start` upwards, or use defaults.
pub fn discover_config(start: PathBuf) -> BoilerplateConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            BoilerplateConfig::default()
        })
}

/// Discover configuration from the current directory.
pub fn load_config() -> BoilerplateConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            BoilerplateConfig::default()
        }
    }
}

/// Load an explicitly requested config file. Unlike discovery, any problem
/// is an error.
pub fn load_config_from(path: &Path) -> Result<BoilerplateConfig> {
    let contents = read_config_file(path).map_err(|e| Error::io(path, e))?;
    parse_and_validate_config(&contents).map_err(Error::Config)
}
