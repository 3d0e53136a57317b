//! Settings loading functionality
//!
//! This module contains functions for locating, loading and validating the
//! settings file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::{debug, info};
use serde_yaml::from_str;

use crate::constants::SETTINGS_FILE_DEFAULT;
use crate::errors::config_parsing_error;
use crate::utils::{expand_path, find_project_folder};

use super::model::Settings;

/// Loads settings from a file
///
/// # Arguments
/// * `file` - Path to the settings file
///
/// # Returns
/// * `Result<Settings>` - The loaded settings or an error
///
/// # Errors
/// Returns an error if the file cannot be read or if the settings are invalid
pub fn load_settings(file: &Path) -> Result<Settings> {
    let file_content = fs::read(file)
        .map_err(|e| anyhow!("Failed to read settings file {}: {}", file.display(), e))?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Settings file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    // An empty file means "all defaults"
    if content_str.trim().is_empty() {
        return Ok(Settings::default());
    }

    let settings: Settings = from_str(&content_str).map_err(|e| {
        let detail = format!(
            "Failed to parse settings file {}: {}\nPlease check the YAML syntax.",
            file.display(),
            e
        );
        config_parsing_error(e, &detail)
    })?;

    settings.validate()?;
    debug!("Loaded settings from {}: {:?}", file.display(), settings);

    Ok(settings)
}

/// Resolves which settings file to use
///
/// An explicit path is tilde-expanded and must exist. Without one, the
/// default file in the platform configuration directory is used when it
/// exists.
///
/// # Returns
/// * `Result<Option<PathBuf>>` - The settings file, or `None` for built-in defaults
///
/// # Errors
/// Returns an error if an explicit file does not exist
pub fn locate_settings(explicit: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        let path = expand_path(path);
        if !path.exists() {
            return Err(anyhow!(
                "Settings file does not exist: {}\nPlease check the path.",
                path.display()
            ));
        }
        return Ok(Some(path));
    }

    let folder = match find_project_folder() {
        Ok(folder) => folder,
        Err(e) => {
            debug!("No configuration directory available ({e}), using defaults");
            return Ok(None);
        }
    };
    let default = folder.config_dir().join(SETTINGS_FILE_DEFAULT);
    if default.exists() {
        Ok(Some(default))
    } else {
        debug!("No settings file at {}, using defaults", default.display());
        Ok(None)
    }
}

/// Locates and loads the settings, falling back to the defaults
///
/// # Errors
/// Returns an error if an explicit file is missing or any file is invalid
pub fn read_settings(explicit: Option<&str>) -> Result<Settings> {
    match locate_settings(explicit)? {
        Some(path) => {
            let settings = load_settings(&path)?;
            info!("Using settings from {}", path.display());
            Ok(settings)
        }
        None => Ok(Settings::default()),
    }
}
