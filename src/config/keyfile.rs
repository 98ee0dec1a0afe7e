//! Powerbar options from the host's key file
//!
//! The lock screen keeps all module options in one INI-style file; this
//! module reads the `[powerbar]` group of it. Keys that are missing keep
//! their defaults, and so do keys whose value cannot be parsed.

use gtk4::glib::{self, KeyFile, KeyFileError, KeyFileFlags};
use gtklock_powerbar_types::{Action, PowerbarConfig, CONFIG_GROUP};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading the config file as a whole
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load {}: {}", .path.display(), .source)]
    Load { path: PathBuf, source: glib::Error },
    #[error("invalid config data: {0}")]
    Parse(#[source] glib::Error),
}

/// Load options from the key file at `path`
pub fn load_from_path(path: &Path) -> Result<PowerbarConfig, ConfigError> {
    let keyfile = KeyFile::new();
    keyfile
        .load_from_file(path, KeyFileFlags::NONE)
        .map_err(|source| ConfigError::Load {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("Loaded config file {}", path.display());
    Ok(load_from_keyfile(&keyfile))
}

/// Load options from in-memory key file data
pub fn load_from_data(data: &str) -> Result<PowerbarConfig, ConfigError> {
    let keyfile = KeyFile::new();
    keyfile
        .load_from_data(data, KeyFileFlags::NONE)
        .map_err(ConfigError::Parse)?;
    Ok(load_from_keyfile(&keyfile))
}

/// Read the `[powerbar]` group of an already loaded key file
pub fn load_from_keyfile(keyfile: &KeyFile) -> PowerbarConfig {
    let mut config = PowerbarConfig::default();
    if !keyfile.has_group(CONFIG_GROUP) {
        debug!("No [{}] group, using defaults", CONFIG_GROUP);
        return config;
    }

    if let Some(show_labels) = read_option(keyfile, "show-labels", KeyFile::boolean) {
        config.show_labels = show_labels;
    }
    if let Some(linked) = read_option(keyfile, "linked-buttons", KeyFile::boolean) {
        config.linked_buttons = linked;
    }
    for action in Action::ALL {
        if let Some(command) = read_option(keyfile, action.config_key(), KeyFile::string) {
            *config.command_mut(action) = Some(command.to_string());
        }
    }

    config
}

/// Read one key, treating absence as "not set" and bad values as a warning
fn read_option<V>(
    keyfile: &KeyFile,
    key: &str,
    read: impl Fn(&KeyFile, &str, &str) -> Result<V, glib::Error>,
) -> Option<V> {
    match read(keyfile, CONFIG_GROUP, key) {
        Ok(value) => Some(value),
        Err(e) if e.matches(KeyFileError::KeyNotFound) || e.matches(KeyFileError::GroupNotFound) => {
            None
        }
        Err(e) => {
            warn!("Ignoring [{}] {}: {}", CONFIG_GROUP, key, e);
            None
        }
    }
}
