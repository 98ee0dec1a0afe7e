//! Fire-and-forget command launching

use gtk4::glib;
use thiserror::Error;

/// Failure to start a command
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("empty command line")]
    Empty,
    #[error("failed to spawn `{command}`: {message}")]
    Spawn { command: String, message: String },
}

/// Starts a command line without waiting for it
///
/// Implementations must return as soon as the child is started; the child's
/// output and exit status are never observed.
pub trait CommandLauncher {
    fn launch(&self, command: &str) -> Result<(), LaunchError>;
}

/// Launcher backed by GLib's asynchronous spawn
///
/// The command line is split with shell quoting rules and looked up in PATH.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlibLauncher;

impl CommandLauncher for GlibLauncher {
    fn launch(&self, command: &str) -> Result<(), LaunchError> {
        if command.trim().is_empty() {
            return Err(LaunchError::Empty);
        }
        glib::spawn_command_line_async(command).map_err(|e| LaunchError::Spawn {
            command: command.to_string(),
            message: e.to_string(),
        })
    }
}
