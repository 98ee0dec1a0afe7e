//! Core traits and types for the powerbar module

mod launcher;
mod module;
mod powerbar;
mod toolkit;

#[cfg(test)]
pub(crate) mod test_support;

pub use launcher::{CommandLauncher, GlibLauncher, LaunchError};
pub use module::{LockHost, LockModule, LockWindow, WindowId};
pub use powerbar::{PanelState, Powerbar};
pub use toolkit::{ButtonSpec, ClickHandler, PanelToolkit};
