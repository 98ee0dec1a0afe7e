//! gtklock-powerbar: Power action buttons for the gtklock lock screen
//!
//! This library provides:
//! - The lock-screen module contract (`LockModule`, `LockHost`)
//! - The powerbar module, which puts reboot/poweroff/suspend/switch-user/
//!   log-out buttons on every lock window
//! - A GTK4 toolkit backend and key-file configuration loading

pub mod core;
pub mod config;
pub mod ui;
pub mod plugin;

// Re-export commonly used types
pub use core::{GlibLauncher, LockHost, LockModule, LockWindow, Powerbar, WindowId};
pub use config::PowerbarConfig;
pub use plugin::ModuleInfo;
pub use ui::GtkToolkit;

/// Powerbar driving real GTK widgets
pub type GtkPowerbar = Powerbar<GtkToolkit>;
