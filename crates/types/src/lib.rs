//! gtklock-powerbar-types: Shared data types for the gtklock powerbar module.
//!
//! This crate contains pure data types (actions, options, layout constants)
//! used by the module and its hosts. These types have no GTK dependencies,
//! making them suitable as a foundation layer.

pub mod action;
pub mod config;
pub mod layout;

// Re-export commonly used types at the crate root for convenience
pub use action::Action;
pub use config::PowerbarConfig;
pub use layout::{
    BOX_NAME, BOX_SPACING, CONFIG_GROUP, CONTAINER_MARGIN, ICON_RESOURCE_PATH, REVEALER_NAME,
};
