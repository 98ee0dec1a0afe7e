//! Configuration management

mod keyfile;

pub use gtklock_powerbar_types::PowerbarConfig;
pub use keyfile::{load_from_data, load_from_keyfile, load_from_path, ConfigError};
