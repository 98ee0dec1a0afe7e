//! Module ABI definitions
//!
//! Identity the host checks before it starts calling lifecycle hooks.

use serde::{Deserialize, Serialize};

/// Name the host uses for the module and its config group
pub const MODULE_NAME: &str = gtklock_powerbar_types::CONFIG_GROUP;

/// Host ABI major version this module is built against
pub const MODULE_MAJOR_VERSION: u32 = 4;

/// Host ABI minor version this module is built against
pub const MODULE_MINOR_VERSION: u32 = 0;

/// Metadata about a lock-screen module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    /// Module name
    pub name: String,
    /// ABI major version
    pub major_version: u32,
    /// ABI minor version
    pub minor_version: u32,
}

impl ModuleInfo {
    /// Metadata of this module
    pub fn powerbar() -> Self {
        Self {
            name: MODULE_NAME.to_string(),
            major_version: MODULE_MAJOR_VERSION,
            minor_version: MODULE_MINOR_VERSION,
        }
    }

    /// Whether a host speaking `host_major.host_minor` can load this module
    ///
    /// Majors must match exactly; the module may not need a newer minor
    /// than the host provides.
    pub fn is_compatible(&self, host_major: u32, host_minor: u32) -> bool {
        self.major_version == host_major && self.minor_version <= host_minor
    }
}
