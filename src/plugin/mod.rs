//! Module identity exposed to the lock-screen host

pub mod abi;

pub use abi::{ModuleInfo, MODULE_MAJOR_VERSION, MODULE_MINOR_VERSION, MODULE_NAME};
