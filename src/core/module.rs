//! Lock-screen module trait and host-side context types

use crate::plugin::ModuleInfo;
use std::fmt;
use std::path::PathBuf;

/// Identifier the host assigns to each lock-screen window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window#{}", self.0)
    }
}

/// A host window together with the overlay modules draw on
#[derive(Debug, Clone)]
pub struct LockWindow<S> {
    pub id: WindowId,
    pub overlay: S,
}

impl<S> LockWindow<S> {
    pub fn new(id: WindowId, overlay: S) -> Self {
        Self { id, overlay }
    }
}

/// Services the lock-screen host provides to its modules
pub trait LockHost {
    /// Whether the host currently hides its UI (idle)
    fn is_hidden(&self) -> bool;

    /// Window that currently has focus, if any
    fn focused_window(&self) -> Option<WindowId>;

    /// Config file the host was started with
    ///
    /// Modules read their own group from it during activation.
    fn config_file(&self) -> Option<PathBuf>;
}

/// Trait for all lock-screen modules
///
/// The host calls these hooks from its UI thread in response to its own
/// lifecycle events. `S` is the host's overlay surface type.
pub trait LockModule<S> {
    /// Module identity checked by the host before activation
    fn info(&self) -> ModuleInfo;

    /// Called once after loading
    ///
    /// `slot` is the index the host assigned to this module.
    fn on_activation(&mut self, host: &dyn LockHost, slot: u32);

    /// Focus moved to `window`, away from `old`
    fn on_focus_change(
        &mut self,
        host: &dyn LockHost,
        window: &LockWindow<S>,
        old: Option<&LockWindow<S>>,
    );

    /// `window` is being destroyed
    fn on_window_destroy(&mut self, host: &dyn LockHost, window: WindowId);

    /// `window` lost its contents (monitor removed)
    ///
    /// Releases the same resources as a destroy by default.
    fn on_window_empty(&mut self, host: &dyn LockHost, window: WindowId) {
        self.on_window_destroy(host, window);
    }

    /// Idle timer fired: hide UI on the focused window
    fn on_idle_hide(&mut self, host: &dyn LockHost);

    /// Activity resumed: show UI on the focused window
    fn on_idle_show(&mut self, host: &dyn LockHost);
}
