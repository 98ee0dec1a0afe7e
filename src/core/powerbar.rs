//! Powerbar - per-window row of power action buttons
//!
//! Every focus change rebuilds the focused window's panel from scratch;
//! afterwards a panel only changes between revealed and concealed.

use super::launcher::CommandLauncher;
use super::module::{LockHost, LockModule, LockWindow, WindowId};
use super::toolkit::{ButtonSpec, PanelToolkit};
use crate::config;
use crate::plugin::ModuleInfo;
use gtklock_powerbar_types::{Action, PowerbarConfig, ICON_RESOURCE_PATH};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::rc::Rc;

/// Widgets making up one window's panel
///
/// The container owns the row, the row owns the buttons.
pub struct PanelState<T: PanelToolkit> {
    container: T::Container,
    row: T::Row,
    buttons: Vec<(Action, T::Button)>,
}

impl<T: PanelToolkit> PanelState<T> {
    pub fn container(&self) -> &T::Container {
        &self.container
    }

    pub fn row(&self) -> &T::Row {
        &self.row
    }

    /// Button of `action`, if it was configured
    pub fn button(&self, action: Action) -> Option<&T::Button> {
        self.buttons
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, b)| b)
    }

    /// Actions that got a button, in display order
    pub fn actions(&self) -> Vec<Action> {
        self.buttons.iter().map(|(a, _)| *a).collect()
    }
}

/// The powerbar module
pub struct Powerbar<T: PanelToolkit> {
    toolkit: T,
    launcher: Rc<dyn CommandLauncher>,
    config: Rc<PowerbarConfig>,
    slot: Option<u32>,
    panels: HashMap<WindowId, PanelState<T>>,
}

impl<T: PanelToolkit> Powerbar<T> {
    /// Create a module with default options
    pub fn new(toolkit: T, launcher: Rc<dyn CommandLauncher>) -> Self {
        Self::with_config(toolkit, launcher, PowerbarConfig::default())
    }

    /// Create a module with preset options
    ///
    /// Activation replaces them if the host has a config file.
    pub fn with_config(
        toolkit: T,
        launcher: Rc<dyn CommandLauncher>,
        config: PowerbarConfig,
    ) -> Self {
        Self {
            toolkit,
            launcher,
            config: Rc::new(config),
            slot: None,
            panels: HashMap::new(),
        }
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    pub fn config(&self) -> &PowerbarConfig {
        &self.config
    }

    /// Slot the host assigned on activation
    pub fn slot(&self) -> Option<u32> {
        self.slot
    }

    pub fn has_panel(&self, window: WindowId) -> bool {
        self.panels.contains_key(&window)
    }

    pub fn panel(&self, window: WindowId) -> Option<&PanelState<T>> {
        self.panels.get(&window)
    }

    /// Number of windows currently holding a panel
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Actions with a button on `window`'s panel
    pub fn enabled_buttons(&self, window: WindowId) -> Vec<Action> {
        self.panels
            .get(&window)
            .map(PanelState::actions)
            .unwrap_or_default()
    }

    /// Build a fresh panel for `window`, destroying any previous one
    fn setup_panel(&mut self, window: &LockWindow<T::Overlay>) {
        if self.remove_panel(window.id) {
            debug!("Rebuilding powerbar on {}", window.id);
        }

        let container = self.toolkit.create_container(&window.overlay);
        let row = self.toolkit.create_row(&container, self.config.linked_buttons);

        let mut buttons = Vec::new();
        for action in self.config.enabled_actions() {
            let Some(command) = self.config.command(action).map(str::to_owned) else {
                continue;
            };
            let spec = ButtonSpec {
                action,
                show_label: self.config.show_labels,
            };
            let launcher = Rc::clone(&self.launcher);
            let on_click = Box::new(move || {
                debug!("{} clicked, running `{}`", action, command);
                if let Err(e) = launcher.launch(&command) {
                    warn!("{} action failed: {}", action, e);
                }
            });
            buttons.push((action, self.toolkit.create_button(&row, spec, on_click)));
        }

        self.toolkit.show_all(&container);
        debug!("Powerbar on {} has {} button(s)", window.id, buttons.len());

        self.panels.insert(
            window.id,
            PanelState {
                container,
                row,
                buttons,
            },
        );
    }

    /// Destroy `window`'s panel; returns whether there was one
    fn remove_panel(&mut self, window: WindowId) -> bool {
        match self.panels.remove(&window) {
            Some(panel) => {
                self.toolkit.destroy(&panel.container);
                true
            }
            None => false,
        }
    }

    fn set_revealed(&self, window: WindowId, revealed: bool) {
        match self.panels.get(&window) {
            Some(panel) => self.toolkit.set_revealed(&panel.container, revealed),
            None => debug!("No powerbar on {} to {}", window, if revealed { "show" } else { "hide" }),
        }
    }
}

impl<T: PanelToolkit> LockModule<T::Overlay> for Powerbar<T> {
    fn info(&self) -> ModuleInfo {
        ModuleInfo::powerbar()
    }

    fn on_activation(&mut self, host: &dyn LockHost, slot: u32) {
        self.slot = Some(slot);

        if let Some(path) = host.config_file() {
            let config = config::load_from_path(&path).unwrap_or_else(|e| {
                warn!("Using default powerbar options: {}", e);
                PowerbarConfig::default()
            });
            self.config = Rc::new(config);
        }

        self.toolkit.register_icon_resource_path(ICON_RESOURCE_PATH);
        info!(
            "Powerbar activated in slot {} with {:?}",
            slot,
            self.config.enabled_actions()
        );
    }

    fn on_focus_change(
        &mut self,
        host: &dyn LockHost,
        window: &LockWindow<T::Overlay>,
        old: Option<&LockWindow<T::Overlay>>,
    ) {
        self.setup_panel(window);
        if host.is_hidden() {
            self.set_revealed(window.id, false);
        }
        if let Some(old) = old.filter(|old| old.id != window.id) {
            self.set_revealed(old.id, false);
        }
    }

    fn on_window_destroy(&mut self, _host: &dyn LockHost, window: WindowId) {
        if self.remove_panel(window) {
            debug!("Released powerbar of {}", window);
        }
    }

    fn on_idle_hide(&mut self, host: &dyn LockHost) {
        if let Some(window) = host.focused_window() {
            self.set_revealed(window, false);
        }
    }

    fn on_idle_show(&mut self, host: &dyn LockHost) {
        if let Some(window) = host.focused_window() {
            self.set_revealed(window, true);
        }
    }
}
