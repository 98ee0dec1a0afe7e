//! Recording toolkit, launcher and host used by the unit tests
//!
//! The toolkit keeps every widget it ever created so tests can account for
//! live and released widgets and fire captured click handlers.

use super::launcher::{CommandLauncher, LaunchError};
use super::module::{LockHost, LockWindow, WindowId};
use super::toolkit::{ButtonSpec, ClickHandler, PanelToolkit};
use gtklock_powerbar_types::Action;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;

/// Overlay handle of a test window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TestOverlay(pub u64);

/// Opaque widget handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Container,
    Row,
    Button,
}

struct Record {
    kind: Kind,
    parent: Option<usize>,
    overlay: Option<TestOverlay>,
    live: bool,
    visible: bool,
    revealed: bool,
    linked: bool,
    spec: Option<ButtonSpec>,
    on_click: Option<Rc<dyn Fn()>>,
}

impl Record {
    fn new(kind: Kind, parent: Option<usize>) -> Self {
        Self {
            kind,
            parent,
            overlay: None,
            live: true,
            visible: false,
            revealed: false,
            linked: false,
            spec: None,
            on_click: None,
        }
    }
}

#[derive(Default)]
struct Inner {
    widgets: Vec<Record>,
    icon_paths: Vec<String>,
}

impl Inner {
    fn push(&mut self, record: Record) -> Handle {
        self.widgets.push(record);
        Handle(self.widgets.len() - 1)
    }

    fn root_of(&self, mut index: usize) -> usize {
        while let Some(parent) = self.widgets[index].parent {
            index = parent;
        }
        index
    }

    fn live_container_on(&self, overlay: TestOverlay) -> Option<usize> {
        self.widgets
            .iter()
            .position(|w| w.live && w.kind == Kind::Container && w.overlay == Some(overlay))
    }
}

/// Toolkit that records widget trees instead of drawing them
#[derive(Default)]
pub struct RecordingToolkit {
    inner: RefCell<Inner>,
}

impl RecordingToolkit {
    /// Widgets created and not yet destroyed
    pub fn live_widgets(&self) -> usize {
        self.inner.borrow().widgets.iter().filter(|w| w.live).count()
    }

    /// Widgets created over the toolkit's lifetime
    pub fn created_widgets(&self) -> usize {
        self.inner.borrow().widgets.len()
    }

    /// Live containers attached to `overlay`
    pub fn containers_on(&self, overlay: TestOverlay) -> usize {
        self.inner
            .borrow()
            .widgets
            .iter()
            .filter(|w| w.live && w.kind == Kind::Container && w.overlay == Some(overlay))
            .count()
    }

    /// Actions of the live buttons shown on `overlay`, in row order
    pub fn buttons_on(&self, overlay: TestOverlay) -> Vec<Action> {
        let inner = self.inner.borrow();
        let Some(root) = inner.live_container_on(overlay) else {
            return Vec::new();
        };
        inner
            .widgets
            .iter()
            .enumerate()
            .filter(|(i, w)| w.live && w.kind == Kind::Button && inner.root_of(*i) == root)
            .filter_map(|(_, w)| w.spec.map(|s| s.action))
            .collect()
    }

    /// Labels of the live buttons on `overlay`
    pub fn labels_on(&self, overlay: TestOverlay) -> Vec<Option<&'static str>> {
        let inner = self.inner.borrow();
        let Some(root) = inner.live_container_on(overlay) else {
            return Vec::new();
        };
        inner
            .widgets
            .iter()
            .enumerate()
            .filter(|(i, w)| w.live && w.kind == Kind::Button && inner.root_of(*i) == root)
            .filter_map(|(_, w)| w.spec.map(|s| s.label()))
            .collect()
    }

    /// Whether the row on `overlay` is linked
    pub fn row_linked_on(&self, overlay: TestOverlay) -> Option<bool> {
        let inner = self.inner.borrow();
        let root = inner.live_container_on(overlay)?;
        inner
            .widgets
            .iter()
            .find(|w| w.live && w.kind == Kind::Row && w.parent == Some(root))
            .map(|w| w.linked)
    }

    /// Whether the container on `overlay` is visible and revealed
    pub fn is_shown(&self, overlay: TestOverlay) -> Option<bool> {
        let inner = self.inner.borrow();
        let root = inner.live_container_on(overlay)?;
        let container = &inner.widgets[root];
        Some(container.visible && container.revealed)
    }

    /// Fire the click handler of `action`'s button on `overlay`
    ///
    /// Returns false if no such button is live.
    pub fn click(&self, overlay: TestOverlay, action: Action) -> bool {
        let handler = {
            let inner = self.inner.borrow();
            let Some(root) = inner.live_container_on(overlay) else {
                return false;
            };
            inner
                .widgets
                .iter()
                .enumerate()
                .find(|(i, w)| {
                    w.live
                        && w.kind == Kind::Button
                        && w.spec.map(|s| s.action) == Some(action)
                        && inner.root_of(*i) == root
                })
                .and_then(|(_, w)| w.on_click.clone())
        };
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    pub fn icon_paths(&self) -> Vec<String> {
        self.inner.borrow().icon_paths.clone()
    }
}

impl PanelToolkit for RecordingToolkit {
    type Overlay = TestOverlay;
    type Container = Handle;
    type Row = Handle;
    type Button = Handle;

    fn register_icon_resource_path(&self, path: &str) {
        self.inner.borrow_mut().icon_paths.push(path.to_string());
    }

    fn create_container(&self, overlay: &TestOverlay) -> Handle {
        let mut record = Record::new(Kind::Container, None);
        record.overlay = Some(*overlay);
        record.revealed = true;
        self.inner.borrow_mut().push(record)
    }

    fn create_row(&self, container: &Handle, linked: bool) -> Handle {
        let mut record = Record::new(Kind::Row, Some(container.0));
        record.linked = linked;
        self.inner.borrow_mut().push(record)
    }

    fn create_button(&self, row: &Handle, spec: ButtonSpec, on_click: ClickHandler) -> Handle {
        let mut record = Record::new(Kind::Button, Some(row.0));
        record.spec = Some(spec);
        record.on_click = Some(Rc::from(on_click));
        self.inner.borrow_mut().push(record)
    }

    fn show_all(&self, container: &Handle) {
        let mut inner = self.inner.borrow_mut();
        let root = container.0;
        for i in 0..inner.widgets.len() {
            if inner.widgets[i].live && inner.root_of(i) == root {
                inner.widgets[i].visible = true;
            }
        }
    }

    fn set_revealed(&self, container: &Handle, revealed: bool) {
        self.inner.borrow_mut().widgets[container.0].revealed = revealed;
    }

    fn destroy(&self, container: &Handle) {
        let mut inner = self.inner.borrow_mut();
        let root = container.0;
        for i in 0..inner.widgets.len() {
            if inner.root_of(i) == root {
                inner.widgets[i].live = false;
                inner.widgets[i].on_click = None;
            }
        }
    }
}

/// Launcher that records command lines instead of running them
#[derive(Default)]
pub struct RecordingLauncher {
    launched: RefCell<Vec<String>>,
    fail: Cell<bool>,
}

impl RecordingLauncher {
    /// Launcher whose every launch fails
    pub fn failing() -> Self {
        let launcher = Self::default();
        launcher.fail.set(true);
        launcher
    }

    pub fn launched(&self) -> Vec<String> {
        self.launched.borrow().clone()
    }
}

impl CommandLauncher for RecordingLauncher {
    fn launch(&self, command: &str) -> Result<(), LaunchError> {
        self.launched.borrow_mut().push(command.to_string());
        if self.fail.get() {
            return Err(LaunchError::Spawn {
                command: command.to_string(),
                message: "refused by test".to_string(),
            });
        }
        Ok(())
    }
}

/// Host with directly settable state
#[derive(Default)]
pub struct TestHost {
    pub hidden: Cell<bool>,
    pub focused: Cell<Option<WindowId>>,
    pub config: Option<PathBuf>,
}

impl LockHost for TestHost {
    fn is_hidden(&self) -> bool {
        self.hidden.get()
    }

    fn focused_window(&self) -> Option<WindowId> {
        self.focused.get()
    }

    fn config_file(&self) -> Option<PathBuf> {
        self.config.clone()
    }
}

/// Window `id` drawn on overlay `id`
pub fn window(id: u64) -> LockWindow<TestOverlay> {
    LockWindow::new(WindowId(id), TestOverlay(id))
}

