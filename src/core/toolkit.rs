//! Widget toolkit seam
//!
//! The powerbar logic only decides which widgets exist and whether they are
//! revealed. Building them is left to a toolkit so the same logic drives GTK
//! on a real lock screen and a recording toolkit in tests.

use gtklock_powerbar_types::Action;

/// Click callback attached to an action button
pub type ClickHandler = Box<dyn Fn() + 'static>;

/// What a single action button should look like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSpec {
    pub action: Action,
    /// Show the action's label next to its icon
    pub show_label: bool,
}

impl ButtonSpec {
    pub fn widget_name(&self) -> &'static str {
        self.action.widget_name()
    }

    pub fn icon_name(&self) -> &'static str {
        self.action.icon_name()
    }

    /// Label text, if labels are enabled
    pub fn label(&self) -> Option<&'static str> {
        self.show_label.then(|| self.action.label())
    }
}

/// Widget operations the powerbar needs
///
/// Containers own their rows and rows own their buttons: destroying a
/// container releases the whole tree.
pub trait PanelToolkit {
    /// Per-window surface panels are overlaid on
    type Overlay;
    /// Hideable container anchored to the overlay
    type Container;
    /// Horizontal row holding the buttons
    type Row;
    /// Action button
    type Button;

    /// Make bundled icons available to the icon theme
    fn register_icon_resource_path(&self, path: &str);

    /// Create a bottom-centered, non-animated, revealed container on `overlay`
    fn create_container(&self, overlay: &Self::Overlay) -> Self::Container;

    /// Create the button row inside `container`
    ///
    /// Linked rows render as one connected group of equal-width buttons.
    fn create_row(&self, container: &Self::Container, linked: bool) -> Self::Row;

    /// Create a button, wire `on_click` and append it to `row`
    fn create_button(&self, row: &Self::Row, spec: ButtonSpec, on_click: ClickHandler)
        -> Self::Button;

    /// Make the container and everything in it visible
    fn show_all(&self, container: &Self::Container);

    /// Reveal or conceal the container's contents
    fn set_revealed(&self, container: &Self::Container, revealed: bool);

    /// Detach the container from its overlay and release it
    fn destroy(&self, container: &Self::Container);
}
