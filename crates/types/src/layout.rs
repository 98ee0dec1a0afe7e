//! Widget names and layout constants
//!
//! Names are stable so that users can target them from the lock screen's CSS.

/// Name of the top-level revealer anchored on the window overlay
pub const REVEALER_NAME: &str = "powerbar-revealer";

/// Name of the horizontal box holding the buttons
pub const BOX_NAME: &str = "powerbar-box";

/// Margin around the revealer, in pixels
pub const CONTAINER_MARGIN: i32 = 5;

/// Spacing between buttons when they are not linked
pub const BOX_SPACING: i32 = 5;

/// Resource path searched by the icon theme for bundled icons
pub const ICON_RESOURCE_PATH: &str = "/gtklock/powerbar/icons";

/// Key-file group the host reads the module's options from
pub const CONFIG_GROUP: &str = "powerbar";
