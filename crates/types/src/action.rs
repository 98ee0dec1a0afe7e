//! Power actions offered by the bar

use serde::{Deserialize, Serialize};
use std::fmt;

/// A power operation bound to a configured shell command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Poweroff,
    Reboot,
    Suspend,
    UserSwitch,
    Logout,
}

impl Action {
    /// All actions, in the order their buttons appear in the bar
    pub const ALL: [Action; 5] = [
        Action::Poweroff,
        Action::Reboot,
        Action::Suspend,
        Action::UserSwitch,
        Action::Logout,
    ];

    /// Config key holding this action's command
    pub fn config_key(self) -> &'static str {
        match self {
            Action::Poweroff => "poweroff-command",
            Action::Reboot => "reboot-command",
            Action::Suspend => "suspend-command",
            Action::UserSwitch => "userswitch-command",
            Action::Logout => "logout-command",
        }
    }

    /// Widget name of the button, for CSS
    pub fn widget_name(self) -> &'static str {
        match self {
            Action::Poweroff => "poweroff-button",
            Action::Reboot => "reboot-button",
            Action::Suspend => "suspend-button",
            Action::UserSwitch => "userswitch-button",
            Action::Logout => "logout-button",
        }
    }

    /// Themed icon shown on the button
    pub fn icon_name(self) -> &'static str {
        match self {
            Action::Poweroff => "system-shutdown-symbolic",
            Action::Reboot => "system-reboot-symbolic",
            // No suspend icon in the stock theme, ships with the module resources
            Action::Suspend => "gtklock-powerbar-moon-outline-symbolic",
            Action::UserSwitch => "system-users-symbolic",
            Action::Logout => "system-log-out-symbolic",
        }
    }

    /// Label shown next to the icon when labels are enabled
    pub fn label(self) -> &'static str {
        match self {
            Action::Poweroff => "Poweroff",
            Action::Reboot => "Reboot",
            Action::Suspend => "Suspend",
            Action::UserSwitch => "Switch user",
            Action::Logout => "Log out",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
