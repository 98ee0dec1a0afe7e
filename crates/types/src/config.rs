//! Powerbar options
//!
//! Built once when the module is activated and shared read-only afterwards.

use crate::action::Action;
use serde::{Deserialize, Serialize};

/// Options recognized in the `[powerbar]` group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PowerbarConfig {
    /// Render icon and text instead of icon only
    #[serde(default)]
    pub show_labels: bool,
    /// Render the buttons as one connected group
    #[serde(default)]
    pub linked_buttons: bool,
    #[serde(default = "default_reboot_command")]
    pub reboot_command: Option<String>,
    #[serde(default = "default_poweroff_command")]
    pub poweroff_command: Option<String>,
    #[serde(default = "default_suspend_command")]
    pub suspend_command: Option<String>,
    #[serde(default)]
    pub userswitch_command: Option<String>,
    #[serde(default)]
    pub logout_command: Option<String>,
}

fn default_reboot_command() -> Option<String> {
    Some("systemctl reboot".to_string())
}

fn default_poweroff_command() -> Option<String> {
    Some("systemctl -i poweroff".to_string())
}

fn default_suspend_command() -> Option<String> {
    Some("systemctl suspend".to_string())
}

impl Default for PowerbarConfig {
    fn default() -> Self {
        Self {
            show_labels: false,
            linked_buttons: false,
            reboot_command: default_reboot_command(),
            poweroff_command: default_poweroff_command(),
            suspend_command: default_suspend_command(),
            userswitch_command: None,
            logout_command: None,
        }
    }
}

impl PowerbarConfig {
    /// Command bound to `action`, if it is set and non-empty
    pub fn command(&self, action: Action) -> Option<&str> {
        let command = match action {
            Action::Poweroff => &self.poweroff_command,
            Action::Reboot => &self.reboot_command,
            Action::Suspend => &self.suspend_command,
            Action::UserSwitch => &self.userswitch_command,
            Action::Logout => &self.logout_command,
        };
        command.as_deref().filter(|c| !c.is_empty())
    }

    /// Mutable slot for `action`'s command
    pub fn command_mut(&mut self, action: Action) -> &mut Option<String> {
        match action {
            Action::Poweroff => &mut self.poweroff_command,
            Action::Reboot => &mut self.reboot_command,
            Action::Suspend => &mut self.suspend_command,
            Action::UserSwitch => &mut self.userswitch_command,
            Action::Logout => &mut self.logout_command,
        }
    }

    /// Actions that get a button, in display order
    pub fn enabled_actions(&self) -> Vec<Action> {
        Action::ALL
            .iter()
            .copied()
            .filter(|a| self.command(*a).is_some())
            .collect()
    }
}
