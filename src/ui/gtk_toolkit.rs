//! GTK4 toolkit for the powerbar
//!
//! Panels are `Revealer`s added as overlay children of the lock window, each
//! holding a horizontal `Box` of buttons.

use crate::core::{ButtonSpec, ClickHandler, PanelToolkit};
use gtk4::prelude::*;
use gtk4::{Align, Button, Image, Label, Orientation, Overlay, Revealer, RevealerTransitionType};
use gtklock_powerbar_types::{BOX_NAME, BOX_SPACING, CONTAINER_MARGIN, REVEALER_NAME};
use log::warn;

/// Spacing between icon and label inside a labeled button
const LABEL_SPACING: i32 = 6;

/// Stock icon used when a bundled icon is not available
const FALLBACK_ICON: &str = "weather-clear-night-symbolic";

/// `name` if the current icon theme has it, else the stock fallback
fn resolve_icon(name: &'static str) -> &'static str {
    let available = gdk4::Display::default()
        .map(|display| gtk4::IconTheme::for_display(&display).has_icon(name))
        .unwrap_or(true);
    if available {
        name
    } else {
        FALLBACK_ICON
    }
}

/// Builds powerbar panels out of GTK4 widgets
#[derive(Debug, Default, Clone, Copy)]
pub struct GtkToolkit;

impl PanelToolkit for GtkToolkit {
    type Overlay = Overlay;
    type Container = Revealer;
    type Row = gtk4::Box;
    type Button = Button;

    fn register_icon_resource_path(&self, path: &str) {
        match gdk4::Display::default() {
            Some(display) => gtk4::IconTheme::for_display(&display).add_resource_path(path),
            None => warn!("No display, cannot register icon path {}", path),
        }
    }

    fn create_container(&self, overlay: &Overlay) -> Revealer {
        let revealer = Revealer::builder()
            .name(REVEALER_NAME)
            .halign(Align::Center)
            .valign(Align::End)
            .margin_top(CONTAINER_MARGIN)
            .margin_bottom(CONTAINER_MARGIN)
            .margin_start(CONTAINER_MARGIN)
            .margin_end(CONTAINER_MARGIN)
            .transition_type(RevealerTransitionType::None)
            .reveal_child(true)
            .build();
        overlay.add_overlay(&revealer);
        revealer
    }

    fn create_row(&self, container: &Revealer, linked: bool) -> gtk4::Box {
        let row = if linked {
            // Linked group: equal-width buttons drawn as one control
            let row = gtk4::Box::new(Orientation::Horizontal, 0);
            row.set_homogeneous(true);
            row.add_css_class("linked");
            row
        } else {
            gtk4::Box::new(Orientation::Horizontal, BOX_SPACING)
        };
        row.set_halign(Align::Center);
        row.set_widget_name(BOX_NAME);
        container.set_child(Some(&row));
        row
    }

    fn create_button(&self, row: &gtk4::Box, spec: ButtonSpec, on_click: ClickHandler) -> Button {
        let icon = resolve_icon(spec.icon_name());
        let button = match spec.label() {
            Some(label) => {
                let content = gtk4::Box::new(Orientation::Horizontal, LABEL_SPACING);
                content.append(&Image::from_icon_name(icon));
                content.append(&Label::new(Some(label)));
                Button::builder().child(&content).build()
            }
            None => Button::from_icon_name(icon),
        };
        button.set_widget_name(spec.widget_name());
        button.set_tooltip_text(Some(spec.action.label()));
        button.connect_clicked(move |_| on_click());
        row.append(&button);
        button
    }

    fn show_all(&self, container: &Revealer) {
        // GTK4 widgets start visible; only the container may have been hidden
        container.set_visible(true);
    }

    fn set_revealed(&self, container: &Revealer, revealed: bool) {
        container.set_reveal_child(revealed);
    }

    fn destroy(&self, container: &Revealer) {
        match container.parent().and_downcast::<Overlay>() {
            Some(overlay) => overlay.remove_overlay(container),
            None => container.unparent(),
        }
    }
}
