//! GTK user interface

mod gtk_toolkit;

pub use gtk_toolkit::GtkToolkit;
