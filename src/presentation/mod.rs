//! Presentation layer with the dashboard, widgets and event handling.

/// Key bindings.
pub mod commands;
/// Event handling.
pub mod events;
/// Colors and appearance.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::{App, AppOptions};
