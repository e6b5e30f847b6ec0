//! UI screens.

mod app;
mod dashboard;
mod notification_popup;

pub use app::{App, AppOptions, EMERGENCY_SENT_MESSAGE};
pub use dashboard::{
    DashboardKeyResult, DashboardScreen, DashboardState, Focus, Hyperlink, MAP_LINK_LABEL, Panel,
    SosView, TrainField, WeatherField,
};
pub use notification_popup::{AlertPopup, NotificationPopup};
