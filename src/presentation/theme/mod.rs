mod detect;
mod palette;
mod service;

pub use detect::resolve_appearance;
pub use palette::shade;
pub use service::{Appearance, Theme};
