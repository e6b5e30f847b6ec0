use std::time::Duration;

use tracing::{debug, warn};

use super::Appearance;
use crate::infrastructure::ThemeMode;

const DETECT_TIMEOUT: Duration = Duration::from_millis(150);

/// Resolves the configured mode to a concrete appearance.
///
/// `Auto` queries the terminal background and must run before raw mode is
/// enabled. Detection failures fall back to dark.
#[must_use]
pub fn resolve_appearance(mode: ThemeMode) -> Appearance {
    match mode {
        ThemeMode::Dark => Appearance::Dark,
        ThemeMode::Light => Appearance::Light,
        ThemeMode::Auto => match termbg::theme(DETECT_TIMEOUT) {
            Ok(termbg::Theme::Light) => {
                debug!("Detected light terminal background");
                Appearance::Light
            }
            Ok(termbg::Theme::Dark) => Appearance::Dark,
            Err(e) => {
                warn!(error = %e, "Terminal background detection failed");
                Appearance::Dark
            }
        },
    }
}
