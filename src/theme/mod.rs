//! Page-level theming: global styles and OS appearance detection.

pub mod colors;
mod styles;

use contactcard_core::ThemeMode;

pub use styles::GLOBAL_STYLES;

/// Current OS appearance, or `None` if it cannot be determined.
pub fn detect_system_mode() -> Option<ThemeMode> {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Some(ThemeMode::Dark),
        Ok(dark_light::Mode::Light) => Some(ThemeMode::Light),
        Ok(dark_light::Mode::Unspecified) => None,
        Err(e) => {
            tracing::debug!("Could not detect system theme: {}", e);
            None
        }
    }
}
