//! Page colors outside the card.
//!
//! Applied as CSS custom properties on the page root.

use contactcard_core::ThemeMode;

// === LIGHT ===
pub const LIGHT_PAGE: &str = "#fbfbfb";
pub const LIGHT_FOREGROUND: &str = "#202020";

// === DARK ===
pub const DARK_PAGE: &str = "#111111";
pub const DARK_FOREGROUND: &str = "#eeeeee";

/// Page background for `mode`
pub fn page_background(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => LIGHT_PAGE,
        ThemeMode::Dark => DARK_PAGE,
    }
}

/// Inline custom properties for the page root
pub fn page_css_vars(mode: ThemeMode) -> String {
    format!(
        "--page-bg: {}; --page-fg: {};",
        page_background(mode),
        page_foreground(mode)
    )
}

/// Default text color for `mode`
pub fn page_foreground(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => LIGHT_FOREGROUND,
        ThemeMode::Dark => DARK_FOREGROUND,
    }
}
