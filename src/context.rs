//! Context providers for the Contact Card shell.
//!
//! The shell plays the part of the site: it owns the configuration store
//! and the page-level theme, and hands both to components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Signal::new(get_site_config()));
//! use_context_provider(|| Signal::new(get_theme_mode()));
//!
//! // In child components
//! let config = use_site_config();
//! let mode = use_theme_mode();
//! ```

use contactcard_core::{SiteConfig, ThemeMode};
use dioxus::prelude::*;

/// Get the site configuration loaded at startup.
pub fn get_site_config() -> SiteConfig {
    crate::get_site_config()
}

/// Get the theme mode resolved at startup.
pub fn get_theme_mode() -> ThemeMode {
    crate::get_theme_mode()
}

/// Hook to access the read-only site configuration.
pub fn use_site_config() -> Signal<SiteConfig> {
    use_context::<Signal<SiteConfig>>()
}

/// Hook to access the current theme mode.
///
/// The same signal is what `ContactCard` picks up when no explicit mode is
/// passed.
pub fn use_theme_mode() -> Signal<ThemeMode> {
    use_context::<Signal<ThemeMode>>()
}
