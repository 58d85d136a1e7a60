//! Theme palette
//!
//! Light/dark color resolution for the card. Colors are looked up by role
//! rather than stored in shared style state, so a render only needs the
//! current [`ThemeMode`].

use serde::{Deserialize, Serialize};

/// Display mode of the current render pass
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Scheme requested by the site settings.
///
/// `System` defers to the operating system appearance; the page-level
/// theme provider turns a preference into a [`ThemeMode`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl SchemePreference {
    /// Resolve against the OS appearance. `None` means it could not be
    /// determined, which falls back to light.
    pub fn resolve(&self, system: Option<ThemeMode>) -> ThemeMode {
        match self {
            SchemePreference::Light => ThemeMode::Light,
            SchemePreference::Dark => ThemeMode::Dark,
            SchemePreference::System => system.unwrap_or(ThemeMode::Light),
        }
    }
}

impl std::str::FromStr for SchemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(SchemePreference::Light),
            "dark" => Ok(SchemePreference::Dark),
            "system" => Ok(SchemePreference::System),
            other => Err(format!("unknown scheme '{}', expected light, dark or system", other)),
        }
    }
}

/// Named palette colors provided by the theme
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ColorRole {
    /// Neutral surface (gray 4)
    NeutralPanel,
    /// Resting link text (gray 11)
    NeutralText,
    /// Hovered link text (gray 12)
    NeutralTextStrong,
    /// Hovered link background (gray 5)
    HoverPanel,
}

impl ColorRole {
    pub const ALL: [ColorRole; 4] = [
        ColorRole::NeutralPanel,
        ColorRole::NeutralText,
        ColorRole::NeutralTextStrong,
        ColorRole::HoverPanel,
    ];

    /// Palette name of this role
    pub fn name(&self) -> &'static str {
        match self {
            ColorRole::NeutralPanel => "neutral-panel",
            ColorRole::NeutralText => "neutral-text",
            ColorRole::NeutralTextStrong => "neutral-text-strong",
            ColorRole::HoverPanel => "hover-panel",
        }
    }
}

// === LIGHT (gray scale) ===
pub const LIGHT_GRAY_4: &str = "#f0f0f0";
pub const LIGHT_GRAY_5: &str = "#e8e8e8";
pub const LIGHT_GRAY_11: &str = "#646464";
pub const LIGHT_GRAY_12: &str = "#202020";

// === DARK (gray scale) ===
pub const DARK_GRAY_4: &str = "#222222";
pub const DARK_GRAY_5: &str = "#2a2a2a";
pub const DARK_GRAY_11: &str = "#b4b4b4";
pub const DARK_GRAY_12: &str = "#eeeeee";

/// Card surface in light mode
pub const LIGHT_CARD_BACKGROUND: &str = "white";

/// Color value for `role` under `mode`
pub fn resolve_color(mode: ThemeMode, role: ColorRole) -> &'static str {
    match (mode, role) {
        (ThemeMode::Light, ColorRole::NeutralPanel) => LIGHT_GRAY_4,
        (ThemeMode::Light, ColorRole::HoverPanel) => LIGHT_GRAY_5,
        (ThemeMode::Light, ColorRole::NeutralText) => LIGHT_GRAY_11,
        (ThemeMode::Light, ColorRole::NeutralTextStrong) => LIGHT_GRAY_12,
        (ThemeMode::Dark, ColorRole::NeutralPanel) => DARK_GRAY_4,
        (ThemeMode::Dark, ColorRole::HoverPanel) => DARK_GRAY_5,
        (ThemeMode::Dark, ColorRole::NeutralText) => DARK_GRAY_11,
        (ThemeMode::Dark, ColorRole::NeutralTextStrong) => DARK_GRAY_12,
    }
}

/// Background of the link container.
///
/// Plain white in light mode; the neutral panel color in dark mode.
pub fn card_background(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => LIGHT_CARD_BACKGROUND,
        ThemeMode::Dark => resolve_color(mode, ColorRole::NeutralPanel),
    }
}
