//! Card view model
//!
//! Everything the Contact card component renders, computed up front from
//! the configuration snapshot and the theme mode. The component only maps
//! this onto markup.

use serde::Serialize;

use crate::config::ContactConfiguration;
use crate::resolver::{resolve_entries, ContactEntry};
use crate::theme::{card_background, resolve_color, ColorRole, ThemeMode};

/// Emoji shown in front of the title
pub const TITLE_EMOJI: &str = "\u{1F4AC}";

/// Literal title text
pub const TITLE_TEXT: &str = "Contact";

/// Links open in a new browsing context
pub const LINK_TARGET: &str = "_blank";

/// Links never leak the referrer, `mailto:` included
pub const LINK_REL: &str = "noreferrer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardTitle {
    pub emoji: &'static str,
    pub text: &'static str,
}

impl Default for CardTitle {
    fn default() -> Self {
        Self {
            emoji: TITLE_EMOJI,
            text: TITLE_TEXT,
        }
    }
}

/// Resolved colors for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardColors {
    /// Container background
    pub panel: &'static str,
    /// Resting link text
    pub text: &'static str,
    /// Hovered link text
    pub text_strong: &'static str,
    /// Hovered link background
    pub hover: &'static str,
}

impl CardColors {
    pub fn for_mode(mode: ThemeMode) -> Self {
        Self {
            panel: card_background(mode),
            text: resolve_color(mode, ColorRole::NeutralText),
            text_strong: resolve_color(mode, ColorRole::NeutralTextStrong),
            hover: resolve_color(mode, ColorRole::HoverPanel),
        }
    }

    /// Inline CSS custom properties consumed by the card stylesheet
    pub fn css_vars(&self) -> String {
        format!(
            "--contact-panel: {}; --contact-text: {}; --contact-text-strong: {}; --contact-hover: {};",
            self.panel, self.text, self.text_strong, self.hover
        )
    }
}

/// One anchor on the card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    #[serde(flatten)]
    pub entry: ContactEntry,
    pub target: &'static str,
    pub rel: &'static str,
}

impl From<ContactEntry> for LinkView {
    fn from(entry: ContactEntry) -> Self {
        Self {
            entry,
            target: LINK_TARGET,
            rel: LINK_REL,
        }
    }
}

/// Complete render description of the Contact card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub mode: ThemeMode,
    pub title: CardTitle,
    pub colors: CardColors,
    pub links: Vec<LinkView>,
}

impl CardView {
    pub fn build(config: &ContactConfiguration, mode: ThemeMode) -> Self {
        Self {
            mode,
            title: CardTitle::default(),
            colors: CardColors::for_mode(mode),
            links: resolve_entries(config).into_iter().map(LinkView::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
