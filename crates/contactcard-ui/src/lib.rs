//! Contact Card UI Components
//!
//! Dioxus components for the "Contact" panel: a titled, themed list of
//! outbound links to the site owner's profiles.
//!
//! ## Theming
//!
//! Colors come from `contactcard_core::theme` and are handed to the markup
//! as CSS custom properties on the link container:
//! - `--contact-panel`: container background
//! - `--contact-text`: resting link text
//! - `--contact-text-strong`: hovered link text
//! - `--contact-hover`: hovered link background
//!
//! Include [`CONTACT_CARD_STYLES`] once per page.

pub mod components;
mod styles;

pub use components::*;
pub use styles::CONTACT_CARD_STYLES;
