//! Contact Card Core Library
//!
//! Everything the "Contact" panel needs that is not markup: which outbound
//! links exist, where they point, and which colors they are painted with.
//!
//! ## Overview
//!
//! The card is driven by two read-only inputs:
//!
//! - a [`ContactConfiguration`] snapshot taken from the site settings
//! - the current [`ThemeMode`] supplied by the page-level theme provider
//!
//! From these the [`resolver`] derives an ordered list of [`ContactEntry`]
//! values and [`CardView`] bundles them with the resolved palette.
//!
//! ## Quick Start
//!
//! ```
//! use contactcard_core::{resolve_entries, Channel, ContactConfiguration};
//!
//! let config = ContactConfiguration {
//!     code_host_handle: Some("octocat".to_string()),
//!     email_address: Some("a@b.com".to_string()),
//!     ..Default::default()
//! };
//!
//! let entries = resolve_entries(&config);
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[0].channel, Channel::CodeHost);
//! assert_eq!(entries[0].href, "https://github.com/octocat");
//! assert_eq!(entries[1].href, "mailto:a@b.com");
//! ```

pub mod channel;
pub mod config;
pub mod error;
pub mod logging;
pub mod resolver;
pub mod theme;
pub mod view;

// Re-exports
pub use channel::{Channel, IconKey};
pub use config::{ContactConfiguration, ProfileConfig, SiteConfig};
pub use error::ConfigError;
pub use resolver::{resolve_entries, ContactEntry};
pub use theme::{card_background, resolve_color, ColorRole, SchemePreference, ThemeMode};
pub use view::{CardColors, CardTitle, CardView, LinkView};
