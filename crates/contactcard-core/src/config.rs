//! Site configuration snapshot
//!
//! The card never owns its settings: the site configuration store hands it
//! a read-only [`ContactConfiguration`]. This module models that store as a
//! JSON document.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::error::{ConfigError, Result};
use crate::theme::SchemePreference;

/// File name looked up in the platform config directory
pub const DEFAULT_CONFIG_FILE: &str = "site.config.json";

/// Contact identifiers, one optional field per channel.
///
/// Absence and the empty string mean the same thing: the channel is hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfiguration {
    /// GitHub username
    #[serde(rename = "github", alias = "GitHub")]
    pub code_host_handle: Option<String>,

    /// Instagram username
    #[serde(rename = "instagram", alias = "Instagram")]
    pub photo_host_handle: Option<String>,

    /// Email address, used verbatim in a `mailto:` link
    #[serde(rename = "email", alias = "Email")]
    pub email_address: Option<String>,

    /// LinkedIn profile slug (the part after `/in/`)
    #[serde(rename = "linkedin", alias = "LinkedIn")]
    pub professional_network_handle: Option<String>,
}

impl ContactConfiguration {
    /// Configured handle for `channel`, if present and non-empty
    pub fn handle(&self, channel: Channel) -> Option<&str> {
        let field = match channel {
            Channel::CodeHost => &self.code_host_handle,
            Channel::PhotoHost => &self.photo_host_handle,
            Channel::Email => &self.email_address,
            Channel::ProfessionalNetwork => &self.professional_network_handle,
        };
        field.as_deref().filter(|handle| !handle.is_empty())
    }

    /// Number of channels that will be shown
    pub fn present_count(&self) -> usize {
        Channel::ALL
            .iter()
            .filter(|channel| self.handle(**channel).is_some())
            .count()
    }
}

/// Profile section of the site settings.
///
/// Contact handles sit directly on the profile next to the descriptive
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Display name of the site owner
    pub name: Option<String>,

    /// Role or tagline
    pub role: Option<String>,

    /// Short biography
    pub bio: Option<String>,

    #[serde(flatten)]
    pub contact: ContactConfiguration,
}

/// Site-wide settings the card reads from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub profile: ProfileConfig,

    /// Preferred color scheme for the page
    pub scheme: SchemePreference,
}

impl SiteConfig {
    /// Parse a site configuration from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a site configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            channels = config.contact().present_count(),
            "Loaded site config"
        );
        Ok(config)
    }

    /// Contact snapshot handed to the card
    pub fn contact(&self) -> &ContactConfiguration {
        &self.profile.contact
    }
}
