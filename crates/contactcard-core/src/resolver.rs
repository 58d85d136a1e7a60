//! Link-set resolver
//!
//! Turns a [`ContactConfiguration`] into the ordered list of links the card
//! shows. Pure: same configuration in, same entries out.

use serde::{Deserialize, Serialize};

use crate::channel::{Channel, IconKey};
use crate::config::ContactConfiguration;

/// One visible link on the card.
///
/// Built fresh for every render and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub channel: Channel,
    pub icon_key: IconKey,
    pub label: String,
    pub href: String,
}

impl ContactEntry {
    /// Entry for `channel` pointing at `handle`
    pub fn new(channel: Channel, handle: &str) -> Self {
        Self {
            channel,
            icon_key: channel.icon_key(),
            label: channel.label().to_string(),
            href: channel.href(handle),
        }
    }
}

/// Resolve the visible entries in channel order.
///
/// A channel is included iff its handle is present and non-empty. Handles
/// are not validated or escaped.
pub fn resolve_entries(config: &ContactConfiguration) -> Vec<ContactEntry> {
    let entries: Vec<ContactEntry> = Channel::ALL
        .iter()
        .filter_map(|&channel| {
            config
                .handle(channel)
                .map(|handle| ContactEntry::new(channel, handle))
        })
        .collect();

    tracing::debug!(count = entries.len(), "Resolved contact entries");
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> ContactConfiguration {
        ContactConfiguration {
            code_host_handle: Some("octocat".to_string()),
            photo_host_handle: Some("nasa".to_string()),
            email_address: Some("a@b.com".to_string()),
            professional_network_handle: Some("jane-doe".to_string()),
        }
    }

    #[test]
    fn test_empty_config_yields_no_entries() {
        assert!(resolve_entries(&ContactConfiguration::default()).is_empty());
    }

    #[test]
    fn test_full_config_in_channel_order() {
        let entries = resolve_entries(&full_config());
        let channels: Vec<Channel> = entries.iter().map(|e| e.channel).collect();
        assert_eq!(channels, Channel::ALL.to_vec());

        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["GitHub", "Instagram", "Email", "LinkedIn"]);
    }

    #[test]
    fn test_full_config_hrefs() {
        let entries = resolve_entries(&full_config());
        assert_eq!(entries[0].href, "https://github.com/octocat");
        assert_eq!(entries[1].href, "https://www.instagram.com/nasa");
        assert_eq!(entries[2].href, "mailto:a@b.com");
        assert_eq!(entries[3].href, "https://www.linkedin.com/in/jane-doe");
    }

    #[test]
    fn test_subset_keeps_relative_order() {
        let config = ContactConfiguration {
            professional_network_handle: Some("jane".to_string()),
            code_host_handle: Some("octocat".to_string()),
            ..Default::default()
        };
        let entries = resolve_entries(&config);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].channel, Channel::CodeHost);
        assert_eq!(entries[1].channel, Channel::ProfessionalNetwork);
    }

    #[test]
    fn test_empty_string_is_skipped() {
        let config = ContactConfiguration {
            email_address: Some(String::new()),
            photo_host_handle: Some("nasa".to_string()),
            ..Default::default()
        };
        let entries = resolve_entries(&config);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].channel, Channel::PhotoHost);
        assert_eq!(entries[0].icon_key, IconKey::PhotoHost);
    }

    #[test]
    fn test_email_is_not_encoded() {
        let config = ContactConfiguration {
            email_address: Some("a+b@c.com".to_string()),
            ..Default::default()
        };
        let entries = resolve_entries(&config);
        assert_eq!(entries[0].href, "mailto:a+b@c.com");
        assert_eq!(entries[0].icon_key, IconKey::Mail);
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let config = full_config();
        assert_eq!(resolve_entries(&config), resolve_entries(&config));
    }
}
