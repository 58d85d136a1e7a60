//! Property-based tests for link resolution and theming
//!
//! Uses proptest to check the presence, ordering and theme-independence
//! invariants over arbitrary configurations.

use contactcard_core::{
    resolve_entries, CardView, Channel, ContactConfiguration, ThemeMode,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Any handle, including empty strings and characters a URL would escape
fn handle_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::string::string_regex(".{0,40}").expect("valid regex"))
}

/// A non-empty handle
fn present_handle_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9@._+ -]{1,40}").expect("valid regex")
}

fn config_strategy() -> impl Strategy<Value = ContactConfiguration> {
    (
        handle_strategy(),
        handle_strategy(),
        handle_strategy(),
        handle_strategy(),
    )
        .prop_map(|(code, photo, email, pro)| ContactConfiguration {
            code_host_handle: code,
            photo_host_handle: photo,
            email_address: email,
            professional_network_handle: pro,
        })
}

fn only(channel: Channel, handle: String) -> ContactConfiguration {
    let mut config = ContactConfiguration::default();
    match channel {
        Channel::CodeHost => config.code_host_handle = Some(handle),
        Channel::PhotoHost => config.photo_host_handle = Some(handle),
        Channel::Email => config.email_address = Some(handle),
        Channel::ProfessionalNetwork => config.professional_network_handle = Some(handle),
    }
    config
}

fn is_present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.is_empty())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// An entry exists for a channel iff its field is present and non-empty
    #[test]
    fn entry_exists_iff_field_present(config in config_strategy()) {
        let entries = resolve_entries(&config);
        let expected = [
            (Channel::CodeHost, is_present(&config.code_host_handle)),
            (Channel::PhotoHost, is_present(&config.photo_host_handle)),
            (Channel::Email, is_present(&config.email_address)),
            (Channel::ProfessionalNetwork, is_present(&config.professional_network_handle)),
        ];

        for (channel, present) in expected {
            prop_assert_eq!(entries.iter().any(|e| e.channel == channel), present);
        }
        prop_assert_eq!(entries.len(), config.present_count());
    }

    /// Entries always follow channel declaration order
    #[test]
    fn entries_are_in_channel_order(config in config_strategy()) {
        let entries = resolve_entries(&config);
        let positions: Vec<usize> = entries
            .iter()
            .map(|e| Channel::ALL.iter().position(|c| *c == e.channel).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(positions, sorted);
    }

    /// A single configured field yields a single matching entry
    #[test]
    fn single_field_single_entry(
        index in 0usize..4,
        handle in present_handle_strategy(),
    ) {
        let channel = Channel::ALL[index];
        let entries = resolve_entries(&only(channel, handle.clone()));
        prop_assert_eq!(entries.len(), 1);
        prop_assert_eq!(entries[0].channel, channel);
        prop_assert!(entries[0].href.ends_with(&handle));
    }

    /// Handles are interpolated verbatim
    #[test]
    fn email_href_is_verbatim(address in present_handle_strategy()) {
        let entries = resolve_entries(&only(Channel::Email, address.clone()));
        prop_assert_eq!(&entries[0].href, &format!("mailto:{}", address));
    }

    /// Switching theme never changes entry count, order or hrefs
    #[test]
    fn theme_only_changes_colors(config in config_strategy()) {
        let light = CardView::build(&config, ThemeMode::Light);
        let dark = CardView::build(&config, ThemeMode::Dark);
        prop_assert_eq!(&light.links, &dark.links);
        prop_assert_eq!(&light.title, &dark.title);
        prop_assert_ne!(light.colors, dark.colors);
    }

    /// Building twice from the same inputs gives the same view
    #[test]
    fn rendering_is_idempotent(config in config_strategy(), dark in any::<bool>()) {
        let mode = if dark { ThemeMode::Dark } else { ThemeMode::Light };
        prop_assert_eq!(CardView::build(&config, mode), CardView::build(&config, mode));
    }
}

#[test]
fn all_fields_empty_yields_nothing() {
    let config = ContactConfiguration {
        code_host_handle: Some(String::new()),
        photo_host_handle: None,
        email_address: Some(String::new()),
        professional_network_handle: None,
    };
    assert!(resolve_entries(&config).is_empty());
}
