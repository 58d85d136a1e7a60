//! Contact channels
//!
//! The four fixed kinds of outbound link the card knows about. Declaration
//! order is display order.

use serde::{Deserialize, Serialize};

/// One of the fixed contact types shown on the card
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Code-hosting profile (GitHub)
    CodeHost,
    /// Photo-sharing profile (Instagram)
    PhotoHost,
    /// Plain email address
    Email,
    /// Professional-network profile (LinkedIn)
    ProfessionalNetwork,
}

impl Channel {
    /// All channels in the order they stack on the card
    pub const ALL: [Channel; 4] = [
        Channel::CodeHost,
        Channel::PhotoHost,
        Channel::Email,
        Channel::ProfessionalNetwork,
    ];

    /// Human-readable label shown next to the icon
    pub fn label(&self) -> &'static str {
        match self {
            Channel::CodeHost => "GitHub",
            Channel::PhotoHost => "Instagram",
            Channel::Email => "Email",
            Channel::ProfessionalNetwork => "LinkedIn",
        }
    }

    /// Glyph used for this channel
    pub fn icon_key(&self) -> IconKey {
        match self {
            Channel::CodeHost => IconKey::CodeHost,
            Channel::PhotoHost => IconKey::PhotoHost,
            Channel::Email => IconKey::Mail,
            Channel::ProfessionalNetwork => IconKey::ProfessionalNetwork,
        }
    }

    /// Destination for `handle`.
    ///
    /// The handle is interpolated verbatim: no trimming, no percent-encoding.
    pub fn href(&self, handle: &str) -> String {
        match self {
            Channel::CodeHost => format!("https://github.com/{}", handle),
            Channel::PhotoHost => format!("https://www.instagram.com/{}", handle),
            Channel::Email => format!("mailto:{}", handle),
            Channel::ProfessionalNetwork => format!("https://www.linkedin.com/in/{}", handle),
        }
    }
}

/// Identifier handed to the icon capability
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKey {
    CodeHost,
    PhotoHost,
    Mail,
    ProfessionalNetwork,
}

impl IconKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconKey::CodeHost => "codehost",
            IconKey::PhotoHost => "photohost",
            IconKey::Mail => "mail",
            IconKey::ProfessionalNetwork => "professionalnetwork",
        }
    }
}

impl std::fmt::Display for IconKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_order_is_fixed() {
        assert_eq!(
            Channel::ALL,
            [
                Channel::CodeHost,
                Channel::PhotoHost,
                Channel::Email,
                Channel::ProfessionalNetwork
            ]
        );
    }

    #[test]
    fn channel_labels() {
        assert_eq!(Channel::CodeHost.label(), "GitHub");
        assert_eq!(Channel::PhotoHost.label(), "Instagram");
        assert_eq!(Channel::Email.label(), "Email");
        assert_eq!(Channel::ProfessionalNetwork.label(), "LinkedIn");
    }

    #[test]
    fn channel_hrefs() {
        assert_eq!(Channel::CodeHost.href("octocat"), "https://github.com/octocat");
        assert_eq!(
            Channel::PhotoHost.href("nasa"),
            "https://www.instagram.com/nasa"
        );
        assert_eq!(Channel::Email.href("a@b.com"), "mailto:a@b.com");
        assert_eq!(
            Channel::ProfessionalNetwork.href("jane-doe"),
            "https://www.linkedin.com/in/jane-doe"
        );
    }

    #[test]
    fn href_passes_handle_through_unescaped() {
        assert_eq!(
            Channel::Email.href("first last+tag@example.com?subject=hi"),
            "mailto:first last+tag@example.com?subject=hi"
        );
        assert_eq!(
            Channel::CodeHost.href("../weird/<path>"),
            "https://github.com/../weird/<path>"
        );
    }

    #[test]
    fn icon_keys() {
        assert_eq!(Channel::CodeHost.icon_key().as_str(), "codehost");
        assert_eq!(Channel::PhotoHost.icon_key().as_str(), "photohost");
        assert_eq!(Channel::Email.icon_key().as_str(), "mail");
        assert_eq!(
            Channel::ProfessionalNetwork.icon_key().to_string(),
            "professionalnetwork"
        );
    }
}
