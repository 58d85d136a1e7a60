//! Contact Card Component
//!
//! The "Contact" panel: a title row followed by a vertical list of outbound
//! links, one per configured channel.

use contactcard_core::{CardView, Channel, ContactConfiguration, LinkView, ThemeMode};
use dioxus::prelude::*;

use super::{ChannelIcon, Emoji};

/// CSS classes for a link row.
///
/// Email addresses can be long, so that row clips its overflow.
pub fn link_class(channel: Channel) -> &'static str {
    match channel {
        Channel::Email => "contact-link contact-link-email",
        _ => "contact-link",
    }
}

/// Contact Card
///
/// Renders the title and one [`ContactLink`] per configured channel, in
/// channel order. Channels without a handle are omitted; with no handles
/// at all the container renders empty.
///
/// The theme is read from a `Signal<ThemeMode>` in context unless `mode`
/// is given explicitly.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ContactCard {
///         config: site_config.contact().clone(),
///         mode: Some(ThemeMode::Dark),
///     }
/// }
/// ```
#[component]
pub fn ContactCard(
    /// Contact handles from the site settings
    config: ContactConfiguration,
    /// Theme override; falls back to context, then light
    #[props(default = None)]
    mode: Option<ThemeMode>,
) -> Element {
    let context_mode = try_use_context::<Signal<ThemeMode>>();
    let mode = mode
        .or_else(|| context_mode.map(|signal| signal()))
        .unwrap_or_default();

    let view = CardView::build(&config, mode);
    let container_style = view.colors.css_vars();
    tracing::trace!(links = view.links.len(), mode = mode.as_str(), "Rendering contact card");

    rsx! {
        div { class: "contact-title",
            Emoji { "{view.title.emoji}" }
            " {view.title.text}"
        }
        div {
            class: "contact-links",
            "data-theme": mode.as_str(),
            style: "{container_style}",
            for link in view.links {
                ContactLink { key: "{link.entry.icon_key}", link: link.clone() }
            }
        }
    }
}

/// A single external link row: icon, then label
#[component]
pub fn ContactLink(link: LinkView) -> Element {
    let class = link_class(link.entry.channel);

    rsx! {
        a {
            class: "{class}",
            href: "{link.entry.href}",
            target: link.target,
            rel: link.rel,
            ChannelIcon { icon: link.entry.icon_key }
            div { class: "name", "{link.entry.label}" }
        }
    }
}
