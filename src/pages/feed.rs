//! Feed page - hosts the Contact card in a sidebar column.

use contactcard_ui::ContactCard;
use dioxus::prelude::*;

use crate::context::{use_site_config, use_theme_mode};
use crate::theme::colors::page_css_vars;

/// Feed page component.
///
/// A minimal page layout: profile heading and the Contact card beneath it.
#[component]
pub fn Feed() -> Element {
    let site_config = use_site_config();
    let theme_mode = use_theme_mode();

    let mode = theme_mode();
    let page_style = page_css_vars(mode);
    let config = site_config.read();
    let profile = &config.profile;

    rsx! {
        main { class: "feed", "data-theme": mode.as_str(), style: "{page_style}",
            aside { class: "feed-sidebar",
                if let Some(name) = profile.name.as_deref() {
                    header { class: "profile-header",
                        h1 { class: "profile-name", "{name}" }
                        if let Some(role) = profile.role.as_deref() {
                            p { class: "profile-role", "{role}" }
                        }
                        if let Some(bio) = profile.bio.as_deref() {
                            p { class: "profile-bio", "{bio}" }
                        }
                    }
                }
                ContactCard { config: profile.contact.clone() }
            }
        }
    }
}
