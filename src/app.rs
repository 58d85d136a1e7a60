use dioxus::prelude::*;

use contactcard_ui::CONTACT_CARD_STYLES;

use crate::context::{get_site_config, get_theme_mode};
use crate::pages::Feed;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles plus the configuration and theme contexts.
#[component]
pub fn App() -> Element {
    let site_config = use_signal(get_site_config);
    let theme_mode = use_signal(get_theme_mode);

    use_context_provider(|| site_config);
    use_context_provider(|| theme_mode);

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {CONTACT_CARD_STYLES} }
        Feed {}
    }
}
