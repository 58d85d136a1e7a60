//! Emoji Component

use dioxus::prelude::*;

/// Properties for the Emoji component
#[derive(Clone, PartialEq, Props)]
pub struct EmojiProps {
    /// Accessible label (default: "emoji")
    #[props(default = "emoji".to_string())]
    pub label: String,
    /// The emoji glyph
    pub children: Element,
}

/// Inline emoji wrapped for screen readers
#[component]
pub fn Emoji(props: EmojiProps) -> Element {
    rsx! {
        span {
            class: "emoji",
            role: "img",
            "aria-label": "{props.label}",
            {props.children}
        }
    }
}
