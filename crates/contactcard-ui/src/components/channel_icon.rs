//! Channel Icon Component
//!
//! Inline SVG glyphs for the contact channels. Stroke icons drawn with
//! `currentColor`, so they follow the link's text color on hover.

use contactcard_core::IconKey;
use dioxus::prelude::*;

/// Accessible name for an icon glyph
pub fn icon_title(icon: IconKey) -> &'static str {
    match icon {
        IconKey::CodeHost => "GitHub",
        IconKey::PhotoHost => "Instagram",
        IconKey::Mail => "Mail",
        IconKey::ProfessionalNetwork => "LinkedIn",
    }
}

/// Properties for the ChannelIcon component
#[derive(Clone, PartialEq, Props)]
pub struct ChannelIconProps {
    /// Which glyph to draw
    pub icon: IconKey,
    /// Edge length in pixels (default: 24)
    #[props(default = 24)]
    pub size: u32,
}

/// Renders the glyph for an [`IconKey`]
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ChannelIcon { icon: IconKey::Mail }
/// }
/// ```
#[component]
pub fn ChannelIcon(props: ChannelIconProps) -> Element {
    let size = props.size;
    let key = props.icon.as_str();

    rsx! {
        svg {
            class: "icon",
            "data-icon": "{key}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "role": "img",
            "aria-label": icon_title(props.icon),
            {render_glyph(props.icon)}
        }
    }
}

fn render_glyph(icon: IconKey) -> Element {
    match icon {
        IconKey::CodeHost => rsx! {
            path { d: "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22" }
        },
        IconKey::PhotoHost => rsx! {
            rect { x: "2", y: "2", width: "20", height: "20", rx: "5", ry: "5" }
            path { d: "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" }
            line { x1: "17.5", y1: "6.5", x2: "17.51", y2: "6.5" }
        },
        IconKey::Mail => rsx! {
            path { d: "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z" }
            polyline { points: "22,6 12,13 2,6" }
        },
        IconKey::ProfessionalNetwork => rsx! {
            path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
            rect { x: "2", y: "9", width: "4", height: "12" }
            circle { cx: "4", cy: "4", r: "2" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_titles() {
        assert_eq!(icon_title(IconKey::CodeHost), "GitHub");
        assert_eq!(icon_title(IconKey::PhotoHost), "Instagram");
        assert_eq!(icon_title(IconKey::Mail), "Mail");
        assert_eq!(icon_title(IconKey::ProfessionalNetwork), "LinkedIn");
    }
}
