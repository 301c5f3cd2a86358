//! Deterministic preview configurations used by the visual harness.

use crate::domain::{Appearance, SearchBarStyle, SizeCategory};

/// One search bar configuration to render for inspection.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PreviewCase {
    pub name: String,
    pub text: &'static str,
    pub style: SearchBarStyle,
    pub appearance: Appearance,
    pub size: SizeCategory,
}

/// Empty bars at every size in both appearances, then filled bars in each style.
pub fn preview_cases() -> Vec<PreviewCase> {
    let mut cases = Vec::new();

    for size in SizeCategory::ALL {
        for appearance in [Appearance::Light, Appearance::Dark] {
            cases.push(PreviewCase {
                name: format!("{}, empty, {size}", capitalized(appearance)),
                text: "",
                style: SearchBarStyle::XButton,
                appearance,
                size,
            });
        }
    }

    for (style, label) in [
        (SearchBarStyle::XButton, "x button"),
        (SearchBarStyle::CancelButton, "cancel text"),
    ] {
        for appearance in [Appearance::Light, Appearance::Dark] {
            cases.push(PreviewCase {
                name: format!("{}, {label}", capitalized(appearance)),
                text: "text",
                style,
                appearance,
                size: SizeCategory::Large,
            });
        }
    }

    cases
}

fn capitalized(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Light => "Light",
        Appearance::Dark => "Dark",
    }
}
