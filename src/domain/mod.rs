//! Domain models shared across the component, host, and UI layers.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown in an empty field when none is supplied.
pub const DEFAULT_PLACEHOLDER: &str = "Search";

/// Which clear affordance a search bar renders.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SearchBarStyle {
    /// Inline clear icon inside the rounded field.
    #[default]
    #[serde(alias = "x-button")]
    XButton,
    /// Trailing "Cancel" text button outside the field.
    #[serde(alias = "cancel-button")]
    CancelButton,
}

impl SearchBarStyle {
    pub fn toggled(self) -> Self {
        match self {
            Self::XButton => Self::CancelButton,
            Self::CancelButton => Self::XButton,
        }
    }
}

impl fmt::Display for SearchBarStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XButton => write!(f, "x button"),
            Self::CancelButton => write!(f, "cancel button"),
        }
    }
}

/// Resolved light/dark appearance used to pick a palette.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Appearance {
    Light,
    #[default]
    Dark,
}

impl Appearance {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// User preference for appearance; `Auto` is resolved against the terminal and OS.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AppearancePreference {
    #[default]
    Auto,
    Light,
    Dark,
}

/// Content size category, modelled on dynamic type sizes.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SizeCategory {
    ExtraSmall,
    #[default]
    Large,
    ExtraExtraExtraLarge,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 3] = [
        SizeCategory::ExtraSmall,
        SizeCategory::Large,
        SizeCategory::ExtraExtraExtraLarge,
    ];

    /// Columns of padding between the pill edge and its content.
    pub fn horizontal_padding(self) -> u16 {
        match self {
            Self::ExtraSmall => 0,
            Self::Large => 1,
            Self::ExtraExtraExtraLarge => 2,
        }
    }

    /// Blank rows above and below the text line inside the pill.
    pub fn vertical_padding(self) -> u16 {
        match self {
            Self::ExtraExtraExtraLarge => 1,
            Self::ExtraSmall | Self::Large => 0,
        }
    }

    /// Total pill height including its rounded border.
    pub fn bar_height(self) -> u16 {
        3 + 2 * self.vertical_padding()
    }

    pub fn next(self) -> Self {
        match self {
            Self::ExtraSmall => Self::Large,
            Self::Large => Self::ExtraExtraExtraLarge,
            Self::ExtraExtraExtraLarge => Self::ExtraSmall,
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtraSmall => write!(f, "extra small"),
            Self::Large => write!(f, "large"),
            Self::ExtraExtraExtraLarge => write!(f, "extra extra extra large"),
        }
    }
}

/// Identifies an input responder in the host screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ResponderId {
    SearchField,
}

#[cfg(test)]
mod tests {
    use super::{SearchBarStyle, SizeCategory};

    #[test]
    fn style_deserializes_from_snake_and_kebab_case() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            style: SearchBarStyle,
        }

        let snake: Wrapper = toml::from_str("style = \"cancel_button\"").unwrap();
        let kebab: Wrapper = toml::from_str("style = \"x-button\"").unwrap();
        assert_eq!(snake.style, SearchBarStyle::CancelButton);
        assert_eq!(kebab.style, SearchBarStyle::XButton);
    }

    #[test]
    fn size_category_cycles_through_all_sizes() {
        let mut size = SizeCategory::ExtraSmall;
        for expected in SizeCategory::ALL.iter().skip(1) {
            size = size.next();
            assert_eq!(size, *expected);
        }
        assert_eq!(size.next(), SizeCategory::ExtraSmall);
    }

    #[test]
    fn largest_size_adds_vertical_padding() {
        assert_eq!(SizeCategory::Large.bar_height(), 3);
        assert_eq!(SizeCategory::ExtraExtraExtraLarge.bar_height(), 5);
    }
}
