//! Light and dark palettes for the search bar and demo host.

use crate::domain::{Appearance, AppearancePreference};
use ratatui::style::{Color, Modifier, Style};
use std::sync::{OnceLock, PoisonError, RwLock};
use std::time::Duration;
use tracing::debug;

const TERMINAL_QUERY_TIMEOUT: Duration = Duration::from_millis(100);

/// Runtime palette for one appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemePalette {
    pub background: Color,
    pub label: Color,
    pub placeholder: Color,
    pub field_fill: Color,
    pub accent: Color,
    pub title: Color,
    pub dim: Color,
    pub info: Color,
}

impl ThemePalette {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(255, 255, 255),
            label: Color::Rgb(0, 0, 0),
            // rgba(60, 60, 67, 0.3) over white
            placeholder: Color::Rgb(197, 197, 199),
            // rgba(118, 118, 128, 0.12) over white
            field_fill: Color::Rgb(239, 239, 240),
            accent: Color::Rgb(0, 122, 255),
            title: Color::Rgb(0, 0, 0),
            dim: Color::Rgb(142, 142, 147),
            info: Color::Rgb(0, 122, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(0, 0, 0),
            label: Color::Rgb(255, 255, 255),
            // rgba(235, 235, 245, 0.3) over black
            placeholder: Color::Rgb(71, 71, 74),
            // rgba(118, 118, 128, 0.24) over black
            field_fill: Color::Rgb(28, 28, 31),
            accent: Color::Rgb(10, 132, 255),
            title: Color::Rgb(255, 255, 255),
            dim: Color::Rgb(142, 142, 147),
            info: Color::Rgb(10, 132, 255),
        }
    }
}

/// Palettes for both appearances.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSet {
    pub light: ThemePalette,
    pub dark: ThemePalette,
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self {
            light: ThemePalette::light(),
            dark: ThemePalette::dark(),
        }
    }
}

static ACTIVE_THEME: OnceLock<RwLock<ThemeSet>> = OnceLock::new();

fn store() -> &'static RwLock<ThemeSet> {
    ACTIVE_THEME.get_or_init(|| RwLock::new(ThemeSet::default()))
}

fn with_palette<T>(appearance: Appearance, f: impl FnOnce(&ThemePalette) -> T) -> T {
    let guard = store().read().unwrap_or_else(PoisonError::into_inner);
    match appearance {
        Appearance::Light => f(&guard.light),
        Appearance::Dark => f(&guard.dark),
    }
}

/// Installs the active palettes.
pub fn apply(themes: ThemeSet) {
    if let Ok(mut guard) = store().write() {
        *guard = themes;
    }
}

pub fn background(appearance: Appearance) -> Style {
    with_palette(appearance, |theme| {
        Style::default().fg(theme.label).bg(theme.background)
    })
}

pub fn field(appearance: Appearance) -> Style {
    with_palette(appearance, |theme| {
        Style::default().fg(theme.placeholder).bg(theme.field_fill)
    })
}

pub fn field_border(appearance: Appearance) -> Style {
    with_palette(appearance, |theme| {
        Style::default().fg(theme.field_fill).bg(theme.background)
    })
}

pub fn label(appearance: Appearance) -> Style {
    with_palette(appearance, |theme| Style::default().fg(theme.label))
}

pub fn placeholder(appearance: Appearance) -> Style {
    with_palette(appearance, |theme| Style::default().fg(theme.placeholder))
}

pub fn accent(appearance: Appearance) -> Style {
    with_palette(appearance, |theme| Style::default().fg(theme.accent))
}

pub fn title(appearance: Appearance) -> Style {
    with_palette(appearance, |theme| {
        Style::default().fg(theme.title).add_modifier(Modifier::BOLD)
    })
}

pub fn dim(appearance: Appearance) -> Style {
    with_palette(appearance, |theme| Style::default().fg(theme.dim))
}

pub fn info(appearance: Appearance) -> Style {
    with_palette(appearance, |theme| Style::default().fg(theme.info))
}

/// Style for a control fading in over the field fill; `amount` is its opacity.
pub fn faded(appearance: Appearance, amount: f32) -> Style {
    with_palette(appearance, |theme| {
        let style = Style::default().bg(theme.field_fill);
        match (theme.placeholder, theme.field_fill) {
            (Color::Rgb(..), Color::Rgb(..)) => {
                style.fg(blend(theme.placeholder, theme.field_fill, amount))
            }
            _ if amount < 1.0 => style.fg(theme.placeholder).add_modifier(Modifier::DIM),
            _ => style.fg(theme.placeholder),
        }
    })
}

/// Composites `fg` at opacity `alpha` over `bg`.
///
/// Only RGB colours can be mixed; any other colour returns `fg` unchanged.
pub fn blend(fg: Color, bg: Color, alpha: f32) -> Color {
    let (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) = (fg, bg) else {
        return fg;
    };
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |front: u8, back: u8| -> u8 {
        (f32::from(front) * alpha + f32::from(back) * (1.0 - alpha)).round() as u8
    };
    Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
}

/// Resolves an appearance preference against the terminal and the OS.
pub fn resolve_appearance(preference: AppearancePreference) -> Appearance {
    match preference {
        AppearancePreference::Light => Appearance::Light,
        AppearancePreference::Dark => Appearance::Dark,
        AppearancePreference::Auto => detect_appearance(),
    }
}

fn detect_appearance() -> Appearance {
    match termbg::theme(TERMINAL_QUERY_TIMEOUT) {
        Ok(termbg::Theme::Light) => return Appearance::Light,
        Ok(termbg::Theme::Dark) => return Appearance::Dark,
        Err(error) => debug!(%error, "terminal background query failed"),
    }

    match dark_light::detect() {
        Ok(dark_light::Mode::Light) => Appearance::Light,
        Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) => Appearance::Dark,
        Err(error) => {
            debug!(%error, "system appearance detection failed");
            Appearance::Dark
        }
    }
}
