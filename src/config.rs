//! User configuration loading from `~/.searchbar/config.toml`.

use crate::domain::{AppearancePreference, DEFAULT_PLACEHOLDER, SearchBarStyle, SizeCategory};
use crate::ui::theme::{ThemePalette, ThemeSet};
use crate::ui::transition::DEFAULT_DURATION;
use anyhow::{Context, Result, anyhow};
use ratatui::style::Color;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const CONFIG_DIR: &str = ".searchbar";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "searchbar.log";

const DEFAULT_CONFIG_TOML: &str = r##"# searchbar configuration
# Colors accept `#RRGGBB` or named ANSI colors (e.g. "blue", "dark_gray").

placeholder = "Search"
# "x_button" or "cancel_button"
style = "x_button"
# "auto", "light" or "dark"
appearance = "auto"
# "extra_small", "large" or "extra_extra_extra_large"
size = "large"

[animation]
duration = "200ms"

[theme.light]
background = "#ffffff"
label = "#000000"
placeholder = "#c5c5c7"
field_fill = "#efeff0"
accent = "#007aff"
title = "#000000"
dim = "#8e8e93"
info = "#007aff"

[theme.dark]
background = "#000000"
label = "#ffffff"
placeholder = "#47474a"
field_fill = "#1c1c1f"
accent = "#0a84ff"
title = "#ffffff"
dim = "#8e8e93"
info = "#0a84ff"
"##;

/// Application configuration loaded from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub placeholder: String,
    pub style: SearchBarStyle,
    pub appearance: AppearancePreference,
    pub size: SizeCategory,
    pub animation: Duration,
    pub theme: ThemeSet,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            style: SearchBarStyle::default(),
            appearance: AppearancePreference::default(),
            size: SizeCategory::default(),
            animation: DEFAULT_DURATION,
            theme: ThemeSet::default(),
        }
    }
}

/// Returns the config file path and creates default config if missing.
pub fn ensure_config_file() -> Result<PathBuf> {
    let path = config_dir()?.join(CONFIG_FILE);
    ensure_default_config(&path)?;
    Ok(path)
}

/// Path of the log file, next to the config file.
pub fn log_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(LOG_FILE))
}

/// Loads configuration from `~/.searchbar/config.toml`, creating defaults if missing.
pub fn load_or_create() -> Result<AppConfig> {
    let path = ensure_config_file()?;
    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;

    parse(&content).with_context(|| format!("invalid config in {}", path.display()))
}

/// Parses config TOML; missing keys fall back to defaults.
pub fn parse(content: &str) -> Result<AppConfig> {
    let raw: RawConfig = toml::from_str(content).context("failed to parse TOML")?;
    let defaults = AppConfig::default();

    let animation = match raw.animation.duration {
        Some(value) => humantime::parse_duration(value.trim())
            .with_context(|| format!("invalid duration for `animation.duration`: {value}"))?,
        None => defaults.animation,
    };

    Ok(AppConfig {
        placeholder: raw.placeholder.unwrap_or(defaults.placeholder),
        style: raw.style.unwrap_or(defaults.style),
        appearance: raw.appearance.unwrap_or(defaults.appearance),
        size: raw.size.unwrap_or(defaults.size),
        animation,
        theme: ThemeSet {
            light: raw
                .theme
                .light
                .into_palette(ThemePalette::light(), "theme.light")?,
            dark: raw
                .theme
                .dark
                .into_palette(ThemePalette::dark(), "theme.dark")?,
        },
    })
}

fn config_dir() -> Result<PathBuf> {
    let home =
        env::var_os("HOME").ok_or_else(|| anyhow!("HOME environment variable is not set"))?;
    Ok(PathBuf::from(home).join(CONFIG_DIR))
}

fn ensure_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    let dir = path
        .parent()
        .ok_or_else(|| anyhow!("invalid config path: {}", path.display()))?;
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;
    fs::write(path, DEFAULT_CONFIG_TOML)
        .with_context(|| format!("failed to write default config file {}", path.display()))?;
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawConfig {
    placeholder: Option<String>,
    style: Option<SearchBarStyle>,
    appearance: Option<AppearancePreference>,
    size: Option<SizeCategory>,
    animation: RawAnimation,
    theme: RawThemes,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawAnimation {
    duration: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawThemes {
    light: RawPalette,
    dark: RawPalette,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawPalette {
    background: Option<String>,
    label: Option<String>,
    placeholder: Option<String>,
    field_fill: Option<String>,
    accent: Option<String>,
    title: Option<String>,
    dim: Option<String>,
    info: Option<String>,
}

impl RawPalette {
    fn into_palette(self, defaults: ThemePalette, section: &str) -> Result<ThemePalette> {
        let field = |name: &str| format!("{section}.{name}");

        Ok(ThemePalette {
            background: parse_or_default(
                self.background,
                defaults.background,
                &field("background"),
            )?,
            label: parse_or_default(self.label, defaults.label, &field("label"))?,
            placeholder: parse_or_default(
                self.placeholder,
                defaults.placeholder,
                &field("placeholder"),
            )?,
            field_fill: parse_or_default(
                self.field_fill,
                defaults.field_fill,
                &field("field_fill"),
            )?,
            accent: parse_or_default(self.accent, defaults.accent, &field("accent"))?,
            title: parse_or_default(self.title, defaults.title, &field("title"))?,
            dim: parse_or_default(self.dim, defaults.dim, &field("dim"))?,
            info: parse_or_default(self.info, defaults.info, &field("info"))?,
        })
    }
}

/// Why a colour string was rejected.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ColorParseError {
    #[error("hex colors must be in #RRGGBB format")]
    HexLength,
    #[error("invalid {0} hex channel")]
    HexChannel(&'static str),
    #[error("unsupported color format")]
    Unsupported,
}

fn parse_or_default(value: Option<String>, default: Color, field: &str) -> Result<Color> {
    match value {
        Some(raw) => parse_color(raw.trim())
            .with_context(|| format!("invalid color value for `{field}`: {raw}")),
        None => Ok(default),
    }
}

pub fn parse_color(raw: &str) -> Result<Color, ColorParseError> {
    if let Some(hex) = raw.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorParseError::HexLength);
        }
        let channel = |range: std::ops::Range<usize>, name: &'static str| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError::HexChannel(name))
        };
        return Ok(Color::Rgb(
            channel(0..2, "red")?,
            channel(2..4, "green")?,
            channel(4..6, "blue")?,
        ));
    }

    let normalized = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
    let color = match normalized.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" => Color::DarkGray,
        "light_red" => Color::LightRed,
        "light_green" => Color::LightGreen,
        "light_yellow" => Color::LightYellow,
        "light_blue" => Color::LightBlue,
        "light_magenta" => Color::LightMagenta,
        "light_cyan" => Color::LightCyan,
        "white" => Color::White,
        _ => return Err(ColorParseError::Unsupported),
    };

    Ok(color)
}
