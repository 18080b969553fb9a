//! Application theme and its persistence.
//!
//! The selected theme is stored in the `app_settings` table under
//! [`THEME_STORAGE_KEY`]. Anything unreadable falls back to [`DEFAULT_THEME`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StarterError};
use crate::settings_store;

pub const THEME_STORAGE_KEY: &str = "app-theme";
pub const DEFAULT_THEME: Theme = Theme::Dark;
pub const AVAILABLE_THEMES: [Theme; 2] = [Theme::Light, Theme::Dark];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        DEFAULT_THEME
    }
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = StarterError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        AVAILABLE_THEMES
            .into_iter()
            .find(|theme| theme.as_str() == value)
            .ok_or_else(|| StarterError::Validation(format!("Invalid theme: {value}")))
    }
}

pub fn parse_theme_or_default(value: &str) -> Theme {
    match value.parse() {
        Ok(theme) => theme,
        Err(_) => {
            tracing::warn!("Invalid theme: {value}. Using default theme.");
            DEFAULT_THEME
        }
    }
}

/// Never fails: a missing, invalid or unreadable value yields the default theme.
pub fn load_theme(db_path: &str) -> Theme {
    match settings_store::get_setting(db_path, THEME_STORAGE_KEY) {
        Ok(Some(value)) => parse_theme_or_default(&value),
        Ok(None) => DEFAULT_THEME,
        Err(err) => {
            tracing::warn!("Could not read saved theme: {err}");
            DEFAULT_THEME
        }
    }
}

pub fn save_theme(db_path: &str, theme: Theme) -> Result<()> {
    settings_store::set_setting(db_path, THEME_STORAGE_KEY, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn invalid_values_fall_back_to_default() {
        assert_eq!(parse_theme_or_default("light"), Theme::Light);
        assert_eq!(parse_theme_or_default("dark"), Theme::Dark);
        assert_eq!(parse_theme_or_default("solarized"), DEFAULT_THEME);
        assert_eq!(parse_theme_or_default(""), DEFAULT_THEME);
        assert!("Light".parse::<Theme>().is_err());
    }
}
