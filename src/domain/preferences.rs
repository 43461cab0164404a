/// Display preferences: colour theme and accent colour

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Accent colour used when nothing has been stored yet
pub const DEFAULT_PRIMARY_COLOR: &str = "#6366f1";

/// Accent colours offered in the settings screen
pub static COLOR_PRESETS: [ColorPreset; 6] = [
    ColorPreset { name: "Indigo", value: "#6366f1" },
    ColorPreset { name: "Purple", value: "#8b5cf6" },
    ColorPreset { name: "Pink", value: "#ec4899" },
    ColorPreset { name: "Blue", value: "#3b82f6" },
    ColorPreset { name: "Green", value: "#10b981" },
    ColorPreset { name: "Orange", value: "#f59e0b" },
];

/// Light or dark colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(DomainError::InvalidTheme(format!(
                "'{}'. Valid options: light, dark",
                other
            ))),
        }
    }
}

/// A named accent colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPreset {
    pub name: &'static str,
    pub value: &'static str,
}

/// The user's current display preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub primary_color: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
        }
    }
}

impl Preferences {
    /// Name of the preset matching the current accent colour, if any
    pub fn preset_name(&self) -> Option<&'static str> {
        COLOR_PRESETS
            .iter()
            .find(|p| p.value.eq_ignore_ascii_case(&self.primary_color))
            .map(|p| p.name)
    }
}

/// Normalise a `#rrggbb` colour to lowercase, rejecting anything else
pub fn normalize_color(color: &str) -> Result<String, DomainError> {
    let trimmed = color.trim();
    let hex = trimmed
        .strip_prefix('#')
        .ok_or_else(|| DomainError::InvalidColor(format!("'{}' must start with '#'", trimmed)))?;

    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(DomainError::InvalidColor(format!(
            "'{}' must be a six digit hex colour like #6366f1",
            trimmed
        )));
    }

    Ok(format!("#{}", hex.to_ascii_lowercase()))
}
