/// Tools for reading and changing display preferences
///
/// Implements preferences_get and preferences_set.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{normalize_color, Preferences, Theme};
use crate::preferences::PreferenceStore;
use crate::tools::ToolError;

/// Parameters for changing preferences
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct SetPreferencesParams {
    /// light or dark
    pub theme: Option<String>,
    /// Accent colour as #rrggbb
    pub primary_color: Option<String>,
}

/// Current preferences plus a rendered summary
#[derive(Debug, Serialize)]
pub struct PreferencesResponse {
    pub preferences: Preferences,
    pub message: String,
}

fn render(store: &PreferenceStore) -> String {
    let prefs = store.preferences();
    let color = match prefs.preset_name() {
        Some(name) => format!("{} ({})", prefs.primary_color, name),
        None => prefs.primary_color.clone(),
    };
    let presets = store
        .presets()
        .iter()
        .map(|p| format!("{} {}", p.name, p.value))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "🎨 Theme: {}\nAccent color: {}\nPresets: {}",
        prefs.theme, color, presets
    )
}

pub fn get_preferences(store: &PreferenceStore) -> PreferencesResponse {
    PreferencesResponse {
        preferences: store.preferences().clone(),
        message: render(store),
    }
}

/// Apply the requested changes; nothing changes if any value is invalid
pub fn set_preferences(
    store: &mut PreferenceStore,
    params: SetPreferencesParams,
) -> Result<PreferencesResponse, ToolError> {
    if params.theme.is_none() && params.primary_color.is_none() {
        return Err(ToolError::InvalidArgument(
            "Nothing to change: provide theme or primary_color".to_string(),
        ));
    }

    let theme = params.theme.as_deref().map(str::parse::<Theme>).transpose()?;
    let color = params.primary_color.as_deref().map(normalize_color).transpose()?;

    if let Some(theme) = theme {
        store.set_theme(theme);
    }
    if let Some(color) = color {
        store.set_primary_color(&color)?;
    }

    Ok(get_preferences(store))
}
