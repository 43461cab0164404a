/// Theme and accent colour storage
///
/// Independent of the habit store; shares only the persistence gateway.

use std::rc::Rc;

use crate::domain::{normalize_color, ColorPreset, DomainError, Preferences, Theme, COLOR_PRESETS};
use crate::storage::PersistenceGateway;

pub const THEME_KEY: &str = "theme";
pub const PRIMARY_COLOR_KEY: &str = "primaryColor";

pub struct PreferenceStore {
    current: Preferences,
    gateway: Rc<PersistenceGateway>,
}

impl PreferenceStore {
    pub fn new(gateway: Rc<PersistenceGateway>) -> Self {
        let current = Self::load_preferences(&gateway);
        Self { current, gateway }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.current
    }

    pub fn presets(&self) -> &'static [ColorPreset] {
        &COLOR_PRESETS
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.current.theme = theme;
        self.gateway.save(THEME_KEY, &theme);
        tracing::debug!("Theme set to {}", theme);
    }

    /// Change the accent colour; an invalid colour leaves state unchanged
    pub fn set_primary_color(&mut self, color: &str) -> Result<(), DomainError> {
        let color = normalize_color(color)?;
        self.gateway.save(PRIMARY_COLOR_KEY, &color);
        tracing::debug!("Primary color set to {}", color);
        self.current.primary_color = color;
        Ok(())
    }

    /// Re-read preferences from storage, falling back to defaults
    pub fn reload(&mut self) {
        self.current = Self::load_preferences(&self.gateway);
    }

    fn load_preferences(gateway: &PersistenceGateway) -> Preferences {
        let defaults = Preferences::default();

        let theme = gateway.load::<Theme>(THEME_KEY).unwrap_or(defaults.theme);
        let primary_color = gateway
            .load::<String>(PRIMARY_COLOR_KEY)
            .and_then(|c| match normalize_color(&c) {
                Ok(color) => Some(color),
                Err(e) => {
                    tracing::warn!("Ignoring stored primary color: {}", e);
                    None
                }
            })
            .unwrap_or(defaults.primary_color);

        Preferences { theme, primary_color }
    }
}
