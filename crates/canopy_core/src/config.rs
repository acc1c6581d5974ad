//! Environment-driven application configuration.
//!
//! The widgets take their configuration as props; this module only covers the
//! knobs an embedding application reads at startup: theme selection via
//! `CANOPY_THEME` and the log filter via `CANOPY_LOG`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CanopyError;

/// Built-in theme families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Dark palette.
    #[default]
    Dark,
    /// Light palette.
    Light,
}

impl FromStr for ThemeVariant {
    type Err = CanopyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(CanopyError::theme(format!(
                "Unknown theme {other:?}, expected \"dark\" or \"light\""
            ))),
        }
    }
}

/// Startup configuration for an embedding application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Theme family to apply at startup.
    pub theme: ThemeVariant,
    /// Optional log filter overriding the environment chain.
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// Unset variables fall back to defaults; a set-but-invalid `CANOPY_THEME`
    /// is an error so typos do not silently pick a theme.
    pub fn from_env() -> Result<Self, CanopyError> {
        let theme = match std::env::var("CANOPY_THEME") {
            Ok(value) => value.parse()?,
            Err(_) => ThemeVariant::default(),
        };

        let log_filter = std::env::var("CANOPY_LOG").ok();

        Ok(Self { theme, log_filter })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_variant_parse() {
        assert_eq!("dark".parse::<ThemeVariant>().unwrap(), ThemeVariant::Dark);
        assert_eq!("Light".parse::<ThemeVariant>().unwrap(), ThemeVariant::Light);
        assert_eq!(" DARK ".parse::<ThemeVariant>().unwrap(), ThemeVariant::Dark);

        let err = "solarized".parse::<ThemeVariant>().unwrap_err();
        assert_eq!(err.category(), "Theme");
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.theme, ThemeVariant::Dark);
        assert!(config.log_filter.is_none());
    }
}
