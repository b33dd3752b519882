use crate::data::persistence::Persistable;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

/// Contents of `config.yaml`. Every key is optional.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub locale: Locale,
    pub title: String,
    pub week_start: WeekStart,
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            locale: Locale::Es,
            title: "Mi Registro Korrena".to_string(),
            week_start: WeekStart::Sunday,
            log_level: "info".to_string(),
        }
    }
}

impl Persistable for AppSettings {
    fn filename() -> &'static str {
        "config.yaml"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_settings_default_values() {
        let settings = AppSettings::default();
        assert_eq!(settings.locale, Locale::Es);
        assert_eq!(settings.title, "Mi Registro Korrena");
        assert_eq!(settings.week_start, WeekStart::Sunday);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_app_settings_yaml_roundtrip() {
        let settings = AppSettings {
            locale: Locale::En,
            title: "Mood Journal".to_string(),
            week_start: WeekStart::Monday,
            log_level: "debug".to_string(),
        };
        let yaml = serde_norway::to_string(&settings).unwrap();
        assert!(yaml.contains("locale: en"));
        assert!(yaml.contains("week_start: monday"));
        let parsed: AppSettings = serde_norway::from_str(&yaml).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let parsed: AppSettings = serde_norway::from_str("locale: en").unwrap();
        assert_eq!(parsed.locale, Locale::En);
        assert_eq!(parsed.title, "Mi Registro Korrena");
        assert_eq!(parsed.log_level, "info");
    }

    #[test]
    fn test_unknown_locale_is_rejected() {
        let parsed: Result<AppSettings, _> = serde_norway::from_str("locale: fr");
        assert!(parsed.is_err());
    }
}
