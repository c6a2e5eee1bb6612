use log::Level;
use serde::Deserialize;
use thiserror::Error;

/// Site settings baked in at build time.
const SITE_JSON: &str = include_str!("../site.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose reveal/counter tracing while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub include_footer: bool,
    pub include_documentation: bool,
    pub include_webinars: bool,
    pub fallback_on_unsupported: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            include_footer: false,
            include_documentation: false,
            include_webinars: false,
            fallback_on_unsupported: true,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The embedded config, or defaults when it does not parse.
    pub fn load() -> Self {
        match Self::from_json(SITE_JSON) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = SiteConfig::from_json(r#"{ "include_footer": true }"#).unwrap();
        assert!(config.include_footer);
        assert!(!config.include_documentation);
        assert!(!config.include_webinars);
        assert!(config.fallback_on_unsupported);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = SiteConfig::from_json("{ include_footer: yes }").unwrap_err();
        assert!(err.to_string().starts_with("invalid site config"));
    }

    #[test]
    fn wrong_field_type_is_an_error() {
        assert!(SiteConfig::from_json(r#"{ "include_footer": "yes" }"#).is_err());
    }

    #[test]
    fn embedded_config_parses() {
        assert!(SiteConfig::from_json(SITE_JSON).is_ok());
    }
}
