use crate::shared::enquiry::action::RELOAD_DELAY_MS;
use serde::Deserialize;
use thiserror::Error;

/// Configuration used when nothing else is available
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 8000

[ui]
default_page_size = 100
toast_dismiss_ms = 5000
reload_delay_ms = 1500
suggestion_blur_ms = 200

[dashboard]
cache_ttl_secs = 300
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Fixed backend origin; empty means "same host as the page, on `port`"
    #[serde(default)]
    pub base_url: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    pub default_page_size: usize,
    pub toast_dismiss_ms: u32,
    pub reload_delay_ms: u32,
    pub suggestion_blur_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardConfig {
    pub cache_ttl_secs: i64,
}

impl AppConfig {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.default_page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "ui.default_page_size",
                reason: "must be positive",
            });
        }
        if self.dashboard.cache_ttl_secs < 0 {
            return Err(ConfigError::Invalid {
                field: "dashboard.cache_ttl_secs",
                reason: "must not be negative",
            });
        }
        Ok(())
    }

    /// Backend origin for a page served from `protocol` (`"https:"`) and `hostname`.
    /// An `override_url` (from browser storage) wins over the file.
    pub fn api_base(&self, protocol: &str, hostname: &str, override_url: Option<&str>) -> String {
        let configured = override_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(self.api.base_url.trim());
        if !configured.is_empty() {
            return configured.trim_end_matches('/').to_string();
        }
        format!("{}//{}:{}", protocol, hostname, self.api.port)
    }

    pub fn cache_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.dashboard.cache_ttl_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
                port: 8000,
            },
            ui: UiConfig {
                default_page_size: 100,
                toast_dismiss_ms: 5000,
                reload_delay_ms: RELOAD_DELAY_MS,
                suggestion_blur_ms: 200,
            },
            dashboard: DashboardConfig { cache_ttl_secs: 300 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.ui.reload_delay_ms, 1500);
    }

    #[test]
    fn test_api_base_resolution() {
        let config = AppConfig::default();
        assert_eq!(config.api_base("http:", "10.0.0.5", None), "http://10.0.0.5:8000");
        assert_eq!(
            config.api_base("http:", "10.0.0.5", Some("https://api.example.com/")),
            "https://api.example.com"
        );
        assert_eq!(config.api_base("https:", "srv", Some("  ")), "https://srv:8000");

        let fixed = AppConfig {
            api: ApiConfig {
                base_url: "http://backend:9000".into(),
                port: 1,
            },
            ..AppConfig::default()
        };
        assert_eq!(fixed.api_base("http:", "ignored", None), "http://backend:9000");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let text = DEFAULT_CONFIG.replace("default_page_size = 100", "default_page_size = 0");
        let err = AppConfig::parse(&text).unwrap_err();
        assert!(err.to_string().contains("ui.default_page_size"));

        assert!(matches!(
            AppConfig::parse("[api]\nport = \"x\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
