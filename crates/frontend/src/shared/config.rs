//! Application settings embedded from `config.toml` at build time

use contracts::shared::app_config::AppConfig;
use once_cell::sync::Lazy;

const CONFIG_TOML: &str = include_str!("../../config.toml");

/// Browser storage key that overrides `[api] base_url`
pub const API_BASE_OVERRIDE_KEY: &str = "api_base_url";

static CONFIG: Lazy<AppConfig> = Lazy::new(|| load(CONFIG_TOML));

fn load(text: &str) -> AppConfig {
    match AppConfig::parse(text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{e}, falling back to built-in defaults");
            AppConfig::default()
        }
    }
}

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = AppConfig::parse(CONFIG_TOML).unwrap();
        assert_eq!(config.ui.default_page_size, 100);
        assert_eq!(config.api.port, 8000);
    }

    #[test]
    fn test_broken_config_falls_back() {
        assert_eq!(load("[api"), AppConfig::default());
    }
}
