//! Page Configuration
//!
//! Read once at startup from a JSON `<script id="todo-config">` element
//! the host page embeds. Anything missing falls back to defaults.

use serde::Deserialize;

const CONFIG_ELEMENT_ID: &str = "todo-config";

/// Which Store implementation backs the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Tauri when running inside its webview, memory otherwise
    #[default]
    Auto,
    Tauri,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Passed untouched to every Store call
    pub user_id: String,
    pub log_level: String,
    pub backend: Backend,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user_id: "local".to_string(),
            log_level: "info".to_string(),
            backend: Backend::Auto,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid config: {}", e))
    }

    /// Load from the host document, or defaults if absent/invalid
    pub fn load() -> Self {
        let Some(json) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                // Logger is not up yet
                web_sys::console::warn_1(&e.into());
                Self::default()
            }
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"userId":"u-42"}"#).expect("valid config");
        assert_eq!(config.user_id, "u-42");
        assert_eq!(config.backend, Backend::Auto);
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_full_config() {
        let json = r#"{"userId":"u-1","logLevel":"debug","backend":"memory"}"#;
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.backend, Backend::Memory);
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_bad_level_falls_back_to_info() {
        let config = AppConfig::from_json(r#"{"logLevel":"chatty"}"#).unwrap();
        assert_eq!(config.user_id, "local");
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(AppConfig::from_json("{not json").is_err());
    }
}
