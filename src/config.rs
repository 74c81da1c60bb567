use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/healthbot.json";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/chat";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// URL nhận POST `{"message": ...}` và trả về `{"response": ...}`.
    pub endpoint: String,
    pub window_title: String,
    pub quick_replies: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            window_title: "HealthBot".to_string(),
            quick_replies: [
                "What are the symptoms of fever?",
                "How to treat a burn?",
                "Tips to prevent diabetes",
                "What causes headaches?",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Reads the HealthBot config. A missing or unreadable file, or a blank
/// endpoint, falls back to the built-in defaults.
pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    let config = match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str::<AppConfig>(&content).unwrap_or_else(|err| {
            log::warn!("Ignoring malformed HealthBot config {}: {err}", path.display());
            AppConfig::default()
        }),
        Err(err) => {
            log::info!(
                "No HealthBot config at {} ({err}); replies go to {DEFAULT_ENDPOINT}",
                path.display()
            );
            AppConfig::default()
        }
    };
    config.normalized()
}

impl AppConfig {
    fn normalized(mut self) -> Self {
        self.endpoint = self.endpoint.trim().to_string();
        if self.endpoint.is_empty() {
            log::warn!("Config has an empty endpoint; using {DEFAULT_ENDPOINT}");
            self.endpoint = DEFAULT_ENDPOINT.to_string();
        }
        self.quick_replies.retain(|reply| !reply.trim().is_empty());
        self
    }
}

pub fn save_config(path: &str, config: &AppConfig) -> std::io::Result<()> {
    let path = Path::new(path);
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut json = serde_json::to_string_pretty(config)?;
    json.push('\n');
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("healthbot-{}-{name}", std::process::id()))
            .join("healthbot.json")
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_config(&temp_path("missing"));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.quick_replies.len(), 4);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_path("partial");
        save_config(&path, &AppConfig::default()).unwrap();
        fs::write(&path, r#"{ "endpoint": "http://example.test/chat" }"#).unwrap();

        let config = load_config(&path);
        assert_eq!(config.endpoint, "http://example.test/chat");
        assert_eq!(config.window_title, "HealthBot");
    }

    #[test]
    fn invalid_json_yields_defaults() {
        let path = temp_path("invalid");
        save_config(&path, &AppConfig::default()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(load_config(&path).endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn saved_config_round_trips() {
        let path = temp_path("saved");
        let mut config = AppConfig::default();
        config.quick_replies = vec!["hello".to_string()];
        save_config(&path, &config).unwrap();

        assert_eq!(load_config(&path).quick_replies, ["hello"]);
    }

    #[test]
    fn blank_endpoint_and_quick_replies_are_dropped() {
        let path = temp_path("blank");
        save_config(&path, &AppConfig::default()).unwrap();
        fs::write(
            &path,
            r#"{ "endpoint": "  ", "quick_replies": ["fever?", " ", ""] }"#,
        )
        .unwrap();

        let config = load_config(&path);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.quick_replies, ["fever?"]);
    }
}
