use crate::linear::client::DEFAULT_API_URL;
use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Configuration keys enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    ApiUrl,
    FixitTeamId,
    ProductTeamId,
}

impl ConfigKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::ApiUrl => "api_url",
            ConfigKey::FixitTeamId => "fixit_team_id",
            ConfigKey::ProductTeamId => "product_team_id",
        }
    }

    /// Get all config keys
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::ApiUrl,
            ConfigKey::FixitTeamId,
            ConfigKey::ProductTeamId,
        ]
    }
}

/// Filename for the project-specific configuration within the config directory.
pub const PROJECT_CONFIG_FILENAME: &str = "config.json";
/// Directory name for project-specific configuration.
pub const PROJECT_CONFIG_DIR: &str = ".linear-priority";

/// Team whose `fixit-score-<n>` labels drive the fixit pipeline.
pub const DEFAULT_FIXIT_TEAM_ID: &str = "56333a07-ac14-4ba8-b88d-a24b6fae348e";
/// Team whose feedback issues are RICE-prioritized.
pub const DEFAULT_PRODUCT_TEAM_ID: &str = "402d0370-296a-4cfe-86d8-c1cf60dc420d";

/// Parses a JSON configuration file content into a map of configuration values.
///
/// Expects `content` to be a JSON object with configuration keys
/// (e.g., {"fixit_team_id": "...", "api_url": "..."}).
///
/// - Returns `Ok(HashMap<ConfigKey, Value>)` containing all recognized keys; unknown keys are skipped.
/// - Returns an empty HashMap if the input `content` is empty or contains only whitespace.
/// - Returns an `Err` if the JSON parsing fails or the top-level value is not an object.
pub fn parse_config(content: &[u8]) -> Result<HashMap<ConfigKey, Value>> {
    if content.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(HashMap::new());
    }

    let value: Value = serde_json::from_slice(content).context("Failed to parse config JSON")?;

    if let Value::Object(map) = &value {
        let config_map = ConfigKey::all()
            .iter()
            .filter_map(|key| map.get(key.as_str()).map(|val| (*key, val.clone())))
            .collect();
        return Ok(config_map);
    }

    Err(anyhow::anyhow!("Config must be a JSON object"))
}

/// Resolved settings for a run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_url: String,
    pub fixit_team_id: String,
    pub product_team_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_url: DEFAULT_API_URL.to_string(),
            fixit_team_id: DEFAULT_FIXIT_TEAM_ID.to_string(),
            product_team_id: DEFAULT_PRODUCT_TEAM_ID.to_string(),
        }
    }
}

impl Settings {
    /// Overlays parsed config values on the defaults.
    ///
    /// Every recognized key must hold a non-empty string.
    pub fn from_config(config: &HashMap<ConfigKey, Value>) -> Result<Self> {
        let mut settings = Settings::default();
        for (key, value) in config {
            let text = value
                .as_str()
                .filter(|s| !s.trim().is_empty())
                .with_context(|| format!("Config key '{}' must be a non-empty string", key.as_str()))?
                .to_string();
            match key {
                ConfigKey::ApiUrl => settings.api_url = text,
                ConfigKey::FixitTeamId => settings.fixit_team_id = text,
                ConfigKey::ProductTeamId => settings.product_team_id = text,
            }
        }
        Ok(settings)
    }

    /// Loads `<dir>/.linear-priority/config.json` if present, else the defaults.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(PROJECT_CONFIG_DIR).join(PROJECT_CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Settings::default());
        }
        let content = std::fs::read(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = parse_config(&content)?;
        Settings::from_config(&config)
    }
}
