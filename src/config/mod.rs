use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::constants::{CONFIG_FILE, TEMPO_API_URL, TOKEN_ENV_VAR, TOKEN_SETUP_URL};
use crate::error::{TempoError, TempoResult};

/// One slice of a preset: which issue gets what share of the day.
///
/// Percentages are not validated to sum to 100 across a preset; a preset
/// over 100% over-logs proportionally.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PresetEntry {
    pub issue_key: String,
    pub percentage: f64,
    pub description: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub tempo_token: Option<String>,
    pub account_id: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub issue_ids: HashMap<String, i64>,
    #[serde(default)]
    pub presets: HashMap<String, Vec<PresetEntry>>,
    #[serde(default)]
    pub jira_base_url: Option<String>,
    #[serde(default)]
    pub jira_email: Option<String>,
    #[serde(default)]
    pub jira_token: Option<String>,
}

impl Config {
    /// The resolved Tempo token. `load_config` guarantees this is present,
    /// so commands can call it without re-checking.
    pub fn token(&self) -> &str {
        self.tempo_token.as_deref().unwrap_or_default()
    }

    pub fn tempo_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(TEMPO_API_URL)
    }

    /// Jira credentials as a triple, present only when all three are set.
    pub fn jira_credentials(&self) -> Option<(&str, &str, &str)> {
        match (
            self.jira_base_url.as_deref(),
            self.jira_email.as_deref(),
            self.jira_token.as_deref(),
        ) {
            (Some(url), Some(email), Some(token)) => Some((url, email, token)),
            _ => None,
        }
    }

    /// Reverse issueIds lookup for rendering worklogs fetched from Tempo.
    pub fn issue_key_for_id(&self, issue_id: i64) -> Option<&str> {
        self.issue_ids
            .iter()
            .find(|(_, id)| **id == issue_id)
            .map(|(key, _)| key.as_str())
    }
}

pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_FILE)
}

/// Load `~/.tempo-config.json` and apply the TEMPO_TOKEN environment
/// override. A missing or empty token after the override is a configuration
/// error; every command surfaces it as text instead of crashing.
pub fn load_config() -> TempoResult<Config> {
    let path = config_path();
    if !path.exists() {
        return Err(TempoError::ConfigError(format!(
            "Config file not found: {}. Please create it. See README for instructions.",
            path.display()
        )));
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| TempoError::ConfigError(format!("Failed to read {}: {}", path.display(), e)))?;
    let mut config: Config = serde_json::from_str(&content)
        .map_err(|e| TempoError::ConfigError(format!("Malformed {}: {}", path.display(), e)))?;

    if let Ok(env_token) = env::var(TOKEN_ENV_VAR) {
        if !env_token.is_empty() {
            config.tempo_token = Some(env_token);
        }
    }

    if config.tempo_token.as_deref().map_or(true, str::is_empty) {
        return Err(TempoError::ConfigError(format!(
            "Missing 'tempoToken' in config. Get a token at: {}",
            TOKEN_SETUP_URL
        )));
    }

    Ok(config)
}

/// Redact a secret to its last 4 characters, or fully when too short to
/// keep anything.
pub fn redact_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() > 4 {
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("****{}", tail)
    } else {
        "****".to_string()
    }
}
