use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use url::Url;

use crate::error::ClientError;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const SETTINGS_FILE: &str = "enhancer.toml";
pub const API_URL_ENV: &str = "PROMPT_ENHANCER_API_URL";
pub const APP_API_URL_ENV: &str = "APP__API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    api_base_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
        }
    }
}

impl ClientSettings {
    pub fn new(api_base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            api_base_url: normalize_base_url(api_base_url)?,
        })
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    api_base_url: Option<String>,
}

/// Resolves settings from `enhancer.toml` in the working directory and the
/// environment. `override_url` (usually a CLI flag) wins over both.
pub fn load_settings(override_url: Option<&str>) -> anyhow::Result<ClientSettings> {
    load_settings_from(Path::new(SETTINGS_FILE), override_url)
}

pub fn load_settings_from(
    path: &Path,
    override_url: Option<&str>,
) -> anyhow::Result<ClientSettings> {
    let mut base_url = DEFAULT_API_BASE_URL.to_string();

    if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
        let file_cfg: SettingsFile = toml::from_str(&raw)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
        if let Some(v) = file_cfg.api_base_url {
            base_url = v;
        }
    }

    if let Some(v) = read_non_empty_env_var(API_URL_ENV) {
        base_url = v;
    }
    if let Some(v) = read_non_empty_env_var(APP_API_URL_ENV) {
        base_url = v;
    }
    if let Some(v) = override_url {
        base_url = v.to_string();
    }

    ClientSettings::new(&base_url).with_context(|| format!("invalid backend base url '{base_url}'"))
}

fn read_non_empty_env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn normalize_base_url(raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: &str| ClientError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: reason.to_string(),
    };

    let parsed = Url::parse(trimmed).map_err(|err| invalid(&err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid("base url must start with http:// or https://"));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("base url must not carry a query or fragment"));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
