//! Application Configuration
//!
//! Every field has a default, so an empty object is a valid config.

use serde::Deserialize;

use crate::domain::ConfigError;

/// Storage key of the todo snapshot
pub const DEFAULT_STORAGE_KEY: &str = "taskdeck-todos-v2";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage_key: String,
    /// Hosted backend; without it the board runs against an in-memory source
    pub remote: Option<RemoteConfig>,
    /// Signed-in actor stamped on inserts
    pub actor_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteConfig {
    pub url: String,
    pub api_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            remote: None,
            actor_id: None,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Build from optional values, e.g. compile-time environment variables.
    /// Blank values count as unset.
    pub fn from_parts(
        storage_key: Option<&str>,
        remote_url: Option<&str>,
        api_key: Option<&str>,
        actor_id: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let present = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string);
        let remote = match (present(remote_url), present(api_key)) {
            (Some(url), Some(api_key)) => Some(RemoteConfig { url, api_key }),
            _ => None,
        };
        let config = Self {
            storage_key: present(storage_key).unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
            remote,
            actor_id: present(actor_id),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(remote) = &self.remote {
            if !(remote.url.starts_with("http://") || remote.url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl(remote.url.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_remote_section() {
        let config = AppConfig::from_json(
            r#"{ "remote": { "url": "https://db.example.com", "api_key": "anon" }, "actor_id": "u1" }"#,
        )
        .unwrap();
        assert_eq!(config.remote.unwrap().api_key, "anon");
        assert_eq!(config.actor_id.as_deref(), Some("u1"));
    }

    #[test]
    fn test_rejects_bad_url() {
        let err = AppConfig::from_json(r#"{ "remote": { "url": "db.example.com", "api_key": "k" } }"#);
        assert!(matches!(err, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_from_parts_ignores_blank_values() {
        let config = AppConfig::from_parts(Some(" "), Some("https://db.example.com"), None, Some("")).unwrap();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert!(config.remote.is_none());
        assert!(config.actor_id.is_none());
    }
}
