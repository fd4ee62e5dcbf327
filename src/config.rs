use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ASSESSMENT_USER_ID must be a UUID, got {0:?}")]
    InvalidUserId(String),
    #[error("ASSESSMENT_PRETTY must be true or false, got {0:?}")]
    InvalidPretty(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// When set, output is the persistable record for this user.
    pub user_id: Option<Uuid>,
    pub pretty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user_id: None,
            pretty: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let user_id = match lookup("ASSESSMENT_USER_ID").filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(
                Uuid::parse_str(raw.trim()).map_err(|_| ConfigError::InvalidUserId(raw.clone()))?,
            ),
            None => None,
        };

        let pretty = match lookup("ASSESSMENT_PRETTY") {
            Some(raw) => match raw.trim().to_lowercase().as_str() {
                "" | "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::InvalidPretty(raw)),
            },
            None => true,
        };

        Ok(Self { user_id, pretty })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_user_id_and_compact_output() {
        let id = "5f0c6c2e-8a47-4d0b-9a57-1f3a2d6a9b10";
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ASSESSMENT_USER_ID", id),
            ("ASSESSMENT_PRETTY", "false"),
        ]))
        .unwrap();

        assert_eq!(config.user_id, Some(Uuid::parse_str(id).unwrap()));
        assert!(!config.pretty);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            AppConfig::from_lookup(lookup_from(&[("ASSESSMENT_USER_ID", "abc")])),
            Err(ConfigError::InvalidUserId("abc".to_string()))
        );
        assert_eq!(
            AppConfig::from_lookup(lookup_from(&[("ASSESSMENT_PRETTY", "maybe")])),
            Err(ConfigError::InvalidPretty("maybe".to_string()))
        );
    }
}
