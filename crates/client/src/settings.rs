//! Client configuration loading.
//!
//! TOML settings with environment-variable overrides
//! (`INTERSIGHT__API__KEY_ID` and friends). Key material itself stays
//! on disk; settings only carry the path to it.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::constants::DEFAULT_API_HOST;

#[derive(Debug, Deserialize)]
pub struct Api {
    /// API endpoint including the versioned base path.
    #[serde(default = "default_host")]
    pub host: String,
    /// Public key identifier issued with the API key.
    pub key_id: String,
    /// Path to the PEM-encoded RSA private key.
    pub private_key_file: PathBuf,
}

fn default_host() -> String {
    DEFAULT_API_HOST.to_string()
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub api: Api,
}

impl Settings {
    /// Parse settings from a TOML string, with environment overrides
    /// applied on top.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the TOML is malformed or required
    /// fields are missing.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let environment = Environment::default().prefix("INTERSIGHT").separator("__");

        let toml = File::from_str(toml_str, FileFormat::Toml);
        let config = Config::builder()
            .add_source(toml)
            .add_source(environment)
            .build()?;

        config.try_deserialize()
    }

    /// Load settings from a TOML file on disk.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let toml_str = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Message(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml(&toml_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_valid_toml() {
        let toml_str = r#"
            [api]
            key_id = "596cc79e5d91b400010d15ad/5db71f977564612d30cc3860"
            private_key_file = "/etc/intersight/SecretKey.pem"
            "#;

        let settings = Settings::from_toml(toml_str).expect("should parse settings");
        assert_eq!(settings.api.host, DEFAULT_API_HOST);
        assert!(settings.api.key_id.starts_with("596cc79e"));
        assert_eq!(
            settings.api.private_key_file,
            PathBuf::from("/etc/intersight/SecretKey.pem")
        );
    }

    #[test]
    fn test_settings_host_override() {
        let toml_str = r#"
            [api]
            host = "https://staging.example.com/api/v1"
            key_id = "kid"
            private_key_file = "key.pem"
            "#;

        let settings = Settings::from_toml(toml_str).expect("should parse settings");
        assert_eq!(settings.api.host, "https://staging.example.com/api/v1");
    }

    #[test]
    fn test_settings_missing_key_id_fails() {
        let toml_str = r#"
            [api]
            private_key_file = "key.pem"
            "#;

        assert!(Settings::from_toml(toml_str).is_err());
    }

    #[test]
    fn test_settings_empty_toml_fails() {
        assert!(Settings::from_toml("").is_err());
    }
}
