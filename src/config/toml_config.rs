use crate::core::ConfigProvider;
use crate::domain::ports::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::error::Result;
use crate::utils::validation::{validate_timeout, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub viacep: ViaCepSettings,
}

/// Where and how long to ask for addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViaCepSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for ViaCepSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config = Self::parse(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file without validating it, for callers that still layer overrides on top.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.viacep.validate()
    }
}

impl Validate for ViaCepSettings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_timeout("timeout_seconds", self.timeout_seconds)?;
        Ok(())
    }
}

impl ConfigProvider for ViaCepSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        self.viacep.base_url()
    }

    fn timeout(&self) -> Duration {
        self.viacep.timeout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CepError;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_str(
            r#"
[viacep]
base_url = "http://127.0.0.1:9000/ws"
timeout_seconds = 3
"#,
        )
        .unwrap();

        assert_eq!(config.base_url(), "http://127.0.0.1:9000/ws");
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_missing_values_use_defaults() {
        let config = TomlConfig::from_str("").unwrap();
        assert_eq!(config.viacep, ViaCepSettings::default());
        assert_eq!(config.base_url(), "https://viacep.com.br/ws");
        assert_eq!(config.timeout(), Duration::from_secs(10));

        let config = TomlConfig::from_str("[viacep]\ntimeout_seconds = 20\n").unwrap();
        assert_eq!(config.viacep.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.viacep.timeout_seconds, 20);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = TomlConfig::from_str("[viacep]\ntimeout_seconds = 0\n").unwrap_err();
        assert!(matches!(err, CepError::InvalidConfigValueError { ref field, .. } if field == "timeout_seconds"));

        let err = TomlConfig::from_str("[viacep]\nbase_url = \"ftp://example.com\"\n").unwrap_err();
        assert!(matches!(err, CepError::InvalidConfigValueError { ref field, .. } if field == "base_url"));

        let err = TomlConfig::from_str("[viacep]\ntimeout_seconds = \"ten\"\n").unwrap_err();
        assert!(matches!(err, CepError::TomlError(_)));
    }

    #[test]
    fn test_parse_defers_validation() {
        let config = TomlConfig::parse("[viacep]\ntimeout_seconds = 0\n").unwrap();
        assert_eq!(config.viacep.timeout_seconds, 0);
        assert!(config.validate().is_err());

        assert!(matches!(
            TomlConfig::parse("[viacep]\ntimeout_seconds = \"ten\"\n"),
            Err(CepError::TomlError(_))
        ));
    }
}
