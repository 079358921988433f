use crate::config::toml_config::ViaCepSettings;
use crate::core::ConfigProvider;
use crate::utils::error::{CepError, Result};
use crate::utils::validation::Validate;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub settings: ViaCepSettings,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Reads `VIACEP_BASE_URL` and `VIACEP_TIMEOUT_SECONDS` through `var`.
    pub fn from_vars<F: Fn(&str) -> Option<String>>(var: F) -> Result<Self> {
        let mut settings = ViaCepSettings::default();

        if let Some(base_url) = var("VIACEP_BASE_URL") {
            settings.base_url = base_url;
        }
        if let Some(raw) = var("VIACEP_TIMEOUT_SECONDS") {
            settings.timeout_seconds =
                raw.trim()
                    .parse()
                    .map_err(|_| CepError::InvalidConfigValueError {
                        field: "timeout_seconds".to_string(),
                        value: raw.clone(),
                        reason: "VIACEP_TIMEOUT_SECONDS must be a whole number of seconds"
                            .to_string(),
                    })?;
        }

        Ok(Self { settings })
    }
}

impl ConfigProvider for LambdaConfig {
    fn base_url(&self) -> &str {
        self.settings.base_url()
    }

    fn timeout(&self) -> Duration {
        self.settings.timeout()
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        self.settings.validate()?;
        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
