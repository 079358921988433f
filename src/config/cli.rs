use crate::config::toml_config::{TomlConfig, ViaCepSettings};
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "consulta-cep")]
#[command(about = "Look up a Brazilian postal code (CEP) on ViaCEP")]
pub struct CliConfig {
    /// CEP to look up, e.g. 01310-100
    pub cep: String,

    #[arg(long, help = "Address service base URL [default: https://viacep.com.br/ws]")]
    pub base_url: Option<String>,

    #[arg(long, help = "Request timeout in seconds [default: 10]")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "TOML file with a [viacep] table")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Print the agent response as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Command-line flags win over the config file, which wins over defaults.
    /// The merged settings are not validated here.
    pub fn settings(&self) -> Result<ViaCepSettings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::read(path)?.viacep,
            None => ViaCepSettings::default(),
        };

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(timeout_seconds) = self.timeout_seconds {
            settings.timeout_seconds = timeout_seconds;
        }

        Ok(settings)
    }
}
