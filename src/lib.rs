pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use adapters::ViaCepClient;
pub use config::toml_config::TomlConfig;
pub use crate::core::{lookup::CepLookupTool, LookupResult, TextResponse, Tool, ToolContext};
pub use utils::error::{CepError, Result};
