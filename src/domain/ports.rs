use crate::domain::model::{AddressRecord, CepQuery, Kwargs, TextResponse, ToolContext};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br/ws";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout(&self) -> Duration;
}

/// Resolves a normalized CEP into an address.
///
/// Implementations report a missing CEP as `CepError::NotFound`, a non-200
/// answer as `CepError::HttpStatus` and an expired deadline as `CepError::Timeout`.
#[async_trait]
pub trait AddressService: Send + Sync {
    async fn fetch(&self, query: &CepQuery) -> Result<AddressRecord>;
}

/// Capability interface the agent host calls into.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    async fn execute(&self, context: &ToolContext, kwargs: &Kwargs) -> TextResponse;
}
