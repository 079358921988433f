use crate::domain::model::{AddressRecord, CepQuery};
use crate::domain::ports::{AddressService, ConfigProvider};
use crate::utils::error::{CepError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// HTTP client for the ViaCEP `/{cep}/json/` endpoint. One attempt per lookup.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    client: Client,
    base_url: Url,
}

impl ViaCepClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| CepError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CepError::Transport)?;

        Ok(Self { client, base_url })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.base_url(), config.timeout())
    }

    pub fn lookup_url(&self, cep: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CepError::ConfigError {
                message: format!("{} cannot be used as a base URL", self.base_url),
            })?
            .pop_if_empty()
            .push(cep)
            .push("json")
            .push("");
        Ok(url)
    }
}

#[async_trait]
impl AddressService for ViaCepClient {
    async fn fetch(&self, query: &CepQuery) -> Result<AddressRecord> {
        let url = self.lookup_url(query.normalized())?;

        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(CepError::from_transport)?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status != StatusCode::OK {
            return Err(CepError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(CepError::from_transport)?;
        let payload: serde_json::Value = serde_json::from_str(&body)?;

        let serde_json::Value::Object(object) = payload else {
            return Err(CepError::UnexpectedPayload {
                message: "expected a JSON object".to_string(),
            });
        };

        if object.contains_key("erro") {
            return Err(CepError::NotFound {
                cep: query.normalized().to_string(),
            });
        }

        Ok(AddressRecord::from_json(&object))
    }
}
