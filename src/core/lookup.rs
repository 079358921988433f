use crate::adapters::ViaCepClient;
use crate::domain::model::{CepQuery, Kwargs, LookupResult, ServiceFailure, TextResponse, ToolContext};
use crate::domain::ports::{AddressService, ConfigProvider, Tool};
use crate::utils::error::{CepError, Result};
use async_trait::async_trait;

pub const TOOL_NAME: &str = "consulta_cep";

/// Looks a CEP up and turns every outcome into a message for the conversation.
pub struct CepLookupTool<S: AddressService> {
    service: S,
}

impl CepLookupTool<ViaCepClient> {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self::new(ViaCepClient::from_config(config)?))
    }
}

impl<S: AddressService> CepLookupTool<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Never fails: service errors are folded into `LookupResult` variants.
    pub async fn resolve(&self, raw_cep: &str) -> LookupResult {
        let query = match CepQuery::parse(raw_cep) {
            Ok(query) => query,
            Err(CepError::InvalidCep { raw }) => return LookupResult::InvalidInput(raw),
            Err(_) => return LookupResult::InvalidInput(raw_cep.to_string()),
        };

        tracing::info!("Looking up CEP: {}", query.normalized());

        match self.service.fetch(&query).await {
            Ok(record) => LookupResult::Found(record),
            Err(CepError::NotFound { cep }) => LookupResult::NotFound(cep),
            Err(CepError::HttpStatus { status }) => {
                LookupResult::ServiceError(ServiceFailure::Status(status))
            }
            Err(CepError::Timeout) => {
                tracing::error!("Timeout while querying the address service");
                LookupResult::ServiceError(ServiceFailure::Timeout)
            }
            Err(e) => {
                tracing::error!("CEP lookup failed: {}", e);
                LookupResult::ServiceError(ServiceFailure::Unavailable)
            }
        }
    }

    pub async fn lookup(&self, raw_cep: &str) -> TextResponse {
        TextResponse::from(&self.resolve(raw_cep).await)
    }
}

#[async_trait]
impl<S: AddressService> Tool for CepLookupTool<S> {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    async fn execute(&self, context: &ToolContext, kwargs: &Kwargs) -> TextResponse {
        tracing::debug!(
            "Executing {} (project: {:?}, contact: {:?})",
            TOOL_NAME,
            context.project,
            context.contact_urn
        );

        // A missing or non-string `cep` is looked up as "" and reported as invalid.
        let cep = kwargs.get("cep").and_then(|v| v.as_str()).unwrap_or("");
        self.lookup(cep).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::AddressRecord;
    use serde_json::json;
    use std::sync::Mutex;

    /// Scripted `AddressService` that records the CEPs it was asked for.
    struct FakeService {
        outcome: fn(&CepQuery) -> Result<AddressRecord>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeService {
        fn new(outcome: fn(&CepQuery) -> Result<AddressRecord>) -> Self {
            Self {
                outcome,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl<'a> AddressService for &'a FakeService {
        async fn fetch(&self, query: &CepQuery) -> Result<AddressRecord> {
            self.calls
                .lock()
                .unwrap()
                .push(query.normalized().to_string());
            (self.outcome)(query)
        }
    }

    fn paulista(_: &CepQuery) -> Result<AddressRecord> {
        Ok(AddressRecord {
            cep: Some("01310-100".to_string()),
            logradouro: Some("Avenida Paulista".to_string()),
            bairro: Some("Bela Vista".to_string()),
            localidade: Some("São Paulo".to_string()),
            uf: Some("SP".to_string()),
        })
    }

    #[tokio::test]
    async fn test_invalid_input_skips_service() {
        let service = FakeService::new(paulista);
        let tool = CepLookupTool::new(&service);

        for raw in ["", "123", "0131010", "013101000", "abc-def"] {
            let result = tool.resolve(raw).await;
            assert_eq!(result, LookupResult::InvalidInput(raw.to_string()));
        }
        assert!(service.calls().is_empty());

        let response = tool.lookup("12").await;
        assert!(response.text.contains("01310100"));
        assert!(response.should_wait_agent_response);
    }

    #[tokio::test]
    async fn test_dispatches_normalized_cep() {
        let service = FakeService::new(paulista);
        let tool = CepLookupTool::new(&service);

        let result = tool.resolve(" 01310-100 ").await;
        assert!(matches!(result, LookupResult::Found(_)));
        assert_eq!(service.calls(), vec!["01310100".to_string()]);
    }

    #[tokio::test]
    async fn test_maps_service_errors() {
        let not_found = FakeService::new(|q| {
            Err(CepError::NotFound {
                cep: q.normalized().to_string(),
            })
        });
        assert_eq!(
            CepLookupTool::new(&not_found).resolve("99999-999").await,
            LookupResult::NotFound("99999999".to_string())
        );

        let status = FakeService::new(|_| Err(CepError::HttpStatus { status: 502 }));
        assert_eq!(
            CepLookupTool::new(&status).resolve("01310100").await,
            LookupResult::ServiceError(ServiceFailure::Status(502))
        );

        let timeout = FakeService::new(|_| Err(CepError::Timeout));
        assert_eq!(
            CepLookupTool::new(&timeout).resolve("01310100").await,
            LookupResult::ServiceError(ServiceFailure::Timeout)
        );

        let garbage = FakeService::new(|_| {
            Err(CepError::UnexpectedPayload {
                message: "expected a JSON object".to_string(),
            })
        });
        let response = CepLookupTool::new(&garbage).lookup("01310100").await;
        assert_eq!(
            response.text,
            "❌ Erro ao consultar CEP. Tente novamente mais tarde."
        );
        assert!(!response.text.contains("JSON"));
    }

    #[tokio::test]
    async fn test_repeated_lookups_are_identical() {
        let service = FakeService::new(paulista);
        let tool = CepLookupTool::new(&service);

        let first = tool.lookup("01310100").await;
        let second = tool.lookup("01310100").await;
        assert_eq!(first, second);
        assert_eq!(service.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_execute_reads_cep_kwarg() {
        let service = FakeService::new(paulista);
        let tool = CepLookupTool::new(&service);
        let context = ToolContext::default();

        let mut kwargs = Kwargs::new();
        kwargs.insert("cep".to_string(), json!("01310-100"));
        let response = tool.execute(&context, &kwargs).await;
        assert!(response.text.starts_with("✅ **CEP Encontrado!**"));
        assert!(response.should_wait_agent_response);

        let response = tool.execute(&context, &Kwargs::new()).await;
        assert!(response.text.starts_with("❌ CEP inválido!"));

        kwargs.insert("cep".to_string(), json!(1310100));
        let response = tool.execute(&context, &kwargs).await;
        assert!(response.text.starts_with("❌ CEP inválido!"));

        assert_eq!(service.calls(), vec!["01310100".to_string()]);
        assert_eq!(tool.name(), "consulta_cep");
    }
}
