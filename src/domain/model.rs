use crate::utils::error::{CepError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const CEP_LENGTH: usize = 8;
pub const MISSING_FIELD: &str = "N/A";

/// Keyword arguments handed to a tool by the agent host.
pub type Kwargs = HashMap<String, serde_json::Value>;

/// A CEP that passed normalization. Only `CepQuery::parse` builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CepQuery {
    normalized: String,
}

impl CepQuery {
    /// Removes `-` and `.`, then trims surrounding whitespace, and requires
    /// exactly eight characters. Digits are not checked.
    pub fn parse(raw: &str) -> Result<Self> {
        let stripped: String = raw.chars().filter(|c| *c != '-' && *c != '.').collect();
        let normalized = stripped.trim();

        if normalized.is_empty() || normalized.chars().count() != CEP_LENGTH {
            return Err(CepError::InvalidCep {
                raw: raw.to_string(),
            });
        }

        Ok(Self {
            normalized: normalized.to_string(),
        })
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub cep: Option<String>,
    pub logradouro: Option<String>,
    pub bairro: Option<String>,
    pub localidade: Option<String>,
    pub uf: Option<String>,
}

impl AddressRecord {
    /// Builds a record from a ViaCEP object. Absent and `null` fields stay `None`;
    /// numbers and booleans keep their JSON text.
    pub fn from_json(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        let field = |name: &str| -> Option<String> {
            match object.get(name)? {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Null => None,
                other => Some(other.to_string()),
            }
        };

        Self {
            cep: field("cep"),
            logradouro: field("logradouro"),
            bairro: field("bairro"),
            localidade: field("localidade"),
            uf: field("uf"),
        }
    }

    pub fn render(&self) -> String {
        let show = |value: &Option<String>| value.as_deref().unwrap_or(MISSING_FIELD).to_string();

        format!(
            "✅ **CEP Encontrado!**\n\
             \n\
             📍 CEP: {}\n\
             📮 Logradouro: {}\n\
             🏘️ Bairro: {}\n\
             🏙️ Cidade: {}\n\
             🗺️ Estado: {}\n",
            show(&self.cep),
            show(&self.logradouro),
            show(&self.bairro),
            show(&self.localidade),
            show(&self.uf),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceFailure {
    Status(u16),
    Timeout,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Found(AddressRecord),
    NotFound(String),
    ServiceError(ServiceFailure),
    InvalidInput(String),
}

impl LookupResult {
    pub fn render(&self) -> String {
        match self {
            LookupResult::Found(record) => record.render(),
            LookupResult::NotFound(cep) => format!("⚠️ CEP {} não encontrado.", cep),
            LookupResult::ServiceError(ServiceFailure::Status(status)) => {
                format!("⚠️ Erro ao consultar CEP. Status: {}", status)
            }
            LookupResult::ServiceError(ServiceFailure::Timeout) => {
                "⚠️ Tempo limite excedido. Tente novamente.".to_string()
            }
            LookupResult::ServiceError(ServiceFailure::Unavailable) => {
                "❌ Erro ao consultar CEP. Tente novamente mais tarde.".to_string()
            }
            LookupResult::InvalidInput(_) => {
                "❌ CEP inválido! Por favor, informe 8 dígitos. Exemplo: 01310100".to_string()
            }
        }
    }
}

/// What the agent host receives back from a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextResponse {
    pub text: String,
    pub should_wait_agent_response: bool,
}

impl TextResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            should_wait_agent_response: true,
        }
    }
}

impl From<&LookupResult> for TextResponse {
    fn from(result: &LookupResult) -> Self {
        TextResponse::new(result.render())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolContext {
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub contact_urn: Option<String>,
    #[serde(default)]
    pub parameters: HashMap<String, serde_json::Value>,
}
