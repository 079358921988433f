use thiserror::Error;

#[derive(Error, Debug)]
pub enum CepError {
    #[error("Invalid CEP: {raw:?}")]
    InvalidCep { raw: String },

    #[error("CEP {cep} not found")]
    NotFound { cep: String },

    #[error("Address service returned HTTP status {status}")]
    HttpStatus { status: u16 },

    #[error("Address service request timed out")]
    Timeout,

    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unexpected payload: {message}")]
    UnexpectedPayload { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CepError {
    /// Classifies a reqwest failure, keeping timeouts apart from other transport errors.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CepError::Timeout
        } else {
            CepError::Transport(err)
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CepError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting `{}`: {}", field, reason)
            }
            CepError::ConfigError { message } => format!("Configuration problem: {}", message),
            CepError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            CepError::IoError(e) => format!("Could not read a file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CepError::InvalidConfigValueError { field, .. } if field == "base_url" => {
                "Use an absolute http(s) URL such as https://viacep.com.br/ws"
            }
            CepError::InvalidConfigValueError { field, .. } if field == "timeout_seconds" => {
                "Pick a timeout between 1 and 300 seconds"
            }
            CepError::TomlError(_) => "Check the [viacep] table in the configuration file",
            CepError::IoError(_) => "Check that the configuration path exists and is readable",
            CepError::Timeout | CepError::Transport(_) => "Check network connectivity and retry",
            _ => "Review the configuration and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, CepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_guidance() {
        let err = CepError::InvalidConfigValueError {
            field: "timeout_seconds".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 300".to_string(),
        };
        assert!(err.user_friendly_message().contains("timeout_seconds"));
        assert!(err.recovery_suggestion().contains("between 1 and 300"));

        let err = CepError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: "ftp://viacep.com.br".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert!(err.recovery_suggestion().contains("https://viacep.com.br/ws"));
        assert_eq!(
            CepError::Timeout.recovery_suggestion(),
            "Check network connectivity and retry"
        );
    }

    #[test]
    fn test_display_messages() {
        let err = CepError::NotFound {
            cep: "99999999".to_string(),
        };
        assert_eq!(err.to_string(), "CEP 99999999 not found");
        assert_eq!(
            CepError::HttpStatus { status: 503 }.to_string(),
            "Address service returned HTTP status 503"
        );
    }
}
