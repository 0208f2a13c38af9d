use thiserror::Error;

#[derive(Error, Debug)]
pub enum TarotError {
    #[error("Card not found: {id}")]
    NotFound { id: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl TarotError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status the API layer reports for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::InvalidArgument { .. } => 400,
            _ => 500,
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NotFound { id } => format!("No tarot card has the id '{}'", id),
            Self::InvalidArgument { message } => format!("Bad request: {}", message),
            Self::ConfigError { field, message } => {
                format!("Configuration problem at '{}': {}", field, message)
            }
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}': {}", value, field, reason),
            Self::IoError(e) => format!("Could not read a required file: {}", e),
            _ => "Internal server error".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "List the catalog with GET /cards to find valid ids",
            Self::InvalidArgument { .. } => "Check the request parameters and try again",
            Self::ConfigError { .. } => "Make sure the config file is valid TOML",
            Self::InvalidConfigValueError { .. } => {
                "Fix the highlighted value in the config file or command line"
            }
            Self::IoError(_) => "Check that the file exists and is readable",
            _ => "Check the server logs for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, TarotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(TarotError::not_found("x").status_code(), 404);
        assert_eq!(TarotError::invalid_argument("bad").status_code(), 400);
        assert_eq!(TarotError::internal("boom").status_code(), 500);
        let config = TarotError::ConfigError {
            field: "server.port".to_string(),
            message: "missing".to_string(),
        };
        assert_eq!(config.status_code(), 500);
        assert!(config.is_config_error());
    }

    #[test]
    fn test_internal_message_is_not_leaked() {
        let err = TarotError::internal("lock poisoned");
        assert_eq!(err.user_friendly_message(), "Internal server error");
        assert!(err.to_string().contains("lock poisoned"));
    }
}
