use crate::core::deck::{DeckOptions, DEFAULT_REVERSAL_PROBABILITY};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, TarotError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub deck: DeckConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Mount point for every route, e.g. "/api". Empty mounts at the root.
    pub api_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            api_prefix: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub reversal_probability: f64,
    pub seed: Option<u64>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            reversal_probability: DEFAULT_REVERSAL_PROBABILITY,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub format: LogFormat,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TarotError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TarotError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TarotError::ConfigError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("server.host", &self.server.host)?;
        validation::validate_positive_number("server.port", usize::from(self.server.port), 1)?;
        validation::validate_route_prefix("server.api_prefix", &self.server.api_prefix)?;
        validation::validate_range(
            "deck.reversal_probability",
            self.deck.reversal_probability,
            0.0,
            1.0,
        )?;
        Ok(())
    }

    pub fn deck_options(&self) -> DeckOptions {
        DeckOptions {
            reversal_probability: self.reversal_probability(),
            seed: self.seed(),
        }
    }
}

impl ConfigProvider for AppConfig {
    fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn api_prefix(&self) -> &str {
        &self.server.api_prefix
    }

    fn reversal_probability(&self) -> f64 {
        self.deck.reversal_probability
    }

    fn seed(&self) -> Option<u64> {
        self.deck.seed
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[server]
host = "0.0.0.0"
port = 9000
api_prefix = "/api"

[deck]
reversal_probability = 0.5
seed = 7

[logging]
verbose = true
format = "json"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.api_prefix(), "/api");
        assert_eq!(config.reversal_probability(), 0.5);
        assert_eq!(config.seed(), Some(7));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = AppConfig::from_toml_str("[server]\nport = 3000\n").unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.deck, DeckConfig::default());
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_deck_options_follow_config() {
        let config =
            AppConfig::from_toml_str("[deck]\nreversal_probability = 0.1\nseed = 99\n").unwrap();
        let options = config.deck_options();

        assert_eq!(options.reversal_probability, 0.1);
        assert_eq!(options.seed, Some(99));
        assert_eq!(AppConfig::default().deck_options().seed, None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TAROT_TEST_PORT", "8181");

        let config = AppConfig::from_toml_str("[server]\nport = ${TAROT_TEST_PORT}\n").unwrap();
        assert_eq!(config.server.port, 8181);

        std::env::remove_var("TAROT_TEST_PORT");
    }

    #[test]
    fn test_config_validation() {
        let config = AppConfig::from_toml_str("[deck]\nreversal_probability = 1.5\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(TarotError::InvalidConfigValueError { .. })
        ));

        let config = AppConfig::from_toml_str("[server]\nport = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = AppConfig::from_toml_str("[server]\napi_prefix = \"api\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml_str("[server\nport = 1").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nhost = \"localhost\"\nport = 8088\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.bind_address(), "localhost:8088");
    }
}
