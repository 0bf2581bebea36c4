//! Configuration loading from disk.

use std::path::Path;
use std::fs;
use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load from `path` when given, otherwise validate and return the defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let config = AppConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_document() {
        let config = parse_config(
            r#"
            [listener]
            bind_address = "127.0.0.1:3000"

            [cors]
            allowed_origins = ["http://localhost:5173"]
            "#,
        )
        .unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:3000");
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:5173"]);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = parse_config("[listener\nbind_address = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_validation_errors_are_joined() {
        let err = parse_config(
            r#"
            [timeouts]
            request_secs = 0

            [security]
            max_body_size = 0
            "#,
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Validation failed: "));
        assert!(msg.contains("timeouts.request_secs"));
        assert!(msg.contains(", security.max_body_size"));
    }

    #[test]
    fn test_load_from_file_and_missing_file() {
        let path = std::env::temp_dir().join(format!(
            "temperature-api-config-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[conversion]\nmax_temperature = 1234.5\n").unwrap();

        let config = load_or_default(Some(&path)).unwrap();
        assert_eq!(config.conversion.max_temperature, 1234.5);
        fs::remove_file(&path).unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_defaults_when_no_path() {
        let config = load_or_default(None).unwrap();
        assert_eq!(config.timeouts.request_secs, 30);
    }
}
