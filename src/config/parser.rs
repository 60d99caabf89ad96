//! YAML → ApplicationConfig

use std::path::Path;
use crate::error::ConfigError;
use super::endpoint::ApplicationConfig;

/// Parse configuration from a YAML file
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ApplicationConfig, ConfigError> {
    let path_str = path.as_ref().display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
        path: path_str,
        source: e,
    })?;
    parse_str(&contents)
}

/// Parse configuration from a YAML string
pub fn parse_str(yaml: &str) -> Result<ApplicationConfig, ConfigError> {
    serde_yaml::from_str(yaml).map_err(ConfigError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let config = parse_str("endpointPrefix: https://gw.example/\nmicrofrontend: true\n").unwrap();
        assert_eq!(config.endpoint_prefix(), "https://gw.example/");
        assert!(config.is_microfrontend());
    }

    #[test]
    fn test_parse_defaults() {
        let config = parse_str("{}").unwrap();
        assert_eq!(config, ApplicationConfig::default());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        assert!(parse_str("endpointPrefix: [unclosed").is_err());
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_file("does/not/exist.yaml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
