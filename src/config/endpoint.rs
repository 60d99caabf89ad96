use serde::Deserialize;
use tracing::{info, warn};
use crate::error::ConfigError;

pub const ENDPOINT_PREFIX_ENV: &str = "PIVOTPICK_ENDPOINT_PREFIX";
pub const MICROFRONTEND_ENV: &str = "PIVOTPICK_MICROFRONTEND";

/// Endpoint prefix and deployment mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationConfig {
    #[serde(default)]
    endpoint_prefix: String,
    #[serde(default)]
    microfrontend: bool,
}

impl ApplicationConfig {
    pub fn new(endpoint_prefix: impl Into<String>) -> Self {
        Self {
            endpoint_prefix: endpoint_prefix.into(),
            microfrontend: false,
        }
    }

    pub fn set_endpoint_prefix(&mut self, endpoint_prefix: impl Into<String>) {
        self.endpoint_prefix = endpoint_prefix.into();
    }

    pub fn endpoint_prefix(&self) -> &str {
        &self.endpoint_prefix
    }

    pub fn set_microfrontend(&mut self, microfrontend: bool) {
        self.microfrontend = microfrontend;
    }

    pub fn is_microfrontend(&self) -> bool {
        self.microfrontend
    }

    /// Build the URL for an API path.
    ///
    /// With a microservice name the path is routed through the gateway:
    /// `<prefix>services/<microservice>/<api>`. Otherwise `<prefix><api>`.
    /// No normalisation is applied to either part.
    pub fn endpoint_for(&self, api: &str, microservice: Option<&str>) -> String {
        match microservice {
            Some(service) if !service.is_empty() => {
                format!("{}services/{}/{}", self.endpoint_prefix, service, api)
            }
            _ => format!("{}{}", self.endpoint_prefix, api),
        }
    }

    /// Override settings from `PIVOTPICK_ENDPOINT_PREFIX` and
    /// `PIVOTPICK_MICROFRONTEND` when they are set.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn apply_vars<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(ENDPOINT_PREFIX_ENV) {
            Some(prefix) => {
                info!("{ENDPOINT_PREFIX_ENV} set, using endpoint prefix '{prefix}'");
                self.endpoint_prefix = prefix;
            }
            None => info!(
                "{ENDPOINT_PREFIX_ENV} not set, keeping '{}'",
                self.endpoint_prefix
            ),
        }

        if let Some(raw) = lookup(MICROFRONTEND_ENV) {
            self.microfrontend = parse_flag(&raw).ok_or_else(|| {
                warn!("Invalid {MICROFRONTEND_ENV} value: {raw}");
                ConfigError::InvalidEnv {
                    key: MICROFRONTEND_ENV.to_string(),
                    value: raw.clone(),
                }
            })?;
        }

        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
