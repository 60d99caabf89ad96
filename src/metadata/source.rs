use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use crate::config::ApplicationConfig;
use crate::field::MetadataResponse;
use super::error::MetadataError;

/// Path of the pivot metadata resource, relative to the endpoint prefix
pub const METADATA_PATH: &str = "/api/v1/analytics/pivot/metadata";

/// Backend that provides field metadata for a template version
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn fetch(&self, template_id: &str, version_id: &str) -> Result<MetadataResponse, MetadataError>;
}

/// Fetches metadata over HTTP
#[derive(Debug, Clone)]
pub struct HttpMetadataSource {
    client: reqwest::Client,
    resource_url: String,
    bearer_token: Option<String>,
}

impl HttpMetadataSource {
    pub fn new(client: reqwest::Client, config: &ApplicationConfig) -> Self {
        Self {
            client,
            resource_url: config.endpoint_for(METADATA_PATH, None),
            bearer_token: None,
        }
    }

    /// Send `Authorization: Bearer <token>` with each request
    pub fn with_bearer_token(mut self, token: Option<String>) -> Self {
        self.bearer_token = token;
        self
    }

    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }
}

#[async_trait]
impl MetadataSource for HttpMetadataSource {
    async fn fetch(&self, template_id: &str, version_id: &str) -> Result<MetadataResponse, MetadataError> {
        let url = self.resource_url.clone();
        debug!("GET {url} templateId={template_id} templateVersionId={version_id}");

        let mut request = self
            .client
            .get(&url)
            .query(&[("templateId", template_id), ("templateVersionId", version_id)]);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| MetadataError::Request {
            url: url.clone(),
            source: Arc::new(e),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| MetadataError::Request {
            url: url.clone(),
            source: Arc::new(e),
        })?;

        serde_json::from_slice(&body).map_err(|e| MetadataError::Decode {
            url,
            message: e.to_string(),
        })
    }
}
