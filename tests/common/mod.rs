//! Shared test utilities for integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pivotpick::{
    DataType, FieldExtras, MetadataError, MetadataResponse, MetadataSource, PivotFieldDto, User,
};

/// Load a metadata response from the tests/test_data directory
pub fn load_fixture(name: &str) -> MetadataResponse {
    let path = format!("tests/test_data/{}", name);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test data {}: {}", name, e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("Failed to parse test data {}: {}", name, e))
}

/// Build a field with the given aggregation modes and dimension hint
pub fn field(id: &str, aggregation_modes: &[&str], is_dimension: bool) -> PivotFieldDto {
    PivotFieldDto {
        id: id.to_string(),
        label: id.to_string(),
        data_type: if aggregation_modes.is_empty() { DataType::Text } else { DataType::Numeric },
        is_dimension,
        is_sortable: true,
        aggregation_modes: aggregation_modes.iter().map(|m| m.to_string()).collect(),
        display_group: "Fields".to_string(),
        extras: FieldExtras::default(),
    }
}

// =============================================================================
// Stub metadata source
// =============================================================================

/// Metadata source that serves a fixed response and counts calls
pub struct StubSource {
    response: MetadataResponse,
    calls: AtomicUsize,
    failures_left: AtomicUsize,
    delay: Option<Duration>,
}

impl StubSource {
    pub fn new(response: MetadataResponse) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            failures_left: AtomicUsize::new(0),
            delay: None,
        }
    }

    /// Fail the first `count` fetches with a status error
    pub fn failing(self, count: usize) -> Self {
        self.failures_left.store(count, Ordering::SeqCst);
        self
    }

    /// Wait before answering, so concurrent callers overlap
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataSource for StubSource {
    async fn fetch(&self, _template_id: &str, _version_id: &str) -> Result<MetadataResponse, MetadataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let failed = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failed {
            return Err(MetadataError::Status {
                url: "stub://metadata".to_string(),
                status: 503,
            });
        }

        Ok(self.response.clone())
    }
}

pub fn stub(name: &str) -> Arc<StubSource> {
    Arc::new(StubSource::new(load_fixture(name)))
}

// =============================================================================
// User samples
// =============================================================================

pub fn sample_with_required_data() -> User {
    User { id: 24814, username: "nuGud".to_string() }
}

pub fn sample_with_partial_data() -> User {
    User { id: 966, username: "a".to_string() }
}

pub fn sample_with_full_data() -> User {
    User { id: 5440, username: "h".to_string() }
}
