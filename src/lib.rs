//! pivotpick - Field picking and query-state derivation for pivot analytics
//!
//! This library provides:
//! - Field metadata types (PivotFieldDto, FieldGroup, DataType)
//! - Metadata fetching with a per-template-version cache
//! - Query state that derives a PivotQueryRequest from selected fields
//! - A field picker with text filtering
//! - Endpoint configuration and token/URL storage
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `field/` - field metadata as served by the backend
//! - `query/` - query request types (PivotQueryRequest, Measure)
//! - `account` - account and user models
//!
//! **Verb modules** (behaviour):
//! - `config/` - YAML/env → ApplicationConfig, endpoint resolution
//! - `metadata/` - template version → grouped fields (fetched once)
//! - `state/` - selected fields → PivotQueryRequest
//! - `picker/` - grouped fields + search term → visible fields, selections
//! - `storage/` - tokens and previous URL over session/persistent stores
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use pivotpick::{AnalyticsState, ApplicationConfig, FieldPicker, HttpMetadataSource, MetadataService};
//!
//! let config = ApplicationConfig::new("http://localhost:8080");
//! let source = HttpMetadataSource::new(reqwest::Client::new(), &config);
//! let service = MetadataService::new(Arc::new(source));
//! let mut state = AnalyticsState::new();
//!
//! let picker = FieldPicker::load(&service, &mut state, "Tcf3Ks9ZRpB", "fb2GC7FInSu").await?;
//! let field = &picker.groups()[0].fields[0];
//! picker.select(field, &mut state);
//! let request = state.query_request();
//! ```

pub mod account;
pub mod config;
pub mod error;
pub mod field;
pub mod metadata;
pub mod picker;
pub mod query;
pub mod state;
pub mod storage;

// Re-export commonly used types
pub use account::{Account, Authority, User};
pub use config::ApplicationConfig;
pub use error::{ConfigError, StorageError};
pub use field::{PivotFieldDto, FieldExtras, Resolution, FieldGroup, FieldRole, DataType, ResolutionType, MetadataResponse, group_by_display_group};
pub use metadata::{MetadataService, MetadataSource, HttpMetadataSource, MetadataError, SharedMetadata};
pub use picker::FieldPicker;
pub use query::{Measure, PivotQueryRequest};
pub use state::{AnalyticsState, derive_request};
pub use storage::{KeyValueStore, MemoryStore, FileStore, StateStorage};
