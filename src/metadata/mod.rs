//! Metadata fetching and caching (verb module)
//!
//! Fetches field metadata for a template version, groups it for display and
//! memoizes the result per `(template, version)`.

mod error;
mod service;
mod source;

pub use error::MetadataError;
pub use service::{MetadataService, SharedMetadata, CacheKey};
pub use source::{MetadataSource, HttpMetadataSource, METADATA_PATH};
