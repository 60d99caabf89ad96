use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};
use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use tracing::{debug, warn};
use crate::field::{group_by_display_group, FieldGroup};
use super::error::MetadataError;
use super::source::MetadataSource;

/// A memoized metadata fetch.
///
/// Cloning yields another handle to the same fetch: the request starts when
/// the first handle is polled and every handle resolves to the same result.
pub type SharedMetadata = Shared<BoxFuture<'static, Result<Arc<Vec<FieldGroup>>, MetadataError>>>;

type Cache = Mutex<HashMap<CacheKey, SharedMetadata>>;

/// Cache key for a template version.
///
/// The two ids are kept apart so that ids containing `:` cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey {
    pub template_id: String,
    pub version_id: String,
}

impl CacheKey {
    pub fn new(template_id: &str, version_id: &str) -> Self {
        Self {
            template_id: template_id.to_string(),
            version_id: version_id.to_string(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.template_id, self.version_id)
    }
}

/// Fetches grouped field metadata, one request per template version.
///
/// Successful results are kept for the lifetime of the service. A failed
/// fetch is dropped from the cache once it resolves, so the next call for
/// the same key issues a new request.
pub struct MetadataService {
    source: Arc<dyn MetadataSource>,
    cache: Arc<Cache>,
}

impl MetadataService {
    pub fn new(source: Arc<dyn MetadataSource>) -> Self {
        Self {
            source,
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Get the shared fetch for a template version, creating it on first use
    pub fn metadata(&self, template_id: &str, version_id: &str) -> SharedMetadata {
        let key = CacheKey::new(template_id, version_id);
        let mut cache = self.cache.lock();

        if let Some(existing) = cache.get(&key) {
            debug!("Metadata cache hit for {key}");
            return existing.clone();
        }

        debug!("Metadata cache miss for {key}");
        let fetch = fetch_grouped(
            Arc::clone(&self.source),
            Arc::downgrade(&self.cache),
            key.clone(),
        )
        .boxed()
        .shared();

        cache.insert(key, fetch.clone());
        fetch
    }

    /// Fetch grouped metadata for a template version
    pub async fn get_metadata(&self, template_id: &str, version_id: &str) -> Result<Arc<Vec<FieldGroup>>, MetadataError> {
        self.metadata(template_id, version_id).await
    }

    pub fn is_cached(&self, template_id: &str, version_id: &str) -> bool {
        self.cache.lock().contains_key(&CacheKey::new(template_id, version_id))
    }

    /// Keys currently held, sorted, rendered as `template:version`
    pub fn cached_keys(&self) -> Vec<String> {
        let mut keys: Vec<CacheKey> = self.cache.lock().keys().cloned().collect();
        keys.sort();
        keys.iter().map(CacheKey::to_string).collect()
    }
}

impl std::fmt::Debug for MetadataService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataService")
            .field("cached_keys", &self.cached_keys())
            .finish_non_exhaustive()
    }
}

async fn fetch_grouped(
    source: Arc<dyn MetadataSource>,
    cache: Weak<Cache>,
    key: CacheKey,
) -> Result<Arc<Vec<FieldGroup>>, MetadataError> {
    match source.fetch(&key.template_id, &key.version_id).await {
        Ok(response) => {
            let groups = group_by_display_group(response.available_fields);
            debug!("Loaded {} field groups for {key}", groups.len());
            Ok(Arc::new(groups))
        }
        Err(e) => {
            warn!("Metadata fetch for {key} failed: {e}");
            // Only this fetch can occupy the key until it is removed here.
            if let Some(cache) = cache.upgrade() {
                cache.lock().remove(&key);
            }
            Err(e)
        }
    }
}
