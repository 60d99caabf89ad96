//! Key/value storage tiers and the authentication state stored in them
//!
//! Two tiers are used: a session tier that lives as long as the current
//! session, and a persistent tier that survives restarts. Both are accessed
//! through [`KeyValueStore`].

mod file;
mod memory;
mod state;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use state::{StateStorage, PREVIOUS_URL_KEY, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

/// A string key/value store.
///
/// Operations never fail; an absent key reads as `None`.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}
