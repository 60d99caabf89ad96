use std::sync::Arc;
use super::KeyValueStore;

pub const PREVIOUS_URL_KEY: &str = "previousUrl";
pub const ACCESS_TOKEN_KEY: &str = "app-accessToken";
pub const REFRESH_TOKEN_KEY: &str = "app-refreshToken";

/// Authentication tokens and the "return to" URL.
///
/// Values are stored JSON-encoded. The access token lives in the persistent
/// tier when the user asked to be remembered and in the session tier
/// otherwise; the refresh token is only ever kept persistently. The previous
/// URL is session-scoped.
#[derive(Clone)]
pub struct StateStorage {
    session: Arc<dyn KeyValueStore>,
    persistent: Arc<dyn KeyValueStore>,
}

impl StateStorage {
    pub fn new(session: Arc<dyn KeyValueStore>, persistent: Arc<dyn KeyValueStore>) -> Self {
        Self { session, persistent }
    }

    pub fn store_url(&self, url: &str) {
        self.session.set_item(PREVIOUS_URL_KEY, &encode(url));
    }

    pub fn get_url(&self) -> Option<String> {
        decode(self.session.get_item(PREVIOUS_URL_KEY))
    }

    pub fn clear_url(&self) {
        self.session.remove_item(PREVIOUS_URL_KEY);
    }

    /// Replace any stored tokens.
    ///
    /// With `remember_me` both tokens go to the persistent tier; without it
    /// only the access token is kept, in the session tier.
    pub fn store_authentication_token(&self, access_token: &str, refresh_token: &str, remember_me: bool) {
        self.clear_authentication_token();
        if remember_me {
            self.persistent.set_item(ACCESS_TOKEN_KEY, &encode(access_token));
            self.persistent.set_item(REFRESH_TOKEN_KEY, &encode(refresh_token));
        } else {
            self.session.set_item(ACCESS_TOKEN_KEY, &encode(access_token));
        }
    }

    /// Access token, preferring the persistent tier
    pub fn get_authentication_token(&self) -> Option<String> {
        let raw = self
            .persistent
            .get_item(ACCESS_TOKEN_KEY)
            .or_else(|| self.session.get_item(ACCESS_TOKEN_KEY));
        decode(raw)
    }

    pub fn get_refresh_token(&self) -> Option<String> {
        decode(self.persistent.get_item(REFRESH_TOKEN_KEY))
    }

    pub fn clear_authentication_token(&self) {
        self.session.remove_item(ACCESS_TOKEN_KEY);
        self.persistent.remove_item(ACCESS_TOKEN_KEY);
        self.persistent.remove_item(REFRESH_TOKEN_KEY);
    }
}

impl std::fmt::Debug for StateStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStorage").finish_non_exhaustive()
    }
}

fn encode(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

// Malformed or JSON `null` values read as absent.
fn decode(raw: Option<String>) -> Option<String> {
    serde_json::from_str::<Option<String>>(&raw?).ok().flatten()
}
