use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::token::CachedToken;
use crate::utils::time::now_ms;

/// Process-wide cache holding at most one tenant access token.
///
/// Owned by the client and passed by handle to every request path; there is
/// no module-level global. Reads and writes are not coordinated: two callers
/// observing an expired token may both refresh it. The duplication is
/// idempotent and accepted.
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    inner: Arc<RwLock<Option<CachedToken>>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
        }
    }

    /// Get the token if it exists and is not expired
    pub async fn get(&self) -> Option<CachedToken> {
        let guard = self.inner.read().await;
        guard
            .as_ref()
            .filter(|t| t.is_valid_at(now_ms()))
            .cloned()
    }

    /// Replace the cached token
    pub async fn set(&self, token: CachedToken) {
        let mut guard = self.inner.write().await;
        *guard = Some(token);
    }
}
