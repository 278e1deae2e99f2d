use std::sync::Arc;

use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::cache::token::CachedToken;
use crate::cache::token_cache::TokenCache;
use crate::client::error::ApiError;
use crate::client::types::TokenResponse;
use crate::config::settings::FeishuConfig;
use crate::utils::constants::{TENANT_TOKEN_PATH, TOKEN_SAFETY_MARGIN_SECS};
use crate::utils::time::now_ms;

/// Fetches and caches the tenant access token.
///
/// Cheap to clone; clones share the same cache.
#[derive(Debug, Clone)]
pub struct TokenProvider {
    client: Client,
    cfg: Arc<FeishuConfig>,
    cache: TokenCache,
}

impl TokenProvider {
    pub fn new(client: Client, cfg: Arc<FeishuConfig>) -> Self {
        Self {
            client,
            cfg,
            cache: TokenCache::new(),
        }
    }

    /// Return the cached token, refreshing it through the credential
    /// exchange when missing or expired.
    ///
    /// There is deliberately no single-flight guard: concurrent callers
    /// that both observe an expired cache both refresh. A failed exchange
    /// is never cached.
    pub async fn get_token(&self) -> Result<String, ApiError> {
        if let Some(token) = self.cache.get().await {
            return Ok(token.value);
        }

        let url = format!("{}{}", self.cfg.base_url, TENANT_TOKEN_PATH);
        let response = self
            .client
            .post(&url)
            .json(&json!({
                "app_id": self.cfg.app_id,
                "app_secret": self.cfg.app_secret,
            }))
            .send()
            .await?;

        let body: TokenResponse = response.json().await?;
        if body.code != 0 {
            return Err(ApiError::Auth(body.msg));
        }
        let value = body
            .tenant_access_token
            .ok_or_else(|| ApiError::Auth("exchange response carried no token".to_string()))?;

        let ttl_secs = body.expire.unwrap_or(0) - TOKEN_SAFETY_MARGIN_SECS;
        let token = CachedToken::new(value.clone(), now_ms() + ttl_secs * 1000);
        debug!(
            expires_at_epoch_ms = token.expires_at_epoch_ms,
            "tenant access token refreshed"
        );
        self.cache.set(token).await;

        Ok(value)
    }
}
