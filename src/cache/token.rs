/// Tenant access token with its computed expiration.
///
/// The expiry already includes the safety margin subtracted at refresh time,
/// so a token is invalid at or after `expires_at_epoch_ms`.
#[derive(Debug, Clone)]
pub struct CachedToken {
    pub value: String,
    pub expires_at_epoch_ms: i64, // UNIX timestamp, milliseconds
}

impl CachedToken {
    pub fn new(value: String, expires_at_epoch_ms: i64) -> Self {
        Self {
            value,
            expires_at_epoch_ms,
        }
    }

    pub fn is_valid_at(&self, now_ms: i64) -> bool {
        now_ms < self.expires_at_epoch_ms
    }
}
