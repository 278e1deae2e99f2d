//! Shared constants and invariants

/// Tokens are treated as expired this many seconds before the server-reported
/// expiry.
pub const TOKEN_SAFETY_MARGIN_SECS: i64 = 300;

pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_PAGE_SIZE: u32 = 100;

pub const DEFAULT_BASE_URL: &str = "https://open.feishu.cn/open-apis";
pub const TENANT_TOKEN_PATH: &str = "/auth/v3/tenant_access_token/internal";
