use std::sync::Arc;

use clap::Parser;

use crate::remap::schema::SchemaVariant;
use crate::utils::constants::{DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_MS};
use crate::utils::logging::{LogFormat, LogLevel};

/// ================================
/// Global service-wide settings
/// ================================
///
/// The four Feishu identifiers are mandatory and have no literal fallbacks;
/// the service refuses to start without them.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Settings {
    /// Application id used for the tenant token exchange
    #[arg(long, env = "FEISHU_APP_ID")]
    pub app_id: String,

    /// Application secret used for the tenant token exchange
    #[arg(long, env = "FEISHU_APP_SECRET", hide_env_values = true)]
    pub app_secret: String,

    /// Bitable app token (identifies the multi-dimensional table app)
    #[arg(long, env = "FEISHU_APP_TOKEN")]
    pub app_token: String,

    /// Table id inside the bitable app
    #[arg(long, env = "FEISHU_TABLE_ID")]
    pub table_id: String,

    /// Base URL of the open-api endpoint
    #[arg(long, env = "FEISHU_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Field-name schema variant used for record remapping
    #[arg(long, env = "FEISHU_SCHEMA", value_enum, default_value_t = SchemaVariant::Project)]
    pub schema: SchemaVariant,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Timeout applied to every outbound request, in milliseconds
    #[arg(long, env = "HTTP_TIMEOUT_MS", default_value_t = DEFAULT_HTTP_TIMEOUT_MS)]
    pub http_timeout_ms: u64,

    #[arg(long, env = "LOG_LEVEL", value_enum)]
    pub log_level: Option<LogLevel>,

    #[arg(long, env = "LOG_FORMAT", value_enum)]
    pub log_format: Option<LogFormat>,
}

impl Settings {
    pub fn feishu(&self) -> Arc<FeishuConfig> {
        Arc::new(FeishuConfig {
            app_id: self.app_id.clone(),
            app_secret: self.app_secret.clone(),
            app_token: self.app_token.clone(),
            table_id: self.table_id.clone(),
            base_url: self.base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Identifiers the client needs for every outbound call.
#[derive(Debug, Clone)]
pub struct FeishuConfig {
    pub app_id: String,
    pub app_secret: String,
    pub app_token: String,
    pub table_id: String,
    pub base_url: String,
}
