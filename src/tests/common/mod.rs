// tests/common/mod.rs
pub use axum::Router;
pub use tokio::task::JoinHandle;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::client::table::TableClient;
use crate::config::settings::FeishuConfig;

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

/// Config pointing at a mock upstream; identifiers are arbitrary but stable
/// so URL paths are predictable in matchers.
pub fn test_feishu_config(base_url: &str) -> Arc<FeishuConfig> {
    Arc::new(FeishuConfig {
        app_id: "cli_test_app".to_string(),
        app_secret: "test_secret".to_string(),
        app_token: "appTESTtoken".to_string(),
        table_id: "tblTEST".to_string(),
        base_url: base_url.trim_end_matches('/').to_string(),
    })
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}

pub fn build_table_client(base_url: &str) -> TableClient {
    TableClient::new(test_feishu_config(base_url), Duration::from_secs(5)).expect("table client")
}

/// Records path for the identifiers used by `test_feishu_config`.
pub const RECORDS_PATH: &str = "/bitable/v1/apps/appTESTtoken/tables/tblTEST/records";
pub const FIELDS_PATH: &str = "/bitable/v1/apps/appTESTtoken/tables/tblTEST/fields";
pub const TOKEN_PATH: &str = "/auth/v3/tenant_access_token/internal";
