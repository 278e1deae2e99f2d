use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::client::table::TableClient;
use crate::config::settings::Settings;
use crate::remap::schema::FieldSchema;
use crate::server::routes;

/// Shared per-request state: one table client (owning the token cache) and
/// the field schema selected at startup.
#[derive(Clone)]
pub struct AppState {
    pub client: TableClient,
    pub schema: &'static FieldSchema,
}

impl AppState {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = TableClient::new(
            settings.feishu(),
            Duration::from_millis(settings.http_timeout_ms),
        )?;
        Ok(Self {
            client,
            schema: FieldSchema::for_variant(settings.schema),
        })
    }
}

/// Start the Axum server hosting the proxy routes.
pub async fn start(settings: &Settings) -> Result<()> {
    let state = AppState::new(settings)?;
    let app = routes::router().with_state(state);

    let bind_addr = format!("{}:{}", settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, schema = ?settings.schema, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
