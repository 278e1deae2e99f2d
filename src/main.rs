use anyhow::Result;
use bitable_proxy::config::settings::Settings;
use bitable_proxy::server;
use bitable_proxy::utils::logging;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Read configuration (env / CLI)
    // -------------------------------

    let settings = Settings::parse();

    // -------------------------------
    // 2. Initialize logging
    // -------------------------------

    logging::init_logging(settings.log_level, settings.log_format);

    // -------------------------------
    // 3. Start HTTP server
    // -------------------------------

    info!("Service starting...");
    server::server::start(&settings).await
}
