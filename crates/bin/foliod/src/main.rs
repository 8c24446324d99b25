//! # foliod — folio daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise tracing
//! - Construct the flat-file stores (surfacing directory-creation failures)
//! - Construct application services, injecting stores via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve, with graceful shutdown on ctrl-c
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use config::Config;
use folio_adapter_http_axum::router;
use folio_adapter_http_axum::state::AppState;
use folio_adapter_storage_fs::{FsDocumentStore, FsUploadStore};
use folio_app::services::resource_service::ResourceService;
use folio_app::services::upload_service::UploadService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Stores — directory creation happens here, once, and failures abort
    // startup instead of surfacing on the first request.
    let documents = FsDocumentStore::create(&config.storage.data_dir)?;
    let uploads = FsUploadStore::create(&config.storage.upload_dir)?;

    // Services + HTTP
    let state = AppState::new(
        ResourceService::new(documents),
        UploadService::new(uploads),
        config.server.public_url.clone(),
    );
    let app = router::build(state, &config.storage.upload_dir);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, public_url = %config.server.public_url, "foliod listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install ctrl-c handler");
    }
}
