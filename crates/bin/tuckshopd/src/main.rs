//! # tuckshopd — tuckshop daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize logging
//! - Seed the backing JSON file when it does not exist
//! - Construct the store, inject it into the application services
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use config::Config;
use tuckshop_adapter_http_axum::state::AppState;
use tuckshop_adapter_storage_json::JsonFileStore;
use tuckshop_app::services::menu_service::MenuService;
use tuckshop_app::services::order_service::OrderService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.logging.filter.clone())
        .init();

    // Storage
    let store = JsonFileStore::new(config.data_path());
    store.initialize().await?;

    // Services
    let menu_service = MenuService::new(store.clone());
    let order_service = OrderService::new(store);

    // HTTP
    let state = AppState::new(menu_service, order_service);
    let app = tuckshop_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "tuckshopd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
