use tracing::info;

use catalog_api::{build_router, config::Config, seed::Catalog, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_api=debug".into()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    // Keys must load before the listener binds; any error aborts startup.
    info!("Loading API keys from {}", config.api_keys_file.display());
    let keys = config.load_keys()?;
    let names: Vec<&str> = keys.names().collect();
    info!(count = keys.len(), names = ?names, "API keys loaded");

    let catalog = Catalog::seeded();
    info!(
        users = catalog.users.len(),
        products = catalog.products.len(),
        orders = catalog.orders.len(),
        "Catalog ready"
    );

    let app = build_router(AppState::new(keys, catalog));

    let addr = config.addr();
    info!("Listening on http://{}", addr);
    info!("Quick-start: GET http://{}/status?api_key=<key>  (or header X-API-Key)", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
