pub mod api;
pub mod dashboards;
pub mod reports;
pub mod routes;
pub mod shared;
pub mod system;

use std::sync::Arc;

use shared::data_source::ShopApiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};

    system::tracing::initialize()?;

    // Конфигурация: config.toml рядом с exe или встроенная
    let config = shared::config::load_config()?;
    let bind = format!("{}:{}", config.server.host, config.server.port);

    let client = ShopApiClient::new(&config.data_source)
        .map_err(|e| anyhow::anyhow!("data source init failed: {e}"))?;
    tracing::info!("Shop API: {}", client.base_url());
    tracing::info!(
        "Business: '{}', UTC offset {} min",
        config.business.name,
        config.business.utc_offset_minutes
    );

    shared::data_source::initialize(Arc::new(client))?;
    shared::config::initialize(config)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let app = routes::configure_routes()
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors);

    let addr: SocketAddr = bind
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid bind address {bind}: {e}"))?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
