use std::sync::Arc;

use campus_content::HttpContentSource;
use campus_site::{app, AppState, SiteConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SiteConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to load configuration");
        std::process::exit(1);
    });

    let source = HttpContentSource::new(&config.content).unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to create CMS client");
        std::process::exit(1);
    });

    tracing::info!(
        origin = %config.content.origin,
        revalidate_secs = config.content.revalidate.as_secs(),
        "serving content from CMS"
    );

    let addr = config.bind_addr;
    let app = app(AppState::new(config, Arc::new(source)));

    tracing::info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to bind on {addr}");
            std::process::exit(1);
        });

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
