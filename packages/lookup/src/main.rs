use cedula_lookup::{app, AppConfig, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "invalid configuration");
        std::process::exit(1);
    });

    let addr = config.listen_addr;
    tracing::info!(static_dir = %config.static_dir, sri = %config.sri_base_url, "starting");

    let state = AppState::from_config(config).unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to initialise upstream clients");
        std::process::exit(1);
    });

    let app = app::router(state);

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
