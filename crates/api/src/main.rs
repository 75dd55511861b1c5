use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wishlist_api::config::ServerConfig;
use wishlist_api::router::build_app_router;
use wishlist_api::state::AppState;
use wishlist_store::WishlistStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "wishlist_api=debug,wishlist_store=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");
    tracing::info!(host = %config.host, port = config.port, "Loaded server configuration");

    // --- Store ---
    let store = WishlistStore::load(config.fixtures_path.as_deref())
        .expect("Failed to seed wishlist store");
    tracing::info!(wishlists = store.len().await, "Wishlist store seeded");

    // --- Router ---
    let app = build_app_router(AppState::new(store), &config);

    // --- Start server ---
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Mock wishlist service running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Resolve once the process is asked to stop, logging which signal did it.
async fn shutdown_signal() {
    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    let sigint = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "Ctrl-C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    let signal = tokio::select! {
        () = sigint => "SIGINT",
        () = sigterm => "SIGTERM",
    };

    tracing::info!(signal, "Shutting down, draining in-flight requests");
}
