/// Axum webserver implementation
///
/// Server lifecycle: bind, serve until `shutdown()` is called, drain.
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::{compression::CompressionLayer, cors::CorsLayer};

use crate::{
    config::WebserverConfig,
    directory::TokenDirectory,
    logger::{self, LogTag},
    webserver::{routes, state::AppState},
};

/// Global shutdown notifier
static SHUTDOWN_NOTIFY: once_cell::sync::Lazy<Arc<Notify>> =
    once_cell::sync::Lazy::new(|| Arc::new(Notify::new()));

/// Start the webserver
///
/// Blocks until [`shutdown`] is triggered.
pub async fn start_server(
    config: WebserverConfig,
    directory: Arc<TokenDirectory>,
) -> Result<(), String> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| format!("Invalid bind address {}:{}: {}", config.host, config.port, e))?;

    logger::debug(LogTag::Webserver, &format!("🌐 Starting webserver on {}", addr));

    let state = Arc::new(AppState::new(directory, config));
    let app = build_app(state);

    let listener = TcpListener::bind(&addr).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::AddrInUse => format!(
            "Failed to bind to {}: Address already in use\n\
             Another token-directory instance (or another service) is listening on this port.\n\
             Pick a different one with --port or webserver.port in the config file.",
            addr
        ),
        std::io::ErrorKind::PermissionDenied => format!(
            "Failed to bind to {}: Permission denied\n\
             Port {} requires elevated privileges on this system.",
            addr,
            addr.port()
        ),
        _ => format!("Failed to bind to {}: {}", addr, e),
    })?;

    logger::info(
        LogTag::Webserver,
        &format!("✅ Token directory listening on http://{}", addr),
    );

    let shutdown_signal = async {
        SHUTDOWN_NOTIFY.notified().await;
        logger::debug(
            LogTag::Webserver,
            "Received shutdown signal, stopping webserver...",
        );
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    logger::info(LogTag::Webserver, "✅ Webserver stopped gracefully");

    Ok(())
}

/// Trigger webserver shutdown
///
/// `notify_one` stores a permit, so a shutdown requested before the server
/// reaches its await point is not lost.
pub fn shutdown() {
    logger::debug(LogTag::Webserver, "Triggering webserver shutdown...");
    SHUTDOWN_NOTIFY.notify_one();
}

/// Router plus the transport layers enabled in the config
fn build_app(state: Arc<AppState>) -> Router {
    let compression = state.config.compression;
    let cors = state.config.cors_permissive;
    let app = routes::create_router(state);

    let app = if cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    };

    if compression {
        app.layer(CompressionLayer::new())
    } else {
        app
    }
}
