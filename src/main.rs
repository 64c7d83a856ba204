use mileage_board::{router, AppState, Config, HttpActivityFeed};
use std::{net::SocketAddr, sync::Arc};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    let feed = HttpActivityFeed::new(&config.feed_base_url, config.feed_timeout)?;
    info!(
        feed = %config.feed_base_url,
        selection = ?config.selection,
        "starting weekly mileage board"
    );

    let port = config.port;
    let state = AppState::new(config, feed);

    // The page reports a failed first load; the server stays up so a reload can recover.
    if let Err(err) = state.snapshots.reload(Arc::clone(&state.feed)).await {
        error!("initial activity load failed: {err}");
    }

    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
