use std::net::SocketAddr;
use std::sync::Arc;

use habitboard_lib::application::config::AppConfig;
use habitboard_lib::presentation::routes::build_router;
use habitboard_lib::presentation::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e.format_with_code()))?;

    habitboard_infrastructure::logging::init_logger(config.log_dir())?;

    log::info!(
        "Starting HabitBoard v{} (port {})",
        env!("CARGO_PKG_VERSION"),
        config.port()
    );

    let state = Arc::new(
        AppState::new(&config)
            .await
            .map_err(|e| anyhow::anyhow!(e.format_with_code()))?,
    );

    let router = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port()));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
