use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use todo_api::{AppState, Config, build_app};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    // Stores are created here and live as long as the server
    let state = AppState::new(config);
    let app = build_app(&state)?;

    info!(
        "Starting {} v{} with graceful shutdown ({:?} timeout)",
        state.config.app.name, state.config.app.version, state.config.server.shutdown_timeout
    );

    let server_config = state.config.server.clone();
    create_production_app(app, &server_config, async move {
        let todos = state.todos.count_items().await.unwrap_or_default();
        let channels = state.channels.count_items().await.unwrap_or_default();
        info!(todos, channels, "Discarding in-memory collections");
        drop(state);
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Todo API shutdown complete");
    Ok(())
}
