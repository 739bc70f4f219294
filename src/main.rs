/// API сервер предсказания магнитуды

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use quake_predict::{config, create_router, loader, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Инициализация логирования
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let base_dir = config::resolve_base_dir()?;

    // Без полного набора артефактов сервис не стартует
    let engine = match loader::load_engine(&base_dir) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!("FATAL ERROR: Could not load a required model or file.");
            tracing::error!("Details: {}", e);
            tracing::error!(
                "Please ensure the directory structure is correct and all artifact files are present."
            );
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(engine));
    let app = create_router(state);

    let server = config::ServerConfig::default();
    let listener = tokio::net::TcpListener::bind(server.addr()).await?;
    tracing::info!("Server listening on http://{}", server.addr());
    axum::serve(listener, app).await?;

    Ok(())
}
