use std::sync::Arc;

use eduhub_api::{
    config::Config,
    observability,
    routes::create_router,
    state::AppState,
    store::MemoryStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init_tracing();

    let config = Config::from_env()?;

    let store = match &config.seed_path {
        Some(path) => {
            tracing::info!(path = %path, "Seeding in-memory store");
            MemoryStore::from_json_file(path)?
        }
        None => MemoryStore::new(),
    };

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(Arc::new(store), config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "EduHub recommendation service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
