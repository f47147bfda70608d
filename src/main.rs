use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use parkride_web::auth::{AuthService, FileSessionStore};
use parkride_web::cache::{self, AppCache};
use parkride_web::config::Config;
use parkride_web::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("parkride_web=debug,tower_http=info")),
        )
        .init();

    let config = Config::from_env();
    info!("Session file: {}", config.session_file.display());

    let store = FileSessionStore::new(&config.session_file);
    let auth = Arc::new(
        AuthService::new(Box::new(store), config.session_ttl_hours)
            .context("failed to load persisted sessions")?,
    );

    let cache = AppCache::new();
    cache::warm_sessions(&cache, &auth).await;

    let state = AppState {
        cache: cache.clone(),
        auth: auth.clone(),
        config: Arc::new(config.clone()),
    };

    tokio::spawn(cache::start_session_sweeper(cache, auth));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
