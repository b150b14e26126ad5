use std::{future::Future, path::Path};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use models::User;
use service::seeding;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Seed both stores from configuration.
pub async fn build_state(cfg: &AppConfig) -> Result<ServerState, StartupError> {
    let seed_path = cfg.catalog.seed_path.as_deref();
    common::env::ensure_seed_readable(seed_path).await?;

    let catalog = seeding::catalog_repository(seed_path.map(Path::new)).await?;
    let users = seeding::user_repository(
        cfg.users.iter().map(|u| User::new(u.username.clone(), u.password.clone())),
    );
    info!(books = catalog.len(), users = cfg.users.len(), "stores seeded");
    Ok(ServerState::new(catalog, users))
}

pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Build the app and serve it until `shutdown` resolves.
pub async fn run_until<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(cfg.bind_addr())
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("cannot bind {}: {e}", cfg.bind_addr())))?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting book catalog server");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("server stopped");
    Ok(())
}

/// Public entry: serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    run_until(cfg, async {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received Ctrl+C, shutting down");
        }
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builds_state_from_defaults() -> anyhow::Result<()> {
        let mut cfg = configs::load_from_str("[[users]]\nusername = \"alice\"\npassword = \"pw\"\n")?;
        cfg.normalize_and_validate()?;
        let state = build_state(&cfg).await?;
        assert_eq!(state.catalog.list_all().await?.into_books().len(), 10);
        use service::auth::repository::UserRepository;
        assert_eq!(state.auth.repository().count().await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn missing_seed_file_fails_startup() -> anyhow::Result<()> {
        let mut cfg = configs::load_from_str("[catalog]\nseed_path = \"/nonexistent/books.json\"\n")?;
        cfg.normalize_and_validate()?;
        assert!(build_state(&cfg).await.is_err());
        Ok(())
    }
}
