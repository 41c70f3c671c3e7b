//! Backend entry-point: loads settings and serves the invoice form actions.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use dashboard::inbound::http::health::HealthState;
use dashboard::inbound::http::session_config::{BuildMode, session_settings};
use dashboard::outbound::persistence::{DbPool, PoolConfig};
use dashboard::settings::AppSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;

    let session = session_settings(
        &settings.session_toggles(),
        BuildMode::from_debug_assertions(),
    )
    .map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        settings.bind_addr(),
    )
    .with_fixture_sign_in(settings.allow_fixture_sign_in);
    let mut health_state = HealthState::new();

    if let Some(url) = settings.database_url() {
        let mut pool_config = PoolConfig::new(url);
        if let Some(max_size) = settings.pool_max_size {
            pool_config = pool_config.with_max_size(max_size);
        }
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|e| std::io::Error::other(format!("failed to build database pool: {e}")))?;
        health_state = health_state.with_probe(Arc::new(pool.clone()));
        config = config.with_db_pool(pool);
    }

    info!(addr = %settings.bind_addr(), "starting dashboard server");
    create_server(web::Data::new(health_state), config)?.await
}
