//! Backend entry point: loads settings, prepares the database pool, and
//! serves the JSON API.

mod server;

use actix_web::web;
use campus_print::inbound::http::health::HealthState;
use campus_print::outbound::persistence::{DbPool, run_pending_migrations};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{AppSettings, ServerConfig, create_server};

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let settings = AppSettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let database_url = settings.database_url().map_err(std::io::Error::other)?;

    if settings.run_migrations {
        run_pending_migrations(&database_url)
            .await
            .map_err(std::io::Error::other)?;
    }

    let pool_config = settings
        .pool_config(database_url)
        .map_err(std::io::Error::other)?;
    let pool = DbPool::new_lazy(&pool_config);
    match pool.ping().await {
        Ok(()) => info!("database connection verified"),
        Err(error) => warn!(%error, "database unreachable at startup; requests will retry"),
    }

    if settings.auth_provider_configured() {
        info!("auth provider configured; authentication endpoints remain placeholders");
    }

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.host(), settings.port(), pool)
        .with_cors_origins(settings.cors_origins());
    info!(host = settings.host(), port = settings.port(), "starting HTTP server");
    create_server(health_state, config)?.await
}
