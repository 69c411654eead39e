//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod settings;
mod state_builders;

pub use config::ServerConfig;
pub use settings::AppSettings;

use std::future::Future;

use actix_cors::Cors;
use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::rt::signal;
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use campus_print::Trace;
#[cfg(debug_assertions)]
use campus_print::doc::ApiDoc;
use campus_print::inbound::http::configure;
use campus_print::inbound::http::health::{HealthState, health, live, ready};
use campus_print::inbound::http::state::HttpState;
use campus_print::inbound::http::validation::{json_config, query_config};

use state_builders::build_http_state;

fn build_cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    cors_origins: Vec<String>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .app_data(query_config())
        .wrap(NormalizePath::new(TrailingSlash::Trim))
        .wrap(build_cors(&cors_origins))
        .wrap(Trace)
        .service(web::scope("/api").configure(configure))
        .service(health)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

#[cfg(unix)]
async fn shutdown_signal() {
    use signal::unix::{SignalKind, signal as unix_signal};

    match unix_signal(SignalKind::terminate()) {
        Ok(mut terminate) => {
            tokio::select! {
                _ = signal::ctrl_c() => {}
                _ = terminate.recv() => {}
            }
        }
        Err(error) => {
            warn!(%error, "SIGTERM handler unavailable; listening for Ctrl-C only");
            if let Err(error) = signal::ctrl_c().await {
                warn!(%error, "Ctrl-C handler unavailable");
            }
        }
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    if let Err(error) = signal::ctrl_c().await {
        warn!(%error, "Ctrl-C handler unavailable");
    }
}

/// Wait for `trigger`, fail the liveness probe, then stop accepting
/// connections and let in-flight requests finish.
async fn drain_after(
    trigger: impl Future<Output = ()>,
    handle: ServerHandle,
    health_state: web::Data<HealthState>,
) {
    trigger.await;
    info!("shutdown requested; draining connections");
    health_state.mark_unhealthy();
    handle.stop(true).await;
}

/// Construct the Actix HTTP server.
///
/// The returned [`Server`] must be awaited to drive the listener; the
/// readiness flag is raised once the socket is bound. SIGINT and SIGTERM
/// fail liveness before the graceful stop begins.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket or registering
/// metrics fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config.db_pool));
    let ServerConfig {
        host,
        port,
        cors_origins,
        db_pool: _,
    } = config;
    #[cfg(feature = "metrics")]
    let prometheus = metrics::build_metrics()?;

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = build_app(
            server_health_state.clone(),
            http_state.clone(),
            cors_origins.clone(),
        );
        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());
        app
    })
    .disable_signals()
    .bind((host.as_str(), port))?
    .run();

    actix_web::rt::spawn(drain_after(
        shutdown_signal(),
        server.handle(),
        health_state.clone(),
    ));
    health_state.mark_ready();
    Ok(server)
}
