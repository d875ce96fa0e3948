//! Backend entry point: configuration, migrations, and server bootstrap.

mod server;

use actix_web::{App, HttpServer, web};
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use siteledger::ApiDoc;
use siteledger::Trace;
use siteledger::inbound::http::health::HealthState;
use siteledger::outbound::persistence::{DbPool, PoolConfig, run_pending};

use server::{ServerConfig, build_http_state, routes, session_middleware};

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

    let config = ServerConfig::from_env(&DefaultEnv::new())
        .map_err(|err| std::io::Error::other(err.to_string()))?;

    // DDL runs on a synchronous connection; keep it off the async runtime.
    let database_url = config.database_url.clone();
    tokio::task::spawn_blocking(move || run_pending(&database_url))
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?
        .map_err(|err| std::io::Error::other(err.to_string()))?;

    let pool = DbPool::new(PoolConfig::new(&config.database_url))
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;

    let state = web::Data::new(build_http_state(&pool));
    let health = web::Data::new(HealthState::new());
    let key = config.session_key.clone();
    let cookie_secure = config.cookie_secure;

    let server_state = state.clone();
    let server_health = health.clone();
    let http_server = HttpServer::new(move || {
        let app = App::new()
            .app_data(server_state.clone())
            .app_data(server_health.clone())
            .wrap(session_middleware(key.clone(), cookie_secure))
            .wrap(Trace)
            .configure(routes);

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(config.bind_addr)?;

    info!(addr = %config.bind_addr, "listening");
    health.mark_ready();
    http_server.run().await
}
