//! Server construction and middleware wiring.

mod config;

pub use config::{ConfigError, ServerConfig};

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

#[cfg(debug_assertions)]
use backend::ApiDoc;
use backend::Trace;
use backend::inbound::http::error::json_error_handler;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::users::{create_user, delete_user, get_user, list_users, update_user};
use backend::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Assemble the application served by every worker.
///
/// Shared between [`run`] and the HTTP test harnesses so both exercise the
/// same routing, extractors, and middleware.
pub fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    #[allow(unused_mut, reason = "reassigned when Swagger UI is mounted")]
    let mut app = App::new()
        .app_data(http_state)
        .app_data(health_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}

/// Build the store handle and run the HTTP server until shutdown.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let pool = DbPool::new(PoolConfig::new(config.database_uri()))
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    let repository = DieselUserRepository::new(pool);

    let http_state = web::Data::new(HttpState::new(Arc::new(repository)));
    let health_state = web::Data::new(HealthState::new());

    let server_http_state = http_state.clone();
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_http_state.clone(), server_health_state.clone())
    })
    .bind(config.bind_addr())?;

    health_state.mark_ready();
    info!(addr = %config.bind_addr(), "user account service listening");
    server.run().await
}
