//! Sign-up service: validate a registration request, then create the account.

#![forbid(unsafe_code)]

pub mod config;
pub mod data;
mod database;
pub mod domain;
pub mod error;
pub mod factories;
pub mod infra;
pub mod presentation;
mod router;
pub mod telemetry;
pub mod utils;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::http::{Method, StatusCode, header};
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::LatencyUnit;
use tower_http::cors::{Any, CorsLayer};
use tower_http::sensitive_headers::SetSensitiveHeadersLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};

use crate::data::AddAccountRepository;
use crate::infra::crypto::Argon2Encrypter;
use crate::infra::db::{InMemoryAccountRepository, PgAccountRepository};
use crate::presentation::SignUpController;

/// MUST NEVER be used in production.
#[cfg(test)]
pub async fn make_request(
    app: Router,
    method: Method,
    path: &str,
    body: String,
) -> axum::http::Response<axum::body::Body> {
    use axum::extract::Request;
    use tower::util::ServiceExt;

    app.oneshot(
        Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// In-memory state with cheap password hashing.
#[cfg(test)]
pub fn testing_state() -> AppState {
    let encrypter = Argon2Encrypter::new(Some(config::Argon2 {
        memory_cost: 1024,
        iterations: 1,
        parallelism: 1,
        hash_length: 32,
    }))
    .unwrap();

    AppState {
        config: Arc::new(config::Configuration::default()),
        signup: Arc::new(factories::make_signup_controller(
            Arc::new(encrypter),
            Arc::new(InMemoryAccountRepository::new()),
        )),
    }
}

/// State sharing between routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Configuration>,
    pub signup: Arc<SignUpController>,
}

/// Create router.
pub fn app(state: AppState) -> Router {
    let router = Router::new()
        // `GET /status.json` goes to `status`.
        .route("/status.json", get(router::status::status))
        // `POST /api/signup` goes to `signup`.
        .route("/api/signup", post(router::signup::handler))
        .with_state(state);

    with_middleware(router)
}

/// Wrap routes with tracing, timeout and CORS layers.
fn with_middleware(router: Router) -> Router {
    let middleware = ServiceBuilder::new()
        // Mark sensitive headers before anything records them.
        .layer(SetSensitiveHeadersLayer::new([header::AUTHORIZATION, header::COOKIE]))
        // Add high level tracing/logging to all requests.
        .layer(
            TraceLayer::new_for_http()
                .on_body_chunk(|chunk: &Bytes, latency: Duration, _span: &tracing::Span| {
                    tracing::trace!(size_bytes = chunk.len(), latency = ?latency, "sending body chunk")
                })
                .make_span_with(DefaultMakeSpan::new().include_headers(true).level(tracing::Level::INFO))
                .on_request(DefaultOnRequest::new())
                .on_response(DefaultOnResponse::new().include_headers(true).latency_unit(LatencyUnit::Micros)),
        )
        // Set a timeout.
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, Duration::from_secs(10)))
        // Add CORS preflight support.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers(Any),
        );

    router.layer(middleware)
}

/// Initialize the application state.
pub async fn initialize_state() -> error::Result<AppState> {
    // read configuration file. let it in memory.
    let config = match std::env::var("CONFIG_PATH") {
        Ok(path) => config::Configuration::default().path(path).read(),
        Err(_) => config::Configuration::default().read(),
    };

    let repository: Arc<dyn AddAccountRepository> = match config.postgres {
        Some(ref postgres) => {
            let db = database::Database::from_config(postgres).await?;
            Arc::new(PgAccountRepository::new(db.postgres))
        },
        None => {
            tracing::warn!(
                "missing `postgres` entry on `config.yaml` file, accounts are kept in memory"
            );
            Arc::new(InMemoryAccountRepository::new())
        },
    };

    let encrypter = Arc::new(Argon2Encrypter::new(config.argon2.clone())?);

    Ok(AppState {
        signup: Arc::new(factories::make_signup_controller(
            encrypter, repository,
        )),
        config,
    })
}
