use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::security::security_headers;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, error, info, warn};
use utoipa::OpenApi;

/// Environment variable holding the comma-separated CORS origin allowlist.
pub const CORS_ORIGIN_ENV: &str = "CORS_ALLOWED_ORIGIN";

const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Builds the CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// The variable is required: a missing, empty, or unparseable allowlist is a
/// startup error rather than a silently-open API.
fn cors_from_env() -> io::Result<CorsLayer> {
    let raw = std::env::var(CORS_ORIGIN_ENV).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "{CORS_ORIGIN_ENV} is required, e.g. {CORS_ORIGIN_ENV}=http://localhost:3000,https://shop.example.com"
            ),
        )
    })?;

    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|err| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("invalid origin {origin:?} in {CORS_ORIGIN_ENV}: {err}"),
                )
            })
        })
        .collect::<io::Result<Vec<_>>>()?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{CORS_ORIGIN_ENV} must list at least one origin"),
        ));
    }

    info!(origins = %raw, "CORS origin allowlist configured");

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::COOKIE,
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)))
}

/// Mounts the interactive documentation UIs, all backed by the schema served
/// at `/api-docs/openapi.json`.
fn docs_router<T>() -> Router
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    Router::new()
        .merge(SwaggerUi::new("/docs").url(OPENAPI_JSON, T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new(OPENAPI_JSON).path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
}

/// Assembles the shared HTTP surface around a set of API routes.
///
/// `apis` is nested under `/api` with its state already applied. Around it
/// this adds the documentation UIs (`/docs`, `/redoc`, `/rapidoc`, `/scalar`),
/// an enveloped 404 fallback, request tracing, security headers, CORS, and
/// response compression. Health endpoints are left to the caller so each
/// service can wire its own readiness checks.
///
/// # Errors
///
/// Fails when `CORS_ALLOWED_ORIGIN` is unset, empty, or contains an origin
/// that is not a valid header value.
pub async fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors = cors_from_env()?;

    Ok(docs_router::<T>()
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new()))
}

/// Serves `router` until SIGTERM or SIGINT, then drains in-flight requests
/// and runs `cleanup` with `shutdown_timeout` as an upper bound.
///
/// The cleanup future is where callers close long-lived resources such as
/// database clients. It starts as soon as shutdown is signalled and the server
/// does not return before it finishes or times out.
///
/// # Errors
///
/// Returns an error when the listener cannot bind to the configured address
/// or the server terminates abnormally.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, mut shutdown_rx) = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        let _ = shutdown_rx.recv().await;

        info!(timeout = ?shutdown_timeout, "Running shutdown cleanup");
        if tokio::time::timeout(shutdown_timeout, cleanup).await.is_err() {
            warn!(timeout = ?shutdown_timeout, "Cleanup did not finish in time");
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { coordinator.wait_for_signal().await })
        .await
        .inspect_err(|err| error!(error = ?err, "Server terminated with an error"));

    // The cleanup task only finishes after the shutdown broadcast fires.
    cleanup_handle.await.ok();

    serve_result
}
