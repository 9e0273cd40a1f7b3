//! HTTP server and request handling
//!
//! Every path is routed to a single handler which validates the key, then
//! dispatches on the method. Failures are turned into plain-text responses
//! here and never escape to the listener.

use crate::types::{CacheMethod, CacheSource};
use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use status_image_cache::{CacheError, CacheKey, ImageCache};
use status_origin_client::{OriginClient, OriginError};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

const IMAGE_CONTENT_TYPE: &str = "image/jpeg";
const X_CACHE: HeaderName = HeaderName::from_static("x-cache");

const INVALID_URL: &str = "Invalid URL. Use form /200, /404 etc.";
const NOT_FOUND: &str = "Not Found";
const DELETED: &str = "Deleted";
const WRITE_FAILED: &str = "Error writing image";
const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";

/// Shared state for the HTTP server
pub struct ServerState {
    pub cache: ImageCache,
    pub origin: OriginClient,
    /// Source of the bytes stored by PUT
    pub fixture_path: PathBuf,
}

impl ServerState {
    pub fn new(cache: ImageCache, origin: OriginClient, fixture_path: PathBuf) -> Self {
        Self {
            cache,
            origin,
            fixture_path,
        }
    }
}

pub type SharedState = Arc<ServerState>;

/// Create the HTTP router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .fallback(handle_request)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server and run until Ctrl-C
pub async fn start_server(state: SharedState, host: &str, port: u16) -> std::io::Result<()> {
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!("Server listening at http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

async fn handle_request(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
) -> Response {
    // Any query string makes the key malformed
    let target = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());
    let Some(key) = target.strip_prefix('/').and_then(CacheKey::parse) else {
        debug!(target = %target, "Rejected malformed cache key");
        return (StatusCode::BAD_REQUEST, INVALID_URL).into_response();
    };

    match CacheMethod::from(&method) {
        CacheMethod::Get => get_image(&state, &key).await,
        CacheMethod::Put => put_image(&state, &key).await,
        CacheMethod::Delete => delete_image(&state, &key).await,
        CacheMethod::Other => (StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED).into_response(),
    }
}

/// Serve from cache, falling back to the origin on a miss
async fn get_image(state: &ServerState, key: &CacheKey) -> Response {
    match fetch_and_cache_image(state, key).await {
        Ok((data, source)) => image_response(data, source),
        Err(e) => {
            if e.is_origin_response() {
                debug!(code = %key, error = %e, "Not found on origin");
            } else {
                warn!(code = %key, error = %e, "Origin unreachable");
            }
            (StatusCode::NOT_FOUND, NOT_FOUND).into_response()
        }
    }
}

/// Read the entry for `key`, populating it from the origin if needed
async fn fetch_and_cache_image(
    state: &ServerState,
    key: &CacheKey,
) -> Result<(Vec<u8>, CacheSource), OriginError> {
    match state.cache.get(key).await {
        Ok(data) => return Ok((data, CacheSource::Hit)),
        Err(CacheError::NotFound) => debug!(code = %key, "Cache miss"),
        Err(e) => warn!(code = %key, error = %e, "Unreadable cache entry, treating as miss"),
    }

    let data = state.origin.fetch(key.as_str()).await?;

    // Serve the fetched image even if it could not be stored
    if let Err(e) = state.cache.put(key, &data).await {
        warn!(code = %key, error = %e, "Failed to cache image");
    }

    Ok((data, CacheSource::Miss))
}

/// Copy the fixture image into the cache under `key`
async fn put_image(state: &ServerState, key: &CacheKey) -> Response {
    let data = match fs::read(&state.fixture_path).await {
        Ok(data) => data,
        Err(e) => {
            error!(code = %key, fixture = ?state.fixture_path, error = %e, "Failed to read fixture image");
            return (StatusCode::INTERNAL_SERVER_ERROR, WRITE_FAILED).into_response();
        }
    };

    match state.cache.put(key, &data).await {
        Ok(()) => {
            info!(code = %key, fixture = ?state.fixture_path, "Stored image");
            (
                StatusCode::CREATED,
                format!("Created (copied from {})", state.fixture_path.display()),
            )
                .into_response()
        }
        Err(e) => {
            error!(code = %key, fixture = ?state.fixture_path, error = %e, "Failed to store image");
            (StatusCode::INTERNAL_SERVER_ERROR, WRITE_FAILED).into_response()
        }
    }
}

async fn delete_image(state: &ServerState, key: &CacheKey) -> Response {
    match state.cache.remove(key).await {
        Ok(()) => {
            info!(code = %key, "Deleted image");
            (StatusCode::OK, DELETED).into_response()
        }
        Err(CacheError::NotFound) => (StatusCode::NOT_FOUND, NOT_FOUND).into_response(),
        Err(e) => {
            warn!(code = %key, error = %e, "Failed to delete image");
            (StatusCode::NOT_FOUND, NOT_FOUND).into_response()
        }
    }
}

fn image_response(data: Vec<u8>, source: CacheSource) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, IMAGE_CONTENT_TYPE),
            (X_CACHE, source.header_value()),
        ],
        data,
    )
        .into_response()
}
