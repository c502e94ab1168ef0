use crate::server::{ServerError, ServerRouter};
use axum::{http::Uri, routing::any};

/// Raw static files are never served; pages are only reachable rendered.
pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .route("/static", any(forbid_static_asset))
        .route("/static/{*path}", any(forbid_static_asset))
}

async fn forbid_static_asset(uri: Uri) -> ServerError {
    ServerError::StaticAssetForbidden(uri)
}
