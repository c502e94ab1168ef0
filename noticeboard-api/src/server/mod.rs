use axum::{
    Router,
    extract::{
        FromRef, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use json::Json;
use noticeboard_common::{
    fingerprint::FingerprintProvider,
    model::{Id, post::PostMarker, text::EmptyTextError},
    payload::PayloadDecodeError,
};
use noticeboard_db::client::{DbClient, DbError};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

mod fingerprint;
mod json;
mod routes;

pub type ServerRouter = Router<ServerState>;

#[derive(Clone, FromRef)]
pub struct ServerState {
    pub db_client: Arc<DbClient>,
    pub fingerprints: Arc<dyn FingerprintProvider>,
}

pub fn routes() -> ServerRouter {
    routes::routes().fallback(fallback)
}

pub async fn fallback(request: Request) -> ServerError {
    ServerError::UnknownRoute(request.into_parts().0.uri)
}

pub type Result<T, E = ServerError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Unknown route requested: {0}")]
    UnknownRoute(Uri),
    #[error("Static assets are not served directly: {0}")]
    StaticAssetForbidden(Uri),
    #[error("Path rejected: {0}")]
    PathRejection(#[from] PathRejection),
    #[error("Incoming JSON rejected: {0}")]
    JsonRejection(#[from] JsonRejection),
    #[error("Encoded payload rejected: {0}")]
    PayloadDecode(#[from] PayloadDecodeError),
    #[error(transparent)]
    EmptyText(#[from] EmptyTextError),
    #[error("JSON response could not be serialized: {0}")]
    JsonResponse(#[from] serde_json::Error),
    #[error("Post with id {0} was not found.")]
    PostByIdNotFound(Id<PostMarker>),
    #[error(transparent)]
    Database(#[from] DbError),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::UnknownRoute(_)
            | ServerError::PathRejection(_)
            | ServerError::PostByIdNotFound(_)
            | ServerError::Database(DbError::PostNotFound(_)) => StatusCode::NOT_FOUND,
            ServerError::StaticAssetForbidden(_) => StatusCode::FORBIDDEN,
            ServerError::Database(DbError::DuplicateLike(_)) => StatusCode::CONFLICT,
            ServerError::JsonRejection(_)
            | ServerError::PayloadDecode(_)
            | ServerError::EmptyText(_) => StatusCode::BAD_REQUEST,
            ServerError::JsonResponse(_) | ServerError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable name of the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            ServerError::UnknownRoute(_)
            | ServerError::PathRejection(_)
            | ServerError::PostByIdNotFound(_)
            | ServerError::Database(DbError::PostNotFound(_)) => "not_found",
            ServerError::StaticAssetForbidden(_) => "forbidden",
            ServerError::Database(DbError::DuplicateLike(_)) => "already_liked",
            ServerError::JsonRejection(_) | ServerError::PayloadDecode(_) => "decoding",
            ServerError::EmptyText(_) => "validation",
            ServerError::JsonResponse(_) | ServerError::Database(_) => "internal",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
struct ErrorResponse {
    status: u16,
    kind: &'static str,
    error: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        error!(error = %self, %status, "Replying with error");

        let error = if status.is_server_error() {
            "Internal server error".to_owned()
        } else {
            self.to_string()
        };
        let error_response = ErrorResponse {
            status: status.as_u16(),
            kind: self.kind(),
            error,
        };
        (status, Json(error_response)).into_response()
    }
}
