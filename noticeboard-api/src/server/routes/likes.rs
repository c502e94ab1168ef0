use crate::server::{Result, ServerError, ServerRouter, fingerprint::ClientFingerprint, json::Json};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use noticeboard_common::model::{Id, post::PostMarker};
use noticeboard_db::client::DbClient;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> ServerRouter {
    ServerRouter::new().typed_post(like_post)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/like/{post_id}", rejection(ServerError))]
struct LikePostPath {
    post_id: Id<PostMarker>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Serialize)]
struct LikeResponse {
    likes: u64,
}

async fn like_post(
    LikePostPath { post_id }: LikePostPath,
    State(db): State<Arc<DbClient>>,
    ClientFingerprint(fingerprint): ClientFingerprint,
) -> Result<Json<LikeResponse>> {
    let likes = db.register_like(post_id, &fingerprint).await?;

    Ok(Json(LikeResponse { likes }))
}
