use crate::server::{
    Result, ServerError, ServerRouter,
    json::{Created, Json},
};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use noticeboard_common::{
    model::{Id, comment::Comment, post::PostMarker},
    payload::TextPayload,
};
use noticeboard_db::client::DbClient;
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_post(create_comment)
        .typed_get(list_comments)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/comment/{post_id}", rejection(ServerError))]
struct CreateCommentPath {
    post_id: Id<PostMarker>,
}

async fn create_comment(
    CreateCommentPath { post_id }: CreateCommentPath,
    State(db): State<Arc<DbClient>>,
    Json(payload): Json<TextPayload>,
) -> Result<Created<Comment>> {
    let text = payload.validate()?;
    let comment = db.create_comment(post_id, &text).await?;

    Ok(Created(comment))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/comments/{post_id}", rejection(ServerError))]
struct ListCommentsPath {
    post_id: Id<PostMarker>,
}

async fn list_comments(
    ListCommentsPath { post_id }: ListCommentsPath,
    State(db): State<Arc<DbClient>>,
) -> Result<Json<Vec<Comment>>> {
    let comments = db.fetch_comments(post_id).await?;

    Ok(Json(comments))
}
