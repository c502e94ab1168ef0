use crate::server::{
    Result, ServerError, ServerRouter,
    json::{Created, Json},
};
use axum::{body::Bytes, extract::State};
use axum_extra::routing::{RouterExt, TypedPath};
use noticeboard_common::{
    model::{
        Id,
        post::{Post, PostMarker},
    },
    payload::decode_text_payload,
};
use noticeboard_db::client::DbClient;
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_post(create_post)
        .typed_get(list_posts)
        .typed_get(get_post)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/post", rejection(ServerError))]
struct CreatePostPath();

/// Expects the base64 encoding of `{"text": ...}` as the raw body.
async fn create_post(
    CreatePostPath(): CreatePostPath,
    State(db): State<Arc<DbClient>>,
    body: Bytes,
) -> Result<Created<Post>> {
    let text = decode_text_payload(&body)?.validate()?;
    let post = db.create_post(&text).await?;

    Ok(Created(post))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts", rejection(ServerError))]
struct ListPostsPath();

async fn list_posts(
    ListPostsPath(): ListPostsPath,
    State(db): State<Arc<DbClient>>,
) -> Result<Json<Vec<Post>>> {
    let posts = db.fetch_posts().await?;

    Ok(Json(posts))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts/{id}", rejection(ServerError))]
struct GetPostPath {
    id: Id<PostMarker>,
}

async fn get_post(
    GetPostPath { id }: GetPostPath,
    State(db): State<Arc<DbClient>>,
) -> Result<Json<Post>> {
    let post = db
        .fetch_post(id)
        .await?
        .ok_or(ServerError::PostByIdNotFound(id))?;

    Ok(Json(post))
}
