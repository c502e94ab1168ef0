use crate::server::ServerRouter;
use axum::{Router, routing::get};

mod assets;
mod comments;
mod likes;
mod posts;
mod ranking;

pub fn routes() -> ServerRouter {
    Router::new()
        .route("/", get(|| async { "noticeboard is running" }))
        .merge(posts::routes())
        .merge(comments::routes())
        .merge(likes::routes())
        .merge(ranking::routes())
        .merge(assets::routes())
}
