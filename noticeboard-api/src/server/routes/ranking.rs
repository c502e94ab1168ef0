use crate::server::{Result, ServerError, ServerRouter, json::Json};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use noticeboard_common::model::post::{RANKING_SIZE, RankedPost};
use noticeboard_db::client::DbClient;
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> ServerRouter {
    ServerRouter::new().typed_get(ranking)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/ranking", rejection(ServerError))]
struct RankingPath();

async fn ranking(
    RankingPath(): RankingPath,
    State(db): State<Arc<DbClient>>,
) -> Result<Json<Vec<RankedPost>>> {
    let posts = db.fetch_top_posts(RANKING_SIZE).await?;

    Ok(Json(posts.into_iter().map(RankedPost::from).collect()))
}
