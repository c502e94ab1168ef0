use crate::{
    client::{DbClient, DbError, Result},
    record::{POST_COLUMNS, PostRecord},
};
use noticeboard_common::model::{
    Id,
    post::{Post, PostMarker},
    text::BoardText,
};
use sqlx::{SqliteExecutor, query_as};
use tracing::debug;

impl DbClient {
    pub async fn create_post(&self, text: &BoardText) -> Result<Post> {
        let record = query_as::<_, PostRecord>(&format!(
            "
            INSERT INTO posts (text)
            VALUES (?)
            RETURNING {POST_COLUMNS}
            "
        ))
        .bind(text.get())
        .fetch_one(&self.pool)
        .await?;

        let post = Post::try_from(record)?;
        debug!(post_id = %post.id, "Created post");

        Ok(post)
    }

    /// All posts, newest first.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>> {
        let records = query_as::<_, PostRecord>(&format!(
            "
            SELECT {POST_COLUMNS}
            FROM posts
            ORDER BY created_at DESC, id DESC
            "
        ))
        .fetch_all(&self.pool)
        .await?;

        let posts: Vec<Post> = records
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<_, _>>()?;
        Ok(posts)
    }

    pub async fn fetch_post(&self, post_id: Id<PostMarker>) -> Result<Option<Post>> {
        let record = query_as::<_, PostRecord>(&format!(
            "
            SELECT {POST_COLUMNS}
            FROM posts
            WHERE id = ?
            "
        ))
        .bind(post_id.get())
        .fetch_optional(&self.pool)
        .await?;

        let post = record.map(Post::try_from).transpose()?;
        Ok(post)
    }

    /// Adds exactly one like to the post's counter.
    ///
    /// Callers outside the like ledger bypass fingerprint deduplication.
    pub async fn increment_likes(&self, post_id: Id<PostMarker>) -> Result<Post> {
        let record = increment_likes_with(&self.pool, post_id)
            .await?
            .ok_or(DbError::PostNotFound(post_id))?;

        Ok(Post::try_from(record)?)
    }
}

/// Single-statement increment, so concurrent likes never overwrite each other.
pub(crate) async fn increment_likes_with<'e, E>(
    executor: E,
    post_id: Id<PostMarker>,
) -> Result<Option<PostRecord>>
where
    E: SqliteExecutor<'e>,
{
    let record = query_as::<_, PostRecord>(&format!(
        "
        UPDATE posts
        SET likes = likes + 1
        WHERE id = ?
        RETURNING {POST_COLUMNS}
        "
    ))
    .bind(post_id.get())
    .fetch_optional(executor)
    .await?;

    Ok(record)
}

#[cfg(test)]
mod tests {
    use crate::client::{DbClient, DbError};
    use noticeboard_common::model::{Id, text::BoardText};
    use std::sync::Arc;
    use tokio::task::JoinSet;

    fn text(raw: &str) -> BoardText {
        BoardText::new(raw).unwrap()
    }

    #[tokio::test]
    async fn create_and_fetch() {
        let db = DbClient::in_memory().await.unwrap();

        let created = db.create_post(&text("first post")).await.unwrap();
        assert_eq!(created.text.get(), "first post");
        assert_eq!(created.likes, 0);

        let fetched = db.fetch_post(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn ids_are_monotonic() {
        let db = DbClient::in_memory().await.unwrap();

        let first = db.create_post(&text("a")).await.unwrap();
        let second = db.create_post(&text("b")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn newest_first() {
        let db = DbClient::in_memory().await.unwrap();

        let first = db.create_post(&text("P1")).await.unwrap();
        let second = db.create_post(&text("P2")).await.unwrap();

        let posts = db.fetch_posts().await.unwrap();
        assert_eq!(posts, vec![second, first]);
    }

    #[tokio::test]
    async fn stored_text_is_escaped() {
        let db = DbClient::in_memory().await.unwrap();

        db.create_post(&text("<script>")).await.unwrap();

        let posts = db.fetch_posts().await.unwrap();
        assert_eq!(posts[0].text.get(), "&lt;script&gt;");
    }

    #[tokio::test]
    async fn missing_post() {
        let db = DbClient::in_memory().await.unwrap();

        assert_eq!(db.fetch_post(Id::new(404)).await.unwrap(), None);
        assert!(matches!(
            db.increment_likes(Id::new(404)).await,
            Err(DbError::PostNotFound(id)) if id == Id::new(404)
        ));
    }

    #[tokio::test]
    async fn increment() {
        let db = DbClient::in_memory().await.unwrap();
        let post = db.create_post(&text("counted")).await.unwrap();

        assert_eq!(db.increment_likes(post.id).await.unwrap().likes, 1);
        assert_eq!(db.increment_likes(post.id).await.unwrap().likes, 2);
    }

    #[tokio::test]
    async fn concurrent_increments_all_land() {
        let db = Arc::new(DbClient::in_memory().await.unwrap());
        let post = db.create_post(&text("popular")).await.unwrap();

        let mut tasks = JoinSet::new();
        for _ in 0..20 {
            let db = Arc::clone(&db);
            tasks.spawn(async move { db.increment_likes(post.id).await });
        }
        while let Some(result) = tasks.join_next().await {
            result.unwrap().unwrap();
        }

        let post = db.fetch_post(post.id).await.unwrap().unwrap();
        assert_eq!(post.likes, 20);
    }
}
