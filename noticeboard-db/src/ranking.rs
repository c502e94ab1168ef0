use crate::{
    client::{DbClient, Result},
    record::{POST_COLUMNS, PostRecord},
};
use noticeboard_common::model::post::Post;
use sqlx::query_as;

impl DbClient {
    /// The `limit` most liked posts. Equal counts keep insertion order.
    pub async fn fetch_top_posts(&self, limit: u32) -> Result<Vec<Post>> {
        let records = query_as::<_, PostRecord>(&format!(
            "
            SELECT {POST_COLUMNS}
            FROM posts
            ORDER BY likes DESC, id ASC
            LIMIT ?
            "
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let posts: Vec<Post> = records
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<_, _>>()?;
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::DbClient;
    use noticeboard_common::{
        fingerprint::Fingerprint,
        model::{
            Id,
            post::{PostMarker, RANKING_SIZE},
            text::BoardText,
        },
    };

    async fn post_with_likes(db: &DbClient, name: &str, likes: usize) -> Id<PostMarker> {
        let post = db.create_post(&BoardText::new(name).unwrap()).await.unwrap();
        for like in 0..likes {
            let fingerprint = Fingerprint::new(format!("client-{like}"));
            db.register_like(post.id, &fingerprint).await.unwrap();
        }
        post.id
    }

    #[tokio::test]
    async fn most_liked_first() {
        let db = DbClient::in_memory().await.unwrap();
        let a = post_with_likes(&db, "A", 3).await;
        let b = post_with_likes(&db, "B", 5).await;
        let c = post_with_likes(&db, "C", 1).await;

        let ranking = db.fetch_top_posts(RANKING_SIZE).await.unwrap();
        let ids: Vec<_> = ranking.iter().map(|post| post.id).collect();
        assert_eq!(ids, vec![b, a, c]);

        let likes: Vec<_> = ranking.iter().map(|post| post.likes).collect();
        assert_eq!(likes, vec![5, 3, 1]);
    }

    #[tokio::test]
    async fn truncated_to_limit() {
        let db = DbClient::in_memory().await.unwrap();
        for index in 0..12 {
            post_with_likes(&db, &format!("post {index}"), index % 4).await;
        }

        let ranking = db.fetch_top_posts(RANKING_SIZE).await.unwrap();
        assert_eq!(ranking.len(), 10);
        assert!(ranking.is_sorted_by(|a, b| a.likes >= b.likes));
    }

    #[tokio::test]
    async fn stable_between_calls() {
        let db = DbClient::in_memory().await.unwrap();
        for index in 0..5 {
            post_with_likes(&db, &format!("tied {index}"), 2).await;
        }

        let first = db.fetch_top_posts(RANKING_SIZE).await.unwrap();
        let second = db.fetch_top_posts(RANKING_SIZE).await.unwrap();
        assert_eq!(first, second);
    }
}
