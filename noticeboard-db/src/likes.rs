//! The like ledger.
//!
//! One row per `(post, fingerprint)` pair, guarded by a unique constraint in
//! the store itself. The lookups before the insert only pick the error to
//! report; the constraint decides concurrent races.

use crate::{
    client::{DbClient, DbError, Result},
    posts::increment_likes_with,
    record::LikeRecord,
};
use noticeboard_common::{
    fingerprint::Fingerprint,
    model::{
        Id,
        like::Like,
        post::{Post, PostMarker},
    },
};
use sqlx::{query, query_as};
use tracing::{debug, info};

impl DbClient {
    pub async fn fetch_like(
        &self,
        post_id: Id<PostMarker>,
        fingerprint: &Fingerprint,
    ) -> Result<Option<Like>> {
        let record = query_as::<_, LikeRecord>(
            "
            SELECT id, post_id, fingerprint
            FROM likes
            WHERE post_id = ? AND fingerprint = ?
            ",
        )
        .bind(post_id.get())
        .bind(fingerprint.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Like::from))
    }

    /// Records a like from `fingerprint` and returns the post's new like count.
    pub async fn register_like(
        &self,
        post_id: Id<PostMarker>,
        fingerprint: &Fingerprint,
    ) -> Result<u64> {
        if self.fetch_like(post_id, fingerprint).await?.is_some() {
            info!(%post_id, "Rejected repeated like");
            return Err(DbError::DuplicateLike(post_id));
        }

        if self.fetch_post(post_id).await?.is_none() {
            return Err(DbError::PostNotFound(post_id));
        }

        let mut transaction = self.pool.begin().await?;

        let inserted = query(
            "
            INSERT INTO likes (post_id, fingerprint)
            VALUES (?, ?)
            ",
        )
        .bind(post_id.get())
        .bind(fingerprint.get())
        .execute(&mut *transaction)
        .await;

        if let Err(err) = inserted {
            let err = DbError::from_constraint(err, post_id);
            if matches!(err, DbError::DuplicateLike(_)) {
                info!(%post_id, "Rejected concurrent repeated like");
            }
            return Err(err);
        }

        let record = increment_likes_with(&mut *transaction, post_id)
            .await?
            .ok_or(DbError::PostNotFound(post_id))?;

        transaction.commit().await?;

        let post = Post::try_from(record)?;
        debug!(%post_id, likes = post.likes, "Registered like");

        Ok(post.likes)
    }
}
