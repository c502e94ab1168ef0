use crate::{
    client::{DbClient, DbError, Result},
    record::{COMMENT_COLUMNS, CommentRecord},
};
use noticeboard_common::model::{
    Id,
    comment::Comment,
    post::PostMarker,
    text::BoardText,
};
use sqlx::query_as;
use tracing::debug;

impl DbClient {
    /// Attaches a comment to an existing post.
    pub async fn create_comment(
        &self,
        post_id: Id<PostMarker>,
        text: &BoardText,
    ) -> Result<Comment> {
        if self.fetch_post(post_id).await?.is_none() {
            return Err(DbError::PostNotFound(post_id));
        }

        let record = query_as::<_, CommentRecord>(&format!(
            "
            INSERT INTO comments (post_id, text)
            VALUES (?, ?)
            RETURNING {COMMENT_COLUMNS}
            "
        ))
        .bind(post_id.get())
        .bind(text.get())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| DbError::from_constraint(err, post_id))?;

        let comment = Comment::try_from(record)?;
        debug!(%post_id, comment_id = %comment.id, "Created comment");

        Ok(comment)
    }

    /// Comments on `post_id`, newest first. Unknown posts have no comments.
    pub async fn fetch_comments(&self, post_id: Id<PostMarker>) -> Result<Vec<Comment>> {
        let records = query_as::<_, CommentRecord>(&format!(
            "
            SELECT {COMMENT_COLUMNS}
            FROM comments
            WHERE post_id = ?
            ORDER BY created_at DESC, id DESC
            "
        ))
        .bind(post_id.get())
        .fetch_all(&self.pool)
        .await?;

        let comments: Vec<Comment> = records
            .into_iter()
            .map(Comment::try_from)
            .collect::<Result<_, _>>()?;
        Ok(comments)
    }
}
