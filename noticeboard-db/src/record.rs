use noticeboard_common::{
    fingerprint::Fingerprint,
    model::{
        ModelValidationError, comment::Comment, like::Like, post::Post, text::BoardText,
    },
};
use sqlx::FromRow;
use time::PrimitiveDateTime;

pub(crate) const POST_COLUMNS: &str = "id, text, likes, created_at";
pub(crate) const COMMENT_COLUMNS: &str = "id, post_id, text, created_at";

#[derive(Clone, Eq, PartialEq, Debug, Hash, FromRow)]
pub(crate) struct PostRecord {
    pub id: i64,
    pub text: String,
    pub likes: i64,
    pub created_at: PrimitiveDateTime,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, FromRow)]
pub(crate) struct CommentRecord {
    pub id: i64,
    pub post_id: i64,
    pub text: String,
    pub created_at: PrimitiveDateTime,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, FromRow)]
pub(crate) struct LikeRecord {
    pub id: i64,
    pub post_id: i64,
    pub fingerprint: String,
}

// Stored text went through the sanitizer on the way in; converting it into a
// `BoardText` escapes it again on the way out.

impl TryFrom<PostRecord> for Post {
    type Error = ModelValidationError;

    fn try_from(value: PostRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            text: BoardText::try_from(value.text)?,
            likes: u64::try_from(value.likes)
                .map_err(|_| ModelValidationError::NegativeLikeCount(value.likes))?,
            created_at: value.created_at.as_utc(),
        })
    }
}

impl TryFrom<CommentRecord> for Comment {
    type Error = ModelValidationError;

    fn try_from(value: CommentRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            post_id: value.post_id.into(),
            text: BoardText::try_from(value.text)?,
            created_at: value.created_at.as_utc(),
        })
    }
}

impl From<LikeRecord> for Like {
    fn from(value: LikeRecord) -> Self {
        Self {
            id: value.id.into(),
            post_id: value.post_id.into(),
            fingerprint: Fingerprint::new(value.fingerprint),
        }
    }
}
