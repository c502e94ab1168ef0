use crate::model::{Id, post::PostMarker, serialize_timestamp, text::BoardText};
use serde::Serialize;
use time::UtcDateTime;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct CommentMarker;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
pub struct Comment {
    pub id: Id<CommentMarker>,
    #[serde(skip)]
    pub post_id: Id<PostMarker>,
    pub text: BoardText,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: UtcDateTime,
}
