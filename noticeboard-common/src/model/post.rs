use crate::model::{Id, serialize_timestamp, text::BoardText};
use serde::Serialize;
use time::UtcDateTime;

/// Number of posts returned by the ranking.
pub const RANKING_SIZE: u32 = 10;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostMarker;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
pub struct Post {
    pub id: Id<PostMarker>,
    pub text: BoardText,
    pub likes: u64,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: UtcDateTime,
}

/// A post as listed in the ranking.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
pub struct RankedPost {
    pub id: Id<PostMarker>,
    pub text: BoardText,
    pub likes: u64,
}

impl From<Post> for RankedPost {
    fn from(value: Post) -> Self {
        Self {
            id: value.id,
            text: value.text,
            likes: value.likes,
        }
    }
}
