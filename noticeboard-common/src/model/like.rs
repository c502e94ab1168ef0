use crate::{fingerprint::Fingerprint, model::{Id, post::PostMarker}};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct LikeMarker;

/// Ledger entry recording that one fingerprint liked one post.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Like {
    pub id: Id<LikeMarker>,
    pub post_id: Id<PostMarker>,
    pub fingerprint: Fingerprint,
}
