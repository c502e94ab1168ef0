pub mod client;
pub mod comments;
pub mod likes;
pub mod posts;
pub mod ranking;
mod record;
