//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod player_repo;
pub mod video_comment_repo;
pub mod video_repo;

pub use player_repo::PlayerRepo;
pub use video_comment_repo::VideoCommentRepo;
pub use video_repo::VideoRepo;
