//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Request-specific DTOs where an endpoint needs more than a plain create

pub mod player;
pub mod video;
pub mod video_comment;
