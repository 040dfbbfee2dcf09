//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource area.
//! Handlers validate with `pitchside_core`, delegate to the corresponding
//! repository in `pitchside_db`, and map errors via [`crate::error::AppError`].

pub mod board;
pub mod comments;
pub mod health;
pub mod players;
pub mod videos;
