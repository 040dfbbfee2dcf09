//! Domain logic for the Pitchside fan site.
//!
//! Pure, dependency-light models and reducers: the tactics-board drag
//! controller, the freehand annotation layer, percentage placements, video
//! link parsing, and the file-backed device store. Persistence and HTTP live
//! in the `pitchside-db` and `pitchside-api` crates.

pub mod board;
pub mod device_store;
pub mod drawing;
pub mod error;
pub mod placement;
pub mod types;
pub mod video_link;
