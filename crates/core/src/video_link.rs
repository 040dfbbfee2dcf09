//! Video upload parsing and validation.
//!
//! Uploads arrive as a full YouTube URL; only the 11-character video id is
//! stored. A link that cannot be parsed aborts the upload before any write.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::CoreError;

/// Length of a YouTube video id.
pub const VIDEO_ID_LEN: usize = 11;

/// Video categories accepted by the upload form.
pub mod categories {
    pub const TACTICS: &str = "tactics";
    pub const ATTACK: &str = "attack";
    pub const DEFENSE: &str = "defense";
    pub const HIGHLIGHTS: &str = "highlights";
    pub const MATCH: &str = "match";
    pub const OTHER: &str = "other";

    /// All recognised categories.
    pub const ALL: &[&str] = &[TACTICS, ATTACK, DEFENSE, HIGHLIGHTS, MATCH, OTHER];
}

/// Default category when the form leaves it unset.
pub const DEFAULT_CATEGORY: &str = categories::TACTICS;

fn video_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Accepts youtu.be short links, /v/, /u/*/, /embed/, watch?v= and &v=.
        Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
            .expect("video id pattern is valid")
    })
}

/// Extract the 11-character video id from a YouTube URL.
pub fn extract_video_id(url: &str) -> Result<String, CoreError> {
    let captures = video_id_regex().captures(url);
    let id = captures
        .and_then(|c| c.get(2))
        .map(|m| m.as_str())
        .filter(|id| id.len() == VIDEO_ID_LEN);

    match id {
        Some(id) => Ok(id.to_string()),
        None => Err(CoreError::Validation(format!(
            "'{url}' is not a valid YouTube link"
        ))),
    }
}

/// Check whether a category string is recognised.
pub fn is_valid_category(category: &str) -> bool {
    categories::ALL.contains(&category)
}

/// Validate a category, listing the vocabulary on failure.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if is_valid_category(category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid category '{category}'. Must be one of: {}",
            categories::ALL.join(", ")
        )))
    }
}

/// Validate that a required form field is non-empty after trimming.
pub fn validate_required(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
