//! Shared scalar type aliases.

/// Database row identifier (PostgreSQL BIGSERIAL).
pub type DbId = i64;

/// UTC timestamp, as stored in `created_at` columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
