//! Field placement model and roster partitioning.
//!
//! A placement is either a pair of percentage coordinates on the board or
//! the bench. The remote `players` table stores this as two nullable
//! percentage-string columns (`pos_top` / `pos_left`) that must be set
//! together; the tagged enum makes the both-or-neither rule unrepresentable
//! rather than a runtime convention.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lower bound of the board coordinate space, in percent.
pub const MIN_PERCENT: f64 = 0.0;

/// Upper bound of the board coordinate space, in percent.
pub const MAX_PERCENT: f64 = 100.0;

/// Centre of the board, used as the default coordinate when none is known.
pub const CENTER_PERCENT: f64 = 50.0;

/// Where an entity sits relative to the board.
///
/// `top` / `left` are percentages of the board's height and width. They are
/// only guaranteed to be within `[0, 100]` after [`Placement::clamped`] —
/// during a drag they track the pointer unclamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
    OnField { top: f64, left: f64 },
    Benched,
}

impl Placement {
    /// Placement at the centre of the board.
    pub fn center() -> Self {
        Self::OnField {
            top: CENTER_PERCENT,
            left: CENTER_PERCENT,
        }
    }

    pub fn is_on_field(&self) -> bool {
        matches!(self, Self::OnField { .. })
    }

    /// Clamp both coordinates to `[0, 100]`. Benched stays benched.
    pub fn clamped(self) -> Self {
        match self {
            Self::OnField { top, left } => Self::OnField {
                top: top.clamp(MIN_PERCENT, MAX_PERCENT),
                left: left.clamp(MIN_PERCENT, MAX_PERCENT),
            },
            Self::Benched => Self::Benched,
        }
    }

    /// Build a placement from the nullable column pair.
    ///
    /// Both null means benched; both present means on-field. A mixed pair
    /// violates the storage invariant and is rejected.
    pub fn from_columns(
        pos_top: Option<&str>,
        pos_left: Option<&str>,
    ) -> Result<Self, CoreError> {
        match (pos_top, pos_left) {
            (None, None) => Ok(Self::Benched),
            (Some(top), Some(left)) => Ok(Self::OnField {
                top: parse_percent(top)?,
                left: parse_percent(left)?,
            }),
            _ => Err(CoreError::Validation(
                "pos_top and pos_left must both be set or both be null".to_string(),
            )),
        }
    }

    /// Convert back to the nullable column pair (`"37.5%"` style strings).
    pub fn to_columns(&self) -> (Option<String>, Option<String>) {
        match self {
            Self::OnField { top, left } => (Some(format_percent(*top)), Some(format_percent(*left))),
            Self::Benched => (None, None),
        }
    }
}

/// Parse a percentage string such as `"37.5%"`. A missing `%` suffix is
/// tolerated, matching what the original data contains. Non-finite values
/// (`"NaN"`, `"inf"`) are rejected: a placement must be a real coordinate.
pub fn parse_percent(value: &str) -> Result<f64, CoreError> {
    let trimmed = value.trim().trim_end_matches('%');
    let parsed = trimmed
        .parse::<f64>()
        .map_err(|_| CoreError::Validation(format!("Invalid percentage value '{value}'")))?;
    if !parsed.is_finite() {
        return Err(CoreError::Validation(format!(
            "Invalid percentage value '{value}'"
        )));
    }
    Ok(parsed)
}

/// Format a coordinate as a percentage string (`50` becomes `"50%"`).
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

/// Partition a roster into (on-field, bench) by placement presence.
///
/// Relative order within each partition follows the input order. An empty
/// roster yields two empty vectors.
pub fn partition_roster<T>(items: Vec<T>, is_on_field: impl Fn(&T) -> bool) -> (Vec<T>, Vec<T>) {
    let mut on_field = Vec::new();
    let mut bench = Vec::new();
    for item in items {
        if is_on_field(&item) {
            on_field.push(item);
        } else {
            bench.push(item);
        }
    }
    (on_field, bench)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- parse_percent / format_percent --------------------------------------

    #[test]
    fn percent_with_suffix_parsed() {
        assert_eq!(parse_percent("50%").unwrap(), 50.0);
        assert_eq!(parse_percent("37.5%").unwrap(), 37.5);
    }

    #[test]
    fn percent_without_suffix_parsed() {
        assert_eq!(parse_percent("12").unwrap(), 12.0);
    }

    #[test]
    fn percent_garbage_rejected() {
        assert!(parse_percent("abc").is_err());
        assert!(parse_percent("").is_err());
    }

    #[test]
    fn percent_non_finite_rejected() {
        assert!(parse_percent("NaN").is_err());
        assert!(parse_percent("inf").is_err());
        assert!(parse_percent("-inf%").is_err());
        assert!(Placement::from_columns(Some("NaN"), Some("50%")).is_err());
    }

    #[test]
    fn percent_round_trips() {
        assert_eq!(format_percent(50.0), "50%");
        assert_eq!(parse_percent(&format_percent(37.5)).unwrap(), 37.5);
    }

    // -- from_columns / to_columns -------------------------------------------

    #[test]
    fn both_null_is_benched() {
        assert_eq!(Placement::from_columns(None, None).unwrap(), Placement::Benched);
    }

    #[test]
    fn both_present_is_on_field() {
        let p = Placement::from_columns(Some("25%"), Some("75%")).unwrap();
        assert_eq!(p, Placement::OnField { top: 25.0, left: 75.0 });
    }

    #[test]
    fn mixed_null_rejected() {
        assert!(Placement::from_columns(Some("50%"), None).is_err());
        assert!(Placement::from_columns(None, Some("50%")).is_err());
    }

    #[test]
    fn columns_round_trip() {
        let p = Placement::OnField { top: 10.0, left: 90.0 };
        let (top, left) = p.to_columns();
        let back = Placement::from_columns(top.as_deref(), left.as_deref()).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn benched_columns_are_null() {
        assert_eq!(Placement::Benched.to_columns(), (None, None));
    }

    // -- clamped --------------------------------------------------------------

    #[test]
    fn clamp_pulls_overshoot_back_in() {
        let p = Placement::OnField { top: 110.0, left: -5.0 }.clamped();
        assert_eq!(p, Placement::OnField { top: 100.0, left: 0.0 });
    }

    #[test]
    fn clamp_leaves_in_range_untouched() {
        let p = Placement::OnField { top: 50.0, left: 42.0 };
        assert_eq!(p.clamped(), p);
    }

    #[test]
    fn clamp_keeps_benched() {
        assert_eq!(Placement::Benched.clamped(), Placement::Benched);
    }

    // -- partition_roster ------------------------------------------------------

    #[test]
    fn partition_splits_by_placement() {
        let roster = vec![
            (1, Placement::Benched),
            (2, Placement::OnField { top: 50.0, left: 50.0 }),
        ];
        let (on_field, bench) = partition_roster(roster, |(_, p)| p.is_on_field());
        assert_eq!(on_field.iter().map(|(id, _)| *id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(bench.iter().map(|(id, _)| *id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn partition_preserves_order_and_length() {
        let roster: Vec<(i64, Placement)> = vec![
            (1, Placement::OnField { top: 1.0, left: 1.0 }),
            (2, Placement::Benched),
            (3, Placement::OnField { top: 2.0, left: 2.0 }),
            (4, Placement::Benched),
        ];
        let total = roster.len();
        let (on_field, bench) = partition_roster(roster, |(_, p)| p.is_on_field());
        assert_eq!(on_field.len() + bench.len(), total);
        assert_eq!(on_field.iter().map(|(id, _)| *id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(bench.iter().map(|(id, _)| *id).collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn partition_empty_roster() {
        let (on_field, bench) = partition_roster(Vec::<(i64, Placement)>::new(), |(_, p)| p.is_on_field());
        assert!(on_field.is_empty());
        assert!(bench.is_empty());
    }
}
