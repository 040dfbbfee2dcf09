//! Tactics-board drag controller.
//!
//! A pure state machine over pointer events: pressing a rendered entity
//! starts a drag, motion tracks the pointer as unclamped board percentages,
//! and release decides field-vs-bench from the release point. Persistence is
//! the caller's concern — the reducer only mutates the in-memory model, so
//! the field/bench logic is unit-testable without any network dependency.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::placement::{format_percent, parse_percent, Placement, CENTER_PERCENT};
use crate::types::DbId;

/// What kind of entity a drag is manipulating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Player,
    Opponent,
}

/// Drag controller state. At most one entity is dragged at a time; all
/// drags share this single slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { id: DbId, kind: EntityKind },
}

/// Result of a drag release, so callers can decide whether to persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Released inside the board; placement clamped to `[0, 100]`.
    PlacedOnField,
    /// Released outside the board; the player was benched.
    Benched,
    /// An opponent marker was released (opponents never bench).
    OpponentPlaced,
}

/// The board container's bounding rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoardRect {
    /// Inclusive containment test against absolute screen coordinates.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left
            && x <= self.left + self.width
            && y >= self.top
            && y <= self.top + self.height
    }

    /// Convert a screen point to board percentages `(top, left)`.
    ///
    /// Returns `None` when the board has not been laid out yet (zero or
    /// negative dimensions), in which case pointer motion is skipped.
    pub fn to_percent(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let left_pct = (x - self.left) / self.width * 100.0;
        let top_pct = (y - self.top) / self.height * 100.0;
        Some((top_pct, left_pct))
    }
}

/// A roster entry as the board sees it: identity plus placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSpot {
    pub id: DbId,
    pub placement: Placement,
}

/// An opposing-formation marker. Always on the board — there is no bench
/// state for opponents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpponentMarker {
    pub id: DbId,
    pub top: f64,
    pub left: f64,
}

/// Wire form of an opponent marker as stored under the `opponents-tactics`
/// device-store key: `{id, pos_top, pos_left}` with percentage strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredOpponent {
    pub id: DbId,
    pub pos_top: String,
    pub pos_left: String,
}

impl OpponentMarker {
    pub fn to_stored(&self) -> StoredOpponent {
        StoredOpponent {
            id: self.id,
            pos_top: format_percent(self.top),
            pos_left: format_percent(self.left),
        }
    }

    pub fn from_stored(stored: &StoredOpponent) -> Result<Self, CoreError> {
        Ok(Self {
            id: stored.id,
            top: parse_percent(&stored.pos_top)?,
            left: parse_percent(&stored.pos_left)?,
        })
    }
}

/// Preset opposing back four, used when the device store has no saved
/// opponent layout.
pub fn default_opponents() -> Vec<OpponentMarker> {
    [20.0, 40.0, 60.0, 80.0]
        .iter()
        .enumerate()
        .map(|(i, &left)| OpponentMarker {
            id: (i + 1) as DbId,
            top: 25.0,
            left,
        })
        .collect()
}

/// In-memory board model: the roster, the opponent markers, and the drag
/// slot. All mutation goes through the pointer-event reducers below.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub players: Vec<PlayerSpot>,
    pub opponents: Vec<OpponentMarker>,
    pub drag: DragState,
}

impl BoardState {
    pub fn new(players: Vec<PlayerSpot>, opponents: Vec<OpponentMarker>) -> Self {
        Self {
            players,
            opponents,
            drag: DragState::Idle,
        }
    }

    /// Pointer press on a rendered entity. Starts a drag when idle; a press
    /// while another drag is pending is ignored.
    pub fn press(&mut self, id: DbId, kind: EntityKind) {
        if let DragState::Idle = self.drag {
            self.drag = DragState::Dragging { id, kind };
        }
    }

    /// Pointer motion. Updates the dragged entity's placement to the raw
    /// (unclamped) board percentage so visual feedback tracks the pointer,
    /// including outside `[0, 100]`. Skipped entirely when the board rect is
    /// unavailable or has no extent.
    pub fn pointer_move(&mut self, rect: Option<&BoardRect>, x: f64, y: f64) {
        let DragState::Dragging { id, kind } = self.drag else {
            return;
        };
        let Some((top, left)) = rect.and_then(|r| r.to_percent(x, y)) else {
            return;
        };
        match kind {
            EntityKind::Player => {
                if let Some(spot) = self.players.iter_mut().find(|p| p.id == id) {
                    spot.placement = Placement::OnField { top, left };
                }
            }
            EntityKind::Opponent => {
                if let Some(marker) = self.opponents.iter_mut().find(|o| o.id == id) {
                    marker.top = top;
                    marker.left = left;
                }
            }
        }
    }

    /// Pointer release. Inside the board (inclusive bounds): clamp and keep
    /// on-field. Outside: bench the player, discarding whatever transient
    /// percentage was last computed. This is the sole field <-> bench
    /// transition. Returns `None` when no drag was pending.
    pub fn release(&mut self, rect: &BoardRect, x: f64, y: f64) -> Option<ReleaseOutcome> {
        let DragState::Dragging { id, kind } = self.drag else {
            return None;
        };
        self.drag = DragState::Idle;

        let inside = rect.contains(x, y);

        match kind {
            EntityKind::Player => {
                let spot = self.players.iter_mut().find(|p| p.id == id)?;
                if inside {
                    // A bench player dropped without recorded motion lands
                    // at the centre, matching the original board.
                    let current = match spot.placement {
                        Placement::OnField { .. } => spot.placement,
                        Placement::Benched => Placement::OnField {
                            top: CENTER_PERCENT,
                            left: CENTER_PERCENT,
                        },
                    };
                    spot.placement = current.clamped();
                    Some(ReleaseOutcome::PlacedOnField)
                } else {
                    spot.placement = Placement::Benched;
                    Some(ReleaseOutcome::Benched)
                }
            }
            EntityKind::Opponent => {
                // Opponents have no bench state; an outside release clamps
                // to the nearest edge.
                let marker = self.opponents.iter_mut().find(|o| o.id == id)?;
                marker.top = marker.top.clamp(0.0, 100.0);
                marker.left = marker.left.clamp(0.0, 100.0);
                Some(ReleaseOutcome::OpponentPlaced)
            }
        }
    }

    /// Split the roster into (on-field, bench) views, order-preserving.
    pub fn partition(&self) -> (Vec<&PlayerSpot>, Vec<&PlayerSpot>) {
        crate::placement::partition_roster(self.players.iter().collect(), |p: &&PlayerSpot| {
            p.placement.is_on_field()
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
