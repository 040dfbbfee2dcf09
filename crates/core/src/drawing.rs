//! Freehand annotation layer for the tactics board.
//!
//! Three tool modes: `Move` (drawing disabled, drag controller active),
//! `Pen` (pointer-down starts a draft polyline, motion appends points,
//! release finalizes at two or more points), and `Eraser` (pointer-down
//! removes every finalized line with a point near the press).
//!
//! The visible canvas is a pure function of this state: renderers must clear
//! and redraw everything returned by [`DrawingState::visible_strokes`]
//! whenever it changes. A surface resize destroys the compositing buffer, so
//! the same full redraw applies immediately after resizing.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Eraser proximity threshold: a line is removed when any of its points is
/// within this many pixels of the press location on both axes.
pub const ERASER_PROXIMITY_PX: f64 = 20.0;

/// Minimum number of points for a line to be finalized.
pub const MIN_LINE_POINTS: usize = 2;

/// Maximum stroke width in pixels.
pub const MAX_STROKE_WIDTH: f64 = 20.0;

/// Minimum stroke width in pixels.
pub const MIN_STROKE_WIDTH: f64 = 0.5;

/// Default pen colour.
pub const DEFAULT_PEN_COLOR: &str = "#ff4444";

/// Default pen stroke width in pixels.
pub const DEFAULT_PEN_WIDTH: f64 = 3.0;

/// Active drawing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolMode {
    Move,
    Pen,
    Eraser,
}

/// A point in the drawing surface's local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A finalized freehand line. Immutable once committed; persisted verbatim
/// under the `saved-lines` device-store key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationLine {
    pub id: u64,
    pub points: Vec<Point>,
    pub color: String,
    pub width: f64,
}

/// Validate that a stroke width is within the allowed range.
pub fn validate_stroke_width(width: f64) -> Result<(), CoreError> {
    if width.is_nan() || width.is_infinite() {
        return Err(CoreError::Validation(
            "stroke width must be a finite number".to_string(),
        ));
    }
    if width < MIN_STROKE_WIDTH || width > MAX_STROKE_WIDTH {
        return Err(CoreError::Validation(format!(
            "stroke width must be between {MIN_STROKE_WIDTH} and {MAX_STROKE_WIDTH}, got {width}"
        )));
    }
    Ok(())
}

/// Validate that a color string matches `#RRGGBB` or `#RRGGBBAA` hex format.
pub fn validate_color_hex(color: &str) -> Result<(), CoreError> {
    let valid_length = color.len() == 7 || color.len() == 9;

    if !valid_length || !color.starts_with('#') {
        return Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Must be in #RRGGBB or #RRGGBBAA hex format"
        )));
    }

    if !color[1..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Must contain only hex digits after '#'"
        )));
    }

    Ok(())
}

/// Validate a finalized line (used when lines arrive over the wire rather
/// than through the reducer).
pub fn validate_line(line: &AnnotationLine) -> Result<(), CoreError> {
    if line.points.len() < MIN_LINE_POINTS {
        return Err(CoreError::Validation(format!(
            "An annotation line needs at least {MIN_LINE_POINTS} points, got {}",
            line.points.len()
        )));
    }
    validate_color_hex(&line.color)?;
    validate_stroke_width(line.width)
}

/// Annotation layer state: finalized lines plus the in-progress draft.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingState {
    pub mode: ToolMode,
    pub lines: Vec<AnnotationLine>,
    pub pen_color: String,
    pub pen_width: f64,
    draft: Vec<Point>,
    drawing: bool,
    next_id: u64,
}

impl DrawingState {
    pub fn new(lines: Vec<AnnotationLine>) -> Self {
        let next_id = lines.iter().map(|l| l.id + 1).max().unwrap_or(1);
        Self {
            mode: ToolMode::Move,
            lines,
            pen_color: DEFAULT_PEN_COLOR.to_string(),
            pen_width: DEFAULT_PEN_WIDTH,
            draft: Vec::new(),
            drawing: false,
            next_id,
        }
    }

    /// Switch tools. Any in-progress draft is discarded.
    pub fn set_mode(&mut self, mode: ToolMode) {
        self.mode = mode;
        self.draft.clear();
        self.drawing = false;
    }

    /// The in-progress draft points, if a pen stroke is underway.
    pub fn draft(&self) -> Option<&[Point]> {
        if self.drawing {
            Some(&self.draft)
        } else {
            None
        }
    }

    /// Everything a renderer must draw after clearing the surface: all
    /// finalized lines followed by the draft stroke.
    pub fn visible_strokes(&self) -> Vec<&[Point]> {
        let mut strokes: Vec<&[Point]> = self.lines.iter().map(|l| l.points.as_slice()).collect();
        if self.drawing {
            strokes.push(&self.draft);
        }
        strokes
    }

    /// Pointer press on the drawing surface, in local pixel coordinates.
    ///
    /// Pen: begins a new draft. Eraser: removes nearby lines and returns how
    /// many were erased (the caller persists when nonzero). Move: no effect.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> usize {
        match self.mode {
            ToolMode::Pen => {
                self.drawing = true;
                self.draft = vec![Point { x, y }];
                0
            }
            ToolMode::Eraser => self.erase_at(x, y),
            ToolMode::Move => 0,
        }
    }

    /// Pointer motion while pressed; appends to the draft in pen mode.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if self.mode == ToolMode::Pen && self.drawing {
            self.draft.push(Point { x, y });
        }
    }

    /// Pointer release. In pen mode, promotes the draft to a finalized line
    /// when it has at least [`MIN_LINE_POINTS`] points, otherwise discards
    /// it. Returns the committed line's id, if any.
    pub fn pointer_up(&mut self) -> Option<u64> {
        if self.mode != ToolMode::Pen || !self.drawing {
            return None;
        }
        self.drawing = false;
        let points = std::mem::take(&mut self.draft);
        if points.len() < MIN_LINE_POINTS {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.lines.push(AnnotationLine {
            id,
            points,
            color: self.pen_color.clone(),
            width: self.pen_width,
        });
        Some(id)
    }

    /// Remove every finalized line with at least one point within
    /// [`ERASER_PROXIMITY_PX`] of `(x, y)` on both axes. Returns the number
    /// of lines removed.
    fn erase_at(&mut self, x: f64, y: f64) -> usize {
        let before = self.lines.len();
        self.lines.retain(|line| {
            !line.points.iter().any(|p| {
                (p.x - x).abs() <= ERASER_PROXIMITY_PX && (p.y - y).abs() <= ERASER_PROXIMITY_PX
            })
        });
        before - self.lines.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
