//! Interior control points of an easing curve.
//!
//! An easing curve is a cubic Bézier whose first and last control points are
//! pinned at `(0,0)` and `(1,1)`.  Only the two interior points vary, so a
//! curve is fully described by the four scalars `x1, y1, x2, y2` — the same
//! arguments CSS `cubic-bezier()` takes.
//!
//! Evaluation never checks these values.  Keeping `x1` and `x2` inside
//! `[0, 1]` is what makes `x(t)` monotonic, and that is the caller's
//! responsibility.  [`ControlPoints::validate`] is available for callers who
//! want the check anyway.

use crate::point::Point2D;
use serde::{Deserialize, Serialize};

/// The interior control points `(x1, y1)` and `(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoints {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl ControlPoints {
    /// Create a set of control points.  No validation is performed.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// First interior control point.
    pub fn p1(&self) -> Point2D {
        Point2D::new(self.x1, self.y1)
    }

    /// Second interior control point.
    pub fn p2(&self) -> Point2D {
        Point2D::new(self.x2, self.y2)
    }

    /// The full control polygon `[(0,0), p1, p2, (1,1)]`.
    pub fn polygon(&self) -> [Point2D; 4] {
        [Point2D::ORIGIN, self.p1(), self.p2(), Point2D::UNIT]
    }

    /// Check that every coordinate is finite and that `x1` and `x2` lie in
    /// `[0, 1]`.
    ///
    /// `y1` and `y2` may leave the unit interval (overshooting curves such
    /// as "back" easings are legal CSS).
    pub fn validate(self) -> Result<Self, ControlPointError> {
        let coords = [("x1", self.x1), ("y1", self.y1), ("x2", self.x2), ("y2", self.y2)];
        for (name, value) in coords {
            if !value.is_finite() {
                return Err(ControlPointError::InvalidControlPoint { name, value });
            }
        }
        for (name, value) in [("x1", self.x1), ("x2", self.x2)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ControlPointError::InvalidControlPoint { name, value });
            }
        }
        Ok(self)
    }

    /// Check that `time` lies in `[0, 1]`.
    pub fn validate_time(time: f64) -> Result<f64, ControlPointError> {
        if (0.0..=1.0).contains(&time) {
            Ok(time)
        } else {
            Err(ControlPointError::OutOfRange { value: time })
        }
    }
}

impl From<[f64; 4]> for ControlPoints {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Rejected control point or time value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ControlPointError {
    #[error("invalid control point: {name} = {value} (x must be finite and within [0, 1])")]
    InvalidControlPoint { name: &'static str, value: f64 },
    #[error("time {value} is outside [0, 1]")]
    OutOfRange { value: f64 },
}
