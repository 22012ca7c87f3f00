//! Two-dimensional points and linear interpolation.

use serde::{Deserialize, Serialize};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// The curve's fixed start point `(0, 0)`.
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };
    /// The curve's fixed end point `(1, 1)`.
    pub const UNIT: Point2D = Point2D { x: 1.0, y: 1.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Linear interpolation `a + v * (b - a)`.
#[inline]
pub fn lerp(a: f64, b: f64, v: f64) -> f64 {
    a + v * (b - a)
}

/// [`lerp`] applied to each axis independently.
#[inline]
pub fn interpolate2d(a: Point2D, b: Point2D, v: f64) -> Point2D {
    Point2D {
        x: lerp(a.x, b.x, v),
        y: lerp(a.y, b.y, v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
    }

    #[test]
    fn lerp_extrapolates_outside_unit_range() {
        assert_eq!(lerp(0.0, 1.0, 2.0), 2.0);
        assert_eq!(lerp(0.0, 1.0, -1.0), -1.0);
    }

    #[test]
    fn interpolate2d_is_per_axis() {
        let p = interpolate2d(Point2D::new(0.0, 10.0), Point2D::new(4.0, 20.0), 0.5);
        assert_eq!(p, Point2D::new(2.0, 15.0));
    }

    #[test]
    fn point_deserializes_from_object() {
        let p: Point2D = serde_json::from_str(r#"{"x":0.5,"y":0.25}"#).unwrap();
        assert_eq!(p, Point2D::new(0.5, 0.25));
    }
}
