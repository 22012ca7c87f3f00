//! Point evaluation on an easing curve.
//!
//! Two interchangeable algorithms compute `B(t)` for the control polygon
//! `[(0,0), (x1,y1), (x2,y2), (1,1)]`:
//!
//! * [`DirectComposition`] unrolls the three levels of interpolation by
//!   hand.  Constant work, no allocation.
//! * [`DeCasteljau`] repeatedly reduces the polygon by pairwise
//!   interpolation.  The same [`de_casteljau`] routine evaluates Bézier
//!   curves of any degree.
//!
//! Both satisfy `B(0) = (0,0)` and `B(1) = (1,1)` for every set of control
//! points.

use crate::control::ControlPoints;
use crate::point::{interpolate2d, Point2D};

/// Strategy for evaluating the curve at a parameter `t`.
///
/// The easing search in [`crate::easing`] is generic over this trait so
/// either algorithm (or a test double) can back it.
pub trait PointEvaluator {
    /// Return `B(t)` for the curve described by `points`.
    fn evaluate(&self, points: ControlPoints, t: f64) -> Point2D;
}

impl<E: PointEvaluator + ?Sized> PointEvaluator for &E {
    fn evaluate(&self, points: ControlPoints, t: f64) -> Point2D {
        (**self).evaluate(points, t)
    }
}

/// Evaluate with three hand-unrolled levels of interpolation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectComposition;

impl PointEvaluator for DirectComposition {
    fn evaluate(&self, points: ControlPoints, t: f64) -> Point2D {
        let p1 = points.p1();
        let p2 = points.p2();

        let q0 = interpolate2d(Point2D::ORIGIN, p1, t);
        let q1 = interpolate2d(p1, p2, t);
        let q2 = interpolate2d(p2, Point2D::UNIT, t);

        let r0 = interpolate2d(q0, q1, t);
        let r1 = interpolate2d(q1, q2, t);

        interpolate2d(r0, r1, t)
    }
}

/// Evaluate by De Casteljau reduction of the control polygon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeCasteljau;

impl PointEvaluator for DeCasteljau {
    fn evaluate(&self, points: ControlPoints, t: f64) -> Point2D {
        let mut polygon = points.polygon();
        reduce_in_place(&mut polygon, t)
    }
}

/// Evaluate the Bézier curve with control polygon `polygon` at `t`.
///
/// Works for any degree: a polygon of `n` points describes a curve of
/// degree `n - 1`.  Returns `None` for an empty polygon.
pub fn de_casteljau(polygon: &[Point2D], t: f64) -> Option<Point2D> {
    if polygon.is_empty() {
        return None;
    }
    let mut work = polygon.to_vec();
    Some(reduce_in_place(&mut work, t))
}

/// One pass replaces `work[i]` with `lerp(work[i], work[i + 1], t)`; the
/// live prefix shrinks by one each pass until a single point is left.
///
/// `work` must be non-empty.
fn reduce_in_place(work: &mut [Point2D], t: f64) -> Point2D {
    let mut len = work.len();
    while len > 1 {
        for i in 0..len - 1 {
            work[i] = interpolate2d(work[i], work[i + 1], t);
        }
        len -= 1;
    }
    work[0]
}

/// Evaluate the easing curve `(x1, y1, x2, y2)` at `t` by direct composition.
pub fn evaluate_point(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> Point2D {
    DirectComposition.evaluate(ControlPoints::new(x1, y1, x2, y2), t)
}

/// Evaluate the easing curve `(x1, y1, x2, y2)` at `t` by De Casteljau
/// reduction.
pub fn de_casteljau_point(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> Point2D {
    DeCasteljau.evaluate(ControlPoints::new(x1, y1, x2, y2), t)
}

/// Which [`PointEvaluator`] to use, as named in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvaluatorKind {
    #[default]
    Direct,
    #[serde(alias = "de_casteljau", alias = "decasteljau")]
    DeCasteljau,
}

impl PointEvaluator for EvaluatorKind {
    fn evaluate(&self, points: ControlPoints, t: f64) -> Point2D {
        match self {
            EvaluatorKind::Direct => DirectComposition.evaluate(points, t),
            EvaluatorKind::DeCasteljau => DeCasteljau.evaluate(points, t),
        }
    }
}

/// Unrecognised evaluator name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown evaluator: {0:?} (expected direct or de-casteljau)")]
pub struct UnknownEvaluator(pub String);

impl std::str::FromStr for EvaluatorKind {
    type Err = UnknownEvaluator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(EvaluatorKind::Direct),
            "de-casteljau" | "de_casteljau" | "decasteljau" => Ok(EvaluatorKind::DeCasteljau),
            _ => Err(UnknownEvaluator(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const CURVES: [ControlPoints; 5] = [
        ControlPoints::new(0.25, 0.1, 0.25, 1.0),
        ControlPoints::new(0.42, 0.0, 1.0, 1.0),
        ControlPoints::new(0.0, 0.0, 0.58, 1.0),
        ControlPoints::new(0.68, -0.55, 0.265, 1.55),
        ControlPoints::new(1.0, 0.0, 0.0, 1.0),
    ];

    fn ts() -> impl Iterator<Item = f64> {
        (0..=100).map(|i| i as f64 / 100.0)
    }

    #[test]
    fn endpoints_are_fixed() {
        for cp in CURVES {
            for eval in [EvaluatorKind::Direct, EvaluatorKind::DeCasteljau] {
                assert_eq!(eval.evaluate(cp, 0.0), Point2D::new(0.0, 0.0));
                let end = eval.evaluate(cp, 1.0);
                assert_abs_diff_eq!(end.x, 1.0, epsilon = 1e-12);
                assert_abs_diff_eq!(end.y, 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn algorithms_agree() {
        for cp in CURVES {
            for t in ts() {
                let a = DirectComposition.evaluate(cp, t);
                let b = DeCasteljau.evaluate(cp, t);
                assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
                assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn matches_bernstein_form() {
        let cp = CURVES[0];
        for t in ts() {
            let mt = 1.0 - t;
            let x = 3.0 * mt * mt * t * cp.x1 + 3.0 * mt * t * t * cp.x2 + t * t * t;
            let y = 3.0 * mt * mt * t * cp.y1 + 3.0 * mt * t * t * cp.y2 + t * t * t;
            let p = evaluate_point(cp.x1, cp.y1, cp.x2, cp.y2, t);
            assert_abs_diff_eq!(p.x, x, epsilon = 1e-12);
            assert_abs_diff_eq!(p.y, y, epsilon = 1e-12);
        }
    }

    #[test]
    fn x_is_monotonic_for_valid_control_points() {
        for cp in CURVES {
            let mut prev = f64::NEG_INFINITY;
            for t in ts() {
                let x = evaluate_point(cp.x1, cp.y1, cp.x2, cp.y2, t).x;
                assert!(x >= prev, "x({t}) = {x} < {prev} for {cp:?}");
                prev = x;
            }
        }
    }

    #[test]
    fn free_functions_match_trait() {
        let p = de_casteljau_point(0.25, 0.1, 0.25, 1.0, 0.3);
        let q = DeCasteljau.evaluate(CURVES[0], 0.3);
        assert_eq!(p, q);
    }

    #[test]
    fn de_casteljau_handles_any_degree() {
        assert_eq!(de_casteljau(&[], 0.5), None);

        let single = [Point2D::new(3.0, 4.0)];
        assert_eq!(de_casteljau(&single, 0.7), Some(Point2D::new(3.0, 4.0)));

        let line = [Point2D::new(0.0, 0.0), Point2D::new(2.0, 4.0)];
        assert_eq!(de_casteljau(&line, 0.25), Some(Point2D::new(0.5, 1.0)));

        // Quadratic: B(0.5) = 0.25 p0 + 0.5 p1 + 0.25 p2
        let quad = [
            Point2D::new(0.0, 0.0),
            Point2D::new(50.0, 100.0),
            Point2D::new(100.0, 0.0),
        ];
        assert_eq!(de_casteljau(&quad, 0.5), Some(Point2D::new(50.0, 50.0)));
    }

    #[test]
    fn de_casteljau_leaves_input_untouched() {
        let poly = CURVES[1].polygon();
        let before = poly;
        let _ = de_casteljau(&poly, 0.4);
        assert_eq!(poly, before);
    }

    #[test]
    fn evaluator_kind_parses() {
        assert_eq!("direct".parse::<EvaluatorKind>(), Ok(EvaluatorKind::Direct));
        assert_eq!(
            "De-Casteljau".parse::<EvaluatorKind>(),
            Ok(EvaluatorKind::DeCasteljau)
        );
        assert_eq!(
            "newton".parse::<EvaluatorKind>(),
            Err(UnknownEvaluator("newton".into()))
        );

        let kind: EvaluatorKind = serde_json::from_str(r#""de-casteljau""#).unwrap();
        assert_eq!(kind, EvaluatorKind::DeCasteljau);
    }
}
