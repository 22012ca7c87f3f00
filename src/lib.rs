//! **bezier-ease** — CSS-style cubic Bézier easing functions.
//!
//! An easing curve is a cubic Bézier anchored at `(0,0)` and `(1,1)` with
//! two free interior control points, exactly like CSS
//! `cubic-bezier(x1, y1, x2, y2)`.  Given a normalized time (the curve's x
//! coordinate) the easing function returns the matching progress (its y
//! coordinate).
//!
//! # Architecture
//!
//! The crate is organised in two layers:
//!
//! * [`evaluator`] computes the curve position `B(t)` for a parameter `t`.
//!   [`evaluator::PointEvaluator`] is the seam; direct lerp composition and
//!   De Casteljau reduction both implement it.
//! * [`easing`] inverts `x(t)` by bisection and reports `y(t)`.  The
//!   termination policy is chosen with [`easing::SearchStrategy`].
//!
//! Everything is a pure function of its inputs: no state is kept between
//! calls, so easing values can be shared freely across threads.
//!
//! ```
//! use bezier_ease::{CubicBezierEasing, Easing};
//!
//! let ease = CubicBezierEasing::hybrid(0.25, 0.1, 0.25, 1.0);
//! assert!((ease.ease(0.5) - 0.802).abs() < 0.02);
//! ```

pub mod cli;
pub mod config;
pub mod control;
pub mod easing;
pub mod evaluator;
pub mod point;
pub mod presets;

pub use control::{ControlPointError, ControlPoints};
pub use easing::{make_easing, Bracket, CubicBezierEasing, Easing, SearchOutcome, SearchStrategy};
pub use evaluator::{de_casteljau, de_casteljau_point, evaluate_point, DeCasteljau, DirectComposition, PointEvaluator};
pub use point::{interpolate2d, lerp, Point2D};
