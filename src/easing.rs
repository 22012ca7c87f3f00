//! Easing functions: invert `x(t)` by bisection, then report `y(t)`.
//!
//! A [`CubicBezierEasing`] holds a fixed set of [`ControlPoints`] and maps a
//! normalized time (the curve's x coordinate) to progress (its y
//! coordinate).  Because the curve is parametrized by `t`, not by `x`, every
//! call bisects the bracket `[0, 1]` on `t` until the evaluated x is close
//! enough to the requested time.
//!
//! Three termination policies are available through [`SearchStrategy`]:
//!
//! | Strategy | Stops after |
//! |---|---|
//! | [`FixedStep`](SearchStrategy::FixedStep) | exactly [`FIXED_STEPS`] bisections |
//! | [`Epsilon`](SearchStrategy::Epsilon) | `|time - x| < EPSILON` (capped at [`EPSILON_STEP_LIMIT`]) |
//! | [`Hybrid`](SearchStrategy::Hybrid) | whichever of the two comes first |
//!
//! Bisection assumes `x(t)` is non-decreasing, which holds whenever `x1` and
//! `x2` are in `[0, 1]`.  Other inputs are not rejected; they just produce
//! inaccurate results.

use crate::control::ControlPoints;
use crate::evaluator::{DirectComposition, PointEvaluator};
use crate::point::{lerp, Point2D};
use log::{trace, warn};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Number of bisections performed by the fixed-step strategy, and the step
/// cap of the hybrid strategy.
pub const FIXED_STEPS: u32 = 8;

/// Acceptable distance between the requested time and the x found.
pub const EPSILON: f64 = 0.00075;

/// Hard cap for the epsilon strategy.  An `f64` bracket stops shrinking
/// after about 53 halvings, so more steps than this cannot help.
pub const EPSILON_STEP_LIMIT: u32 = 64;

//  Strategy

/// When to stop bisecting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Always [`FIXED_STEPS`] bisections.  Deterministic cost.
    FixedStep,
    /// Bisect until within [`EPSILON`].
    Epsilon,
    /// Bisect until within [`EPSILON`] or [`FIXED_STEPS`] are spent.
    #[default]
    Hybrid,
}

impl SearchStrategy {
    /// Maximum number of bisection steps this strategy performs.
    pub fn step_limit(self) -> u32 {
        match self {
            SearchStrategy::FixedStep | SearchStrategy::Hybrid => FIXED_STEPS,
            SearchStrategy::Epsilon => EPSILON_STEP_LIMIT,
        }
    }

    /// Residual below which the search exits early, if any.
    pub fn tolerance(self) -> Option<f64> {
        match self {
            SearchStrategy::FixedStep => None,
            SearchStrategy::Epsilon | SearchStrategy::Hybrid => Some(EPSILON),
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::FixedStep => write!(f, "fixed-step"),
            SearchStrategy::Epsilon => write!(f, "epsilon"),
            SearchStrategy::Hybrid => write!(f, "hybrid"),
        }
    }
}

/// Unrecognised strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search strategy: {0:?} (expected fixed, epsilon or hybrid)")]
pub struct UnknownStrategy(pub String);

/// Case-insensitive; accepts "fixed", "fixed-step", "FixedStep", "epsilon", "hybrid".
impl std::str::FromStr for SearchStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(|c| c.to_lowercase())
            .collect();
        match normalized.as_str() {
            "fixed" | "fixedstep" => Ok(SearchStrategy::FixedStep),
            "epsilon" | "precision" => Ok(SearchStrategy::Epsilon),
            "hybrid" => Ok(SearchStrategy::Hybrid),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for SearchStrategy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(DeError::custom)
    }
}

//  Bracket

/// The interval `[t_min, t_max]` known to contain the wanted parameter.
///
/// Always `0 <= t_min <= t_max <= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    t_min: f64,
    t_max: f64,
}

impl Bracket {
    /// The whole parameter range `[0, 1]`.
    pub const UNIT: Bracket = Bracket { t_min: 0.0, t_max: 1.0 };

    pub fn t_min(&self) -> f64 {
        self.t_min
    }

    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    pub fn width(&self) -> f64 {
        self.t_max - self.t_min
    }

    pub fn midpoint(&self) -> f64 {
        (self.t_min + self.t_max) / 2.0
    }

    /// Keep the upper half when the midpoint's x fell short of the target,
    /// the lower half otherwise.
    pub fn narrow(self, mid: f64, x_below_target: bool) -> Self {
        if x_below_target {
            Bracket { t_min: mid, t_max: self.t_max }
        } else {
            Bracket { t_min: self.t_min, t_max: mid }
        }
    }
}

impl Default for Bracket {
    fn default() -> Self {
        Self::UNIT
    }
}

//  Search

/// Where a search ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    /// Parameter of the last midpoint evaluated.
    pub t: f64,
    /// Curve position at `t`.
    pub point: Point2D,
    /// Number of bisection steps performed (midpoints evaluated).
    pub steps: u32,
    /// `time - point.x`.
    pub residual: f64,
}

impl SearchOutcome {
    /// Whether the final x is within [`EPSILON`] of the requested time.
    pub fn within_tolerance(&self) -> bool {
        self.residual.abs() < EPSILON
    }
}

/// Anything that maps normalized time to normalized progress.
pub trait Easing {
    /// Progress at `time`.
    fn ease(&self, time: f64) -> f64;

    /// Ease between two scalars: `a + (b - a) * ease(time)`.
    fn interpolate(&self, a: f64, b: f64, time: f64) -> f64 {
        lerp(a, b, self.ease(time))
    }
}

/// A cubic Bézier easing function with fixed control points.
///
/// Cheap to copy and free of interior state, so a single value can be
/// shared across threads and called any number of times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezierEasing<E = DirectComposition> {
    points: ControlPoints,
    strategy: SearchStrategy,
    evaluator: E,
}

impl CubicBezierEasing<DirectComposition> {
    /// Easing with the given control points and strategy.
    pub fn with_strategy(points: ControlPoints, strategy: SearchStrategy) -> Self {
        Self {
            points,
            strategy,
            evaluator: DirectComposition,
        }
    }

    /// Easing that always bisects [`FIXED_STEPS`] times.
    pub fn fixed_step(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::with_strategy(ControlPoints::new(x1, y1, x2, y2), SearchStrategy::FixedStep)
    }

    /// Easing that bisects until `|time - x| < EPSILON`.
    pub fn epsilon(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::with_strategy(ControlPoints::new(x1, y1, x2, y2), SearchStrategy::Epsilon)
    }

    /// Easing that stops at [`EPSILON`] or [`FIXED_STEPS`], whichever is hit
    /// first.
    pub fn hybrid(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::with_strategy(ControlPoints::new(x1, y1, x2, y2), SearchStrategy::Hybrid)
    }
}

impl<E: PointEvaluator> CubicBezierEasing<E> {
    /// Swap the point evaluator, keeping control points and strategy.
    pub fn with_evaluator<F: PointEvaluator>(self, evaluator: F) -> CubicBezierEasing<F> {
        CubicBezierEasing {
            points: self.points,
            strategy: self.strategy,
            evaluator,
        }
    }

    pub fn points(&self) -> ControlPoints {
        self.points
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Bisect for the parameter whose x matches `time`.
    pub fn search(&self, time: f64) -> SearchOutcome {
        let limit = self.strategy.step_limit();
        let tolerance = self.strategy.tolerance();
        let mut bracket = Bracket::UNIT;
        let mut steps = 0;

        loop {
            let t = bracket.midpoint();
            let point = self.evaluator.evaluate(self.points, t);
            steps += 1;

            let residual = time - point.x;
            let outcome = SearchOutcome {
                t,
                point,
                steps,
                residual,
            };

            if tolerance.is_some_and(|eps| residual.abs() < eps) {
                trace!("{} search for {} converged in {} steps", self.strategy, time, steps);
                return outcome;
            }
            if steps >= limit {
                if self.strategy == SearchStrategy::Epsilon {
                    warn!(
                        "epsilon search for time {} gave up after {} steps (residual {})",
                        time, steps, residual
                    );
                }
                return outcome;
            }

            bracket = bracket.narrow(t, point.x < time);
        }
    }
}

impl<E: PointEvaluator> Easing for CubicBezierEasing<E> {
    fn ease(&self, time: f64) -> f64 {
        self.search(time).point.y
    }
}

/// Build an easing function for `cubic-bezier(x1, y1, x2, y2)` using the
/// hybrid strategy.
pub fn make_easing(x1: f64, y1: f64, x2: f64, y2: f64) -> impl Fn(f64) -> f64 + Copy + Send + Sync {
    let easing = CubicBezierEasing::hybrid(x1, y1, x2, y2);
    move |time| easing.ease(time)
}

//  Tests
