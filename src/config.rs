//! Command-line tool configuration.
//!
//! The configuration is loaded from a JSON file, by default
//! `$XDG_CONFIG_HOME/bezier-ease/config.json`.  Every key is optional and
//! command-line flags override whatever the file says.
//!
//! # Example
//!
//! ```json
//! {
//!   "curve": "ease-in-out",
//!   "strategy": "hybrid",
//!   "evaluator": "direct",
//!   "samples": 11
//! }
//! ```
//!
//! `curve` may also be a `cubic-bezier(...)` string or an object:
//!
//! ```json
//! { "curve": { "x1": 0.25, "y1": 0.1, "x2": 0.25, "y2": 1.0 } }
//! ```

use crate::control::ControlPoints;
use crate::easing::{CubicBezierEasing, SearchStrategy};
use crate::evaluator::EvaluatorKind;
use crate::presets::{self, TimingFunctionError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
///
/// A minimal `{}` file is valid; every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Curve to evaluate.  Default: `"ease"`.
    pub curve: CurveSpec,
    /// Bisection termination policy.  Default: hybrid.
    pub strategy: SearchStrategy,
    /// Point evaluation algorithm.  Default: direct composition.
    pub evaluator: EvaluatorKind,
    /// Number of evenly spaced times to sample when none are given.
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            curve: CurveSpec::Named("ease".into()),
            strategy: SearchStrategy::default(),
            evaluator: EvaluatorKind::default(),
            samples: 11,
        }
    }
}

/// A curve given either by name / `cubic-bezier(...)` text or by its four
/// coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CurveSpec {
    Named(String),
    Points(ControlPoints),
}

impl CurveSpec {
    /// Resolve to concrete control points.
    ///
    /// Explicit coordinates are taken as-is; textual curves go through
    /// [`presets::parse_timing_function`] and are validated.
    pub fn resolve(&self) -> Result<ControlPoints, TimingFunctionError> {
        match self {
            CurveSpec::Named(text) => presets::parse_timing_function(text),
            CurveSpec::Points(points) => Ok(*points),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Build the easing function this configuration describes.
    pub fn easing(&self) -> Result<CubicBezierEasing<EvaluatorKind>, TimingFunctionError> {
        let points = self.curve.resolve()?;
        Ok(CubicBezierEasing::with_strategy(points, self.strategy).with_evaluator(self.evaluator))
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
