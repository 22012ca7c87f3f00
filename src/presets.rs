//! Named CSS timing curves and `cubic-bezier(...)` parsing.
//!
//! The keywords match the CSS Easing Functions specification:
//!
//! | Name | Control points |
//! |---|---|
//! | `linear` | `(0, 0, 1, 1)` |
//! | `ease` | `(0.25, 0.1, 0.25, 1)` |
//! | `ease-in` | `(0.42, 0, 1, 1)` |
//! | `ease-out` | `(0, 0, 0.58, 1)` |
//! | `ease-in-out` | `(0.42, 0, 0.58, 1)` |

use crate::control::{ControlPointError, ControlPoints};

pub const LINEAR: ControlPoints = ControlPoints::new(0.0, 0.0, 1.0, 1.0);
pub const EASE: ControlPoints = ControlPoints::new(0.25, 0.1, 0.25, 1.0);
pub const EASE_IN: ControlPoints = ControlPoints::new(0.42, 0.0, 1.0, 1.0);
pub const EASE_OUT: ControlPoints = ControlPoints::new(0.0, 0.0, 0.58, 1.0);
pub const EASE_IN_OUT: ControlPoints = ControlPoints::new(0.42, 0.0, 0.58, 1.0);

/// Every preset with its CSS keyword.
pub const ALL: [(&str, ControlPoints); 5] = [
    ("linear", LINEAR),
    ("ease", EASE),
    ("ease-in", EASE_IN),
    ("ease-out", EASE_OUT),
    ("ease-in-out", EASE_IN_OUT),
];

/// Look up a preset by CSS keyword (case-insensitive; `_` is accepted for `-`).
pub fn named(name: &str) -> Option<ControlPoints> {
    let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
    ALL.iter()
        .find(|(keyword, _)| *keyword == normalized)
        .map(|(_, points)| *points)
}

/// Error from [`parse_timing_function`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimingFunctionError {
    #[error("unknown timing function: {0:?}")]
    UnknownName(String),
    #[error("malformed cubic-bezier(): {0:?}")]
    Malformed(String),
    #[error("bad number in cubic-bezier(): {0:?}")]
    BadNumber(String),
    #[error(transparent)]
    ControlPoint(#[from] ControlPointError),
}

/// Parse a preset keyword or a `cubic-bezier(x1, y1, x2, y2)` expression.
///
/// Parsed control points are validated the way CSS does: `x1` and `x2` must
/// lie in `[0, 1]`.
pub fn parse_timing_function(text: &str) -> Result<ControlPoints, TimingFunctionError> {
    let trimmed = text.trim();
    if let Some(points) = named(trimmed) {
        return Ok(points);
    }

    let lower = trimmed.to_ascii_lowercase();
    let Some(rest) = lower.strip_prefix("cubic-bezier") else {
        return Err(TimingFunctionError::UnknownName(trimmed.to_string()));
    };
    let args = rest
        .trim_start()
        .strip_prefix('(')
        .and_then(|r| r.strip_suffix(')'))
        .ok_or_else(|| TimingFunctionError::Malformed(trimmed.to_string()))?;

    let values = args
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .map_err(|_| TimingFunctionError::BadNumber(part.to_string()))
        })
        .collect::<Result<Vec<f64>, _>>()?;

    let &[x1, y1, x2, y2] = values.as_slice() else {
        return Err(TimingFunctionError::Malformed(trimmed.to_string()));
    };
    Ok(ControlPoints::new(x1, y1, x2, y2).validate()?)
}
