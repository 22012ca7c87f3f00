//! Command-line arguments for the `bezier-ease` binary.
//!
//! ```text
//! bezier-ease [--config PATH] [--curve SPEC] [--strategy S]
//!             [--evaluator direct|de-casteljau] [--samples N] [TIME...]
//! ```
//!
//! Flags override the matching [`Config`] fields.  When no `TIME` is given,
//! `samples` evenly spaced times over `[0, 1]` are evaluated.

use crate::config::{Config, CurveSpec};
use crate::easing::{SearchStrategy, UnknownStrategy};
use crate::evaluator::{EvaluatorKind, UnknownEvaluator};
use std::path::PathBuf;

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub curve: Option<String>,
    pub strategy: Option<SearchStrategy>,
    pub evaluator: Option<EvaluatorKind>,
    pub samples: Option<usize>,
    pub times: Vec<f64>,
    pub help: bool,
}

/// Error from [`CliArgs::parse`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CliError {
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
    #[error("invalid time {0:?}")]
    InvalidTime(String),
    #[error("invalid sample count {0:?}")]
    InvalidSamples(String),
    #[error(transparent)]
    Strategy(#[from] UnknownStrategy),
    #[error(transparent)]
    Evaluator(#[from] UnknownEvaluator),
}

pub const USAGE: &str = "\
usage: bezier-ease [--config PATH] [--curve SPEC] [--strategy fixed|epsilon|hybrid]
                   [--evaluator direct|de-casteljau] [--samples N] [TIME...]

SPEC is a CSS keyword (linear, ease, ease-in, ease-out, ease-in-out)
or cubic-bezier(x1, y1, x2, y2).";

impl CliArgs {
    /// Parse arguments, not including the program name.
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut out = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = |flag: &str| {
                args.next()
                    .ok_or_else(|| CliError::MissingValue(flag.to_string()))
            };
            match arg.as_str() {
                "-h" | "--help" => out.help = true,
                "-c" | "--config" => out.config = Some(PathBuf::from(value(&arg)?)),
                "--curve" => out.curve = Some(value(&arg)?),
                "-s" | "--strategy" => out.strategy = Some(value(&arg)?.parse()?),
                "-e" | "--evaluator" => out.evaluator = Some(value(&arg)?.parse()?),
                "-n" | "--samples" => {
                    let text = value(&arg)?;
                    let n = text.parse().map_err(|_| CliError::InvalidSamples(text))?;
                    out.samples = Some(n);
                }
                // Allow negative times such as "-0.5" through.
                flag if flag.starts_with('-') && flag.parse::<f64>().is_err() => {
                    return Err(CliError::UnknownFlag(flag.to_string()));
                }
                time => {
                    let t = time
                        .parse()
                        .map_err(|_| CliError::InvalidTime(time.to_string()))?;
                    out.times.push(t);
                }
            }
        }
        Ok(out)
    }

    /// Overlay the flags onto `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(curve) = &self.curve {
            config.curve = CurveSpec::Named(curve.clone());
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(evaluator) = self.evaluator {
            config.evaluator = evaluator;
        }
        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        config
    }
}

/// `n` evenly spaced times covering `[0, 1]` inclusive.
pub fn sample_times(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, CliError> {
        CliArgs::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parse_empty() {
        assert_eq!(parse(&[]), Ok(CliArgs::default()));
    }

    #[test]
    fn parse_all_flags() {
        let args = parse(&[
            "--config",
            "/tmp/c.json",
            "--curve",
            "cubic-bezier(0.1, 0.2, 0.3, 0.4)",
            "--strategy",
            "fixed",
            "--evaluator",
            "de-casteljau",
            "--samples",
            "3",
            "0.25",
            "0.75",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.json")));
        assert_eq!(args.curve.as_deref(), Some("cubic-bezier(0.1, 0.2, 0.3, 0.4)"));
        assert_eq!(args.strategy, Some(SearchStrategy::FixedStep));
        assert_eq!(args.evaluator, Some(EvaluatorKind::DeCasteljau));
        assert_eq!(args.samples, Some(3));
        assert_eq!(args.times, vec![0.25, 0.75]);
    }

    #[test]
    fn negative_time_is_not_a_flag() {
        assert_eq!(parse(&["-0.5"]).unwrap().times, vec![-0.5]);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse(&["--curve"]), Err(CliError::MissingValue("--curve".into())));
        assert_eq!(parse(&["--bogus"]), Err(CliError::UnknownFlag("--bogus".into())));
        assert_eq!(parse(&["half"]), Err(CliError::InvalidTime("half".into())));
        assert_eq!(
            parse(&["-n", "many"]),
            Err(CliError::InvalidSamples("many".into()))
        );
        assert!(matches!(parse(&["-s", "newton"]), Err(CliError::Strategy(_))));
        assert!(matches!(parse(&["-e", "horner"]), Err(CliError::Evaluator(_))));
    }

    #[test]
    fn flags_override_config() {
        let args = parse(&["--curve", "ease-out", "--strategy", "epsilon"]).unwrap();
        let cfg = args.apply(Config::default());
        assert_eq!(cfg.curve, CurveSpec::Named("ease-out".into()));
        assert_eq!(cfg.strategy, SearchStrategy::Epsilon);
        assert_eq!(cfg.evaluator, EvaluatorKind::Direct);
        assert_eq!(cfg.samples, 11);
    }

    #[test]
    fn sample_times_cover_unit_interval() {
        assert!(sample_times(0).is_empty());
        assert_eq!(sample_times(1), vec![0.0]);
        assert_eq!(sample_times(5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
