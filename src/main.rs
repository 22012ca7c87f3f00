//! Entry point for the **bezier-ease** command-line tool.
//!
//! Prints `time<TAB>progress` for every requested time, or for evenly spaced
//! samples over `[0, 1]` when no time is given.

use bezier_ease::cli::{sample_times, CliArgs, USAGE};
use bezier_ease::config::Config;
use bezier_ease::easing::Easing;
use log::{debug, error, info};
use std::path::{Path, PathBuf};

/// Resolve the config directory (`$XDG_CONFIG_HOME/bezier-ease`).
fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("bezier-ease")
}

/// Load the config from `explicit` if given, which must then exist, or from
/// the default location, falling back to compiled-in defaults.
fn load_config(explicit: Option<&Path>) -> Result<Config, String> {
    if let Some(path) = explicit {
        let cfg = Config::load(path).map_err(|e| e.to_string())?;
        info!("loaded config from {}", path.display());
        return Ok(cfg);
    }

    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            Ok(cfg)
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Ok(Config::default())
        }
    }
}

fn fail(message: &str) -> ! {
    error!("{}", message);
    eprintln!("bezier-ease: {}", message);
    std::process::exit(1);
}

fn main() {
    env_logger::init();

    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", USAGE);
            fail(&e.to_string())
        }
    };
    if args.help {
        println!("{}", USAGE);
        return;
    }

    let config = match load_config(args.config.as_deref()) {
        Ok(cfg) => args.apply(cfg),
        Err(e) => fail(&e),
    };
    let easing = match config.easing() {
        Ok(easing) => easing,
        Err(e) => fail(&e.to_string()),
    };
    debug!(
        "curve {:?}, strategy {}, evaluator {:?}",
        easing.points(),
        easing.strategy(),
        easing.evaluator()
    );

    let times = if args.times.is_empty() {
        sample_times(config.samples)
    } else {
        args.times.clone()
    };
    for time in times {
        println!("{:.6}\t{:.6}", time, easing.ease(time));
    }
}
