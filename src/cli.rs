use crate::counter::constants::INPUT_ERROR;
use crate::counter::{format_path, PathCounter};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Stepways - count the ways to walk a distance with allowed step sizes
#[derive(Parser, Debug)]
#[command(name = "stepways")]
#[command(
    about = "Count the distinct ordered step sequences that exactly cover a target distance"
)]
#[command(version)]
pub struct CliArgs {
    /// Allowed step sizes, comma separated (e.g. "1,2,5")
    pub step_sizes: String,

    /// Target distance the steps must sum to exactly
    pub target: i64,

    /// Print every distinct step sequence as it is found
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub step_sizes: Vec<i64>,
    pub target: i64,
    pub verbose: bool,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    // Convert the step size list
    let step_sizes = parse_step_sizes(&args.step_sizes).context("Invalid step size list")?;

    Ok(CliConfig {
        step_sizes,
        target: args.target,
        verbose: args.verbose,
        log_level: args.log_level,
    })
}

/// Parse a comma-separated step size list into integers
///
/// Empty tokens are skipped; an empty result is left for the counter's own
/// validation to report.
pub fn parse_step_sizes(list: &str) -> Result<Vec<i64>> {
    list.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("Not an integer step size: '{}'", token))
        })
        .collect()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
///
/// Invalid input is reported through the `-1` sentinel in the summary line
/// rather than a process failure; the specific violation goes to the log.
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let counter = PathCounter::new();

    info!(
        "Counting solutions for {:?} with a target of {}",
        config.step_sizes, config.target
    );

    let result = if config.verbose {
        counter.count_paths_verbose(&config.step_sizes, config.target, &mut |path: &[u64]| {
            println!("{}", format_path(path));
        })
    } else {
        counter.count_paths(&config.step_sizes, config.target)
    };

    let display = match result {
        Ok(count) => count.to_string(),
        Err(err) => {
            warn!("{}", err);
            INPUT_ERROR.to_string()
        }
    };

    println!(
        "Number of different solutions for {:?} with a target of {}: {}",
        config.step_sizes, config.target, display
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["stepways", "1,2,5", "10"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.step_sizes, "1,2,5");
            assert_eq!(args.target, 10);
            assert!(!args.verbose);
        }
    }

    #[test]
    fn test_verbose_flag() {
        let args = CliArgs::try_parse_from(["stepways", "1,2", "3", "--verbose"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(args.verbose);
        }
    }

    #[test]
    fn test_parse_step_sizes() {
        let parsed = parse_step_sizes("1,2,5");
        assert!(parsed.is_ok());
        if let Ok(steps) = parsed {
            assert_eq!(steps, vec![1, 2, 5]);
        }
    }

    #[test]
    fn test_parse_step_sizes_trims_and_skips_empty_tokens() {
        let parsed = parse_step_sizes("1, 2,,3");
        assert!(parsed.is_ok());
        if let Ok(steps) = parsed {
            assert_eq!(steps, vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_parse_step_sizes_rejects_non_integer() {
        assert!(parse_step_sizes("1,a").is_err());
        assert!(parse_step_sizes("1,0.5").is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&[1, 1, 2]), "1 + 1 + 2");
        assert_eq!(format_path(&[5]), "5");
    }
}
