use crate::combinations::CombinationFinder;
use crate::pyramid::inverted_pyramid;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::warn;

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

/// Ninesum - digit-combination search and star pyramid patterns
#[derive(Parser, Debug)]
#[command(name = "ninesum")]
#[command(about = "Search digit combinations by length and sum, and print inverted star pyramids")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print an inverted pyramid of stars with the given height
    Pyramid {
        /// Height of the pyramid, between 2 and 50
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },
    /// List every combination of distinct digits 1-9 with the given length and sum
    Combinations {
        /// Number of digits in each combination
        #[arg(allow_negative_numbers = true)]
        length: i32,
        /// Sum the digits must reach
        #[arg(allow_negative_numbers = true)]
        target: i32,
    },
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    init_logging(&args.log_level)?;

    for line in execute(&args.command) {
        println!("{}", line);
    }

    Ok(())
}

/// Produce the output lines for a parsed command
pub fn execute(command: &Command) -> Vec<String> {
    match command {
        Command::Pyramid { n } => match inverted_pyramid(*n) {
            Ok(lines) => lines,
            Err(err) => {
                // Out-of-range height is a reported condition, not a failure
                warn!("Rejected pyramid height {}", n);
                vec![err.to_string()]
            }
        },
        Command::Combinations { length, target } => {
            let finder = CombinationFinder::new();
            let combinations = finder.find_combinations(*length, *target);

            if combinations.is_empty() {
                warn!("No matching combinations found");
                vec!["[]".to_string()]
            } else {
                combinations
                    .iter()
                    .map(|combination| format!("{:?}", combination))
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["ninesum", "combinations", "3", "8"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(matches!(
                args.command,
                Command::Combinations {
                    length: 3,
                    target: 8
                }
            ));
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_pyramid_subcommand_parsing() {
        let args = CliArgs::try_parse_from(["ninesum", "pyramid", "4"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(matches!(args.command, Command::Pyramid { n: 4 }));
        }
    }

    #[test]
    fn test_non_numeric_arguments_rejected() {
        let args = CliArgs::try_parse_from(["ninesum", "pyramid", "four"]);
        assert!(args.is_err());
    }

    #[test]
    fn test_pyramid_execution() {
        let lines = execute(&Command::Pyramid { n: 4 });
        assert_eq!(lines, vec!["* * * * ", " * * * ", "  * * ", "   * "]);
    }

    #[test]
    fn test_out_of_range_height_reports_diagnostic() {
        for n in [-3, 0, 1, 51] {
            let lines = execute(&Command::Pyramid { n });
            assert_eq!(lines, vec!["Input must be between 2 - 50."]);
        }
    }

    #[test]
    fn test_combinations_execution() {
        let lines = execute(&Command::Combinations {
            length: 3,
            target: 8,
        });
        assert_eq!(lines, vec!["[1, 2, 5]", "[1, 3, 4]"]);
    }

    #[test]
    fn test_empty_result_prints_empty_list() {
        let lines = execute(&Command::Combinations {
            length: 4,
            target: 5,
        });
        assert_eq!(lines, vec!["[]"]);
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
}
