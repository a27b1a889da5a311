use crate::normalize::normalize;
use crate::parser::parse;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

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

/// Safemath - evaluate arithmetic expressions safely
#[derive(Parser, Debug)]
#[command(name = "safemath")]
#[command(about = "Evaluate an arithmetic expression without ever executing anything else")]
#[command(version)]
pub struct CliArgs {
    /// Expression to evaluate, e.g. "3 * -2 + (4 - 1)"
    pub expression: String,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub expression: String,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    Ok(CliConfig {
        expression: args.expression,
        log_level: args.log_level,
    })
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
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let canonical = normalize(&config.expression);
    info!("Evaluating '{}'", canonical);

    let expression = parse(&canonical).context("could not parse expression")?;
    let value = expression
        .evaluate()
        .context("could not evaluate expression")?;

    println!("{}", value);
    Ok(())
}
