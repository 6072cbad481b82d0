//! Quill CLI
//!
//! Thin wrapper around quill-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Log one message to the console
//! quill emit warning "Disk nearly full"
//!
//! # Append to a file, keeping only errors and above
//! quill --writer file --path service.log --level error emit error "Backup failed"
//!
//! # Log every line from stdin
//! tail -f app.out | quill --writer file pipe info
//!
//! # List severities in order
//! quill levels
//! ```

use std::io::BufRead;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quill_core::{
    call_site, LogRecord, Logger, LoggerBuilder, ObserverError, Severity, WriterKind,
};

/// Quill - leveled logging from the command line
#[derive(Parser)]
#[command(name = "quill")]
#[command(version = "0.1.0")]
#[command(about = "Quill - leveled logging from the command line")]
struct Cli {
    /// Increase diagnostic verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Writer: console, file or discard
    #[arg(short, long, global = true, env = "QUILL_WRITER", default_value = "console")]
    writer: String,

    /// File for the file writer, relative to the working directory (default: logfile.log)
    #[arg(short, long, global = true, env = "QUILL_PATH")]
    path: Option<String>,

    /// Minimum severity to accept
    #[arg(short, long, global = true, env = "QUILL_LEVEL", default_value = "trace")]
    level: String,

    /// Start with the logger disabled
    #[arg(long, global = true)]
    disabled: bool,

    /// Keep records in memory and report them on exit
    #[arg(long, global = true)]
    storage: bool,

    /// Print per-severity counts of dispatched records on exit, startup message included
    #[arg(long, global = true)]
    summary: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a single message
    Emit {
        /// Severity of the message
        severity: String,
        /// Message text
        message: String,
    },

    /// Log every line read from stdin
    Pipe {
        /// Severity applied to each line
        severity: String,
    },

    /// List severities from lowest to highest
    Levels,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Build the logger described by the global flags.
///
/// The counting observer is registered before the startup message, so the
/// summary covers every dispatched record.
fn build_logger(cli: &Cli, counts: Arc<Mutex<[usize; 6]>>) -> Result<Logger> {
    let kind: WriterKind = cli.writer.parse()?;
    let level: Severity = cli.level.parse()?;

    let mut builder = LoggerBuilder::new()
        .of_type(kind)
        .with_level(level)
        .without_storage()
        .with_observer(move |record: &LogRecord| -> Result<(), ObserverError> {
            if let Ok(mut counts) = counts.lock() {
                counts[record.level().as_i32() as usize] += 1;
            }
            Ok(())
        });
    if let Some(path) = &cli.path {
        builder = builder.with_path(path);
    }
    if cli.disabled {
        builder = builder.disabled();
    }
    if cli.storage {
        builder = builder.with_storage();
    }

    builder.build().context("Failed to create logger")
}

/// Print the retained-record report and level counts on stderr.
fn report(logger: &Logger, counts: &[usize; 6], summary: bool) {
    if let Some(records) = logger.retained() {
        eprintln!("Retained records: {}", records.len());
        for record in records {
            eprintln!("  [{}] {}", record.level(), record.message());
        }
    }
    if summary {
        eprintln!("Summary:");
        for level in Severity::ALL {
            eprintln!("  {}: {}", level, counts[level.as_i32() as usize]);
        }
    }
}

/// Build the logger together with its per-severity counter.
fn start(cli: &Cli) -> Result<(Logger, Arc<Mutex<[usize; 6]>>)> {
    let counts = Arc::new(Mutex::new([0usize; 6]));
    let logger = build_logger(cli, counts.clone())?;
    tracing::info!(writer = %logger.describe_writer(), "Logger ready");

    Ok((logger, counts))
}

fn finish(cli: &Cli, logger: &Logger, counts: &Mutex<[usize; 6]>) {
    let counts = counts.lock().map(|c| *c).unwrap_or_default();
    report(logger, &counts, cli.summary);
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match &cli.command {
        Commands::Levels => {
            for level in Severity::ALL {
                println!("{} {}", level.as_i32(), level);
            }
        }

        Commands::Emit { severity, message } => {
            let level: Severity = severity.parse()?;
            let (mut logger, counts) = start(&cli)?;
            logger
                .log(level, message.as_str(), call_site!())
                .context("Failed to log message")?;
            finish(&cli, &logger, &counts);
        }

        Commands::Pipe { severity } => {
            let level: Severity = severity.parse()?;
            let (mut logger, counts) = start(&cli)?;
            let stdin = std::io::stdin();
            for (index, line) in stdin.lock().lines().enumerate() {
                let line = line.context("Failed to read stdin")?;
                logger
                    .log(level, line, call_site!())
                    .with_context(|| format!("Failed to log line {}", index + 1))?;
            }
            finish(&cli, &logger, &counts);
        }
    }

    Ok(())
}
