//! Logger setup for the command-line binary.

use std::io::Write;

use env_logger::{fmt::Formatter, Builder, Target};
use log::{Level, LevelFilter, Record};

use crate::error::Result;

/// Map the number of `-v` flags to a level filter; `quiet` wins over verbosity.
pub fn level_from_verbosity(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger writing to stderr. `RUST_LOG` overrides `level`.
pub fn init_logger(level: LevelFilter) -> Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr)
        .format(format_record);

    builder.try_init()?;
    Ok(())
}

fn format_record(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    writeln!(
        buf,
        "{} {} [{}] {}",
        buf.timestamp_millis(),
        level_tag(record.level()),
        record.target(),
        record.args()
    )
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
