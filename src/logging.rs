// src/logging.rs
//! Stderr backend for the `log` facade, used by the `ranker` binary.

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} {}", tag(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}

fn tag(level: Level) -> colored::ColoredString {
    match level {
        Level::Error => "error".red().bold(),
        Level::Warn => "warn ".yellow().bold(),
        Level::Info => "info ".green(),
        Level::Debug => "debug".cyan(),
        Level::Trace => "trace".dimmed(),
    }
}

/// Maps `-v` occurrences to a level: none shows warnings, one debug, two trace.
#[must_use]
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the console logger. Later calls only adjust the level.
pub fn init(verbosity: u8) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level_for(verbosity));
}
