//! Command-line logger
use super::{Level, Logger};
use std::io::{self, Write};
use yansi::Paint;

/// Logger that writes colored messages to stderr.
///
/// Messages below `min_level` are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CLILogger {
    min_level: Level,
}

impl CLILogger {
    pub const fn new(min_level: Level) -> Self {
        Self { min_level }
    }
}

impl Default for CLILogger {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl Logger for CLILogger {
    fn log(&mut self, level: Level, message: &str) {
        if level < self.min_level {
            return;
        }
        let tag = match level {
            Level::Debug => Paint::cyan("DEBUG"),
            Level::Info => Paint::green("INFO"),
            Level::Warning => Paint::yellow("WARNING"),
            Level::Error => Paint::red("ERROR"),
            Level::Critical => Paint::red("CRITICAL").bold(),
        };
        // Ignore write errors; diagnostics must not abort a run.
        let _ = writeln!(io::stderr(), "[{}] {}", tag, message);
    }
}
