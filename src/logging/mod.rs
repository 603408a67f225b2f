//! Leveled diagnostic logging for simulation runs.
pub mod cli;

pub use cli::CLILogger;

use std::fmt;

/// Severity of a diagnostic message.
///
/// Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Level::Debug => "DEBUG",
                Level::Info => "INFO",
                Level::Warning => "WARNING",
                Level::Error => "ERROR",
                Level::Critical => "CRITICAL",
            }
        )
    }
}

/// Emit leveled diagnostic messages.
///
/// Passed explicitly into the code that logs rather than accessed as a
/// process-wide singleton.
pub trait Logger {
    /// Log a message at the given level.
    fn log(&mut self, level: Level, message: &str);

    fn debug(&mut self, message: &str) {
        self.log(Level::Debug, message)
    }

    fn info(&mut self, message: &str) {
        self.log(Level::Info, message)
    }

    fn warning(&mut self, message: &str) {
        self.log(Level::Warning, message)
    }

    fn error(&mut self, message: &str) {
        self.log(Level::Error, message)
    }

    fn critical(&mut self, message: &str) {
        self.log(Level::Critical, message)
    }
}

/// Logger that does nothing
impl Logger for () {
    fn log(&mut self, _: Level, _: &str) {}
}

/// Logger that collects every message, mainly for inspection in tests.
impl Logger for Vec<(Level, String)> {
    fn log(&mut self, level: Level, message: &str) {
        self.push((level, message.to_owned()));
    }
}

#[cfg(test)]
mod level {
    use super::*;

    #[test]
    fn ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
    }

    #[test]
    fn display() {
        assert_eq!(Level::Warning.to_string(), "WARNING");
    }
}

#[cfg(test)]
mod logger {
    use super::*;

    #[test]
    fn null_logger_accepts_all_levels() {
        let mut logger = ();
        logger.debug("a");
        logger.critical("b");
    }

    #[test]
    fn vec_logger_collects_in_order() {
        let mut logger: Vec<(Level, String)> = Vec::new();
        logger.info("first");
        logger.debug("second");
        assert_eq!(
            logger,
            vec![
                (Level::Info, "first".to_owned()),
                (Level::Debug, "second".to_owned())
            ]
        );
    }
}
