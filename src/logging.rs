//! Log setup. The tree itself only talks to the `log` facade; these helpers
//! install a `simplelog` backend for whoever embeds it.

use std::fmt;
use std::fs::File;
use std::path::PathBuf;

use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    TestLogger, WriteLogger,
};

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level for messages printed to the terminal.
    pub terminal_level: LevelFilter,
    /// Optional log file and the level written to it.
    pub file: Option<(PathBuf, LevelFilter)>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { terminal_level: LevelFilter::Warn, file: None }
    }
}

#[derive(Debug)]
pub enum LoggingError {
    CreateFile(std::io::Error),
    AlreadyInitialized(log::SetLoggerError),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::CreateFile(e) => write!(f, "couldn't create log file: {e}"),
            LoggingError::AlreadyInitialized(e) => write!(f, "logger already set: {e}"),
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggingError::CreateFile(e) => Some(e),
            LoggingError::AlreadyInitialized(e) => Some(e),
        }
    }
}

/// Installs a terminal logger plus, if configured, a file logger.
///
/// Can only succeed once per process.
pub fn initialize_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        config.terminal_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some((path, level)) = &config.file {
        let file = File::create(path).map_err(LoggingError::CreateFile)?;
        loggers.push(WriteLogger::new(*level, Config::default(), file));
    }
    CombinedLogger::init(loggers).map_err(LoggingError::AlreadyInitialized)
}

/// Routes everything down to `trace` through the test harness's captured output.
///
/// Safe to call from every test; only the first call does anything.
pub fn init_test_logging() {
    // every test after the first one hits "logger already set"
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}
