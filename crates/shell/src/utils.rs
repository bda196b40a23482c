//! Some utilities

use std::path::{Path, PathBuf};

use ftlog::{
    LevelFilter, LoggerGuard,
    appender::{FileAppender, Period},
};

/// Returns the `logs` directory under the current working directory, creating it if needed.
///
/// # Errors
///
/// - If the current working directory could not be located.
/// - If the `logs` directory could not be created.
pub fn logs_dir() -> Result<PathBuf, String> {
    let root_dir = PathBuf::from(".").canonicalize().map_err(|e| e.to_string())?;
    let logs_dir = root_dir.join("logs");
    if !logs_dir.exists() {
        std::fs::create_dir(&logs_dir).map_err(|e| format!("Failed to create log directory '{}': {e}", logs_dir.display()))?;
    } else if !logs_dir.is_dir() {
        return Err(format!("Log path '{}' is not a directory.", logs_dir.display()));
    }
    Ok(logs_dir)
}

/// Configures the logger.
///
/// Logs go to `file_name` in `logs_dir`, rotated daily. Warnings and errors from the appender itself go to a sibling file with an `err.log`
/// extension.
///
/// # Errors
///
/// - If the logger could not be initialized.
pub fn configure_logger<P: AsRef<Path>>(file_name: &str, logs_dir: &P) -> Result<(LoggerGuard, PathBuf), String> {
    let log_path = logs_dir.as_ref().join(file_name);

    let writer = FileAppender::builder().path(&log_path).rotate(Period::Day).build();

    let err_path = log_path.with_extension("err.log");

    let guard = ftlog::Builder::new()
        // global max log level
        .max_log_level(LevelFilter::Info)
        // define root appender, pass None would write to stderr
        .root(writer)
        // write `Warn` and `Error` logs in ftlog::appender to `err_path` instead of `log_path`
        .filter("ftlog::appender", "ftlog-appender", LevelFilter::Warn)
        .appender("ftlog-appender", FileAppender::new(err_path))
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok((guard, log_path))
}
