//! Logging Infrastructure
//!
//! Structured logging for development (stdout) and production (daily
//! rolling files, optionally JSON).

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Log file prefix inside the log directory
const LOG_FILE_PREFIX: &str = "tsms-console";

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None, None);
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `log_level`. Calling this twice is a
/// no-op for the second call.
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let json = json.unwrap_or(false);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir exists
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, LOG_FILE_PREFIX);
            let result = if json {
                subscriber
                    .json()
                    .with_ansi(false)
                    .with_writer(file_appender)
                    .try_init()
            } else {
                subscriber
                    .with_ansi(false)
                    .with_writer(file_appender)
                    .try_init()
            };
            result.ok();
            return;
        }
    }

    if json {
        subscriber.json().try_init().ok();
    } else {
        subscriber.try_init().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        init_logger_with_file(Some("debug"), Some(false), dir.path().to_str());
        init_logger();
        tracing::info!("logger initialised");
    }
}
