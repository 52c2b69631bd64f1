// src/logging.rs

use crate::errors::{ShopchatError, ShopchatResult};
use crate::models::ApiCallLog;
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};
use std::path::Path;

/// Starts file logging. The terminal belongs to the widget, so nothing is
/// written to stdout or stderr.
pub fn init_logging(level: &str, log_dir: &Path) -> ShopchatResult<LoggerHandle> {
    Logger::try_with_str(level)
        .map_err(|e| ShopchatError::config_error(format!("Invalid log level: {}", e)))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename("shopchat")
                .suppress_timestamp(),
        )
        .append()
        .write_mode(WriteMode::BufferAndFlush)
        .format(flexi_logger::detailed_format)
        .start()
        .map_err(|e| ShopchatError::config_error(format!("Failed to start logger: {}", e)))
}

/// Starts stderr logging for the headless backend.
pub fn init_server_logging(level: &str) -> ShopchatResult<LoggerHandle> {
    Logger::try_with_str(level)
        .map_err(|e| ShopchatError::config_error(format!("Invalid log level: {}", e)))?
        .format(flexi_logger::colored_default_format)
        .start()
        .map_err(|e| ShopchatError::config_error(format!("Failed to start logger: {}", e)))
}

/// Logs a finished call to the support backend.
pub fn log_api_call(log: &ApiCallLog) {
    log::info!(
        target: "shopchat::api",
        "[{}] {} - {} - Status: {} - Time: {}ms",
        log.timestamp.to_rfc3339(),
        log.endpoint,
        log.request_summary,
        log.response_status,
        log.response_time_ms
    );
}
