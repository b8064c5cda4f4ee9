//! Constants shared across the application.

/// Default address of the metrics server
pub const DEFAULT_METRICS_ADDRESS: &str = "127.0.0.1:8081";

/// Default directory for log files when file logging is enabled
pub const DEFAULT_LOG_DIR: &str = "logs/";

/// Prefix of the rolling log files
pub const LOG_FILE_PREFIX: &str = "gateway.log";

/// Content type of the Prometheus text exposition format
pub const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";
