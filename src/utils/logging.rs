//! Logging utilities for the application
//!
//! Logging is configured through `tracing_subscriber` with an `EnvFilter`
//! read from `RUST_LOG`, then `LOG_LEVEL`, defaulting to `info`.
//!
//! With `LOG_MODE=file` events go to daily rolling files under `LOG_DATA_DIR`
//! (default `logs/`) instead of stdout.

use std::path::PathBuf;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use crate::utils::constants::{DEFAULT_LOG_DIR, LOG_FILE_PREFIX};

type LoggingResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

/// Setup logging for the application
///
/// Writes to stdout unless file logging was requested through `LOG_MODE`.
pub fn setup_logging() -> LoggingResult {
	let mode = std::env::var("LOG_MODE").ok();
	if is_file_mode(mode.as_deref()) {
		let directory = log_directory(std::env::var("LOG_DATA_DIR").ok());
		std::fs::create_dir_all(&directory)?;
		let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
		init_subscriber(appender, false)
	} else {
		setup_logging_with_writer(std::io::stdout)
	}
}

/// Setup logging for the application with a custom writer
pub fn setup_logging_with_writer<W>(writer: W) -> LoggingResult
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	init_subscriber(writer, true)
}

fn init_subscriber<W>(writer: W, ansi: bool) -> LoggingResult
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	let filter = EnvFilter::try_from_default_env()
		.ok()
		.or_else(|| {
			std::env::var("LOG_LEVEL")
				.ok()
				.filter(|level| !level.trim().is_empty())
				.and_then(|level| EnvFilter::try_new(level).ok())
		})
		.unwrap_or_else(|| EnvFilter::new("info"));

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(writer)
				.event_format(
					fmt::format()
						.with_level(true)
						.with_target(true)
						.with_thread_ids(false)
						.with_thread_names(false)
						.with_ansi(ansi)
						.compact(),
				)
				.fmt_fields(fmt::format::PrettyFields::new()),
		)
		.try_init()?;
	Ok(())
}

fn is_file_mode(mode: Option<&str>) -> bool {
	mode.is_some_and(|m| m.eq_ignore_ascii_case("file"))
}

fn log_directory(configured: Option<String>) -> PathBuf {
	configured
		.filter(|dir| !dir.trim().is_empty())
		.map(PathBuf::from)
		.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR))
}
