//! Errors raised while reading the gateway configuration file.

use log::error;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
	/// Only `.json` configuration files are accepted
	#[error("configuration file must be a JSON file: {}", .path.display())]
	NotJson { path: PathBuf },

	#[error("cannot read configuration file {}: {source}", .path.display())]
	Unreadable {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("cannot parse configuration file {}: {source}", .path.display())]
	Malformed {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	/// A single field failed validation; `field` is its dotted path
	#[error("invalid configuration field {field}: {reason}")]
	InvalidField { field: &'static str, reason: String },
}

impl ConfigError {
	pub fn not_json(path: &Path) -> Self {
		Self::logged(Self::NotJson {
			path: path.to_path_buf(),
		})
	}

	pub fn unreadable(path: &Path, source: std::io::Error) -> Self {
		Self::logged(Self::Unreadable {
			path: path.to_path_buf(),
			source,
		})
	}

	pub fn malformed(path: &Path, source: serde_json::Error) -> Self {
		Self::logged(Self::Malformed {
			path: path.to_path_buf(),
			source,
		})
	}

	pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
		Self::logged(Self::InvalidField {
			field,
			reason: reason.into(),
		})
	}

	/// Name of the offending field, for validation failures
	pub fn field(&self) -> Option<&'static str> {
		match self {
			Self::InvalidField { field, .. } => Some(field),
			_ => None,
		}
	}

	fn logged(self) -> Self {
		error!("{}", self);
		self
	}
}
