// ══════════════════════════════════════════════════════════════════════════════
// LEVEL MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The fixed severity scale. Debug is the most verbose threshold and Fatal the
// least; ordering follows declaration order.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
	Debug,
	Info,
	Warn,
	Error,
	Fatal,
}

impl Severity {
	/// Every severity, most verbose first.
	pub const ALL: [Severity; 5] = [
		Severity::Debug,
		Severity::Info,
		Severity::Warn,
		Severity::Error,
		Severity::Fatal,
	];

	/// Threshold at which call-site reporting switches on.
	pub const MOST_VERBOSE: Severity = Severity::Debug;

	pub fn as_str(self) -> &'static str {
		match self {
			Severity::Debug => "debug",
			Severity::Info => "info",
			Severity::Warn => "warn",
			Severity::Error => "error",
			Severity::Fatal => "fatal",
		}
	}

	pub(crate) fn index(self) -> usize {
		self as usize
	}
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Severity {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		parse_level(s)
	}
}

/// Parses a case-sensitive level name.
pub fn parse_level(level: &str) -> Result<Severity> {
	match level {
		"debug" => Ok(Severity::Debug),
		"info" => Ok(Severity::Info),
		"warn" => Ok(Severity::Warn),
		"error" => Ok(Severity::Error),
		"fatal" => Ok(Severity::Fatal),
		other => Err(Error::InvalidLevel(other.to_string())),
	}
}
