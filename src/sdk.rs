// ══════════════════════════════════════════════════════════════════════════════
// SDK ADAPTER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Adapter for the AWS SDK's (smithy) logging interface: a single `logf` entry
// point keyed by the SDK's classification. Only Warn and Debug are surfaced;
// every other classification is dropped without output.

use std::fmt::{self, Arguments};
use std::io::Write;
use std::panic::Location;
use std::str::FromStr;

use crate::config::LoggerConfig;
use crate::error::Result;
use crate::level::Severity;
use crate::logger::LoggerCore;

/// The SDK's message classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Classification {
	Warn,
	Debug,
	/// Any classification this adapter does not surface.
	Other(String),
}

impl Classification {
	pub fn as_str(&self) -> &str {
		match self {
			Classification::Warn => "WARN",
			Classification::Debug => "DEBUG",
			Classification::Other(name) => name,
		}
	}

	fn severity(&self) -> Option<Severity> {
		match self {
			Classification::Warn => Some(Severity::Warn),
			Classification::Debug => Some(Severity::Debug),
			Classification::Other(_) => None,
		}
	}
}

impl fmt::Display for Classification {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<&str> for Classification {
	fn from(name: &str) -> Self {
		match name {
			"WARN" => Classification::Warn,
			"DEBUG" => Classification::Debug,
			other => Classification::Other(other.to_string()),
		}
	}
}

impl FromStr for Classification {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		Ok(Classification::from(s))
	}
}

/// The SDK-side logging contract.
///
/// The caller's location follows through trait objects, so the SDK's own
/// call site is what gets reported.
pub trait SdkLogging: Send + Sync {
	#[track_caller]
	fn logf(&self, classification: Classification, args: Arguments<'_>);
}

/// Logger handed to the SDK. Holds the same core as [`crate::AppLogger`] but
/// only surfaces `logf` and threshold control.
pub struct SdkLogger<W> {
	core: LoggerCore<W>,
}

/// Builds an SDK logger writing to `sink`; same validation as
/// [`crate::new_app_logger`].
pub fn new_sdk_logger<W: Write + Send>(sink: W, level: &str, style: &str, prefix: &str) -> Result<SdkLogger<W>> {
	let config = LoggerConfig::parse(level, style, prefix)?;
	Ok(SdkLogger::with_config(sink, config))
}

impl<W: Write + Send> SdkLogger<W> {
	pub fn with_config(sink: W, config: LoggerConfig) -> Self {
		SdkLogger { core: LoggerCore::new(sink, config) }
	}

	pub fn level(&self) -> Severity {
		self.core.level()
	}

	pub fn set_level(&self, level: Severity) {
		self.core.set_level(level);
	}

	pub fn into_sink(self) -> W {
		self.core.into_sink()
	}
}

impl<W: Write + Send> SdkLogging for SdkLogger<W> {
	#[track_caller]
	fn logf(&self, classification: Classification, args: Arguments<'_>) {
		if let Some(severity) = classification.severity() {
			self.core.emit(severity, Some(Location::caller().into()), args);
		}
	}
}

/// `sdk_logf!(logger, Classification::Warn, "retrying {} of {}", n, max)`
#[macro_export]
macro_rules! sdk_logf {
	($logger:expr, $classification:expr, $($arg:tt)*) => {{
		use $crate::SdkLogging as _;
		$logger.logf($classification, format_args!($($arg)*))
	}};
}

#[cfg(test)]
mod tests {
	use super::*;

	fn logger(level: &str) -> SdkLogger<Vec<u8>> {
		new_sdk_logger(Vec::new(), level, "default", "").unwrap()
	}

	fn output(logger: SdkLogger<Vec<u8>>) -> String {
		String::from_utf8(logger.into_sink()).unwrap()
	}

	#[test]
	fn test_classification_names() {
		assert_eq!(Classification::from("WARN"), Classification::Warn);
		assert_eq!(Classification::from("DEBUG"), Classification::Debug);
		assert_eq!(Classification::from("warn"), Classification::Other("warn".into()));
		assert_eq!("INFO".parse::<Classification>(), Ok(Classification::Other("INFO".into())));
		assert_eq!(Classification::Debug.to_string(), "DEBUG");
	}

	#[test]
	fn test_warn_formats_arguments() {
		let l = logger("warn");
		crate::sdk_logf!(l, Classification::Warn, "Warning: {} issues found", 3);
		assert_eq!(output(l), "WRN Warning: 3 issues found\n");
	}

	#[test]
	fn test_debug_filtered_above_threshold() {
		let l = logger("info");
		l.logf(Classification::Debug, format_args!("hidden"));
		assert_eq!(output(l), "");
	}

	#[test]
	fn test_other_classifications_are_silent() {
		let l = logger("debug");
		l.logf(Classification::Other("INFO".into()), format_args!("x"));
		l.logf(Classification::Other("ERROR".into()), format_args!("y"));
		assert_eq!(output(l), "");
	}

	#[test]
	fn test_set_level() {
		let l = logger("error");
		l.logf(Classification::Warn, format_args!("before"));
		l.set_level(Severity::Warn);
		assert_eq!(l.level(), Severity::Warn);
		l.logf(Classification::Warn, format_args!("after"));
		assert_eq!(output(l), "WRN after\n");
	}

	#[test]
	fn test_rejects_invalid_input() {
		assert!(new_sdk_logger(Vec::new(), "invalid level", "default", "").is_err());
		assert!(new_sdk_logger(Vec::new(), "info", "invalid styles", "").is_err());
	}
}
