// ══════════════════════════════════════════════════════════════════════════════
// APP LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The application-facing logger: the full `Logger` capability set plus the
// extras an application wants (fatal, timestamps, colour control).

use std::fmt::Arguments;
use std::io::Write;
use std::panic::Location;

use crate::config::{ColorMode, LoggerConfig};
use crate::error::Result;
use crate::level::Severity;
use crate::logger::{CallSite, Logger, LoggerCore};
use crate::styles::StyleTable;

pub struct AppLogger<W> {
	core: LoggerCore<W>,
}

/// Builds an application logger writing to `sink`.
///
/// `level` and `style` must name a known level and preset; an empty `prefix`
/// means none.
pub fn new_app_logger<W: Write + Send>(sink: W, level: &str, style: &str, prefix: &str) -> Result<AppLogger<W>> {
	let config = LoggerConfig::parse(level, style, prefix)?;
	Ok(AppLogger::with_config(sink, config))
}

impl<W: Write + Send> AppLogger<W> {
	pub fn with_config(sink: W, config: LoggerConfig) -> Self {
		AppLogger { core: LoggerCore::new(sink, config) }
	}

	/// Logs at Fatal, then exits the process with status 1.
	#[track_caller]
	pub fn fatal(&self, args: Arguments<'_>) -> ! {
		self.core.emit(Severity::Fatal, Some(Location::caller().into()), args);
		self.core.flush();
		std::process::exit(1)
	}

	pub fn report_caller(&self) -> bool {
		self.core.report_caller()
	}

	pub fn set_report_timestamp(&self, enabled: bool) {
		self.core.set_report_timestamp(enabled);
	}

	pub fn set_color(&self, color: ColorMode) {
		self.core.set_color(color);
	}

	/// Releases the sink.
	pub fn into_sink(self) -> W {
		self.core.into_sink()
	}

	pub(crate) fn into_core(self) -> LoggerCore<W> {
		self.core
	}
}

impl<W: Write + Send> Logger for AppLogger<W> {
	fn emit(&self, severity: Severity, caller: CallSite<'_>, args: Arguments<'_>) {
		self.core.emit(severity, Some(caller), args);
	}

	fn level(&self) -> Severity {
		self.core.level()
	}

	fn set_level(&self, level: Severity) {
		self.core.set_level(level);
	}

	fn set_styles(&self, styles: StyleTable) {
		self.core.set_styles(styles);
	}

	fn set_prefix(&self, prefix: &str) {
		self.core.set_prefix(prefix);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;
	use crate::styles::labeled_styles;

	#[test]
	fn test_new_app_logger_errors() {
		assert_eq!(
			new_app_logger(Vec::new(), "invalid level", "default", "MyApp").err(),
			Some(Error::InvalidLevel("invalid level".into()))
		);
		assert_eq!(
			new_app_logger(Vec::new(), "info", "invalid styles", "MyApp").err(),
			Some(Error::UnsupportedStyle("invalid styles".into()))
		);
	}

	#[test]
	fn test_caller_reporting_only_at_debug() {
		for severity in Severity::ALL {
			let logger = new_app_logger(Vec::new(), severity.as_str(), "default", "").unwrap();
			assert_eq!(logger.report_caller(), severity == Severity::Debug);
		}
	}

	#[test]
	fn test_dyn_logger() {
		let logger = new_app_logger(Vec::new(), "warn", "default", "").unwrap();
		{
			let dynamic: &dyn Logger = &logger;
			dynamic.info(format_args!("dropped"));
			dynamic.warn(format_args!("kept"));
			dynamic.set_styles(labeled_styles());
			dynamic.error(format_args!("kept too"));
		}
		let out = String::from_utf8(logger.into_sink()).unwrap();
		assert_eq!(out, "WRN kept\n ERR  kept too\n");
	}

	#[test]
	fn test_explicit_call_site_shown_at_debug() {
		let logger = new_app_logger(Vec::new(), "debug", "default", "").unwrap();
		let site = CallSite { file: "crates/sdk/retry.rs", line: 88 };
		logger.emit(Severity::Warn, site, format_args!("retrying"));
		logger.set_level(Severity::Info);
		logger.emit(Severity::Warn, site, format_args!("quiet site"));
		let out = String::from_utf8(logger.into_sink()).unwrap();
		assert_eq!(out, "WRN <sdk/retry.rs:88> retrying\nWRN quiet site\n");
	}

	#[test]
	fn test_borrowed_sink() {
		let mut buf = Vec::new();
		{
			let logger = new_app_logger(&mut buf, "info", "default", "app").unwrap();
			crate::log_info!(logger, "{} + {} = {}", 1, 2, 3);
		}
		assert_eq!(buf, b"INF app: 1 + 2 = 3\n");
	}

	#[test]
	fn test_send_sync() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<AppLogger<Vec<u8>>>();
		assert_send_sync::<AppLogger<std::io::Stderr>>();
	}
}
