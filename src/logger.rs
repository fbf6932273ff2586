// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The capability set every logger exposes, and the shared core that both the
// application and SDK loggers hold. The core owns the sink plus the mutable
// settings behind a single lock, filters by threshold and renders one line
// per accepted message:
//
//   [timestamp ]<label> [<dir/file.rs:line> ][prefix: ]<message>\n
//
// Call-site reporting is derived from the threshold and never set directly.

use std::fmt::{self, Arguments, Write as _};
use std::io;
use std::panic::Location;

use chrono::Local;
use colored::Colorize;
use parking_lot::Mutex;

use crate::config::{ColorMode, LoggerConfig};
use crate::constants::TIME_FORMAT;
use crate::level::Severity;
use crate::styles::StyleTable;

/// Source location of a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
	pub file: &'a str,
	pub line: u32,
}

impl<'a> From<&'a Location<'a>> for CallSite<'a> {
	fn from(location: &'a Location<'a>) -> Self {
		CallSite { file: location.file(), line: location.line() }
	}
}

impl fmt::Display for CallSite<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "<{}:{}>", short_path(self.file), self.line)
	}
}

/// Keeps the last two path components: `src/app/main.rs` → `app/main.rs`.
fn short_path(file: &str) -> &str {
	match file.rmatch_indices(|c| c == '/' || c == '\\').nth(1) {
		Some((i, _)) => &file[i + 1..],
		None => file,
	}
}

/// Leveled logging interface.
///
/// Implementations gate on their threshold and write to whatever sink they
/// were bound to. Settings take `&self`; implementations synchronise
/// internally.
pub trait Logger: Send + Sync {
	/// Writes `args` at `severity` if it passes the threshold. `caller` is
	/// shown whenever the threshold is Debug.
	fn emit(&self, severity: Severity, caller: CallSite<'_>, args: Arguments<'_>);

	fn level(&self) -> Severity;

	/// Changes the threshold. Call-site reporting follows: on at
	/// [`Severity::MOST_VERBOSE`], off otherwise.
	fn set_level(&self, level: Severity);

	fn set_styles(&self, styles: StyleTable);

	/// An empty prefix removes it.
	fn set_prefix(&self, prefix: &str);

	#[track_caller]
	fn log(&self, severity: Severity, args: Arguments<'_>) {
		self.emit(severity, Location::caller().into(), args);
	}

	#[track_caller]
	fn debug(&self, args: Arguments<'_>) {
		self.emit(Severity::Debug, Location::caller().into(), args);
	}

	#[track_caller]
	fn info(&self, args: Arguments<'_>) {
		self.emit(Severity::Info, Location::caller().into(), args);
	}

	#[track_caller]
	fn warn(&self, args: Arguments<'_>) {
		self.emit(Severity::Warn, Location::caller().into(), args);
	}

	#[track_caller]
	fn error(&self, args: Arguments<'_>) {
		self.emit(Severity::Error, Location::caller().into(), args);
	}
}

struct Inner<W> {
	sink: W,
	level: Severity,
	styles: StyleTable,
	prefix: Option<String>,
	report_caller: bool,
	report_timestamp: bool,
	color: ColorMode,
}

impl<W> Inner<W> {
	fn set_level(&mut self, level: Severity) {
		self.level = level;
		self.report_caller = level == Severity::MOST_VERBOSE;
	}

	fn render(&self, severity: Severity, caller: Option<CallSite<'_>>, args: Arguments<'_>) -> String {
		let colorize = self.color.enabled();
		let mut line = String::new();

		if self.report_timestamp {
			line.push_str(&Local::now().format(TIME_FORMAT).to_string());
			line.push(' ');
		}

		line.push_str(&self.styles[severity].render(colorize));
		line.push(' ');

		if let (true, Some(caller)) = (self.report_caller, caller) {
			let token = caller.to_string();
			if colorize {
				line.push_str(&token.as_str().dimmed().to_string());
			} else {
				line.push_str(&token);
			}
			line.push(' ');
		}

		if let Some(prefix) = &self.prefix {
			let token = format!("{prefix}:");
			if colorize {
				line.push_str(&token.as_str().bold().dimmed().to_string());
			} else {
				line.push_str(&token);
			}
			line.push(' ');
		}

		let _ = line.write_fmt(args);
		line.push('\n');
		line
	}
}

/// State shared by every logger front end: sink, threshold, styles, prefix.
pub(crate) struct LoggerCore<W> {
	inner: Mutex<Inner<W>>,
}

impl<W: io::Write> LoggerCore<W> {
	pub(crate) fn new(sink: W, config: LoggerConfig) -> Self {
		let mut inner = Inner {
			sink,
			level: config.level,
			styles: config.styles,
			prefix: config.prefix.filter(|p| !p.is_empty()),
			report_caller: false,
			report_timestamp: config.report_timestamp,
			color: config.color,
		};
		inner.set_level(config.level);
		LoggerCore { inner: Mutex::new(inner) }
	}

	pub(crate) fn enabled(&self, severity: Severity) -> bool {
		severity >= self.inner.lock().level
	}

	/// `caller` is `None` only for sources that carry no location, such as
	/// `log` records without a file.
	pub(crate) fn emit(&self, severity: Severity, caller: Option<CallSite<'_>>, args: Arguments<'_>) {
		let mut inner = self.inner.lock();
		if severity < inner.level {
			return;
		}
		let line = inner.render(severity, caller, args);
		// Write failures belong to the sink owner.
		let _ = inner.sink.write_all(line.as_bytes());
	}

	pub(crate) fn flush(&self) {
		let _ = self.inner.lock().sink.flush();
	}

	pub(crate) fn level(&self) -> Severity {
		self.inner.lock().level
	}

	pub(crate) fn set_level(&self, level: Severity) {
		self.inner.lock().set_level(level);
	}

	pub(crate) fn set_styles(&self, styles: StyleTable) {
		self.inner.lock().styles = styles;
	}

	pub(crate) fn set_prefix(&self, prefix: &str) {
		self.inner.lock().prefix = (!prefix.is_empty()).then(|| prefix.to_string());
	}

	pub(crate) fn set_report_timestamp(&self, enabled: bool) {
		self.inner.lock().report_timestamp = enabled;
	}

	pub(crate) fn set_color(&self, color: ColorMode) {
		self.inner.lock().color = color;
	}

	pub(crate) fn report_caller(&self) -> bool {
		self.inner.lock().report_caller
	}

	pub(crate) fn into_sink(self) -> W {
		self.inner.into_inner().sink
	}
}

/// `log_info!(logger, "loaded {} profiles", n)`
#[macro_export]
macro_rules! log_debug {
	($logger:expr, $($arg:tt)*) => {{
		use $crate::Logger as _;
		$logger.debug(format_args!($($arg)*))
	}};
}

#[macro_export]
macro_rules! log_info {
	($logger:expr, $($arg:tt)*) => {{
		use $crate::Logger as _;
		$logger.info(format_args!($($arg)*))
	}};
}

#[macro_export]
macro_rules! log_warn {
	($logger:expr, $($arg:tt)*) => {{
		use $crate::Logger as _;
		$logger.warn(format_args!($($arg)*))
	}};
}

#[macro_export]
macro_rules! log_error {
	($logger:expr, $($arg:tt)*) => {{
		use $crate::Logger as _;
		$logger.error(format_args!($($arg)*))
	}};
}
