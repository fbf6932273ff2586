// ══════════════════════════════════════════════════════════════════════════════
// LOG FACADE BRIDGE
// ══════════════════════════════════════════════════════════════════════════════
//
// Routes records from the `log` crate macros (used by most dependencies)
// through an `AppLogger`'s core, so everything shares one styled sink.
//
//   log::Level   →  Severity
//   Trace/Debug  →  Debug
//   Info         →  Info
//   Warn         →  Warn
//   Error        →  Error

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::app::AppLogger;
use crate::level::Severity;
use crate::logger::{CallSite, LoggerCore};

pub struct LogBridge<W> {
	core: LoggerCore<W>,
}

impl<W: Write + Send> LogBridge<W> {
	pub fn new(logger: AppLogger<W>) -> Self {
		LogBridge { core: logger.into_core() }
	}

	/// The most verbose `log` level that can pass the current threshold.
	pub fn max_level(&self) -> LevelFilter {
		level_filter(self.core.level())
	}
}

pub fn severity_of(level: Level) -> Severity {
	match level {
		Level::Trace | Level::Debug => Severity::Debug,
		Level::Info => Severity::Info,
		Level::Warn => Severity::Warn,
		Level::Error => Severity::Error,
	}
}

pub fn level_filter(threshold: Severity) -> LevelFilter {
	match threshold {
		Severity::Debug => LevelFilter::Trace,
		Severity::Info => LevelFilter::Info,
		Severity::Warn => LevelFilter::Warn,
		Severity::Error => LevelFilter::Error,
		// Nothing from `log` reaches Fatal.
		Severity::Fatal => LevelFilter::Off,
	}
}

impl<W: Write + Send> Log for LogBridge<W> {
	fn enabled(&self, metadata: &Metadata) -> bool {
		self.core.enabled(severity_of(metadata.level()))
	}

	fn log(&self, record: &Record) {
		if !self.enabled(record.metadata()) {
			return;
		}
		let caller = record
			.file()
			.zip(record.line())
			.map(|(file, line)| CallSite { file, line });
		self.core.emit(severity_of(record.level()), caller, *record.args());
	}

	fn flush(&self) {
		self.core.flush();
	}
}

/// Installs `logger` as the global `log` backend.
///
/// Fails if another backend is already installed.
pub fn install<W: Write + Send + 'static>(logger: AppLogger<W>) -> Result<(), SetLoggerError> {
	let bridge = LogBridge::new(logger);
	let max = bridge.max_level();
	log::set_boxed_logger(Box::new(bridge))?;
	log::set_max_level(max);
	Ok(())
}
