// ══════════════════════════════════════════════════════════════════════════════
// CONFIG MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Resolved logger settings. `LoggerConfig::parse` is the one place textual
// level/style input becomes typed values; it is strict, so a bad name never
// reaches a logger.

use crate::error::Result;
use crate::level::{parse_level, Severity};
use crate::styles::{parse_style, StyleTable};

/// Whether rendered lines carry ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
	/// Style output, subject to `colored`'s global switch. Front ends writing
	/// somewhere other than stdout should set that switch themselves, see
	/// [`ColorMode::for_terminal`].
	Auto,
	/// Plain text. The default, since an arbitrary sink is rarely a terminal.
	#[default]
	Never,
}

impl ColorMode {
	pub fn enabled(self) -> bool {
		matches!(self, ColorMode::Auto)
	}

	/// Picks the mode for a sink that is (or is not) a terminal. `NO_COLOR`
	/// always wins.
	pub fn for_terminal(is_terminal: bool, no_color: bool) -> Self {
		if is_terminal && !no_color { ColorMode::Auto } else { ColorMode::Never }
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
	pub level: Severity,
	pub styles: StyleTable,
	pub prefix: Option<String>,
	pub color: ColorMode,
	pub report_timestamp: bool,
}

impl LoggerConfig {
	pub fn new(level: Severity, styles: StyleTable) -> Self {
		LoggerConfig {
			level,
			styles,
			prefix: None,
			color: ColorMode::default(),
			report_timestamp: false,
		}
	}

	/// Resolves textual settings, failing on an unknown level or style.
	pub fn parse(level: &str, style: &str, prefix: &str) -> Result<Self> {
		let level = parse_level(level)?;
		let styles = parse_style(style)?;
		Ok(LoggerConfig::new(level, styles).with_prefix(prefix))
	}

	/// An empty prefix means none.
	pub fn with_prefix(mut self, prefix: &str) -> Self {
		self.prefix = (!prefix.is_empty()).then(|| prefix.to_string());
		self
	}

	pub fn with_color(mut self, color: ColorMode) -> Self {
		self.color = color;
		self
	}

	pub fn with_timestamp(mut self, enabled: bool) -> Self {
		self.report_timestamp = enabled;
		self
	}
}

impl Default for LoggerConfig {
	fn default() -> Self {
		LoggerConfig::new(Severity::Info, StyleTable::default())
	}
}
