// ══════════════════════════════════════════════════════════════════════════════
// STYLES MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Named presets controlling how each severity label is drawn. Tables are built
// fresh on every call and never shared, so callers may tweak their copy freely.
//
//   default  →  bold coloured text, 3 columns:           "DBG"
//   labeled  →  black text on a coloured badge, 5 cols:  " DBG "

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use colored::{Color, ColoredString, Colorize};

use crate::constants::*;
use crate::error::{Error, Result};
use crate::level::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StylePreset {
	#[default]
	Default,
	Labeled,
}

impl StylePreset {
	pub fn as_str(self) -> &'static str {
		match self {
			StylePreset::Default => "default",
			StylePreset::Labeled => "labeled",
		}
	}

	/// Builds the table for this preset.
	pub fn styles(self) -> StyleTable {
		match self {
			StylePreset::Default => default_styles(),
			StylePreset::Labeled => labeled_styles(),
		}
	}
}

impl fmt::Display for StylePreset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for StylePreset {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		match s {
			"default" => Ok(StylePreset::Default),
			"labeled" => Ok(StylePreset::Labeled),
			other => Err(Error::UnsupportedStyle(other.to_string())),
		}
	}
}

/// Rendering rules for one severity label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelStyle {
	pub label: &'static str,
	pub bold: bool,
	/// xterm-256 index; `None` leaves the terminal background alone.
	pub background: Option<u8>,
	/// xterm-256 index.
	pub foreground: u8,
	/// Columns of padding on each side of the label.
	pub padding: usize,
	pub max_width: usize,
}

impl LevelStyle {
	/// The label as laid out on screen, padded then clipped to `max_width`.
	pub fn cell(&self) -> String {
		let pad = " ".repeat(self.padding);
		format!("{pad}{}{pad}", self.label)
			.chars()
			.take(self.max_width)
			.collect()
	}

	/// The cell, with ANSI styling when `colorize` is set.
	pub fn render(&self, colorize: bool) -> String {
		let cell = self.cell();
		if !colorize {
			return cell;
		}
		let mut styled: ColoredString = cell.as_str().color(Color::AnsiColor(self.foreground));
		if let Some(bg) = self.background {
			styled = styled.on_color(Color::AnsiColor(bg));
		}
		if self.bold {
			styled = styled.bold();
		}
		styled.to_string()
	}
}

/// One [`LevelStyle`] per severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
	preset: StylePreset,
	levels: [LevelStyle; 5],
}

impl StyleTable {
	pub fn preset(&self) -> StylePreset {
		self.preset
	}

	pub fn get(&self, severity: Severity) -> &LevelStyle {
		&self.levels[severity.index()]
	}

	/// Replaces the entry for a single severity.
	pub fn set(&mut self, severity: Severity, style: LevelStyle) {
		self.levels[severity.index()] = style;
	}

	pub fn iter(&self) -> impl Iterator<Item = (Severity, &LevelStyle)> {
		Severity::ALL.into_iter().zip(self.levels.iter())
	}
}

impl Index<Severity> for StyleTable {
	type Output = LevelStyle;

	fn index(&self, severity: Severity) -> &LevelStyle {
		self.get(severity)
	}
}

impl Default for StyleTable {
	fn default() -> Self {
		default_styles()
	}
}

/// Parses a case-sensitive preset name into a fresh table.
pub fn parse_style(name: &str) -> Result<StyleTable> {
	name.parse::<StylePreset>().map(StylePreset::styles)
}

fn palette(severity: Severity) -> (&'static str, u8) {
	match severity {
		Severity::Debug => (DEBUG_LABEL, DEBUG_COLOR),
		Severity::Info => (INFO_LABEL, INFO_COLOR),
		Severity::Warn => (WARN_LABEL, WARN_COLOR),
		Severity::Error => (ERROR_LABEL, ERROR_COLOR),
		Severity::Fatal => (FATAL_LABEL, FATAL_COLOR),
	}
}

/// Bold coloured labels, three columns wide.
pub fn default_styles() -> StyleTable {
	StyleTable {
		preset: StylePreset::Default,
		levels: Severity::ALL.map(|severity| {
			let (label, color) = palette(severity);
			LevelStyle {
				label,
				bold: true,
				background: None,
				foreground: color,
				padding: 0,
				max_width: DEFAULT_MAX_WIDTH,
			}
		}),
	}
}

/// Black labels on a coloured badge, padded to five columns.
pub fn labeled_styles() -> StyleTable {
	StyleTable {
		preset: StylePreset::Labeled,
		levels: Severity::ALL.map(|severity| {
			let (label, color) = palette(severity);
			LevelStyle {
				label,
				bold: true,
				background: Some(color),
				foreground: LABEL_TEXT_COLOR,
				padding: LABELED_PADDING,
				max_width: LABELED_MAX_WIDTH,
			}
		}),
	}
}
