// ══════════════════════════════════════════════════════════════════════════════
// ERROR MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Typed construction errors. A logger is never built from input that fails to
// parse; both variants carry the rejected text.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// The level string is not one of debug, info, warn, error, fatal.
	#[error("invalid level: {0:?}")]
	InvalidLevel(String),

	/// The style name is not one of default, labeled.
	#[error("unsupported styles: {0}")]
	UnsupportedStyle(String),
}

pub type Result<T> = std::result::Result<T, Error>;
