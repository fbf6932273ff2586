// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Defines crate-wide constants shared by the style registry and the renderer.
// - Palette: xterm-256 colour indices per severity (same hue in both presets)
// - Labels: three-letter severity labels
// - Widths: max rendered label width per preset

/// xterm-256 colour index for Debug.
pub const DEBUG_COLOR: u8 = 63;
/// xterm-256 colour index for Info.
pub const INFO_COLOR: u8 = 86;
/// xterm-256 colour index for Warn.
pub const WARN_COLOR: u8 = 192;
/// xterm-256 colour index for Error.
pub const ERROR_COLOR: u8 = 204;
/// xterm-256 colour index for Fatal.
pub const FATAL_COLOR: u8 = 134;
/// Foreground used on top of the labeled preset's coloured background.
pub const LABEL_TEXT_COLOR: u8 = 0;

pub const DEBUG_LABEL: &str = "DBG";
pub const INFO_LABEL: &str = "INF";
pub const WARN_LABEL: &str = "WRN";
pub const ERROR_LABEL: &str = "ERR";
pub const FATAL_LABEL: &str = "FTL";

pub const DEFAULT_MAX_WIDTH: usize = 3;
pub const LABELED_MAX_WIDTH: usize = 5;
pub const LABELED_PADDING: usize = 1;

/// Timestamp layout, e.g. `2024/01/31 17:04:05`.
pub const TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Level used by the CLI when nothing is configured.
pub const DEFAULT_LEVEL: &str = "info";
/// Style used by the CLI when nothing is configured.
pub const DEFAULT_STYLE: &str = "default";
