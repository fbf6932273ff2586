// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                                 TINTLOG                                      ║
// ║                  Leveled, colour-labelled logging facade                     ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// 🎯 PROJECT GOAL
// ---------------
// One small logger shared by an application and by the AWS SDK it drives.
// Pick a level and a style preset by name, hand over a writer, and every line
// comes out the same way:
//
//   INF MyApp: listening on :8080
//   DBG <app/main.rs:42> MyApp: config loaded
//    WRN  MyApp: retrying request
//
// 📦 PIECES
// ---------
// - level:   debug < info < warn < error < fatal, parsed strictly
// - styles:  "default" (bold coloured text) and "labeled" (coloured badge)
// - logger:  the `Logger` trait and the core shared by every front end
// - app:     `AppLogger`, the application-facing logger
// - sdk:     `SdkLogger`, the SDK adapter (`logf` keyed by classification)
// - bridge:  `log` crate backend so dependencies land in the same sink
//
// 🛡️ INPUT POLICY
// ---------------
// Strict. An unknown level or style name is an error and no logger is built.
//
// 📜 LICENSE: MIT
//
// ══════════════════════════════════════════════════════════════════════════════

pub mod app;
pub mod bridge;
pub mod config;
pub mod constants;
pub mod error;
pub mod level;
pub mod logger;
pub mod sdk;
pub mod styles;

pub use app::{new_app_logger, AppLogger};
pub use bridge::LogBridge;
pub use config::{ColorMode, LoggerConfig};
pub use error::{Error, Result};
pub use level::{parse_level, Severity};
pub use logger::{CallSite, Logger};
pub use sdk::{new_sdk_logger, Classification, SdkLogger, SdkLogging};
pub use styles::{default_styles, labeled_styles, parse_style, LevelStyle, StylePreset, StyleTable};
