//! ANSI output with colouring forced on. Lives in its own binary because the
//! switch is process-wide.

use tintlog::{new_app_logger, AppLogger, ColorMode, Logger, LoggerConfig, Severity};

fn coloured(level: &str, style: &str, prefix: &str) -> AppLogger<Vec<u8>> {
	colored::control::set_override(true);
	let logger = new_app_logger(Vec::new(), level, style, prefix).unwrap();
	logger.set_color(ColorMode::Auto);
	logger
}

fn output(logger: AppLogger<Vec<u8>>) -> String {
	String::from_utf8(logger.into_sink()).unwrap()
}

#[test]
fn test_default_preset_escapes() {
	let logger = coloured("info", "default", "MyApp");
	logger.info(format_args!("up"));
	logger.error(format_args!("down"));
	assert_eq!(
		output(logger),
		"\x1b[1;38;5;86mINF\x1b[0m \x1b[1;2mMyApp:\x1b[0m up\n\
		 \x1b[1;38;5;204mERR\x1b[0m \x1b[1;2mMyApp:\x1b[0m down\n"
	);
}

#[test]
fn test_labeled_preset_escapes() {
	let logger = coloured("warn", "labeled", "");
	logger.warn(format_args!("hot"));
	logger.log(Severity::Fatal, format_args!("gone"));
	assert_eq!(
		output(logger),
		"\x1b[1;48;5;192;38;5;0m WRN \x1b[0m hot\n\
		 \x1b[1;48;5;134;38;5;0m FTL \x1b[0m gone\n"
	);
}

#[test]
fn test_debug_caller_is_dimmed() {
	let logger = coloured("debug", "default", "");
	let line = line!() + 1;
	logger.debug(format_args!("trace"));
	assert_eq!(
		output(logger),
		format!("\x1b[1;38;5;63mDBG\x1b[0m \x1b[2m<tests/color_output.rs:{line}>\x1b[0m trace\n")
	);
}

#[test]
fn test_never_stays_plain_under_override() {
	colored::control::set_override(true);
	let config = LoggerConfig::parse("info", "labeled", "MyApp").unwrap().with_color(ColorMode::Never);
	let logger = AppLogger::with_config(Vec::new(), config);
	logger.info(format_args!("plain"));
	assert_eq!(output(logger), " INF  MyApp: plain\n");
}
