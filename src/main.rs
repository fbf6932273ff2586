// ══════════════════════════════════════════════════════════════════════════════
// TINTLOG CLI
// ══════════════════════════════════════════════════════════════════════════════
//
// Small front end for trying levels, presets and prefixes from a shell, or for
// emitting styled lines from scripts. Everything goes to stderr.

use std::env;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::*;
use tintlog::constants::{DEFAULT_LEVEL, DEFAULT_STYLE};
use tintlog::{
	parse_level, sdk_logf, AppLogger, Classification, ColorMode, Logger, LoggerConfig, SdkLogger, Severity,
};

/// Styled, leveled log lines from the command line
#[derive(Parser)]
#[command(name = "tintlog")]
#[command(version)]
#[command(about = "Emit styled log lines", long_about = None)]
struct Cli {
	/// Minimum level to print (debug, info, warn, error, fatal)
	#[arg(short, long, env = "TINTLOG_LEVEL", default_value = DEFAULT_LEVEL)]
	level: String,

	/// Label style preset (default, labeled)
	#[arg(short, long, env = "TINTLOG_STYLE", default_value = DEFAULT_STYLE)]
	style: String,

	/// Text shown before every message
	#[arg(short, long, env = "TINTLOG_PREFIX", default_value = "")]
	prefix: String,

	/// Prepend a local timestamp
	#[arg(short, long)]
	timestamp: bool,

	/// Never emit ANSI colours
	#[arg(long)]
	no_color: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Log a single message
	Emit {
		/// Severity of the message (debug, info, warn, error, fatal)
		#[arg(short, long, default_value = "info")]
		at: String,

		/// Message text
		#[arg(required = true)]
		message: Vec<String>,
	},

	/// Log a message through the SDK adapter
	Sdk {
		/// SDK classification (WARN, DEBUG, anything else is dropped)
		classification: String,

		/// Message text
		#[arg(required = true)]
		message: Vec<String>,
	},

	/// Print one line per level to preview a preset
	Demo,
}

impl Cli {
	fn config(&self) -> tintlog::Result<LoggerConfig> {
		// Every line goes to stderr, so decide from stderr rather than from
		// colored's stdout check.
		let no_color = self.no_color || env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
		let color = ColorMode::for_terminal(io::stderr().is_terminal(), no_color);
		colored::control::set_override(color.enabled());
		Ok(LoggerConfig::parse(&self.level, &self.style, &self.prefix)?
			.with_color(color)
			.with_timestamp(self.timestamp))
	}
}

fn run(cli: Cli) -> tintlog::Result<()> {
	let config = cli.config()?;

	match cli.command {
		Commands::Emit { at, message } => {
			let severity = parse_level(&at)?;
			let logger = AppLogger::with_config(io::stderr(), config);
			let text = message.join(" ");
			if severity == Severity::Fatal {
				logger.fatal(format_args!("{text}"));
			}
			logger.log(severity, format_args!("{text}"));
		}

		Commands::Sdk { classification, message } => {
			let logger = SdkLogger::with_config(io::stderr(), config);
			sdk_logf!(logger, Classification::from(classification.as_str()), "{}", message.join(" "));
		}

		Commands::Demo => {
			let logger = AppLogger::with_config(io::stderr(), config);
			for severity in Severity::ALL.into_iter().filter(|s| *s != Severity::Fatal) {
				logger.log(severity, format_args!("this is what {severity} looks like"));
			}
		}
	}
	Ok(())
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	match run(cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("{} {}", "ERR".red().bold(), e);
			ExitCode::from(2)
		}
	}
}
