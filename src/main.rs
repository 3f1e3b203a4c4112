use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use crate::cmd_export::palette_export;
use crate::cmd_inspect::palette_inspect;
use crate::commands::{Cli, Commands};

mod cmd_export;
mod cmd_inspect;
mod commands;
mod common;

fn init_logging(debug: bool) {
	let level = if debug { LevelFilter::Debug } else { LevelFilter::Warn };
	env_logger::Builder::new()
		.filter_level(level)
		.parse_default_env()
		.format_timestamp(None)
		.init();
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.debug);

	let result = match &cli.command {
		Some(Commands::Inspect(args)) => palette_inspect(args),
		Some(Commands::Export(args)) => palette_export(args).map(|_| ()),
		None => {
			return ExitCode::FAILURE;
		}
	};

	match result {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("execution failed: {e:#}");
			ExitCode::FAILURE
		}
	}
}
