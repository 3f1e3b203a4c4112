use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;
use std::path::PathBuf;

use palview_rs::palettes::palette::PaletteFormat;
use palview_rs::palettes::store::{Platform, Region};

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Inspects and exports GBA/GB palette RAM dumps")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(long, global = true, help = "Enables debug logging.")]
	pub debug: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct InspectArgs {
	#[arg(short, help = "The palette RAM dump. (little-endian 16-bit words)")]
	pub input: PathBuf,

	#[arg(short, long, value_enum, help = "The platform the dump was taken from.", default_value_t = Platform::default())]
	pub platform: Platform,

	#[arg(short = 'n', long, group = "selection", help = "Only shows the entry at this logical index.")]
	pub index: Option<usize>,
	#[arg(short, long, value_enum, group = "selection", help = "Only shows the entries of one region.")]
	pub region: Option<Region>,

	#[arg(long, help = "Prints the entries as a JSON array.")]
	pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ExportArgs {
	#[arg(short, help = "The palette RAM dump. (little-endian 16-bit words)")]
	pub input: PathBuf,
	#[arg(help = "The output file.")]
	pub output: PathBuf,

	#[arg(short, long, value_enum, help = "The platform the dump was taken from.", default_value_t = Platform::default())]
	pub platform: Platform,

	#[arg(short, long, value_enum, group = "selection", help = "Exports one region.")]
	pub region: Option<Region>,
	#[arg(long, group = "selection", help = "Exports a range of logical indices. Format START or START:LENGTH, decimal or 0x-prefixed hex.")]
	pub range: Option<String>,

	#[arg(short, long, value_enum, help = "The output format. Guessed from the output file extension if omitted.")]
	pub format: Option<PaletteFormat>,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Prints decoded palette entries")]
	Inspect(InspectArgs),

	#[command(about = "Writes a palette range as a Windows PAL or Adobe Color Table file")]
	Export(ExportArgs),
}
