use anyhow::{Result, anyhow};
use colored::Colorize;

use palview_rs::palettes::palette::PaletteFormat;

use crate::commands::ExportArgs;
use crate::common::{load_store, parse_range, print_output_size, write_output};

/// Returns whether a file was written.
pub(crate) fn palette_export(args: &ExportArgs) -> Result<bool> {
	let format = args.format
		.or_else(|| PaletteFormat::guess(&args.output))
		.ok_or_else(|| anyhow!("Can't tell the palette format from {}, pass --format", args.output.display()))?;

	let store = load_store(&args.input, args.platform)?;

	let (start, length) = match (&args.region, &args.range) {
		(_, Some(range)) => parse_range(range)?,
		(Some(region), None) => {
			let r = store.region_range(*region);
			(r.start, r.len())
		}
		(None, None) => (0, store.len()),
	};

	let exported = match store.export_range(start, length, format)? {
		Some(exported) => exported,
		None => {
			eprintln!("NOTE: Nothing to export, start index {start} lies past the end of the palette ({} entries)", store.len());
			return Ok(false);
		}
	};

	if format == PaletteFormat::AdobeAct && exported.range.length > 256 {
		eprintln!("NOTE: {} only holds 256 colors, the rest of {} was dropped", format.description(), exported.range);
	}

	write_output(&args.output, &exported.bytes)?;
	println!("Exported {} as {}", exported.range, format.description().green());
	print_output_size(&args.output);

	Ok(true)
}
