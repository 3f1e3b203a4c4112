use anyhow::Result;
use colored::Colorize;

use palview_rs::palettes::store::InspectorRow;

use crate::commands::InspectArgs;
use crate::common::load_store;

pub(crate) fn palette_inspect(args: &InspectArgs) -> Result<()> {
	let store = load_store(&args.input, args.platform)?;

	let indices = match (args.index, args.region) {
		(Some(index), _) => index..index.saturating_add(1),
		(None, Some(region)) => store.region_range(region),
		(None, None) => 0..store.len(),
	};

	let rows = indices
		.map(|i| store.inspect(i))
		.collect::<Result<Vec<InspectorRow>, _>>()?;

	if args.json {
		println!("{}", serde_json::to_string_pretty(&rows)?);
		return Ok(());
	}

	let mut last_region = "";
	for row in &rows {
		if row.region != last_region {
			last_region = row.region;
			println!("[{}]", row.region.bold());
		}

		let c = &row.color;
		println!("{} {row}", "    ".on_truecolor(c.r8, c.g8, c.b8));
	}

	Ok(())
}
