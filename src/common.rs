use anyhow::{Context, Result, anyhow};
use humansize::DECIMAL;
use regex::Regex;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;

use palview_rs::palettes::store::{PaletteStore, Platform};

fn parse_number(s: &str) -> Result<usize> {
	let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
		Some(hex) => usize::from_str_radix(hex, 16),
		None => s.parse::<usize>(),
	};

	parsed.map_err(|_| anyhow!("\"{s}\" is not a valid number"))
}

/// Parses `START` or `START:LENGTH`. A missing length means "up to the end".
pub(crate) fn parse_range<S: Into<String>>(range: S) -> Result<(usize, usize)> {
	let range: String = range.into();
	let re = Regex::new(r"^\s*(?P<start>0[xX][0-9a-fA-F]+|\d+)\s*(?::\s*(?P<length>0[xX][0-9a-fA-F]+|\d+))?\s*$").unwrap();

	let groups = match re.captures(&range) {
		None => anyhow::bail!("Invalid range string \"{range}\" provided"),
		Some(captures) => captures,
	};

	let start = match groups.name("start") {
		Some(s) => parse_number(s.as_str())?,
		None => anyhow::bail!("Couldn't parse range string \"{range}\""),
	};
	let length = match groups.name("length") {
		Some(l) => parse_number(l.as_str())?,
		None => usize::MAX,
	};

	Ok((start, length))
}

pub(crate) fn load_store<P: AsRef<Path>>(input: P, platform: Platform) -> Result<PaletteStore> {
	let input = input.as_ref();
	PaletteStore::from_dump_file(input, platform)
		.with_context(|| format!("Couldn't load palette dump {}", input.display()))
}

/// Writes `bytes` next to `output` first and moves the finished file into place.
pub(crate) fn write_output<P: AsRef<Path>>(output: P, bytes: &[u8]) -> Result<()> {
	let output = output.as_ref();
	let dir = match output.parent() {
		Some(p) if !p.as_os_str().is_empty() => p,
		_ => Path::new("."),
	};

	let mut temp_file = Builder::new()
		.prefix(".palview")
		.tempfile_in(dir)
		.with_context(|| format!("Couldn't create temp file in {}", dir.display()))?;

	temp_file.write_all(bytes).context("Couldn't write palette data")?;
	temp_file.persist(output)
		.with_context(|| format!("Failed to open output palette file: {}", output.display()))?;

	Ok(())
}

pub(crate) fn print_output_size<P: AsRef<Path>>(output: P) {
	match fs::metadata(output) {
		Ok(m) => {
			let size = humansize::format_size(m.len(), DECIMAL);
			println!("Output file size: {size}");
		}
		Err(err) => {
			eprintln!("Can't determine output file size: {err}");
		}
	}
}
