use std::io::Write;

use log::debug;

use crate::palettes::color::RawColor;
use crate::palettes::pal_act::{encode_act, write_act};
use crate::palettes::pal_riff::{encode_riff, write_riff};
use crate::palettes::palette::{Color, PaletteError, PaletteFormat};
use crate::palettes::range::ExportRange;
use crate::palettes::store::{PaletteStore, Region};

fn decode_all(entries: &[u16]) -> Vec<Color> {
	entries.iter().map(|&raw| Color::from(RawColor(raw))).collect()
}

/// Encodes raw palette words as a RIFF `PAL ` file (`.pal`).
pub fn export_format_a(entries: &[u16]) -> Result<Vec<u8>, PaletteError> {
	encode_riff(&decode_all(entries))
}

/// Encodes raw palette words as an Adobe Color Table (`.act`).
///
/// The table always holds 256 slots: missing entries are zero-filled, entries past the 256th are dropped.
pub fn export_format_b(entries: &[u16]) -> Result<Vec<u8>, PaletteError> {
	encode_act(&decode_all(entries))
}

pub fn export(entries: &[u16], format: PaletteFormat) -> Result<Vec<u8>, PaletteError> {
	debug!("Encoding {} entries as {}", entries.len(), format.description());
	match format {
		PaletteFormat::RiffPal => export_format_a(entries),
		PaletteFormat::AdobeAct => export_format_b(entries),
	}
}

pub fn export_to_writer<W: Write>(w: &mut W, entries: &[u16], format: PaletteFormat) -> Result<(), PaletteError> {
	let colors = decode_all(entries);
	match format {
		PaletteFormat::RiffPal => write_riff(w, &colors),
		PaletteFormat::AdobeAct => write_act(w, &colors),
	}
}

/// The result of a store-level export: the range actually covered and the encoded file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedPalette {
	pub range: ExportRange,
	pub format: PaletteFormat,
	pub bytes: Vec<u8>,
}

impl PaletteStore {
	/// Clamps `start`/`length` to the active entries and encodes them.
	///
	/// Returns `Ok(None)` when the clamped range is empty, e.g. when `start` lies past the end.
	pub fn export_range(&self, start: usize, length: usize, format: PaletteFormat) -> Result<Option<ExportedPalette>, PaletteError> {
		let range = ExportRange::new(start, length).clamp_to(self.len());
		if range.is_empty() {
			debug!("Nothing to export for {start}+{length}");
			return Ok(None);
		}

		let entries = self.entries(range.as_range())?;
		let bytes = export(entries, format)?;

		Ok(Some(ExportedPalette { range, format, bytes }))
	}

	pub fn export_region(&self, region: Region, format: PaletteFormat) -> Result<Option<ExportedPalette>, PaletteError> {
		let range = self.region_range(region);
		self.export_range(range.start, range.len(), format)
	}
}
