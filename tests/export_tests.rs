use std::fs;

use palview_rs::palettes::color::RawColor;
use palview_rs::palettes::export::{export, export_format_a, export_format_b, export_to_writer};
use palview_rs::palettes::palette::{Color, Palette, PaletteError, PaletteFormat};
use palview_rs::palettes::store::{PaletteStore, Platform, Region};

const FORMATS: [PaletteFormat; 2] = [PaletteFormat::RiffPal, PaletteFormat::AdobeAct];

/// A spread of colors touching every channel.
fn sample_entries(count: usize) -> Vec<u16> {
	(0..count).map(|i| ((i * 0x0843) & 0x7FFF) as u16).collect()
}

fn expected_colors(entries: &[u16]) -> Vec<Color> {
	entries.iter().map(|&raw| Color::from(RawColor(raw))).collect()
}

#[test]
fn riff_layout() {
	let entries = [0x0000, 0x7FFF, 0x001F];
	let bytes = export_format_a(&entries).unwrap();

	assert_eq!(bytes.len(), 24 + 4 * 3);
	assert_eq!(&bytes[0..4], b"RIFF");
	assert_eq!(u32::from_le_bytes(bytes[4..8].try_into().unwrap()) as usize, bytes.len() - 8);
	assert_eq!(&bytes[8..12], b"PAL ");
	assert_eq!(&bytes[12..16], b"data");
	assert_eq!(u32::from_le_bytes(bytes[16..20].try_into().unwrap()), 4 + 4 * 3);
	assert_eq!(u16::from_le_bytes(bytes[20..22].try_into().unwrap()), 0x0300);
	assert_eq!(u16::from_le_bytes(bytes[22..24].try_into().unwrap()), 3);
	assert_eq!(&bytes[24..], &[
		0x00, 0x00, 0x00, 0x00,
		0xFF, 0xFF, 0xFF, 0x00,
		0xFF, 0x00, 0x00, 0x00,
	]);
}

#[test]
fn riff_round_trip() {
	let entries = sample_entries(512);
	let bytes = export_format_a(&entries).unwrap();

	let pal = Palette::from_riff_bytes(&bytes).unwrap();
	assert_eq!(pal.len(), 512);
	assert_eq!(pal.colors, expected_colors(&entries));
}

#[test]
fn act_layout() {
	let entries = sample_entries(10);
	let bytes = export_format_b(&entries).unwrap();

	assert_eq!(bytes.len(), 256 * 3 + 4);
	for (i, color) in expected_colors(&entries).iter().enumerate() {
		assert_eq!(&bytes[i * 3..i * 3 + 3], &color.to_array(), "{i}: color doesn't match!");
	}
	assert!(bytes[30..768].iter().all(|&b| b == 0), "unused slots aren't zero-filled");
	assert_eq!(u16::from_be_bytes([bytes[768], bytes[769]]), 10);
	assert_eq!(&bytes[770..], &[0, 0]);

	let pal = Palette::from_act_bytes(&bytes).unwrap();
	assert_eq!(pal.colors, expected_colors(&entries));
}

#[test]
fn act_drops_entries_past_256() {
	let entries = sample_entries(300);
	let bytes = export_format_b(&entries).unwrap();

	assert_eq!(bytes.len(), 256 * 3 + 4);
	assert_eq!(u16::from_be_bytes([bytes[768], bytes[769]]), 256);

	let pal = Palette::from_act_bytes(&bytes).unwrap();
	assert_eq!(pal.colors, expected_colors(&entries[..256]));
}

#[test]
fn empty_input_is_rejected() {
	for format in FORMATS {
		let err = export(&[], format).unwrap_err();
		assert!(matches!(err, PaletteError::UnsupportedEntryCount(0)), "{format}: {err:?}");
	}

	assert!(matches!(export_format_b(&[]), Err(PaletteError::UnsupportedEntryCount(0))));
}

#[test]
fn store_exports() {
	let entries = sample_entries(512);
	let store = PaletteStore::for_platform(&entries, Platform::Gba).unwrap();

	let exported = store.export_region(Region::Object, PaletteFormat::RiffPal).unwrap().unwrap();
	assert_eq!((exported.range.start, exported.range.length), (256, 256));
	assert_eq!(Palette::from_riff_bytes(&exported.bytes).unwrap().colors, expected_colors(&entries[256..]));

	let exported = store.export_range(500, 50, PaletteFormat::AdobeAct).unwrap().unwrap();
	assert_eq!((exported.range.start, exported.range.length), (500, 12));
	assert_eq!(Palette::from_act_bytes(&exported.bytes).unwrap().colors, expected_colors(&entries[500..]));

	assert!(store.export_range(512, 10, PaletteFormat::RiffPal).unwrap().is_none());
	assert!(store.export_range(0, 0, PaletteFormat::AdobeAct).unwrap().is_none());
}

#[test]
fn gb_store_exports_stay_within_active_entries() {
	let entries = sample_entries(512);
	let store = PaletteStore::for_platform(&entries, Platform::Gb).unwrap();

	let exported = store.export_region(Region::Object, PaletteFormat::AdobeAct).unwrap().unwrap();
	assert_eq!((exported.range.start, exported.range.length), (32, 32));

	let exported = store.export_range(0, 1000, PaletteFormat::RiffPal).unwrap().unwrap();
	assert_eq!(exported.range.length, 64);

	assert!(store.export_range(64, 1, PaletteFormat::RiffPal).unwrap().is_none());
}

#[test]
fn file_round_trip() {
	let entries = sample_entries(64);
	let dir = tempfile::tempdir().unwrap();

	for format in FORMATS {
		let path = dir.path().join(format!("palette.{format}"));
		let mut f = fs::File::create(&path).unwrap();
		export_to_writer(&mut f, &entries, format).unwrap();
		drop(f);

		assert_eq!(fs::read(&path).unwrap(), export(&entries, format).unwrap(), "{format}: writer output differs");

		let pal = Palette::load_from_file(&path).unwrap();
		assert_eq!(pal.colors, expected_colors(&entries), "{format}: colors don't match!");

		let pal = Palette::load_from_bytes(&fs::read(&path).unwrap(), format).unwrap();
		assert_eq!(pal.len(), 64);
	}

	let err = Palette::load_from_file(dir.path().join("palette.gpl")).unwrap_err();
	assert!(matches!(err, PaletteError::InvalidFile));
}

#[test]
fn format_guessing() {
	assert_eq!(PaletteFormat::guess("out/bg.PAL"), Some(PaletteFormat::RiffPal));
	assert_eq!(PaletteFormat::guess("obj.act"), Some(PaletteFormat::AdobeAct));
	assert_eq!(PaletteFormat::guess("obj.png"), None);
	assert_eq!(PaletteFormat::guess("palette"), None);
}
