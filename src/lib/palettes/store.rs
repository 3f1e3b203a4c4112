use std::fmt::{Display, Formatter};
use std::fs;
use std::io::Cursor;
use std::ops::Range;
use std::path::Path;
use std::sync::Arc;

use byteorder::{LittleEndian, ReadBytesExt};
use log::{debug, warn};
use serde::Serialize;

use crate::palettes::PALETTE_CAPACITY;
use crate::palettes::color::{DecodedColor, RawColor};
use crate::palettes::palette::PaletteError;

pub const GBA_REGION_SIZE: usize = 256;
pub const GB_REGION_SIZE: usize = 32;

#[derive(clap::ValueEnum, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum Platform {
	#[default] Gba,
	Gb,
}

impl Platform {
	pub fn region_size(&self) -> usize {
		match self {
			Platform::Gba => GBA_REGION_SIZE,
			Platform::Gb => GB_REGION_SIZE,
		}
	}
}

impl Display for Platform {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Platform::Gba => write!(f, "gba"),
			Platform::Gb => write!(f, "gb"),
		}
	}
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
	#[value(name = "bg")]
	Background,
	#[value(name = "obj")]
	Object,
}

impl Display for Region {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Region::Background => write!(f, "bg"),
			Region::Object => write!(f, "obj"),
		}
	}
}

/// An immutable copy of palette RAM: background entries first, object entries right after.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
	words: Box<[u16; PALETTE_CAPACITY]>,
	region_size: usize,
}

impl Snapshot {
	fn new(raw_words: &[u16], region_size: usize) -> Result<Self, PaletteError> {
		if region_size != GBA_REGION_SIZE && region_size != GB_REGION_SIZE {
			return Err(PaletteError::InvalidRegionSize(region_size));
		}

		let active = region_size * 2;
		if raw_words.len() < active {
			return Err(PaletteError::InsufficientData { expected: active, actual: raw_words.len() });
		}

		let mut words = Box::new([0_u16; PALETTE_CAPACITY]);
		words[..active].copy_from_slice(&raw_words[..active]);

		Ok(Self { words, region_size })
	}

	pub fn region_size(&self) -> usize {
		self.region_size
	}

	/// Number of entries across both regions.
	pub fn len(&self) -> usize {
		self.region_size * 2
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// The active entries only; anything past `2 * region_size` is never exposed.
	pub fn words(&self) -> &[u16] {
		&self.words[..self.len()]
	}

	pub fn get(&self, index: usize) -> Result<u16, PaletteError> {
		self.words()
			.get(index)
			.copied()
			.ok_or(PaletteError::IndexOutOfRange { index, len: self.len() })
	}
}

/// One row of the palette inspector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct InspectorRow {
	pub index: usize,
	pub region: &'static str,
	pub color: DecodedColor,
}

impl Display for InspectorRow {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let c = &self.color;
		write!(
			f,
			"{:03} #{} 0x{} r=0x{:02x} ({:03}) g=0x{:02x} ({:03}) b=0x{:02x} ({:03})",
			self.index, c.hex24_string(), c.hex16_string(),
			c.r8, c.r8, c.g8, c.g8, c.b8, c.b8,
		)
	}
}

/// Holds the most recently loaded palette snapshot.
///
/// Every [load](PaletteStore::load) installs a brand new [Snapshot]; callers holding on to an
/// older one through [snapshot](PaletteStore::snapshot) keep seeing it unchanged.
#[derive(Clone, Debug, Default)]
pub struct PaletteStore {
	current: Option<Arc<Snapshot>>,
}

impl PaletteStore {
	pub fn new(raw_words: &[u16], region_size: usize) -> Result<Self, PaletteError> {
		let mut store = Self::default();
		store.load(raw_words, region_size)?;
		Ok(store)
	}

	pub fn for_platform(raw_words: &[u16], platform: Platform) -> Result<Self, PaletteError> {
		Self::new(raw_words, platform.region_size())
	}

	/// Builds a store from a palette RAM dump: little-endian u16 words, background region first.
	pub fn from_dump_bytes(bytes: &[u8], platform: Platform) -> Result<Self, PaletteError> {
		let expected = platform.region_size() * 2;
		if bytes.len() % 2 != 0 {
			return Err(PaletteError::InvalidBinaryData {
				position: bytes.len() - 1,
				msg: "Palette dumps must consist of whole 16-bit words".to_string(),
			});
		}

		let mut words = vec![0_u16; bytes.len() / 2];
		Cursor::new(bytes).read_u16_into::<LittleEndian>(&mut words)?;

		if words.len() > expected {
			warn!("Ignoring {} words past the end of the {platform} palette", words.len() - expected);
		}

		Self::for_platform(&words, platform)
	}

	pub fn from_dump_file<P: AsRef<Path>>(path: P, platform: Platform) -> Result<Self, PaletteError> {
		let bytes = fs::read(path)?;
		Self::from_dump_bytes(&bytes, platform)
	}

	/// Replaces the current snapshot. On failure the previous snapshot stays installed.
	pub fn load(&mut self, raw_words: &[u16], region_size: usize) -> Result<(), PaletteError> {
		let snapshot = Snapshot::new(raw_words, region_size)?;
		debug!("Loaded palette snapshot: {} entries, region size {region_size}", snapshot.len());
		self.current = Some(Arc::new(snapshot));
		Ok(())
	}

	/// The whole current snapshot, shared.
	pub fn snapshot(&self) -> Option<Arc<Snapshot>> {
		self.current.clone()
	}

	/// The region size of the loaded snapshot, 0 if nothing has been loaded yet.
	pub fn region_size(&self) -> usize {
		self.current.as_ref().map(|s| s.region_size()).unwrap_or(0)
	}

	/// Number of active entries across both regions.
	pub fn len(&self) -> usize {
		self.region_size() * 2
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn get(&self, logical_index: usize) -> Result<u16, PaletteError> {
		match &self.current {
			Some(s) => s.get(logical_index),
			None => Err(PaletteError::IndexOutOfRange { index: logical_index, len: 0 }),
		}
	}

	pub fn decode(&self, logical_index: usize) -> Result<DecodedColor, PaletteError> {
		self.get(logical_index).map(|raw| RawColor(raw).decode())
	}

	/// Which region a logical index falls into.
	pub fn region_of(&self, logical_index: usize) -> Result<Region, PaletteError> {
		let len = self.len();
		match logical_index {
			i if i >= len => Err(PaletteError::IndexOutOfRange { index: i, len }),
			i if i < self.region_size() => Ok(Region::Background),
			_ => Ok(Region::Object),
		}
	}

	/// Translates a region-relative index ("object color 3") into a logical index.
	pub fn logical_index(&self, region: Region, index: usize) -> Result<usize, PaletteError> {
		let region_size = self.region_size();
		if index >= region_size {
			return Err(PaletteError::IndexOutOfRange { index, len: region_size });
		}

		Ok(self.region_range(region).start + index)
	}

	pub fn region_range(&self, region: Region) -> Range<usize> {
		let region_size = self.region_size();
		match region {
			Region::Background => 0..region_size,
			Region::Object => region_size..region_size * 2,
		}
	}

	/// Raw words of `range`, which must lie within the active entries.
	pub fn entries(&self, range: Range<usize>) -> Result<&[u16], PaletteError> {
		let words = self.current.as_deref().map(Snapshot::words).unwrap_or_default();
		if range.start > range.end || range.end > words.len() {
			return Err(PaletteError::IndexOutOfRange { index: range.end.saturating_sub(1), len: words.len() });
		}

		Ok(&words[range])
	}

	pub fn inspect(&self, logical_index: usize) -> Result<InspectorRow, PaletteError> {
		let region = self.region_of(logical_index)?;
		let color = self.decode(logical_index)?;
		let region = match region {
			Region::Background => "bg",
			Region::Object => "obj",
		};

		Ok(InspectorRow { index: logical_index, region, color })
	}
}
