use std::fmt::{Display, Formatter};
use std::path::Path;

use serde::Serialize;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
		}
	}
}

impl From<u32> for Color {
	fn from(v: u32) -> Self {
		Self {
			r: ((v >> 16) & 0xFF) as u8,
			g: ((v >> 8) & 0xFF) as u8,
			b: (v & 0xFF) as u8,
		}
	}
}

impl Color {
	pub fn to_array(self) -> [u8; 3] {
		[self.r, self.g, self.b]
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut rgb = self.r as u32;
		rgb = (rgb << 8) | self.g as u32;
		rgb = (rgb << 8) | self.b as u32;
		write!(f, "#{:06X}", rgb)
	}
}

/// An 8-bit-per-channel color table, as read back from an exported file.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Palette {
	pub colors: Vec<Color>,
}

impl Palette {
	pub fn push_color(&mut self, c: Color) {
		self.colors.push(c);
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
		match PaletteFormat::guess(&path) {
			Some(PaletteFormat::AdobeAct) => Self::from_act_file(&path),
			Some(PaletteFormat::RiffPal) => Self::from_riff_file(&path),
			None => Err(PaletteError::InvalidFile),
		}
	}

	pub fn load_from_bytes(bytes: &[u8], format: PaletteFormat) -> Result<Palette, PaletteError> {
		match format {
			PaletteFormat::AdobeAct => Self::from_act_bytes(bytes),
			PaletteFormat::RiffPal => Self::from_riff_bytes(bytes),
		}
	}
}

#[derive(Debug)]
pub enum PaletteError {
	InvalidRegionSize(usize),
	InsufficientData { expected: usize, actual: usize },
	IndexOutOfRange { index: usize, len: usize },
	UnsupportedEntryCount(usize),
	InvalidFile,
	InvalidBinaryData { position: usize, msg: String },
	IoErr(std::io::Error),
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::InvalidRegionSize(size) => write!(f, "Unsupported region size {size} (expected 32 or 256)"),
			PaletteError::InsufficientData { expected, actual } => write!(f, "Palette data holds {actual} entries, at least {expected} are needed"),
			PaletteError::IndexOutOfRange { index, len } => write!(f, "Palette index {index} is out of range (0..{len})"),
			PaletteError::UnsupportedEntryCount(count) => write!(f, "Can't export a palette with {count} entries"),
			PaletteError::InvalidFile => write!(f, "Invalid file"),
			PaletteError::InvalidBinaryData { position, msg } => write!(f, "Invalid data at byte {position:#X}: {msg}"),
			PaletteError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for PaletteError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			PaletteError::IoErr(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for PaletteError {
	fn from(e: std::io::Error) -> Self {
		PaletteError::IoErr(e)
	}
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteFormat {
	#[value(name = "pal")]
	RiffPal, // .pal
	#[value(name = "act")]
	AdobeAct, // .act
}

impl PaletteFormat {
	pub fn guess<P: AsRef<Path>>(path: P) -> Option<PaletteFormat> {
		let ext = path.as_ref()
			.extension()?
			.to_str()?
			.to_lowercase();

		match ext.as_str() {
			"act" => Some(PaletteFormat::AdobeAct),
			"pal" => Some(PaletteFormat::RiffPal),
			_ => None
		}
	}

	pub fn description(&self) -> &str {
		match self {
			PaletteFormat::RiffPal => "Windows PAL",
			PaletteFormat::AdobeAct => "Adobe Color Table",
		}
	}
}

impl Display for PaletteFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteFormat::RiffPal => write!(f, "pal"),
			PaletteFormat::AdobeAct => write!(f, "act"),
		}
	}
}
