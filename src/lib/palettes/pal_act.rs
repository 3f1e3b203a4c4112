use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::Path;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use log::warn;

use crate::palettes::MAX_ACT_COLORS;
use crate::palettes::palette::{Color, Palette, PaletteError};

// https://github.com/aseprite/aseprite/blob/8323a555007e1db9670b098ce4b1b9c5f8b3d7ad/src/doc/file/act_file.cpp

/// 256 RGB triples followed by the u16 color count and the u16 transparency index.
pub(crate) const ACT_FILE_SIZE: usize = MAX_ACT_COLORS * 3 + 4;

pub(crate) fn write_act<W: Write>(w: &mut W, colors: &[Color]) -> Result<(), PaletteError> {
	if colors.is_empty() {
		return Err(PaletteError::UnsupportedEntryCount(0));
	}

	if colors.len() > MAX_ACT_COLORS {
		warn!("ACT tables hold at most {MAX_ACT_COLORS} colors, dropping the last {}", colors.len() - MAX_ACT_COLORS);
	}

	let used = &colors[..colors.len().min(MAX_ACT_COLORS)];
	for c in used {
		w.write_all(&c.to_array())?;
	}

	// unused slots are zero-filled so the table is always complete
	let padding = vec![0_u8; (MAX_ACT_COLORS - used.len()) * 3];
	w.write_all(&padding)?;

	w.write_u16::<BigEndian>(used.len() as u16)?;
	w.write_u16::<BigEndian>(0)?; // transparency index, unused

	Ok(())
}

pub(crate) fn encode_act(colors: &[Color]) -> Result<Vec<u8>, PaletteError> {
	let mut buf = Vec::with_capacity(ACT_FILE_SIZE);
	write_act(&mut buf, colors)?;
	Ok(buf)
}

impl Palette {
	pub fn from_act_bytes(bytes: &[u8]) -> Result<Palette, PaletteError> {
		let size = bytes.len() as u64;
		let mut f = Cursor::new(bytes);

		let mut pal = Palette::default();

		let mut buf = [0_u8; 3];
		for _ in 0..MAX_ACT_COLORS {
			f.read_exact(&mut buf)?;
			pal.push_color(Color::from(buf));
		}

		if f.position() < size {
			// the two bytes after the first 256 3-byte colors are a u16 containing the total number of colors
			let num_colors = f.read_u16::<BigEndian>()?;

			if num_colors as usize > MAX_ACT_COLORS {
				return Err(PaletteError::InvalidBinaryData {
					position: (f.position() - 2) as usize,
					msg: format!("Invalid footer value {num_colors:#X}"),
				});
			}

			pal.colors.truncate(num_colors as usize);
		}

		Ok(pal)
	}

	pub(crate) fn from_act_file<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
		let bytes = fs::read(path)?;
		Self::from_act_bytes(&bytes)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn footer_is_big_endian() {
		let colors = vec![Color::default(); 0x102];
		let bytes = encode_act(&colors[..0x0A]).unwrap();
		assert_eq!(&bytes[768..], &[0x00, 0x0A, 0x00, 0x00]);

		let bytes = encode_act(&colors).unwrap();
		assert_eq!(&bytes[768..], &[0x01, 0x00, 0x00, 0x00]);
	}

	#[test]
	fn broken_footer() {
		let mut bytes = encode_act(&[Color::from(0xFFFFFF_u32)]).unwrap();
		bytes[768] = 0xFF;
		bytes[769] = 0xFF;

		let err = Palette::from_act_bytes(&bytes).unwrap_err();
		assert_eq!(err.to_string(), "Invalid data at byte 0x300: Invalid footer value 0xFFFF");
	}
}
