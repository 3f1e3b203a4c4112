use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::palettes::palette::{Color, Palette, PaletteError};

// Microsoft RIFF palette: "RIFF" <size> "PAL " "data" <size> <version> <count> { r g b flags }*

const RIFF_MAGIC: &[u8; 4] = b"RIFF";
const PAL_FORM: &[u8; 4] = b"PAL ";
const DATA_CHUNK: &[u8; 4] = b"data";
const PAL_VERSION: u16 = 0x0300;

/// Size of the `data` chunk payload: version and count, then one 4-byte record per entry.
fn data_chunk_size(entries: usize) -> u32 {
	4 + 4 * entries as u32
}

pub(crate) fn riff_file_size(entries: usize) -> usize {
	data_chunk_size(entries) as usize + 20
}

pub(crate) fn write_riff<W: Write>(w: &mut W, colors: &[Color]) -> Result<(), PaletteError> {
	if colors.is_empty() || colors.len() > u16::MAX as usize {
		return Err(PaletteError::UnsupportedEntryCount(colors.len()));
	}

	let chunk_size = data_chunk_size(colors.len());

	w.write_all(RIFF_MAGIC)?;
	// everything after this field: form type, data chunk header and payload
	w.write_u32::<LittleEndian>(chunk_size + 12)?;
	w.write_all(PAL_FORM)?;

	w.write_all(DATA_CHUNK)?;
	w.write_u32::<LittleEndian>(chunk_size)?;
	w.write_u16::<LittleEndian>(PAL_VERSION)?;
	w.write_u16::<LittleEndian>(colors.len() as u16)?;

	for c in colors {
		w.write_all(&[c.r, c.g, c.b, 0])?;
	}

	Ok(())
}

pub(crate) fn encode_riff(colors: &[Color]) -> Result<Vec<u8>, PaletteError> {
	let mut buf = Vec::with_capacity(riff_file_size(colors.len()));
	write_riff(&mut buf, colors)?;
	Ok(buf)
}

fn expect_tag(f: &mut Cursor<&[u8]>, tag: &[u8; 4]) -> Result<(), PaletteError> {
	let position = f.position() as usize;
	let mut buf = [0_u8; 4];
	f.read_exact(&mut buf)?;
	if &buf != tag {
		return Err(PaletteError::InvalidBinaryData {
			position,
			msg: format!("Expected \"{}\", found \"{}\"", tag.escape_ascii(), buf.escape_ascii()),
		});
	}

	Ok(())
}

impl Palette {
	pub fn from_riff_bytes(bytes: &[u8]) -> Result<Palette, PaletteError> {
		let mut f = Cursor::new(bytes);

		expect_tag(&mut f, RIFF_MAGIC)?;
		let riff_size = f.read_u32::<LittleEndian>()?;
		if riff_size as usize + 8 != bytes.len() {
			return Err(PaletteError::InvalidBinaryData {
				position: 4,
				msg: format!("RIFF size {riff_size:#X} doesn't match the file size"),
			});
		}
		expect_tag(&mut f, PAL_FORM)?;

		// skip any chunks preceding the color data
		let chunk_size = loop {
			let mut tag = [0_u8; 4];
			f.read_exact(&mut tag)?;
			let size = f.read_u32::<LittleEndian>()?;
			if &tag == DATA_CHUNK {
				break size;
			}
			f.set_position(f.position() + size as u64 + (size & 1) as u64);
		};

		let version = f.read_u16::<LittleEndian>()?;
		if version != PAL_VERSION {
			return Err(PaletteError::InvalidBinaryData {
				position: (f.position() - 2) as usize,
				msg: format!("Invalid version {version:#06X}"),
			});
		}

		let num_colors = f.read_u16::<LittleEndian>()?;
		if chunk_size != data_chunk_size(num_colors as usize) {
			return Err(PaletteError::InvalidBinaryData {
				position: (f.position() - 2) as usize,
				msg: format!("{num_colors} colors don't fit a data chunk of {chunk_size:#X} bytes"),
			});
		}

		let mut pal = Palette::default();
		let mut buf = [0_u8; 4];
		for _ in 0..num_colors {
			f.read_exact(&mut buf)?;
			pal.push_color(Color::from([buf[0], buf[1], buf[2]]));
		}

		Ok(pal)
	}

	pub(crate) fn from_riff_file<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
		let bytes = fs::read(path)?;
		Self::from_riff_bytes(&bytes)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn header_layout() {
		let bytes = encode_riff(&[Color::from(0x112233_u32)]).unwrap();
		assert_eq!(bytes, vec![
			b'R', b'I', b'F', b'F', 0x14, 0x00, 0x00, 0x00,
			b'P', b'A', b'L', b' ',
			b'd', b'a', b't', b'a', 0x08, 0x00, 0x00, 0x00,
			0x00, 0x03, 0x01, 0x00,
			0x11, 0x22, 0x33, 0x00,
		]);
		assert_eq!(bytes.len(), riff_file_size(1));
	}

	#[test]
	fn rejects_bad_magic() {
		let mut bytes = encode_riff(&[Color::default()]).unwrap();
		bytes[0] = b'X';

		let err = Palette::from_riff_bytes(&bytes).unwrap_err();
		assert_eq!(err.to_string(), "Invalid data at byte 0x0: Expected \"RIFF\", found \"XIFF\"");
	}

	#[test]
	fn rejects_truncated_file() {
		let bytes = encode_riff(&[Color::default(); 4]).unwrap();
		assert!(Palette::from_riff_bytes(&bytes[..bytes.len() - 1]).is_err());
	}
}
