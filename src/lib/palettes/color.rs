use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::palettes::palette::Color;

/// A packed 15-bit color word as stored in palette RAM: `-bbbbbgg gggrrrrr`.
/// The top bit is ignored.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RawColor(pub u16);

/// The component view of a [RawColor]. Never stored, always computed from the raw word.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize)]
pub struct DecodedColor {
	pub raw: u16,
	pub r5: u8,
	pub g5: u8,
	pub b5: u8,
	pub r8: u8,
	pub g8: u8,
	pub b8: u8,
}

/// Expands a 5-bit channel to 8 bits by replicating its top 3 bits into the freshly shifted-in low bits,
/// so that 0x1F maps to 0xFF instead of 0xF8.
fn scale_5bits_to_8bits(v: u8) -> u8 {
	let v = (v & 0x1F) << 3;
	v | ((v >> 5) & 0x07)
}

impl RawColor {
	pub fn r5(self) -> u8 {
		(self.0 & 0x1F) as u8
	}

	pub fn g5(self) -> u8 {
		((self.0 >> 5) & 0x1F) as u8
	}

	pub fn b5(self) -> u8 {
		((self.0 >> 10) & 0x1F) as u8
	}

	pub fn decode(self) -> DecodedColor {
		let (r5, g5, b5) = (self.r5(), self.g5(), self.b5());
		DecodedColor {
			raw: self.0,
			r5,
			g5,
			b5,
			r8: scale_5bits_to_8bits(r5),
			g8: scale_5bits_to_8bits(g5),
			b8: scale_5bits_to_8bits(b5),
		}
	}
}

impl From<u16> for RawColor {
	fn from(v: u16) -> Self {
		Self(v)
	}
}

impl Display for RawColor {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "0x{:04x}", self.0)
	}
}

impl DecodedColor {
	/// The 24-bit `0xRRGGBB` value of the expanded channels.
	pub fn hex24(&self) -> u32 {
		(self.r8 as u32) << 16 | (self.g8 as u32) << 8 | self.b8 as u32
	}

	/// The untouched raw word, top bit included.
	pub fn hex16(&self) -> u16 {
		self.raw
	}

	/// `hex24` rendered as six zero-padded lowercase hex digits, without prefix.
	pub fn hex24_string(&self) -> String {
		format!("{:06x}", self.hex24())
	}

	/// `hex16` rendered as four zero-padded lowercase hex digits, without prefix.
	pub fn hex16_string(&self) -> String {
		format!("{:04x}", self.hex16())
	}

	pub fn rgb8(&self) -> [u8; 3] {
		[self.r8, self.g8, self.b8]
	}
}

impl From<DecodedColor> for Color {
	fn from(d: DecodedColor) -> Self {
		Color::from(d.rgb8())
	}
}

impl From<RawColor> for Color {
	fn from(c: RawColor) -> Self {
		Color::from(c.decode())
	}
}

impl Display for DecodedColor {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{}", self.hex24_string())
	}
}

#[cfg(test)]
mod tests {
	use super::scale_5bits_to_8bits;

	#[test]
	fn channel_expansion_endpoints() {
		assert_eq!(scale_5bits_to_8bits(0), 0);
		assert_eq!(scale_5bits_to_8bits(1), 0x08);
		assert_eq!(scale_5bits_to_8bits(0x10), 0x84);
		assert_eq!(scale_5bits_to_8bits(0x1F), 0xFF);
	}

	#[test]
	fn channel_expansion_is_monotonic() {
		let scaled = (0..32).map(scale_5bits_to_8bits).collect::<Vec<u8>>();
		assert!(scaled.windows(2).all(|w| w[0] < w[1]));
	}
}
