use std::fmt::{Display, Formatter};
use std::ops::Range;

use crate::palettes::PALETTE_CAPACITY;

/// A window of the flat palette index space selected for export.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExportRange {
	pub start: usize,
	pub length: usize,
}

impl ExportRange {
	pub fn new(start: usize, length: usize) -> Self {
		Self { start, length }
	}

	pub fn is_empty(&self) -> bool {
		self.length == 0
	}

	pub fn end(&self) -> usize {
		self.start + self.length
	}

	pub fn as_range(&self) -> Range<usize> {
		self.start..self.end()
	}

	/// Fits the range into `[0, capacity)`.
	///
	/// A start at or past `capacity` is not an error: it yields an empty range, which callers
	/// treat as "nothing to export". A range running past the end is truncated.
	pub fn clamp_to(self, capacity: usize) -> Self {
		if self.start >= capacity {
			return Self { start: self.start, length: 0 };
		}

		Self {
			start: self.start,
			length: self.length.min(capacity - self.start),
		}
	}
}

impl Display for ExportRange {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if self.is_empty() {
			write!(f, "{}+0 (empty)", self.start)
		} else {
			write!(f, "{}..{} ({} entries)", self.start, self.end() - 1, self.length)
		}
	}
}

/// Clamps an export request against the full palette capacity.
pub fn clamp(start: usize, length: usize) -> ExportRange {
	clamp_to_capacity(start, length, PALETTE_CAPACITY)
}

pub fn clamp_to_capacity(start: usize, length: usize, capacity: usize) -> ExportRange {
	ExportRange::new(start, length).clamp_to(capacity)
}
