pub(crate) mod pal_act;
pub(crate) mod pal_riff;
pub mod color;
pub mod export;
pub mod palette;
pub mod range;
pub mod store;

/// Number of raw color words the palette RAM can hold on any supported platform.
pub const PALETTE_CAPACITY: usize = 512;

/// Hard ceiling of the Adobe Color Table format.
const MAX_ACT_COLORS: usize = 256;
