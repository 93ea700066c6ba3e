//! A set of high-level traits to abstract over the implementation details.

pub mod bit;
pub mod bit_set;
pub mod bit_set_like;

pub use bit::Bit;
pub use bit_set::BitSet;
pub use bit_set_like::{BitSetLike, VALUE_BITS, combine_mask_bits, combine_masks};

pub use crate::utils::Error;
