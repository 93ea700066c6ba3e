//! The operational contract shared by the two bit set implementations.

use alloc::{string::String, vec::Vec};

use crate::{
    api::{Bit, BitSetLike},
    utils::{Error, render_bits},
};

/// An ordered sequence of bits, indexed from 0 at the least-significant end, with convenient methods for common
/// bit operations.
///
/// The contract is implemented twice, over different backing representations: `BitArray` grows without bound,
/// `BitField` is capped at 31 bits. The two behave identically wherever both accept the arguments; signatures are
/// uniformly `Result`-based so they stay interchangeable behind this trait, and an operation a given implementation
/// cannot fail returns `Ok` unconditionally.
///
/// Mutating operations return the receiver to allow chaining:
///
/// ```
/// use bit_sets::{BitField, BitSet};
///
/// let mut field = BitField::with_min_length(5)?;
///
/// field.set_at(true, 0)?.set_at(true, 2)?.flip_range(2, 4)?;
///
/// assert_eq!("01001", field.serialize());
/// #   Ok::<(), bit_sets::Error>(())
/// ```
pub trait BitSet: BitSetLike + Sized {
    //
    //  Creation
    //

    /// Creates an all-zero bit set of at least `min_length` bits.
    fn with_min_length(min_length: usize) -> Result<Self, Error>;

    /// Creates a bit set from bits given most-significant first; the minimum length is the number of elements.
    ///
    /// An empty slice yields a single-zero bit set.
    fn from_array(bits: &[bool]) -> Result<Self, Error>;

    /// Parses a binary-digit string, most-significant first; the minimum length is the input length.
    ///
    /// Fails with `Error::Parse` on an empty input or a non-binary character.
    fn deserialize(input: &str) -> Result<Self, Error>;

    //
    //  Queries
    //

    /// Returns the number of set bits.
    fn count(&self) -> usize;

    /// Returns whether this and the combined masks share a set bit.
    fn intersects<M: BitSetLike>(&self, masks: &[M]) -> Result<bool, Error>;

    /// Returns the bit at `index`.
    fn get(&self, index: usize) -> Result<Bit, Error>;

    /// Returns a new bit set of length `to - from` holding bits `[from, to)` re-indexed from 0, zero-padded past
    /// the current length.
    fn get_range(&self, from: usize, to: usize) -> Result<Self, Error>;

    /// Returns whether every set bit of the combined masks is set in this. Vacuously true for a zero mask.
    fn test<M: BitSetLike>(&self, masks: &[M]) -> Result<bool, Error>;

    /// Returns whether any set bit of the combined masks is set in this. False for a zero mask.
    fn test_any<M: BitSetLike>(&self, masks: &[M]) -> Result<bool, Error>;

    /// Returns whether the bit at `index` equals `value`; a position past the length holds `Zero`.
    fn test_at<V: Into<Bit>>(&self, value: V, index: usize) -> Result<bool, Error>;

    /// Returns whether every bit within the length equals `value`.
    fn test_all<V: Into<Bit>>(&self, value: V) -> bool;

    //
    //  Mutation
    //

    /// Sets the bits of the combined masks to 1.
    fn on<M: BitSetLike>(&mut self, masks: &[M]) -> Result<&mut Self, Error>;

    /// Sets the bits of the combined masks to 0.
    fn off<M: BitSetLike>(&mut self, masks: &[M]) -> Result<&mut Self, Error>;

    /// Sets the bits of the combined masks to `value`.
    fn set<V: Into<Bit>, M: BitSetLike>(&mut self, value: V, masks: &[M]) -> Result<&mut Self, Error>;

    /// Sets every bit within the length to `value`.
    fn set_all<V: Into<Bit>>(&mut self, value: V) -> &mut Self;

    /// Sets the bit at `index` to `value`.
    fn set_at<V: Into<Bit>>(&mut self, value: V, index: usize) -> Result<&mut Self, Error>;

    /// Sets the bits of `[from, to)` to `value`.
    fn set_range<V: Into<Bit>>(&mut self, value: V, from: usize, to: usize) -> Result<&mut Self, Error>;

    /// Flips the bits of the combined masks.
    fn flip<M: BitSetLike>(&mut self, masks: &[M]) -> Result<&mut Self, Error>;

    /// Flips every bit within the length.
    fn flip_all(&mut self) -> &mut Self;

    /// Flips the bit at `index`.
    fn flip_at(&mut self, index: usize) -> Result<&mut Self, Error>;

    /// Flips the bits of `[from, to)`.
    fn flip_range(&mut self, from: usize, to: usize) -> Result<&mut Self, Error>;

    /// Narrows this to the bits shared with the combined masks. This is equivalent to a AND operation.
    fn intersect<M: BitSetLike>(&mut self, masks: &[M]) -> Result<&mut Self, Error>;

    /// Replaces the content with `source`'s bit pattern, preserving the configured minimum length.
    fn copy_from<M: BitSetLike>(&mut self, source: &M) -> Result<&mut Self, Error>;

    //
    //  Views
    //

    /// Returns whether the bit patterns match, compared across the longer of the two lengths.
    ///
    /// Minimum-length padding never affects equality.
    fn equals<M: BitSetLike>(&self, other: &M) -> bool {
        let length = self.length().max(other.length());

        (0..length).all(|index| self.bit(index) == other.bit(index))
    }

    /// Returns the bits, most-significant first, one entry per position within the length.
    fn to_array(&self) -> Vec<bool> {
        (0..self.length()).rev().map(|index| self.bit(index).is_set()).collect()
    }

    /// Renders the bits as a binary-digit string, most-significant first, zero-padded to the length.
    fn serialize(&self) -> String {
        render_bits(&self.to_array())
    }
}
