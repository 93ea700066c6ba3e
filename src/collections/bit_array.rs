//! Sequence-backed implementation of a bit set, growing without bound.

use core::fmt;

use alloc::{string::String, vec::Vec};

use crate::{
    api::{Bit, BitSet, BitSetLike, VALUE_BITS, combine_mask_bits},
    utils::{Error, ensure_ordered, parse_bits, render_bits},
};

/// Sequence-backed implementation of a bit set.
///
/// The backing storage is a growable sequence of booleans, the first element being the least-significant bit, so
/// there is no upper bound on the length. Growth is transparent: a positional write addressing an index beyond the
/// current length first extends the storage with zeros, so positional writes never fail due to index magnitude.
///
/// The only operation the cap of the integer-backed variant leaks through is `value`: a bit set spanning more than
/// 31 bits has no plain integer value, and requesting one fails with `Error::Overflow`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitArray {
    //  Invariant: `bits.len() >= max(min_length, 1)`. Index 0 is the least-significant bit.
    bits: Vec<bool>,
    min_length: usize,
}

//
//  Creation
//

impl BitArray {
    /// Creates an all-zero bit set with no configured minimum length.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_sets::BitArray;
    /// assert_eq!(1, BitArray::new().length());
    /// ```
    pub fn new() -> Self {
        Self { bits: alloc::vec![false], min_length: 0 }
    }

    /// Creates an all-zero bit set of at least `min_length` bits.
    ///
    /// Unlike the integer-backed variant, any minimum length is accepted.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_sets::BitArray;
    /// assert_eq!(1000, BitArray::with_min_length(1000).length());
    /// ```
    pub fn with_min_length(min_length: usize) -> Self {
        Self { bits: alloc::vec![false; min_length.max(1)], min_length }
    }

    /// Creates a bit set from bits given most-significant first; the minimum length is the number of elements.
    ///
    /// An empty slice yields a single-zero bit set.
    pub fn from_array(bits: &[bool]) -> Self {
        if bits.is_empty() {
            return Self::new();
        }

        Self { bits: bits.iter().rev().copied().collect(), min_length: bits.len() }
    }

    /// Parses a binary-digit string, most-significant first; the minimum length is the input length.
    ///
    /// Fails with `Error::Parse` on an empty input or a non-binary character.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_sets::BitArray;
    /// let array = BitArray::deserialize("01101")?;
    ///
    /// assert_eq!(5, array.length());
    /// assert_eq!(Ok(0b1101), array.value());
    /// #   Ok::<(), bit_sets::Error>(())
    /// ```
    pub fn deserialize(input: &str) -> Result<Self, Error> {
        let bits = parse_bits(input)?;

        Ok(Self::from_array(&bits))
    }
}

impl Default for BitArray {
    fn default() -> Self {
        Self::new()
    }
}

//
//  Queries (inherent)
//

impl BitArray {
    /// Returns the number of bit positions: the size of the backing storage. Never less than 1, and never
    /// shrinking.
    pub fn length(&self) -> usize {
        self.bits.len()
    }

    /// Returns the number of set bits.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|bit| **bit).count()
    }

    /// Returns the integer value.
    ///
    /// Fails with `Error::Overflow` if the length exceeds 31 bits, padding included; truncate with `get_range`
    /// first to recover.
    pub fn value(&self) -> Result<u32, Error> {
        if self.bits.len() > VALUE_BITS {
            return Err(Error::Overflow { length: self.bits.len() });
        }

        let value = self
            .bits
            .iter()
            .enumerate()
            .fold(0u32, |value, (index, bit)| value | (u32::from(*bit) << index));

        Ok(value)
    }

    /// Returns whether this and the combined masks share a set bit.
    pub fn intersects<M>(&self, masks: &[M]) -> bool
    where
        M: BitSetLike,
    {
        let mask = combine_mask_bits(masks);

        self.bits.iter().zip(mask.iter()).any(|(bit, mask_bit)| *bit && *mask_bit)
    }

    /// Returns the bit at `index`, `Zero` past the current length. Never fails, and never grows.
    pub fn get(&self, index: usize) -> Bit {
        Bit::from(self.bits.get(index).copied().unwrap_or(false))
    }

    /// Returns a new bit set of length `to - from` holding bits `[from, to)` re-indexed from 0, zero-padded past
    /// the current length.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_sets::BitArray;
    /// let array = BitArray::deserialize("01101")?;
    ///
    /// let range = array.get_range(2, 6)?;
    ///
    /// assert_eq!(4, range.length());
    /// assert_eq!(vec![false, false, true, true], range.to_array());
    /// #   Ok::<(), bit_sets::Error>(())
    /// ```
    pub fn get_range(&self, from: usize, to: usize) -> Result<Self, Error> {
        ensure_ordered(from, to)?;

        let bits = (from..to).map(|index| self.get(index).is_set()).collect();

        Ok(Self { bits, min_length: to - from })
    }

    /// Returns whether every set bit of the combined masks is set in this. Vacuously true for a zero mask.
    pub fn test<M>(&self, masks: &[M]) -> bool
    where
        M: BitSetLike,
    {
        let mask = combine_mask_bits(masks);

        mask.iter().enumerate().all(|(index, mask_bit)| !*mask_bit || self.get(index).is_set())
    }

    /// Returns whether any set bit of the combined masks is set in this. False for a zero mask.
    pub fn test_any<M>(&self, masks: &[M]) -> bool
    where
        M: BitSetLike,
    {
        self.intersects(masks)
    }

    /// Returns whether the bit at `index` equals `value`; a position past the length holds `Zero`.
    pub fn test_at<V>(&self, value: V, index: usize) -> bool
    where
        V: Into<Bit>,
    {
        self.get(index) == value.into()
    }

    /// Returns whether every bit within the length equals `value`.
    pub fn test_all<V>(&self, value: V) -> bool
    where
        V: Into<Bit>,
    {
        let expected = value.into().is_set();

        self.bits.iter().all(|bit| *bit == expected)
    }
}

//
//  Mutation (inherent)
//

impl BitArray {
    /// Sets the bits of the combined masks to 1.
    pub fn on<M>(&mut self, masks: &[M]) -> &mut Self
    where
        M: BitSetLike,
    {
        self.set(Bit::One, masks)
    }

    /// Sets the bits of the combined masks to 0.
    pub fn off<M>(&mut self, masks: &[M]) -> &mut Self
    where
        M: BitSetLike,
    {
        self.set(Bit::Zero, masks)
    }

    /// Sets the bits of the combined masks to `value`.
    ///
    /// Setting to 1 grows the storage up to the highest set bit of the combined masks; setting to 0 never grows,
    /// a cleared bit past the current length being already zero.
    pub fn set<V, M>(&mut self, value: V, masks: &[M]) -> &mut Self
    where
        V: Into<Bit>,
        M: BitSetLike,
    {
        let mask = combine_mask_bits(masks);

        match value.into() {
            Bit::One => {
                if let Some(highest) = mask.iter().rposition(|bit| *bit) {
                    self.grow(highest + 1);
                }

                for (index, mask_bit) in mask.iter().enumerate() {
                    if *mask_bit {
                        self.bits[index] = true;
                    }
                }
            }
            Bit::Zero => {
                let length = self.bits.len().min(mask.len());

                for (index, mask_bit) in mask.iter().enumerate().take(length) {
                    if *mask_bit {
                        self.bits[index] = false;
                    }
                }
            }
        }

        self
    }

    /// Sets every bit within the length to `value`.
    pub fn set_all<V>(&mut self, value: V) -> &mut Self
    where
        V: Into<Bit>,
    {
        let value = value.into().is_set();

        self.bits.fill(value);

        self
    }

    /// Sets the bit at `index` to `value`, growing the storage up to `index` first if necessary.
    pub fn set_at<V>(&mut self, value: V, index: usize) -> &mut Self
    where
        V: Into<Bit>,
    {
        self.grow(index + 1);

        self.bits[index] = value.into().is_set();

        self
    }

    /// Sets the bits of `[from, to)` to `value`, growing the storage up to the range first if necessary.
    pub fn set_range<V>(&mut self, value: V, from: usize, to: usize) -> Result<&mut Self, Error>
    where
        V: Into<Bit>,
    {
        ensure_ordered(from, to)?;

        self.grow(to);

        let value = value.into().is_set();

        for index in from..to {
            self.bits[index] = value;
        }

        Ok(self)
    }

    /// Flips the bits of the combined masks, growing the storage up to the highest set bit first if necessary.
    pub fn flip<M>(&mut self, masks: &[M]) -> &mut Self
    where
        M: BitSetLike,
    {
        let mask = combine_mask_bits(masks);

        if let Some(highest) = mask.iter().rposition(|bit| *bit) {
            self.grow(highest + 1);
        }

        for (index, mask_bit) in mask.iter().enumerate() {
            if *mask_bit {
                self.bits[index] = !self.bits[index];
            }
        }

        self
    }

    /// Flips the bits of the combined masks. Alias of `flip`.
    pub fn toggle<M>(&mut self, masks: &[M]) -> &mut Self
    where
        M: BitSetLike,
    {
        self.flip(masks)
    }

    /// Flips every bit within the length.
    pub fn flip_all(&mut self) -> &mut Self {
        for bit in &mut self.bits {
            *bit = !*bit;
        }

        self
    }

    /// Flips the bit at `index`, growing the storage up to `index` first if necessary.
    pub fn flip_at(&mut self, index: usize) -> &mut Self {
        self.grow(index + 1);

        self.bits[index] = !self.bits[index];

        self
    }

    /// Flips the bits of `[from, to)`, growing the storage up to the range first if necessary.
    pub fn flip_range(&mut self, from: usize, to: usize) -> Result<&mut Self, Error> {
        ensure_ordered(from, to)?;

        self.grow(to);

        for index in from..to {
            self.bits[index] = !self.bits[index];
        }

        Ok(self)
    }

    /// Narrows this to the bits shared with the combined masks. This is equivalent to a AND operation.
    pub fn intersect<M>(&mut self, masks: &[M]) -> &mut Self
    where
        M: BitSetLike,
    {
        let mask = combine_mask_bits(masks);

        for (index, bit) in self.bits.iter_mut().enumerate() {
            *bit = *bit && mask.get(index).copied().unwrap_or(false);
        }

        self
    }

    /// Replaces the content with `source`'s bit pattern, preserving the configured minimum length.
    pub fn copy_from<M>(&mut self, source: &M) -> &mut Self
    where
        M: BitSetLike,
    {
        let length = source.length().max(self.min_length).max(1);

        self.bits.clear();
        self.bits.extend((0..length).map(|index| source.bit(index).is_set()));

        self
    }
}

//
//  Views (inherent)
//

impl BitArray {
    /// Returns whether the bit patterns match, compared across the longer of the two lengths.
    ///
    /// Minimum-length padding never affects equality.
    pub fn equals<M>(&self, other: &M) -> bool
    where
        M: BitSetLike,
    {
        BitSet::equals(self, other)
    }

    /// Returns the bits, most-significant first, one entry per position within the length.
    pub fn to_array(&self) -> Vec<bool> {
        self.bits.iter().rev().copied().collect()
    }

    /// Renders the bits as a binary-digit string, most-significant first, zero-padded to the length.
    pub fn serialize(&self) -> String {
        render_bits(&self.to_array())
    }
}

//
//  BitSetLike
//

impl BitSetLike for BitArray {
    fn length(&self) -> usize {
        self.bits.len()
    }

    fn bit(&self, index: usize) -> Bit {
        BitArray::get(self, index)
    }

    fn value(&self) -> Result<u32, Error> {
        BitArray::value(self)
    }
}

//
//  BitSet (trait)
//

impl BitSet for BitArray {
    fn with_min_length(min_length: usize) -> Result<Self, Error> {
        Ok(BitArray::with_min_length(min_length))
    }

    fn from_array(bits: &[bool]) -> Result<Self, Error> {
        Ok(BitArray::from_array(bits))
    }

    fn deserialize(input: &str) -> Result<Self, Error> {
        BitArray::deserialize(input)
    }

    fn count(&self) -> usize {
        BitArray::count(self)
    }

    fn intersects<M: BitSetLike>(&self, masks: &[M]) -> Result<bool, Error> {
        Ok(BitArray::intersects(self, masks))
    }

    fn get(&self, index: usize) -> Result<Bit, Error> {
        Ok(BitArray::get(self, index))
    }

    fn get_range(&self, from: usize, to: usize) -> Result<Self, Error> {
        BitArray::get_range(self, from, to)
    }

    fn test<M: BitSetLike>(&self, masks: &[M]) -> Result<bool, Error> {
        Ok(BitArray::test(self, masks))
    }

    fn test_any<M: BitSetLike>(&self, masks: &[M]) -> Result<bool, Error> {
        Ok(BitArray::test_any(self, masks))
    }

    fn test_at<V: Into<Bit>>(&self, value: V, index: usize) -> Result<bool, Error> {
        Ok(BitArray::test_at(self, value, index))
    }

    fn test_all<V: Into<Bit>>(&self, value: V) -> bool {
        BitArray::test_all(self, value)
    }

    fn on<M: BitSetLike>(&mut self, masks: &[M]) -> Result<&mut Self, Error> {
        Ok(BitArray::on(self, masks))
    }

    fn off<M: BitSetLike>(&mut self, masks: &[M]) -> Result<&mut Self, Error> {
        Ok(BitArray::off(self, masks))
    }

    fn set<V: Into<Bit>, M: BitSetLike>(&mut self, value: V, masks: &[M]) -> Result<&mut Self, Error> {
        Ok(BitArray::set(self, value, masks))
    }

    fn set_all<V: Into<Bit>>(&mut self, value: V) -> &mut Self {
        BitArray::set_all(self, value)
    }

    fn set_at<V: Into<Bit>>(&mut self, value: V, index: usize) -> Result<&mut Self, Error> {
        Ok(BitArray::set_at(self, value, index))
    }

    fn set_range<V: Into<Bit>>(&mut self, value: V, from: usize, to: usize) -> Result<&mut Self, Error> {
        BitArray::set_range(self, value, from, to)
    }

    fn flip<M: BitSetLike>(&mut self, masks: &[M]) -> Result<&mut Self, Error> {
        Ok(BitArray::flip(self, masks))
    }

    fn flip_all(&mut self) -> &mut Self {
        BitArray::flip_all(self)
    }

    fn flip_at(&mut self, index: usize) -> Result<&mut Self, Error> {
        Ok(BitArray::flip_at(self, index))
    }

    fn flip_range(&mut self, from: usize, to: usize) -> Result<&mut Self, Error> {
        BitArray::flip_range(self, from, to)
    }

    fn intersect<M: BitSetLike>(&mut self, masks: &[M]) -> Result<&mut Self, Error> {
        Ok(BitArray::intersect(self, masks))
    }

    fn copy_from<M: BitSetLike>(&mut self, source: &M) -> Result<&mut Self, Error> {
        Ok(BitArray::copy_from(self, source))
    }
}

//
//  Common traits
//

impl Eq for BitArray {}

impl PartialEq for BitArray {
    //  Minimum-length padding never affects equality.
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl PartialEq<u32> for BitArray {
    fn eq(&self, other: &u32) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "BitArray({})", self.serialize())
    }
}

//
//  Implementation details
//

impl BitArray {
    //  Extends the storage with zeros up to `length`. The storage never shrinks.
    fn grow(&mut self, length: usize) {
        if length > self.bits.len() {
            self.bits.resize(length, false);
        }
    }
}

// mod tests
