//! A single binary digit.

//  #   Why a dedicated type?
//
//  The source of a bit is most often a `bool`, sometimes a numeric 0/1. Normalizing at the API boundary keeps the
//  implementations free of coercion rules, and keeps signatures self-documenting: a `Bit` parameter is a bit value,
//  never an index or a mask.

use core::{fmt, ops};

use crate::utils::Error;

/// A single binary digit.
///
/// Accepted at the API boundary as a `bool` via `From`, or as a numeric 0/1 via `TryFrom`; any other number is
/// rejected with `Error::InvalidArgument`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Bit {
    /// An unset bit.
    #[default]
    Zero,
    /// A set bit.
    One,
}

impl Bit {
    /// Returns whether the bit is set.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_sets::Bit;
    /// assert!(Bit::One.is_set());
    /// assert!(!Bit::Zero.is_set());
    /// ```
    #[inline]
    pub const fn is_set(self) -> bool {
        matches!(self, Self::One)
    }
}

//
//  Conversions
//

impl From<bool> for Bit {
    #[inline]
    fn from(value: bool) -> Self {
        if value { Self::One } else { Self::Zero }
    }
}

impl From<Bit> for bool {
    #[inline]
    fn from(value: Bit) -> Self {
        value.is_set()
    }
}

impl From<Bit> for u32 {
    #[inline]
    fn from(value: Bit) -> Self {
        value.is_set() as u32
    }
}

impl TryFrom<u32> for Bit {
    type Error = Error;

    #[inline]
    fn try_from(value: u32) -> Result<Self, Error> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            _ => Err(Error::InvalidArgument { argument: "bit", value: value as usize }),
        }
    }
}

//
//  Operators
//

impl ops::Not for Bit {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(if self.is_set() { "1" } else { "0" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_brush() {
        assert_eq!(Bit::One, Bit::from(true));
        assert_eq!(Bit::Zero, Bit::from(false));

        assert!(bool::from(Bit::One));
        assert!(!bool::from(Bit::Zero));

        assert_eq!(1u32, Bit::One.into());
        assert_eq!(0u32, Bit::Zero.into());
    }

    #[test]
    fn numeric_brush() {
        assert_eq!(Ok(Bit::Zero), Bit::try_from(0));
        assert_eq!(Ok(Bit::One), Bit::try_from(1));

        assert_eq!(Err(Error::InvalidArgument { argument: "bit", value: 2 }), Bit::try_from(2));
    }

    #[test]
    fn not_brush() {
        assert_eq!(Bit::One, !Bit::Zero);
        assert_eq!(Bit::Zero, !Bit::One);
        assert_eq!(Bit::One, !!Bit::One);
    }
} // mod tests
