//! An immutable named constant of an enumeration.

use core::fmt;

use crate::{
    api::{Bit, BitSetLike},
    utils::Error,
};

/// An immutable named constant of an enumeration.
///
/// Constants of a flag enumeration double as masks: an `EnumConstant` is `BitSetLike`, its ordinal being its mask
/// value, so it is passed directly to any mask-taking bit set operation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct EnumConstant {
    name: &'static str,
    ordinal: u32,
}

impl EnumConstant {
    /// Creates a new constant.
    pub const fn new(name: &'static str, ordinal: u32) -> Self {
        Self { name, ordinal }
    }

    /// Returns the name of the constant.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the ordinal value of the constant.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_sets::EnumConstant;
    /// let constant = EnumConstant::new("READ", 1);
    ///
    /// assert_eq!("READ", constant.name());
    /// assert_eq!(1, constant.ordinal());
    /// ```
    pub const fn ordinal(&self) -> u32 {
        self.ordinal
    }
}

//
//  BitSetLike
//

impl BitSetLike for EnumConstant {
    fn length(&self) -> usize {
        self.ordinal.length()
    }

    fn bit(&self, index: usize) -> Bit {
        self.ordinal.bit(index)
    }

    fn value(&self) -> Result<u32, Error> {
        self.ordinal.value()
    }
}

//
//  Common traits
//

impl PartialEq<u32> for EnumConstant {
    fn eq(&self, other: &u32) -> bool {
        self.ordinal == *other
    }
}

impl fmt::Display for EnumConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "EnumConstant({}:{})", self.name, self.ordinal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessor_brush() {
        let constant = EnumConstant::new("enumName", 5);

        assert_eq!("enumName", constant.name());
        assert_eq!(5, constant.ordinal());
        assert_eq!(constant, 5);
    }

    #[test]
    fn comparison() {
        let constant = EnumConstant::new("enumName", 5);
        let copy = EnumConstant::new("enumName", 5);
        let other = EnumConstant::new("otherName", 5);

        assert_eq!(constant, copy);
        assert_ne!(constant, other);
    }

    #[test]
    fn display() {
        let constant = EnumConstant::new("enumName", 5);

        assert_eq!("EnumConstant(enumName:5)", alloc::format!("{constant}"));
    }

    #[test]
    fn mask() {
        let constant = EnumConstant::new("FOUR", 0b100);

        assert_eq!(3, constant.length());
        assert_eq!(Bit::One, constant.bit(2));
        assert_eq!(Ok(0b100), constant.value());
    }
} // mod tests
