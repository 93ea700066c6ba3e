//! The bit-flag enumeration.

use core::{fmt, ops::Index, slice};

use alloc::string::String;

use crate::{
    api::VALUE_BITS,
    collections::{BitArray, BitField},
    flags::{
        EnumConstant, EnumLike,
        members::{Members, Ordinals},
    },
    utils::Error,
};

/// A bit-flag enumeration.
///
/// Member ordinals are 1, 2, 4, 8, ... in declaration order, so each member selects a single bit and doubles as a
/// mask. The enumeration produces bit sets sized to its member count through `create_bit_field` and
/// `create_bit_array`.
///
/// #   Examples
///
/// ```
/// use bit_sets::{BitFlags, EnumLike};
///
/// let options = BitFlags::new(&["DEV_MODE", "DEBUG", "VERBOSE"])?;
///
/// let mut configuration = options.create_bit_field();
///
/// configuration.on(&[options["DEBUG"], options["VERBOSE"]])?;
///
/// assert!(configuration.test(&[options["DEBUG"]])?);
/// assert!(!configuration.test_any(&[options["DEV_MODE"]])?);
/// assert_eq!("110", configuration.serialize());
/// #   Ok::<(), bit_sets::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct BitFlags(Members);

//
//  Constants
//

impl BitFlags {
    /// The empty flag, ordinal 0. Not counted as a member.
    pub const NONE: EnumConstant = EnumConstant::new("NONE", 0);
}

//
//  Creation
//

impl BitFlags {
    /// Creates a flag enumeration from member names, power-of-two ordinals assigned in declaration order.
    ///
    /// Fails with `Error::InvalidArgument` on a duplicate name, and with `Error::Capacity` past 31 members, the
    /// widest a flag mask spans.
    pub fn new(names: &[&'static str]) -> Result<Self, Error> {
        if names.len() > VALUE_BITS {
            return Err(Error::Capacity { min_length: names.len() });
        }

        Members::new(names, Ordinals::Flags).map(Self)
    }

    /// Creates a flag enumeration from an array of member names.
    pub fn from_array(names: &[&'static str]) -> Result<Self, Error> {
        Self::new(names)
    }

    /// Parses a comma-joined name list.
    ///
    /// Fails with `Error::Parse` on an empty input or an empty name segment.
    pub fn deserialize(input: &'static str) -> Result<Self, Error> {
        let names = Members::parse(input)?;

        Self::new(&names)
    }
}

//
//  Queries
//

impl BitFlags {
    /// Returns an iterator over the members, in declaration order.
    pub fn iter(&self) -> slice::Iter<'_, EnumConstant> {
        self.0.values().iter()
    }

    /// Produces an all-zero `BitField` whose minimum length is the member count.
    pub fn create_bit_field(&self) -> BitField {
        //  The member count is capped at construction, so it always fits.
        BitField::with_min_length_unchecked(self.0.length())
    }

    /// Produces an all-zero `BitArray` whose minimum length is the member count.
    pub fn create_bit_array(&self) -> BitArray {
        BitArray::with_min_length(self.0.length())
    }
}

impl EnumLike for BitFlags {
    fn length(&self) -> usize {
        self.0.length()
    }

    fn values(&self) -> &[EnumConstant] {
        self.0.values()
    }

    fn get(&self, name: &str) -> Option<&EnumConstant> {
        self.0.get(name)
    }

    fn has(&self, constant: &EnumConstant) -> bool {
        self.0.has(constant)
    }

    fn serialize(&self) -> String {
        self.0.serialize()
    }
}

//
//  Common traits
//

impl<'a> IntoIterator for &'a BitFlags {
    type Item = &'a EnumConstant;
    type IntoIter = slice::Iter<'a, EnumConstant>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<&str> for BitFlags {
    type Output = EnumConstant;

    //  Panics if no member bears the name; use `get` for a fallible lookup.
    fn index(&self, name: &str) -> &EnumConstant {
        let Some(constant) = self.0.get(name) else {
            panic!("no member named {name}");
        };

        constant
    }
}

impl fmt::Display for BitFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "BitFlags(length:{})", self.0.length())
    }
}

// mod tests
