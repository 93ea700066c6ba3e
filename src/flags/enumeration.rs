//! The common read-only contract of the enumeration types, and the plain ordered enumeration.

use core::{fmt, ops::Index, slice};

use alloc::string::String;

use crate::{
    flags::{
        EnumConstant,
        members::{Members, Ordinals},
    },
    utils::Error,
};

/// The common read-only contract of the enumeration types.
///
/// A member set is fixed at construction: the implementing types expose no mutation, and iteration yields members
/// in declaration order.
pub trait EnumLike {
    /// Returns the number of members.
    fn length(&self) -> usize;

    /// Returns the members, in declaration order.
    fn values(&self) -> &[EnumConstant];

    /// Returns the member with the given name, if any.
    fn get(&self, name: &str) -> Option<&EnumConstant>;

    /// Returns whether the constant is a member.
    fn has(&self, constant: &EnumConstant) -> bool;

    /// Renders the member names, comma-joined, in declaration order.
    fn serialize(&self) -> String;
}

/// A plain ordered enumeration.
///
/// Member ordinals are 1, 2, 3, ... in declaration order.
///
/// #   Examples
///
/// ```
/// use bit_sets::{Enum, EnumLike};
///
/// let seasons = Enum::new(&["SPRING", "SUMMER", "FALL", "WINTER"])?;
///
/// assert_eq!(4, seasons.length());
/// assert_eq!(3, seasons["FALL"].ordinal());
/// #   Ok::<(), bit_sets::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Enum(Members);

//
//  Creation
//

impl Enum {
    /// Creates an enumeration from member names, sequential ordinals assigned in declaration order.
    ///
    /// Fails with `Error::InvalidArgument` on a duplicate name.
    pub fn new(names: &[&'static str]) -> Result<Self, Error> {
        Members::new(names, Ordinals::Sequential).map(Self)
    }

    /// Creates an enumeration from an array of member names.
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

impl Enum {
    /// Returns an iterator over the members, in declaration order.
    pub fn iter(&self) -> slice::Iter<'_, EnumConstant> {
        self.0.values().iter()
    }
}

impl EnumLike for Enum {
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

impl<'a> IntoIterator for &'a Enum {
    type Item = &'a EnumConstant;
    type IntoIter = slice::Iter<'a, EnumConstant>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<&str> for Enum {
    type Output = EnumConstant;

    //  Panics if no member bears the name; use `get` for a fallible lookup.
    fn index(&self, name: &str) -> &EnumConstant {
        let Some(constant) = self.0.get(name) else {
            panic!("no member named {name}");
        };

        constant
    }
}

impl fmt::Display for Enum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Enum(length:{})", self.0.length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 4] = ["ONE", "TWO", "THREE", "FOUR"];

    fn seasons() -> Enum {
        Enum::new(&NAMES).expect("distinct names")
    }

    #[test]
    fn sequential_ordinals() {
        let flags = seasons();

        for (position, constant) in flags.iter().enumerate() {
            assert_eq!(position as u32 + 1, constant.ordinal());
            assert_eq!(NAMES[position], constant.name());
        }
    }

    #[test]
    fn duplicate_names() {
        assert!(Enum::new(&["ONE", "ONE"]).is_err());
    }

    #[test]
    fn iteration() {
        let flags = seasons();

        let names: alloc::vec::Vec<&str> = (&flags).into_iter().map(EnumConstant::name).collect();

        assert_eq!(NAMES.to_vec(), names);
    }

    #[test]
    fn serialization() {
        let flags = seasons();

        assert_eq!("ONE,TWO,THREE,FOUR", flags.serialize());

        let decoded = Enum::deserialize("ONE,TWO,THREE,FOUR").expect("well-formed input");

        assert_eq!(flags.values(), decoded.values());

        assert!(Enum::deserialize("").is_err());
        assert!(Enum::deserialize("ENUM,").is_err());
    }

    #[test]
    fn from_array() {
        let flags = Enum::from_array(&["A", "B", "C"]).expect("distinct names");

        assert_eq!(3, flags.length());

        let names: alloc::vec::Vec<&str> = flags.values().iter().map(EnumConstant::name).collect();
        assert_eq!(alloc::vec!["A", "B", "C"], names);
    }

    #[test]
    fn lookup() {
        let flags = seasons();

        assert_eq!(2, flags["TWO"].ordinal());
        assert!(flags.has(&flags["ONE"]));
        assert!(!flags.has(&EnumConstant::new("name", 1)));
    }

    #[test]
    fn display() {
        assert_eq!("Enum(length:4)", alloc::format!("{}", seasons()));
    }
} // mod tests
