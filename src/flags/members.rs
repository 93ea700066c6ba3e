//  Shared member-list core of the two enumeration types.
//
//  Both enumerations are a fixed, ordered list of named constants differing only in how ordinals progress; the
//  list handling lives here once, and the public types wrap it.

use alloc::{string::String, vec::Vec};

use crate::{flags::EnumConstant, utils::Error};

//  Ordinal progression of an enumeration.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Ordinals {
    //  1, 2, 4, 8, ...
    Flags,
    //  1, 2, 3, 4, ...
    Sequential,
}

impl Ordinals {
    fn ordinal(self, position: usize) -> u32 {
        match self {
            Self::Flags => 1 << position,
            Self::Sequential => position as u32 + 1,
        }
    }
}

//  The member list of an enumeration, fixed at construction.
#[derive(Clone, Debug)]
pub(crate) struct Members {
    constants: Vec<EnumConstant>,
}

impl Members {
    //  Fails with `InvalidArgument` on a duplicate name; `value` is the position of the duplicate.
    pub(crate) fn new(names: &[&'static str], ordinals: Ordinals) -> Result<Self, Error> {
        let mut constants = Vec::with_capacity(names.len());

        for (position, name) in names.iter().enumerate() {
            if names[..position].contains(name) {
                return Err(Error::InvalidArgument { argument: "names", value: position });
            }

            constants.push(EnumConstant::new(name, ordinals.ordinal(position)));
        }

        Ok(Self { constants })
    }

    //  Splits a comma-joined name list, rejecting empty inputs and empty segments.
    pub(crate) fn parse(input: &'static str) -> Result<Vec<&'static str>, Error> {
        if input.is_empty() {
            return Err(Error::Parse { reason: "empty input" });
        }

        let names: Vec<&'static str> = input.split(',').collect();

        if names.iter().any(|name| name.is_empty()) {
            return Err(Error::Parse { reason: "empty constant name" });
        }

        Ok(names)
    }

    pub(crate) fn length(&self) -> usize {
        self.constants.len()
    }

    pub(crate) fn values(&self) -> &[EnumConstant] {
        &self.constants
    }

    pub(crate) fn get(&self, name: &str) -> Option<&EnumConstant> {
        self.constants.iter().find(|constant| constant.name() == name)
    }

    pub(crate) fn has(&self, constant: &EnumConstant) -> bool {
        self.constants.iter().any(|candidate| candidate == constant)
    }

    pub(crate) fn serialize(&self) -> String {
        let names: Vec<&str> = self.constants.iter().map(|constant| constant.name()).collect();

        names.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_progressions() {
        assert_eq!(1, Ordinals::Flags.ordinal(0));
        assert_eq!(2, Ordinals::Flags.ordinal(1));
        assert_eq!(4, Ordinals::Flags.ordinal(2));
        assert_eq!(1 << 30, Ordinals::Flags.ordinal(30));

        assert_eq!(1, Ordinals::Sequential.ordinal(0));
        assert_eq!(2, Ordinals::Sequential.ordinal(1));
        assert_eq!(3, Ordinals::Sequential.ordinal(2));
    }

    #[test]
    fn duplicate_names() {
        let result = Members::new(&["ONE", "ONE"], Ordinals::Flags);

        assert_eq!(Err(Error::InvalidArgument { argument: "names", value: 1 }), result.map(|_| ()));
    }

    #[test]
    fn parse_brush() {
        assert_eq!(Ok(alloc::vec!["ONE", "TWO"]), Members::parse("ONE,TWO"));
        assert_eq!(Ok(alloc::vec!["ONE"]), Members::parse("ONE"));

        assert_eq!(Err(Error::Parse { reason: "empty input" }), Members::parse(""));
        assert_eq!(Err(Error::Parse { reason: "empty constant name" }), Members::parse("BITFLAG,"));
        assert_eq!(Err(Error::Parse { reason: "empty constant name" }), Members::parse(",ONE"));
    }

    #[test]
    fn lookup() {
        let members = Members::new(&["ONE", "TWO"], Ordinals::Flags).expect("distinct names");

        assert_eq!(2, members.length());
        assert_eq!(Some(2), members.get("TWO").map(EnumConstant::ordinal));
        assert_eq!(None, members.get("THREE"));

        assert!(members.has(&EnumConstant::new("ONE", 1)));
        assert!(!members.has(&EnumConstant::new("name", 1)));
    }

    #[test]
    fn serialize_brush() {
        let members = Members::new(&["ONE", "TWO", "THREE"], Ordinals::Sequential).expect("distinct names");

        assert_eq!("ONE,TWO,THREE", members.serialize());
    }
} // mod tests
