//  Errors.

use core::{error, fmt};

/// An error raised by a bit set or enumeration operation.
///
/// Every error is raised synchronously, before any mutation takes place, so a failed operation leaves its receiver
/// untouched.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Error {
    /// An index or bound lies outside the range accepted by the operation.
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// The rejected value.
        value: usize,
    },
    /// An integer value was requested from a bit set spanning more than 31 bits.
    Overflow {
        /// Length of the offending bit set.
        length: usize,
    },
    /// A serialized input could not be parsed.
    Parse {
        /// What the parser tripped on.
        reason: &'static str,
    },
    /// A bounded bit set was asked to span more than 31 bits.
    Capacity {
        /// The requested minimum length.
        min_length: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match *self {
            Self::InvalidArgument { argument, value } => write!(f, "invalid argument: {argument} = {value}"),
            Self::Overflow { length } => write!(f, "cannot represent {length} bits as an integer value"),
            Self::Parse { reason } => write!(f, "malformed input: {reason}"),
            Self::Capacity { min_length } => write!(f, "minimum length {min_length} exceeds the 31 bits capacity"),
        }
    }
}

impl error::Error for Error {}
