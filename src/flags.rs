//! Enumerations built atop the bit set engine.

mod members;

pub mod bit_flags;
pub mod constant;
pub mod enumeration;

pub use bit_flags::BitFlags;
pub use constant::EnumConstant;
pub use enumeration::{Enum, EnumLike};
