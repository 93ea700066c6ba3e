//! Bit sets, and flag enumerations built atop them.
//!
//! #   Organization
//!
//! This crate is composed of multiple top modules:
//!
//! -   The `api` top module contains a selection of vocabulary types and traits.
//! -   The `collections` module contains the two implementations of the bit set contract.
//! -   The `flags` module contains the enumeration types built atop the bit set engine.
//! -   The `utils` module contains the low-level helpers upon which the implementations are built.
//!
//!
//! #   Bit set flavors
//!
//! The `BitSet` contract is implemented twice, and the two implementations behave identically wherever both accept
//! the arguments:
//!
//! -   `BitArray` is backed by a growable sequence of booleans. There is no upper bound on its length, and growth
//!     is transparent: positional writes never fail due to index magnitude.
//! -   `BitField` is backed by a single integer, and every operation is a native bitwise operation. Only 31 bits
//!     survive standard 32-bits signed integer arithmetic with the sign bit untouched, so its capacity is exactly
//!     31 bits, and out-of-bounds positions are rejected before any mutation.
//!
//! #### Why 31, not 32?
//!
//! The integer-backed representation must round-trip through the common denominator of 32-bits platforms: signed
//! integer arithmetic. Touching the sign bit is not portable, so the high bit is never used, and relaxing the cap
//! to 32 would silently corrupt the values it produces. The boundary is load-bearing; it is checked, documented,
//! and tested as exactly 31.
//!
//!
//! #   Example
//!
//! ```
//! use bit_sets::BitFlags;
//!
//! let flags = BitFlags::new(&["READ", "WRITE", "EXECUTE"])?;
//!
//! let mut permissions = flags.create_bit_field();
//!
//! permissions.on(&[flags["READ"], flags["WRITE"]])?;
//!
//! assert_eq!(2, permissions.count());
//! assert!(permissions.test(&[flags["READ"]])?);
//! assert!(!permissions.test_any(&[flags["EXECUTE"]])?);
//! assert_eq!("011", permissions.serialize());
//! #   Ok::<(), bit_sets::Error>(())
//! ```

#![cfg_attr(not(test), no_std)]
//  Lints
#![deny(missing_docs)]
//  This author prefers to keep its test modules close to what they are testing.
#![allow(clippy::items_after_test_module)]

extern crate alloc;

pub mod api;
pub mod collections;
pub mod flags;
pub mod utils;

pub use api::{Bit, BitSet, BitSetLike};
pub use collections::{BitArray, BitField};
pub use flags::{BitFlags, Enum, EnumConstant, EnumLike};
pub use utils::Error;
