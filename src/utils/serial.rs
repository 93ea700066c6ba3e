//  Binary-digit rendering and parsing.
//
//  The serialized form of a bit set is a string of '0'/'1' characters, most-significant bit first, zero-padded to
//  the length of the bit set. Both implementations share these helpers so the format cannot drift between them.

use alloc::{string::String, vec::Vec};

use crate::utils::Error;

/// Renders bits, given most-significant first, as a binary-digit string.
///
/// #   Examples
///
/// ```
/// #   use bit_sets::utils::render_bits;
/// assert_eq!("01101", render_bits(&[false, true, true, false, true]));
/// ```
pub fn render_bits(bits: &[bool]) -> String {
    bits.iter().map(|bit| if *bit { '1' } else { '0' }).collect()
}

/// Parses a binary-digit string into bits, most-significant first.
///
/// Fails with `Error::Parse` on an empty input, or on any character other than '0' or '1'.
///
/// #   Examples
///
/// ```
/// #   use bit_sets::utils::parse_bits;
/// assert_eq!(Ok(vec![false, true, true, false, true]), parse_bits("01101"));
/// assert!(parse_bits("invalid").is_err());
/// ```
pub fn parse_bits(input: &str) -> Result<Vec<bool>, Error> {
    if input.is_empty() {
        return Err(Error::Parse { reason: "empty input" });
    }

    input
        .chars()
        .map(|character| match character {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(Error::Parse { reason: "non-binary character" }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_brush() {
        assert_eq!("0", render_bits(&[false]));
        assert_eq!("1", render_bits(&[true]));
        assert_eq!("01101", render_bits(&[false, true, true, false, true]));
    }

    #[test]
    fn parse_brush() {
        assert_eq!(Ok(alloc::vec![false]), parse_bits("0"));
        assert_eq!(Ok(alloc::vec![true, true, false]), parse_bits("110"));
    }

    #[test]
    fn parse_malformed() {
        assert_eq!(Err(Error::Parse { reason: "empty input" }), parse_bits(""));
        assert_eq!(Err(Error::Parse { reason: "non-binary character" }), parse_bits("0120"));
        assert_eq!(Err(Error::Parse { reason: "non-binary character" }), parse_bits("invalid"));
    }

    #[test]
    fn round_trip() {
        for input in ["0", "1", "01101", "1000000000000000000000000000000000000000"] {
            let bits = parse_bits(input).expect("binary input");

            assert_eq!(input, render_bits(&bits));
        }
    }
} // mod tests
