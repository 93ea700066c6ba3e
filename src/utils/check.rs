//  Pure validation helpers.
//
//  These are leaves of the dependency graph: nothing here depends on any other part of the crate but the error
//  type, and every helper is a pure function of its arguments.
//
//  The source system also validated that positions were integers; `usize` parameters subsume that check here.

use crate::utils::Error;

/// Checks that `index` addresses one of the first `bits` bit positions.
///
/// Returns the index, narrowed for shifting.
///
/// #   Examples
///
/// ```
/// #   use bit_sets::utils::ensure_index;
/// assert_eq!(Ok(30), ensure_index(30, 31));
/// assert!(ensure_index(31, 31).is_err());
/// ```
pub fn ensure_index(index: usize, bits: usize) -> Result<u32, Error> {
    if index >= bits {
        return Err(Error::InvalidArgument { argument: "index", value: index });
    }

    Ok(index as u32)
}

/// Checks that `[from, to)` is a non-empty range of the first `bits` bit positions.
///
/// Returns the bounds, narrowed for shifting.
///
/// #   Examples
///
/// ```
/// #   use bit_sets::utils::ensure_range;
/// assert_eq!(Ok((2, 6)), ensure_range(2, 6, 31));
/// assert!(ensure_range(6, 2, 31).is_err());
/// assert!(ensure_range(0, 32, 31).is_err());
/// ```
pub fn ensure_range(from: usize, to: usize, bits: usize) -> Result<(u32, u32), Error> {
    ensure_ordered(from, to)?;

    if from >= bits {
        return Err(Error::InvalidArgument { argument: "from", value: from });
    }

    if to > bits {
        return Err(Error::InvalidArgument { argument: "to", value: to });
    }

    Ok((from as u32, to as u32))
}

/// Checks that `[from, to)` is a non-empty range.
///
/// #   Examples
///
/// ```
/// #   use bit_sets::utils::ensure_ordered;
/// assert_eq!(Ok(()), ensure_ordered(2, 6));
/// assert!(ensure_ordered(2, 2).is_err());
/// ```
pub fn ensure_ordered(from: usize, to: usize) -> Result<(), Error> {
    if to <= from {
        return Err(Error::InvalidArgument { argument: "to", value: to });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_brush() {
        assert_eq!(Ok(0), ensure_index(0, 31));
        assert_eq!(Ok(30), ensure_index(30, 31));

        assert_eq!(Err(Error::InvalidArgument { argument: "index", value: 31 }), ensure_index(31, 31));
        assert_eq!(Err(Error::InvalidArgument { argument: "index", value: 100 }), ensure_index(100, 31));
    }

    #[test]
    fn range_brush() {
        assert_eq!(Ok((0, 31)), ensure_range(0, 31, 31));
        assert_eq!(Ok((30, 31)), ensure_range(30, 31, 31));

        assert_eq!(Err(Error::InvalidArgument { argument: "to", value: 0 }), ensure_range(0, 0, 31));
        assert_eq!(Err(Error::InvalidArgument { argument: "to", value: 2 }), ensure_range(6, 2, 31));
        assert_eq!(Err(Error::InvalidArgument { argument: "from", value: 31 }), ensure_range(31, 32, 31));
        assert_eq!(Err(Error::InvalidArgument { argument: "to", value: 32 }), ensure_range(0, 32, 31));
    }

    #[test]
    fn ordered_brush() {
        assert_eq!(Ok(()), ensure_ordered(0, 1));
        assert_eq!(Ok(()), ensure_ordered(5, 1_000_000));

        assert_eq!(Err(Error::InvalidArgument { argument: "to", value: 5 }), ensure_ordered(5, 5));
        assert_eq!(Err(Error::InvalidArgument { argument: "to", value: 1 }), ensure_ordered(5, 1));
    }
} // mod tests
