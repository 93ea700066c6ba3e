//! Low-level helpers upon which the bit set implementations are built.

mod check;
mod error;
mod serial;

pub use check::{ensure_index, ensure_ordered, ensure_range};
pub use error::Error;
pub use serial::{parse_bits, render_bits};
