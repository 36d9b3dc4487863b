pub mod core;
pub mod error;
pub mod convert;
pub mod cmp;
pub mod display;
pub mod index;
pub mod slice;
pub mod iter;
pub mod logic;
pub mod concat;
pub mod reverse;
pub mod search;
pub mod mutate;

#[cfg(test)]
pub mod proptest;

pub use crate::core::{Bits, BitArray, BitsRef};
pub use crate::convert::Source;
pub use crate::error::{Error, Result};
pub use crate::slice::{Span, ResolvedSpan};
