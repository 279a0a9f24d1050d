use std::error;
use std::fmt::{self, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[doc(inline)]
pub use crate::util::error::{CountOutOfBounds, IndexOutOfBounds};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSpan;

impl fmt::Display for InvalidSpan {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation requires a valid span!")
    }
}

impl error::Error for InvalidSpan {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum SpanError {
    InvalidSpan(InvalidSpan),
    CountOutOfBounds(CountOutOfBounds),
}

/// Checks that `count` elements can be taken from a span with `len` elements.
pub(crate) const fn check_count(count: usize, len: usize) -> Result<(), CountOutOfBounds> {
    if count <= len {
        Ok(())
    } else {
        Err(CountOutOfBounds { count, len })
    }
}
