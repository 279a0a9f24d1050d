use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// An index that doesn't refer to an element of the span or view it was used with. Invalid spans
/// and views report a length of 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index which was requested.
    pub index: usize,
    /// The number of elements available.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for span with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A request for more elements than a span or view holds, produced when taking or removing a
/// number of elements from one of its ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountOutOfBounds {
    /// The number of elements which were requested.
    pub count: usize,
    /// The number of elements available.
    pub len: usize,
}

impl Display for CountOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Can't take {} elements from span with {} elements!", self.count, self.len)
    }
}

impl Error for CountOutOfBounds {}
