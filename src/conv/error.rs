use std::error;
use std::fmt::{self, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A formatted value which doesn't fit into the destination it was written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueTooLarge {
    pub required: usize,
    pub available: usize,
}

impl fmt::Display for ValueTooLarge {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Formatted value requires {} bytes, but only {} are available!",
            self.required, self.available
        )
    }
}

impl error::Error for ValueTooLarge {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidArgument;

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Can't read a numeral from empty text!")
    }
}

impl error::Error for InvalidArgument {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentOutOfDomain;

impl fmt::Display for ArgumentOutOfDomain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Text doesn't start with a numeral!")
    }
}

impl error::Error for ArgumentOutOfDomain {}

/// A parsed numeral which is too large for the integer type it was parsed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntOverflow;

impl fmt::Display for IntOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Numeral is out of range for the target type!")
    }
}

impl error::Error for IntOverflow {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRadix {
    pub radix: u32,
}

impl fmt::Display for InvalidRadix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Radix {} is outside of the range 2 to 36!", self.radix)
    }
}

impl error::Error for InvalidRadix {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum IntBaseError {
    InvalidArgument(InvalidArgument),
    ArgumentOutOfDomain(ArgumentOutOfDomain),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum ParseIntError {
    InvalidArgument(InvalidArgument),
    ArgumentOutOfDomain(ArgumentOutOfDomain),
    IntOverflow(IntOverflow),
}

impl From<IntBaseError> for ParseIntError {
    fn from(value: IntBaseError) -> Self {
        match value {
            IntBaseError::InvalidArgument(e) => e.into(),
            IntBaseError::ArgumentOutOfDomain(e) => e.into(),
        }
    }
}
