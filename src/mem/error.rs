use std::error;
use std::fmt::{self, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidView;

impl fmt::Display for InvalidView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation requires a valid MemView!")
    }
}

impl error::Error for InvalidView {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotOverlapping;

impl fmt::Display for NotOverlapping {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Can't merge MemViews which don't overlap!")
    }
}

impl error::Error for NotOverlapping {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum MergeError {
    InvalidView(InvalidView),
    NotOverlapping(NotOverlapping),
}
