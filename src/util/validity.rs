use derive_more::IsVariant;

/// The state shared by every span-like type in this crate. Rather than reserving an address to mark
/// a value as unusable, the distinction is made explicit: an `Invalid` value refers to no memory at
/// all, while a `Valid` value may still be empty.
#[derive(Debug, Default, Clone, Copy, IsVariant)]
pub(crate) enum Validity<S> {
    #[default]
    Invalid,
    Valid(S),
}

use Validity::*;

impl<S> Validity<S> {
    pub fn ok_or<E>(self, error: E) -> Result<S, E> {
        match self {
            Invalid => Err(error),
            Valid(inner) => Ok(inner),
        }
    }
}
