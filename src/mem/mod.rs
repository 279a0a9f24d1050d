//! Untyped, byte-granular views over memory, used for reasoning about where ranges sit relative to
//! each other. See [`MemView`].

mod error;
mod mem_view;
mod tests;

pub use error::*;
pub use mem_view::*;
