//! Non-owning, bounds-checked windows over contiguous memory: [`Span`] for read-write access and
//! [`View`] for read-only access, along with their byte-string forms [`StrSpan`] and [`StrView`].
//!
//! # Purpose
//! Spans and views replace pointer and length parameter pairs with a single value, and keep all
//! bounds checking in one place. Taking elements from either end ([`first`](View::first),
//! [`last`](View::last), [`shrink`](View::shrink)) is checked and panics on a programming error,
//! each of those methods has a `try_` counterpart for callers which would rather handle an [`Err`].
//! Address queries ([`begin`](View::begin), [`end`](View::end) etc.) are plain address arithmetic
//! and aren't checked at all.
//!
//! # Validity
//! Every span and view is either valid or invalid. A valid span refers to a range of memory, which
//! may be empty, while [`Span::INVALID`] and [`View::INVALID`] refer to nothing. This allows a span
//! to double as an optional result without a separate flag, but unlike an [`Option`], an invalid
//! span can still be passed around and queried for its (zero) length.

mod edge;
mod error;
mod span;
mod string;
mod view;

pub use edge::*;
pub use error::*;
pub use span::*;
pub use view::*;

/// A mutable byte string. The content isn't assumed to be nul-terminated, its length is
/// authoritative.
pub type StrSpan<'a> = Span<'a, u8>;

/// A read-only byte string. The content isn't assumed to be nul-terminated, its length is
/// authoritative.
pub type StrView<'a> = View<'a, u8>;
