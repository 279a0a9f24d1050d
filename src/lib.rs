//! Low-level building blocks for systems code which works directly with memory: bounds-checked
//! spans and views over contiguous elements, byte-granular memory views, an intrusive linked list
//! and a few helpers for arrays, bits and integer formatting.
//!
//! # Purpose
//! Code written against raw pointers tends to pass a pointer and a length around separately and
//! check bounds (or forget to) at every use. The types here bundle those together and keep the
//! checks in one place, while still exposing the addresses involved when they are needed. None of
//! them own or allocate memory.
//!
//! # Method
//! Every type borrows the memory it describes, so most of the API is safe. Where the compiler
//! can't follow what is going on, the API is `unsafe` and documents its contract: constructing a
//! span from a raw pointer, growing a span past its original bounds and following the links of an
//! intrusive list.
//!
//! Spans and views can be invalid, which is different from empty: an invalid span refers to no
//! memory at all. This allows them to represent the result of a search or an unset field without
//! wrapping them in an [`Option`], while remaining safe to query.
//!
//! # Error Handling
//! Violating a precondition, such as taking more elements than a span holds, is a programming error
//! and panics. Every panicking method has a `try_` counterpart which returns a [`Result`] instead,
//! for callers which can't rule the violation out in advance.
//!
//! Errors which depend on data, like a formatted integer not fitting into its destination, are
//! only ever returned as [`Result`]s. All errors are strongly typed, using enums for static
//! dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error).
//!
//! # Dependencies
//! This crate only depends on `std`, for the formatting and error traits, and on some derive macros
//! because they're helpful and remove the need for some very repetitive programming.
//!
//! # Features
//! Each module can be disabled through a Cargo feature of the same name, all of which are enabled
//! by default. `mem` is part of the `span` feature and `conv` requires `span`.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "array")]
pub mod array;
#[cfg(feature = "bits")]
pub mod bits;
#[cfg(feature = "conv")]
pub mod conv;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "span")]
pub mod mem;
#[cfg(feature = "span")]
pub mod span;

pub(crate) mod util;
