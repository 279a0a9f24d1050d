//! Conversions between integers and their textual representation, written into and read from
//! [`StrSpan`](crate::span::StrSpan)s and [`StrView`](crate::span::StrView)s rather than allocated
//! strings.
//!
//! Formatting writes upper-case digits in any [`Radix`] from 2 to 36. A negative value only gets a
//! `-` sign in base 10, in every other base its magnitude is written instead. Parsing can detect
//! the base of a numeral from its prefix, see [`int_base`].
//!
//! # Examples
//! ```
//! # use span_utils::conv::{self, Radix};
//! # use span_utils::span::{StrSpan, StrView};
//! let mut buf = [0_u8; 8];
//! let width = conv::format_uint(255, Radix::HEX, StrSpan::from_array(&mut buf)).unwrap();
//! assert_eq!(&buf[..width], b"FF");
//!
//! let (value, rest) = conv::parse_uint(StrView::from("0x1Az"), None).unwrap();
//! assert_eq!(value, 26);
//! assert_eq!(rest, *b"z");
//! ```

mod base;
mod error;
mod format;
mod parse;
mod radix;

pub use base::*;
pub use error::*;
pub use format::*;
pub use parse::*;
pub use radix::*;
