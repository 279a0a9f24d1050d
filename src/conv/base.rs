use derive_more::IsVariant;

use super::{ArgumentOutOfDomain, IntBaseError, InvalidArgument, Radix};
use crate::span::{Edge, StrView};

/// The base of an integer literal, as indicated by its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Base {
    /// `0b` or `0B`.
    Binary,
    /// `0o`, `0O`, or a leading `0` followed by another digit.
    Octal,
    /// No prefix.
    Decimal,
    /// `0x` or `0X`.
    Hex,
}

impl Base {
    pub const fn radix(self) -> Radix {
        match self {
            Base::Binary => Radix::BINARY,
            Base::Octal => Radix::OCTAL,
            Base::Decimal => Radix::DECIMAL,
            Base::Hex => Radix::HEX,
        }
    }
}

/// Classifies the numeral at the start of `text` by its prefix, returning its [`Base`] and the
/// digits following the prefix.
///
/// A letter prefix is only recognized if it is followed by a digit of its base, otherwise the
/// leading `0` is read as a decimal numeral by itself. A leading `-` is classified as decimal and
/// kept in the returned digits. An invalid View is treated as empty.
///
/// # Errors
/// - [`InvalidArgument`] if `text` is empty.
/// - [`ArgumentOutOfDomain`] if `text` doesn't start with a digit or a `-` followed by a digit.
///
/// # Examples
/// ```
/// # use span_utils::conv::{self, Base};
/// # use span_utils::span::StrView;
/// let (base, digits) = conv::int_base(StrView::from("0x1A")).unwrap();
/// assert_eq!(base, Base::Hex);
/// assert_eq!(digits, *b"1A");
///
/// assert!(conv::int_base(StrView::from("")).unwrap_err().is_invalid_argument());
/// assert!(conv::int_base(StrView::from("abc")).unwrap_err().is_argument_out_of_domain());
/// ```
pub fn int_base(text: StrView<'_>) -> Result<(Base, StrView<'_>), IntBaseError> {
    let (base, prefix) = match text.as_slice() {
        [] => Err(InvalidArgument)?,
        [b'0', b'x' | b'X', d, ..] if d.is_ascii_hexdigit() => (Base::Hex, 2),
        [b'0', b'b' | b'B', b'0' | b'1', ..] => (Base::Binary, 2),
        [b'0', b'o' | b'O', b'0'..=b'7', ..] => (Base::Octal, 2),
        [b'0', d, ..] if d.is_ascii_digit() => (Base::Octal, 1),
        [d, ..] if d.is_ascii_digit() => (Base::Decimal, 0),
        [b'-', d, ..] if d.is_ascii_digit() => (Base::Decimal, 0),
        _ => Err(ArgumentOutOfDomain)?,
    };
    Ok((base, text.shrink(prefix, Edge::Front)))
}
