use super::{ArgumentOutOfDomain, IntOverflow, InvalidArgument, ParseIntError, Radix, int_base};
use crate::span::{Edge, StrView};

/// Parses an unsigned integer from the start of `text`, returning its value and the text following
/// its last digit. Parsing stops at the first byte which isn't a digit of the radix, letters are
/// accepted in either case.
///
/// If `radix` is [`None`], it is detected from the numeral's prefix using [`int_base`]. A sign is
/// never accepted.
///
/// # Errors
/// - [`InvalidArgument`] if `text` is empty.
/// - [`ArgumentOutOfDomain`] if `text` doesn't start with at least one digit.
/// - [`IntOverflow`] if the value doesn't fit into a [`u64`].
///
/// # Examples
/// ```
/// # use span_utils::conv::{self, Radix};
/// # use span_utils::span::StrView;
/// let (value, rest) = conv::parse_uint(StrView::from("ff, 10"), Some(Radix::HEX)).unwrap();
/// assert_eq!(value, 255);
/// assert_eq!(rest, *b", 10");
///
/// let (value, _) = conv::parse_uint(StrView::from("017"), None).unwrap();
/// assert_eq!(value, 15);
/// ```
pub fn parse_uint(
    text: StrView<'_>,
    radix: Option<Radix>,
) -> Result<(u64, StrView<'_>), ParseIntError> {
    let (radix, digits) = detect_radix(text, radix)?;
    parse_digits(digits, radix)
}

/// Parses a signed integer from the start of `text`, returning its value and the text following
/// its last digit. A leading `-` negates the value in every radix.
///
/// If `radix` is [`None`], it is detected from the numeral's prefix using [`int_base`], in which
/// case only decimal numerals can be negative.
///
/// # Errors
/// - [`InvalidArgument`] if `text` is empty.
/// - [`ArgumentOutOfDomain`] if `text` doesn't start with at least one digit, after the sign.
/// - [`IntOverflow`] if the value doesn't fit into an [`i64`].
///
/// # Examples
/// ```
/// # use span_utils::conv::{self, Radix};
/// # use span_utils::span::StrView;
/// let (value, rest) = conv::parse_int(StrView::from("-42;"), None).unwrap();
/// assert_eq!(value, -42);
/// assert_eq!(rest, *b";");
/// ```
pub fn parse_int(
    text: StrView<'_>,
    radix: Option<Radix>,
) -> Result<(i64, StrView<'_>), ParseIntError> {
    let (radix, digits) = detect_radix(text, radix)?;
    let (negative, digits) = match digits.as_slice().first() {
        Some(b'-') => (true, digits.shrink(1, Edge::Front)),
        _ => (false, digits),
    };

    let (magnitude, rest) = parse_digits(digits, radix)?;
    let value = if negative {
        0_i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    };
    Ok((value.ok_or(IntOverflow)?, rest))
}

fn detect_radix(
    text: StrView<'_>,
    radix: Option<Radix>,
) -> Result<(Radix, StrView<'_>), ParseIntError> {
    match radix {
        Some(_) if text.is_empty() => Err(InvalidArgument)?,
        Some(radix) => Ok((radix, text)),
        None => {
            let (base, digits) = int_base(text)?;
            Ok((base.radix(), digits))
        }
    }
}

fn parse_digits(digits: StrView<'_>, radix: Radix) -> Result<(u64, StrView<'_>), ParseIntError> {
    let r = radix.get() as u64;
    let mut value: u64 = 0;
    let mut count = 0;

    for &byte in digits.as_slice() {
        let Some(digit) = radix.digit_value(byte) else {
            break;
        };
        value = value
            .checked_mul(r)
            .and_then(|v| v.checked_add(digit as u64))
            .ok_or(IntOverflow)?;
        count += 1;
    }

    if count == 0 {
        Err(ArgumentOutOfDomain)?
    }
    Ok((value, digits.shrink(count, Edge::Front)))
}
