use super::{Radix, ValueTooLarge};
use crate::span::StrSpan;

/// Returns the number of digits required to write `value` in the provided radix.
///
/// # Examples
/// ```
/// # use span_utils::conv::{self, Radix};
/// assert_eq!(conv::formatted_width_uint(0, Radix::DECIMAL), 1);
/// assert_eq!(conv::formatted_width_uint(255, Radix::HEX), 2);
/// assert_eq!(conv::formatted_width_uint(256, Radix::HEX), 3);
/// ```
pub const fn formatted_width_uint(value: u64, radix: Radix) -> usize {
    let radix = radix.get() as u64;
    let mut rem = value / radix;
    let mut width = 1;
    while rem > 0 {
        rem /= radix;
        width += 1;
    }
    width
}

/// Returns the number of bytes required to write `value` in the provided radix, including the sign
/// of negative values in base 10.
pub const fn formatted_width_int(value: i64, radix: Radix) -> usize {
    let digits = formatted_width_uint(value.unsigned_abs(), radix);
    if has_sign(value, radix) {
        digits + 1
    } else {
        digits
    }
}

/// Writes `value` into the front of `dest` using upper-case digits, returning the number of bytes
/// written. Nothing after that is modified.
///
/// If `dest` is [invalid](crate::span::Span::INVALID), nothing is written and the width which
/// would have been required is returned instead.
///
/// # Errors
/// Returns [`ValueTooLarge`] if `dest` is valid, but shorter than the formatted value.
///
/// # Examples
/// ```
/// # use span_utils::conv::{self, Radix};
/// # use span_utils::span::StrSpan;
/// let mut buf = [b'.'; 12];
/// let width = conv::format_uint(4294967295, Radix::DECIMAL, StrSpan::from_array(&mut buf));
/// assert_eq!(width, Ok(10));
/// assert_eq!(&buf, b"4294967295..");
///
/// assert_eq!(conv::format_uint(255, Radix::HEX, StrSpan::INVALID), Ok(2));
/// ```
pub fn format_uint(value: u64, radix: Radix, dest: StrSpan<'_>) -> Result<usize, ValueTooLarge> {
    let width = formatted_width_uint(value, radix);
    let Some(out) = reserve(dest, width)? else {
        return Ok(width);
    };
    write_digits(value, radix, out);
    Ok(width)
}

/// Writes `value` into the front of `dest` using upper-case digits, returning the number of bytes
/// written. A negative value is prefixed by `-` in base 10, while all other bases write its
/// magnitude.
///
/// If `dest` is [invalid](crate::span::Span::INVALID), nothing is written and the width which
/// would have been required is returned instead.
///
/// # Errors
/// Returns [`ValueTooLarge`] if `dest` is valid, but shorter than the formatted value.
pub fn format_int(value: i64, radix: Radix, dest: StrSpan<'_>) -> Result<usize, ValueTooLarge> {
    let width = formatted_width_int(value, radix);
    let Some(out) = reserve(dest, width)? else {
        return Ok(width);
    };
    let digits = if has_sign(value, radix) {
        out[0] = b'-';
        &mut out[1..]
    } else {
        out
    };
    write_digits(value.unsigned_abs(), radix, digits);
    Ok(width)
}

const fn has_sign(value: i64, radix: Radix) -> bool {
    value < 0 && radix.get() == Radix::DECIMAL.get()
}

/// Returns the first `width` bytes of `dest`, [`None`] if it is invalid or an [`Err`] if it is too
/// short.
fn reserve(dest: StrSpan<'_>, width: usize) -> Result<Option<&mut [u8]>, ValueTooLarge> {
    let Ok(out) = dest.try_into_slice() else {
        return Ok(None);
    };
    if width > out.len() {
        return Err(ValueTooLarge {
            required: width,
            available: out.len(),
        });
    }
    Ok(Some(&mut out[..width]))
}

/// Fills `out` with the digits of `value`, which needs to be exactly as wide as `out`.
fn write_digits(mut value: u64, radix: Radix, out: &mut [u8]) {
    let r = radix.get() as u64;
    for byte in out.iter_mut().rev() {
        *byte = radix.digit((value % r) as u32);
        value /= r;
    }
    debug_assert_eq!(value, 0);
}
