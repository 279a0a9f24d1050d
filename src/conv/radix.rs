use super::{Base, InvalidRadix};
use crate::util::result::ResultExtension;

/// The base used when formatting or parsing an integer, between 2 and 36 inclusive. Digits above 9
/// are represented by the letters `A` to `Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u32);

impl Radix {
    pub const MIN: Radix = Radix(2);
    pub const MAX: Radix = Radix(36);

    pub const BINARY: Radix = Radix(2);
    pub const OCTAL: Radix = Radix(8);
    pub const DECIMAL: Radix = Radix(10);
    pub const HEX: Radix = Radix(16);

    /// Creates a new Radix.
    ///
    /// # Panics
    /// Panics if `radix` is outside of the range 2 to 36.
    pub fn new(radix: u32) -> Radix {
        Radix::try_new(radix).throw()
    }

    /// Creates a new Radix, or returns an [`Err`] if `radix` is outside of the range 2 to 36.
    pub const fn try_new(radix: u32) -> Result<Radix, InvalidRadix> {
        if radix >= Radix::MIN.0 && radix <= Radix::MAX.0 {
            Ok(Radix(radix))
        } else {
            Err(InvalidRadix { radix })
        }
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the upper-case ASCII digit representing `value`, which needs to be less than the
    /// radix.
    pub(crate) fn digit(self, value: u32) -> u8 {
        debug_assert!(value < self.0);
        match char::from_digit(value, self.0) {
            Some(c) => c.to_ascii_uppercase() as u8,
            None => b'?',
        }
    }

    /// Returns the value of the ASCII digit `byte` in this radix, in either case.
    pub(crate) fn digit_value(self, byte: u8) -> Option<u32> {
        (byte as char).to_digit(self.0)
    }
}

impl Default for Radix {
    fn default() -> Self {
        Radix::DECIMAL
    }
}

impl TryFrom<u32> for Radix {
    type Error = InvalidRadix;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Radix::try_new(value)
    }
}

impl From<Radix> for u32 {
    fn from(value: Radix) -> Self {
        value.get()
    }
}

impl From<Base> for Radix {
    fn from(value: Base) -> Self {
        value.radix()
    }
}
