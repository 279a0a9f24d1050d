use std::ffi::{CStr, c_char};
use std::fmt::{self, Display, Formatter};
use std::str::{self, Utf8Error};

use super::{Span, View};

impl<'a> View<'a, u8> {
    /// Creates a View over a nul-terminated C string. The terminator isn't part of the View.
    ///
    /// # Panics
    /// Panics if `ptr` is null.
    ///
    /// # Safety
    /// `ptr` needs to satisfy the requirements of [`CStr::from_ptr`] for the lifetime `'a`.
    pub unsafe fn from_nul_terminated(ptr: *const c_char) -> View<'a, u8> {
        assert!(!ptr.is_null(), "Can't create a view from a null C string!");
        // SAFETY: ptr is non-null and the caller upholds the remaining requirements.
        View::from_cstr(unsafe { CStr::from_ptr(ptr) })
    }

    /// Creates a View over the bytes of a C string, without its terminator.
    pub fn from_cstr(cstr: &'a CStr) -> View<'a, u8> {
        View::new(cstr.to_bytes())
    }

    /// Returns true if the View begins with `prefix`. An empty prefix is never matched.
    ///
    /// # Examples
    /// ```
    /// # use span_utils::span::StrView;
    /// let hello = StrView::from("hello");
    /// assert!(hello.starts_with("he".into()));
    /// assert!(!hello.starts_with("".into()));
    /// assert!(!StrView::from("hi").starts_with(hello));
    /// ```
    pub fn starts_with(&self, prefix: View<'_, u8>) -> bool {
        !prefix.is_empty() && prefix.len() <= self.len() && self.first(prefix.len()) == prefix
    }

    /// Returns true if the View ends with `suffix`. An empty suffix is never matched.
    pub fn ends_with(&self, suffix: View<'_, u8>) -> bool {
        !suffix.is_empty() && suffix.len() <= self.len() && self.last(suffix.len()) == suffix
    }

    /// Returns the offset of the first occurrence of `needle` in the View. An empty needle is
    /// never found.
    ///
    /// # Examples
    /// ```
    /// # use span_utils::span::StrView;
    /// let text = StrView::from("one two two");
    /// assert_eq!(text.find_str("two".into()), Some(4));
    /// assert_eq!(text.find_str("three".into()), None);
    /// ```
    pub fn find_str(&self, needle: View<'_, u8>) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        self.as_slice().windows(needle.len()).position(|window| window == needle.as_slice())
    }

    /// Interprets the View as UTF-8 text.
    pub fn to_str(&self) -> Result<&'a str, Utf8Error> {
        str::from_utf8(self.as_slice())
    }
}

impl<'a> Span<'a, u8> {
    /// Creates a Span over a mutable nul-terminated C string. The terminator isn't part of the
    /// Span, so writing to every element never removes it.
    ///
    /// # Panics
    /// Panics if `ptr` is null.
    ///
    /// # Safety
    /// `ptr` needs to satisfy the requirements of [`CStr::from_ptr`] for the lifetime `'a`, and no
    /// other references to the string may exist during `'a`.
    pub unsafe fn from_nul_terminated(ptr: *mut c_char) -> Span<'a, u8> {
        assert!(!ptr.is_null(), "Can't create a span from a null C string!");
        // SAFETY: ptr is non-null and points to a nul-terminated string.
        let len = unsafe { CStr::from_ptr(ptr) }.count_bytes();
        // SAFETY: All len bytes before the terminator belong to the string, which the caller
        // guarantees exclusive access to.
        unsafe { Span::from_raw_parts(ptr.cast(), len) }
    }

    /// Returns true if the Span begins with `prefix`. An empty prefix is never matched.
    pub fn starts_with(&self, prefix: View<'_, u8>) -> bool {
        self.as_view().starts_with(prefix)
    }

    /// Returns true if the Span ends with `suffix`. An empty suffix is never matched.
    pub fn ends_with(&self, suffix: View<'_, u8>) -> bool {
        self.as_view().ends_with(suffix)
    }

    /// Returns the offset of the first occurrence of `needle` in the Span.
    pub fn find_str(&self, needle: View<'_, u8>) -> Option<usize> {
        self.as_view().find_str(needle)
    }

    /// Interprets the Span as UTF-8 text.
    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        str::from_utf8(self.as_slice())
    }
}

impl<'a> From<&'a str> for View<'a, u8> {
    fn from(value: &'a str) -> Self {
        View::new(value.as_bytes())
    }
}

impl<'a> From<&'a CStr> for View<'a, u8> {
    fn from(value: &'a CStr) -> Self {
        View::from_cstr(value)
    }
}

impl Display for View<'_, u8> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for chunk in self.as_slice().utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_str("\u{FFFD}")?;
            }
        }
        Ok(())
    }
}

impl Display for Span<'_, u8> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_view(), f)
    }
}
