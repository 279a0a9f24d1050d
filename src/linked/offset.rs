use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;

use super::Link;

/// The byte offset of a [`Link`] field within a record of type `P`, used to get from a Link back
/// to the record containing it.
///
/// Use [`link_offset!`](crate::link_offset) to create one, which checks that the named field is a
/// Link.
pub struct LinkOffset<P> {
    pub(crate) offset: usize,
    pub(crate) _phantom: PhantomData<fn() -> P>,
}

impl<P> LinkOffset<P> {
    /// Creates a new LinkOffset from a raw byte offset.
    ///
    /// # Panics
    /// Panics if a Link at `offset` wouldn't fit inside of a `P`.
    pub const fn new(offset: usize) -> LinkOffset<P> {
        assert!(
            offset <= mem::size_of::<P>() && mem::size_of::<P>() - offset >= mem::size_of::<Link>(),
            "Link offset is outside of the parent type!"
        );
        LinkOffset {
            offset,
            _phantom: PhantomData,
        }
    }

    /// Returns the offset in bytes.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns a pointer to the record which would contain `link`. The pointer is only valid to
    /// dereference if `link` actually is embedded in a `P` at this offset.
    pub fn entry_ptr(&self, link: &Link) -> *const P {
        (link as *const Link).wrapping_byte_sub(self.offset).cast()
    }

    /// Returns a reference to the record containing `link`.
    ///
    /// # Safety
    /// `link` needs to be a field of a valid `P`, at the position described by this offset.
    pub unsafe fn entry<'a>(&self, link: &'a Link) -> &'a P {
        // SAFETY: The caller guarantees that link is part of a P, so the pointer is in bounds of
        // that P and properly aligned.
        unsafe { &*self.entry_ptr(link) }
    }
}

impl<P> Clone for LinkOffset<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for LinkOffset<P> {}

impl<P> Debug for LinkOffset<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LinkOffset").field(&self.offset).finish()
    }
}

/// Creates a [`LinkOffset`] for the named [`Link`] field of a struct. Fails to compile if the
/// field isn't a Link.
///
/// # Examples
/// ```
/// # use span_utils::link_offset;
/// # use span_utils::linked::Link;
/// struct Timer {
///     deadline: u64,
///     link: Link,
/// }
///
/// let offset = link_offset!(Timer, link);
/// assert_eq!(offset.offset(), std::mem::offset_of!(Timer, link));
/// ```
#[macro_export]
macro_rules! link_offset {
    ($parent:ty, $field:ident) => {{
        let _: fn(&$parent) -> &$crate::linked::Link = |parent| &parent.$field;
        $crate::linked::LinkOffset::<$parent>::new(::core::mem::offset_of!($parent, $field))
    }};
}

/// Returns a reference to the struct containing the given [`Link`] as the named field. This needs
/// to be called from within an unsafe block, with the requirements of [`LinkOffset::entry`].
///
/// # Examples
/// ```
/// # use span_utils::entry;
/// # use span_utils::linked::Link;
/// struct Timer {
///     deadline: u64,
///     link: Link,
/// }
///
/// let timer = Timer { deadline: 30, link: Link::new() };
/// // SAFETY: The link is a field of timer.
/// let parent = unsafe { entry!(&timer.link, Timer, link) };
/// assert_eq!(parent.deadline, 30);
/// ```
#[macro_export]
macro_rules! entry {
    ($link:expr, $parent:ty, $field:ident) => {
        $crate::link_offset!($parent, $field).entry($link)
    };
}
