//! An intrusive, circular, doubly-linked list. The list is made of [`Link`]s embedded in the
//! records which are part of it, so joining or leaving a list never allocates.
//!
//! # Method
//! There is no separate list type. Any Link can act as the head of a list, in which case it is
//! treated as a sentinel rather than a member: iterating from a head visits every other Link in the
//! chain and stops when it arrives back at the head. A Link which is the only member of its chain
//! points to itself in both directions, which is also how an empty list is represented.
//!
//! The record containing a Link is recovered from it by address arithmetic, using a
//! [`LinkOffset`] created with [`link_offset!`](crate::link_offset).
//!
//! # Safety
//! Links refer to each other by address, so the compiler can't check that they stay where they
//! are. Every operation which follows a link is `unsafe` and relies on the following contract,
//! established when a Link is inserted:
//! - A linked Link must not be moved or dropped until it has been popped.
//! - Links must only be accessed from a single thread (enforced, Link is neither `Send` nor
//!   `Sync`).
//!
//! # Examples
//! ```
//! # use span_utils::link_offset;
//! # use span_utils::linked::Link;
//! struct Task {
//!     id: u32,
//!     link: Link,
//! }
//!
//! let head = Link::new();
//! head.init();
//! let tasks = [Task { id: 1, link: Link::new() }, Task { id: 2, link: Link::new() }];
//!
//! // SAFETY: head and tasks stay in place and outlive every use of the list.
//! unsafe {
//!     for task in &tasks {
//!         task.link.init();
//!         task.link.insert_before(&head);
//!     }
//!
//!     let ids: Vec<u32> = head.iter_entries(link_offset!(Task, link)).map(|t| t.id).collect();
//!     assert_eq!(ids, [1, 2]);
//!     assert_eq!(head.size(), 2);
//! }
//! ```

mod iter;
mod link;
mod offset;
mod tests;

pub use iter::*;
pub use link::*;
pub use offset::*;
