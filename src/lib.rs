#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

mod arena;
pub mod array;
pub mod config;
pub mod error;
pub mod indexed_list;

extern crate alloc;

#[cfg(feature = "std")]
type RandomState = std::hash::RandomState;
#[cfg(not(feature = "std"))]
type RandomState = hashbrown::DefaultHashBuilder;

use core::num::NonZeroU32;

pub use config::Direction;
pub use config::ListConfig;
pub use error::Error;
pub use error::Operation;
pub use indexed_list::IndexedList;
pub use indexed_list::IntoIter;
pub use indexed_list::Iter;
pub use indexed_list::NodeRef;
pub use indexed_list::Position;
pub use indexed_list::Values;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
/// An opaque handle identifying a node inside an [`IndexedList`].
///
/// Handles are **non-generational**: once a node is deleted its handle may be
/// re-used by a later `append` or `prepend`.
///
/// # Examples
///
/// ```
/// use indexed_list::IndexedList;
///
/// let mut list = IndexedList::new();
/// list.append("a");
/// let ptr = list.get(0).unwrap().ptr();
///
/// assert_eq!(list.ptr_get(ptr), Some(&"a"));
/// ```
pub struct Ptr(NonZeroU32);

impl core::fmt::Debug for Ptr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Ptr({})", self.0.get() - 1)
    }
}

impl Ptr {
    pub(crate) fn unchecked_from(index: usize) -> Self {
        debug_assert!(
            index < u32::MAX as usize,
            "Index too large to fit in Ptr: {index}"
        );
        Ptr(NonZeroU32::MIN.saturating_add(index as u32))
    }

    pub(crate) fn unchecked_get(self) -> usize {
        self.0.get() as usize - 1
    }
}
