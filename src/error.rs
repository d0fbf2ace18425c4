//! Error types returned by list and range operations.

use core::fmt;

/// Errors produced by [`IndexedList`] and [`reverse_range`].
///
/// [`IndexedList`]: crate::IndexedList
/// [`reverse_range`]: crate::array::reverse_range
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The operation is deliberately not part of the list's contract.
    #[error("unsupported operation: {0}")]
    Unsupported(Operation),
    /// No node is stored at the requested position.
    #[error("no node at position {position} (length {len})")]
    IndexNotFound {
        /// The requested position.
        position: usize,
        /// The list length at the time of the lookup.
        len: usize,
    },
    /// The clamped range is empty or inverted.
    #[error("invalid range specified: start {start} is not before end {end}")]
    InvalidRange {
        /// Clamped start index.
        start: usize,
        /// Clamped, inclusive end index.
        end: usize,
    },
    /// A slice was requested with a step of zero.
    #[error("slice step cannot be zero")]
    ZeroStep,
}

/// The list operations that always fail with [`Error::Unsupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Operation {
    /// In-place sorting.
    Sort,
    /// Removing and returning the last element.
    Pop,
    /// Inserting at an arbitrary position.
    Insert,
    /// Finding the position of a value.
    Index,
    /// Appending every element of an iterator in place.
    Extend,
    /// Counting occurrences of a value.
    Count,
    /// Shallow copy of the list.
    Copy,
    /// Removing every element.
    Clear,
    /// Removing the first occurrence of a value.
    Remove,
    /// Removing a node by handle.
    DeleteNode,
    /// Replacing the value at a position.
    SetItem,
    /// Repetition producing a new list.
    Repeat,
    /// In-place repetition.
    RepeatAssign,
    /// Repetition with the count on the left-hand side.
    ReflectedRepeat,
    /// In-place concatenation.
    ConcatAssign,
}

impl Operation {
    /// A short lowercase name for the operation.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Sort => "sort",
            Operation::Pop => "pop",
            Operation::Insert => "insert",
            Operation::Index => "index",
            Operation::Extend => "extend",
            Operation::Count => "count",
            Operation::Copy => "copy",
            Operation::Clear => "clear",
            Operation::Remove => "remove",
            Operation::DeleteNode => "delete_node",
            Operation::SetItem => "set",
            Operation::Repeat => "repeat",
            Operation::RepeatAssign => "repeat_assign",
            Operation::ReflectedRepeat => "repeat_reflected",
            Operation::ConcatAssign => "concat_assign",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
