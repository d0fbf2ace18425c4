use core::fmt;

use crate::Ptr;
use crate::arena::Arena;

/// Where a node sits in its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Offset from the first node.
    pub from_start: usize,
    /// Offset from the last node.
    pub from_end: usize,
}

/// A read-only view of one node of an [`IndexedList`].
///
/// Returned by [`get`], [`first`], [`last`] and the list iterators. The view
/// borrows the list, so it cannot outlive a mutation.
///
/// # Examples
///
/// ```
/// use indexed_list::IndexedList;
///
/// let list = IndexedList::from([4, 3, 8]);
/// let node = list.get(1).unwrap();
///
/// assert_eq!(*node.value(), 3);
/// assert_eq!(node.position().from_start, 1);
/// assert_eq!(node.position().from_end, 1);
/// assert_eq!(node.prev().map(|n| *n.value()), Some(4));
/// assert_eq!(node.next().map(|n| *n.value()), Some(8));
/// ```
///
/// [`IndexedList`]: crate::IndexedList
/// [`get`]: crate::IndexedList::get
/// [`first`]: crate::IndexedList::first
/// [`last`]: crate::IndexedList::last
pub struct NodeRef<'a, T> {
    nodes: &'a Arena<T>,
    ptr: Ptr,
    len: usize,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<T>, ptr: Ptr, len: usize) -> Self {
        NodeRef { nodes, ptr, len }
    }

    /// The value stored in the node.
    pub fn value(&self) -> &'a T {
        &self.nodes[self.ptr].value
    }

    /// The node's handle.
    pub fn ptr(&self) -> Ptr {
        self.ptr
    }

    /// The node's offsets from both ends of the list.
    pub fn position(&self) -> Position {
        let from_start = self.nodes[self.ptr].position;
        Position {
            from_start,
            from_end: self.len - 1 - from_start,
        }
    }

    /// The node before this one, if any.
    pub fn prev(&self) -> Option<NodeRef<'a, T>> {
        self.nodes
            .links(self.ptr)
            .prev()
            .map(|ptr| NodeRef::new(self.nodes, ptr, self.len))
    }

    /// The node after this one, if any.
    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        self.nodes
            .links(self.ptr)
            .next()
            .map(|ptr| NodeRef::new(self.nodes, ptr, self.len))
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("ptr", &self.ptr)
            .field("position", &self.position().from_start)
            .field("value", self.value())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::IndexedList;

    #[test]
    fn test_position_from_both_ends() {
        let list = IndexedList::from(['a', 'b', 'c', 'd']);
        for (i, node) in list.iter().enumerate() {
            let position = node.position();
            assert_eq!(position.from_start, i);
            assert_eq!(position.from_end, 3 - i);
        }
    }

    #[test]
    fn test_links_are_symmetric() {
        let list = IndexedList::from([1, 2, 3, 4]);
        for node in list.iter() {
            if let Some(prev) = node.prev() {
                assert_eq!(prev.next().map(|n| n.ptr()), Some(node.ptr()));
            }
            if let Some(next) = node.next() {
                assert_eq!(next.prev().map(|n| n.ptr()), Some(node.ptr()));
            }
        }
        assert!(list.first().unwrap().prev().is_none());
        assert!(list.last().unwrap().next().is_none());
    }

    #[test]
    fn test_links_follow_reverse() {
        let mut list = IndexedList::from([1, 2, 3]);
        list.reverse();

        let first = list.first().unwrap();
        assert_eq!(*first.value(), 3);
        assert_eq!(first.next().map(|n| *n.value()), Some(2));
        assert_eq!(list.last().unwrap().prev().map(|n| *n.value()), Some(2));
    }

    #[test]
    fn test_debug() {
        let list = IndexedList::from([7]);
        let node = list.get(0).unwrap();
        assert_eq!(
            format!("{node:?}"),
            "NodeRef { ptr: Ptr(0), position: 0, value: 7 }"
        );
    }
}
