//! Indexed doubly linked list implementation.
//!
//! This module provides the [`IndexedList`] type: a doubly linked chain of
//! nodes stored in an arena, together with an index store mapping every
//! position `0..len` to the node currently occupying it. Appending is O(1);
//! prepending and deleting are O(N) because every following position has to
//! be renumbered.
//!
//! # Examples
//!
//! ```
//! use indexed_list::IndexedList;
//!
//! let mut list = IndexedList::new();
//! list.append(3);
//! list.prepend(4);
//! list.append(8);
//!
//! assert_eq!(list.to_string(), "[4, 3, 8]");
//! assert_eq!(*list.get(1).unwrap().value(), 3);
//! ```

use alloc::vec::Vec;
use core::fmt;
use core::ops::Bound;
use core::ops::Index;
use core::ops::RangeBounds;

use hashbrown::HashMap;
use log::debug;
use log::trace;

use crate::Direction;
use crate::Error;
use crate::ListConfig;
use crate::Ptr;
use crate::RandomState;
use crate::arena::Arena;

mod iter;
mod node;
mod ops;
mod unsupported;

pub use iter::IntoIter;
pub use iter::Iter;
pub use iter::Values;
pub use node::NodeRef;
pub use node::Position;

/// A doubly linked list that keeps a position index in lockstep with its
/// chain.
///
/// Nodes live in an arena and refer to their neighbours by [`Ptr`] handles.
/// Alongside the chain the list owns an index store mapping each position
/// `0..len` to its node, so [`get`] is a single lookup while the chain keeps
/// O(1) appends.
///
/// The iteration order used by [`iter`], [`values`], `Display` and
/// `into_iter` is fixed by the list's [`Direction`]. Comparisons and
/// concatenation always walk the lists front to back.
///
/// # Examples
///
/// ```
/// use indexed_list::{Direction, IndexedList};
///
/// let mut list = IndexedList::new();
/// list.append(2);
/// list.append(6);
/// list.prepend(7);
///
/// let forward: Vec<_> = list.values().copied().collect();
/// assert_eq!(forward, [7, 2, 6]);
///
/// let list = list.with_direction(Direction::Backward);
/// let backward: Vec<_> = list.values().copied().collect();
/// assert_eq!(backward, [6, 2, 7]);
/// ```
///
/// [`get`]: IndexedList::get
/// [`iter`]: IndexedList::iter
/// [`values`]: IndexedList::values
pub struct IndexedList<T> {
    head: Option<Ptr>,
    tail: Option<Ptr>,
    len: usize,
    nodes: Arena<T>,
    index_store: HashMap<usize, Ptr, RandomState>,
    direction: Direction,
}

impl<T> Default for IndexedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for IndexedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = Vec::with_capacity(self.len);
        for node in self.iter_in(Direction::Forward) {
            entries.push((node.position().from_start, node.value()));
        }

        f.debug_struct("IndexedList")
            .field("len", &self.len)
            .field("direction", &self.direction)
            .field("entries", &entries)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for IndexedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.values().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T> IndexedList<T> {
    /// Creates an empty list that iterates forward.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::IndexedList;
    ///
    /// let list: IndexedList<i32> = IndexedList::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_config(ListConfig::default())
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(ListConfig {
            capacity,
            ..ListConfig::default()
        })
    }

    /// Creates an empty list from a [`ListConfig`].
    pub fn with_config(config: ListConfig) -> Self {
        IndexedList {
            head: None,
            tail: None,
            len: 0,
            nodes: Arena::with_capacity(config.capacity),
            index_store: HashMap::with_capacity_and_hasher(config.capacity, RandomState::default()),
            direction: config.direction,
        }
    }

    /// Returns the list with its default iteration order set to `direction`.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::{Direction, IndexedList};
    ///
    /// let list = IndexedList::from([1, 2, 3]).with_direction(Direction::Backward);
    /// assert_eq!(list.direction(), Direction::Backward);
    /// assert_eq!(list.to_string(), "[3, 2, 1]");
    /// ```
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// The default iteration order of this list.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the number of nodes in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::IndexedList;
    ///
    /// let mut list = IndexedList::new();
    /// assert_eq!(list.len(), 0);
    /// list.append("a");
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `value` at the end of the list.
    ///
    /// Only the tail links, the counter and one index-store entry change, so
    /// this is O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::IndexedList;
    ///
    /// let mut list = IndexedList::new();
    /// list.append(1);
    /// list.append(2);
    ///
    /// assert_eq!(*list.get(list.len() - 1).unwrap().value(), 2);
    /// ```
    pub fn append(&mut self, value: T) {
        let position = self.len;
        let ptr = self.nodes.alloc(value, position, self.tail, None);
        match self.tail {
            Some(tail) => *self.nodes.links_mut(tail).next_mut() = Some(ptr),
            None => self.head = Some(ptr),
        }
        self.tail = Some(ptr);
        self.index_store.insert(position, ptr);
        self.len += 1;

        trace!("appended {ptr:?} at position {position}");
    }

    /// Adds `value` at the front of the list.
    ///
    /// Every existing node moves up one position and its index-store slot is
    /// rewritten, so this is O(N).
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::IndexedList;
    ///
    /// let mut list = IndexedList::from([2, 3]);
    /// list.prepend(1);
    ///
    /// assert_eq!(*list.get(0).unwrap().value(), 1);
    /// assert_eq!(list.get(2).unwrap().position().from_start, 2);
    /// ```
    pub fn prepend(&mut self, value: T) {
        let ptr = self.nodes.alloc(value, 0, None, self.head);
        match self.head {
            Some(head) => *self.nodes.links_mut(head).prev_mut() = Some(ptr),
            None => self.tail = Some(ptr),
        }
        self.head = Some(ptr);
        self.len += 1;
        self.renumber_from(Some(ptr), 0);

        trace!("prepended {ptr:?}, renumbered {} positions", self.len);
    }

    /// Removes the node at `position` and returns its value.
    ///
    /// The node is found by walking the chain from the front. Every node after
    /// it moves down one position. If no node occupies `position` the list is
    /// left untouched and `None` is returned; this is not an error, unlike
    /// [`get`].
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::IndexedList;
    ///
    /// let mut list = IndexedList::from([1, 2, 3, 4]);
    /// assert_eq!(list.delete(1), Some(2));
    /// assert_eq!(*list.get(1).unwrap().value(), 3);
    ///
    /// assert_eq!(list.delete(10), None);
    /// assert_eq!(list.len(), 3);
    /// ```
    ///
    /// [`get`]: IndexedList::get
    pub fn delete(&mut self, position: usize) -> Option<T> {
        let Some(ptr) = self.scan_for(position) else {
            debug!(
                "delete: no node at position {position} (length {}), ignoring",
                self.len
            );
            return None;
        };

        let slot = self.nodes.free(ptr);
        let prev = slot.prev();
        let next = slot.next();
        match prev {
            Some(prev) => *self.nodes.links_mut(prev).next_mut() = next,
            None => self.head = next,
        }
        match next {
            Some(next) => *self.nodes.links_mut(next).prev_mut() = prev,
            None => self.tail = prev,
        }

        self.len -= 1;
        self.renumber_from(next, position);
        self.index_store.remove(&self.len);

        trace!("deleted {ptr:?} from position {position}");
        Some(slot.into_data().value)
    }

    /// Reverses the chain in place.
    ///
    /// Each node's links are swapped in a single pass, during which positions
    /// and the index store are re-derived, so lookups remain valid afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::IndexedList;
    ///
    /// let mut list = IndexedList::from([1, 2, 3]);
    /// list.reverse();
    ///
    /// assert_eq!(list.to_string(), "[3, 2, 1]");
    /// assert_eq!(*list.get(0).unwrap().value(), 3);
    /// ```
    pub fn reverse(&mut self) {
        let last = self.len.saturating_sub(1);
        let mut cursor = self.head;
        let mut old_position = 0;
        while let Some(ptr) = cursor {
            let links = self.nodes.links_mut(ptr);
            cursor = links.next();
            links.flip();

            let position = last - old_position;
            self.nodes[ptr].position = position;
            self.index_store.insert(position, ptr);
            old_position += 1;
        }
        core::mem::swap(&mut self.head, &mut self.tail);

        trace!("reversed {} nodes", self.len);
    }

    /// Returns the node stored at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexNotFound`] if `position` is not in the index
    /// store, i.e. `position >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::{Error, IndexedList};
    ///
    /// let list = IndexedList::from(["a", "b"]);
    /// assert_eq!(*list.get(1).unwrap().value(), "b");
    /// assert_eq!(
    ///     list.get(2).unwrap_err(),
    ///     Error::IndexNotFound { position: 2, len: 2 }
    /// );
    /// ```
    pub fn get(&self, position: usize) -> Result<NodeRef<'_, T>, Error> {
        self.index_store
            .get(&position)
            .map(|&ptr| NodeRef::new(&self.nodes, ptr, self.len))
            .ok_or(Error::IndexNotFound {
                position,
                len: self.len,
            })
    }

    /// Returns the value behind `ptr`, or `None` if the node was deleted.
    pub fn ptr_get(&self, ptr: Ptr) -> Option<&T> {
        self.nodes
            .is_occupied(ptr)
            .then(|| &self.nodes[ptr].value)
    }

    /// The node at position 0.
    pub fn first(&self) -> Option<NodeRef<'_, T>> {
        self.head.map(|ptr| NodeRef::new(&self.nodes, ptr, self.len))
    }

    /// The node at position `len - 1`.
    pub fn last(&self) -> Option<NodeRef<'_, T>> {
        self.tail.map(|ptr| NodeRef::new(&self.nodes, ptr, self.len))
    }

    /// Returns an iterator over the nodes in the list's configured direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::IndexedList;
    ///
    /// let list = IndexedList::from([1, 2, 3]);
    /// let positions: Vec<_> = list.iter().map(|node| node.position().from_start).collect();
    /// assert_eq!(positions, [0, 1, 2]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        self.iter_in(self.direction)
    }

    /// Returns an iterator over the nodes in an explicit direction.
    pub fn iter_in(&self, direction: Direction) -> Iter<'_, T> {
        Iter::new(self, direction)
    }

    /// Returns an iterator over the nodes opposite to the configured
    /// direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::{Direction, IndexedList};
    ///
    /// let list = IndexedList::from([1, 2, 3]);
    /// let values: Vec<_> = list.reversed().map(|node| *node.value()).collect();
    /// assert_eq!(values, [3, 2, 1]);
    ///
    /// let list = list.with_direction(Direction::Backward);
    /// let values: Vec<_> = list.reversed().map(|node| *node.value()).collect();
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    pub fn reversed(&self) -> Iter<'_, T> {
        self.iter_in(self.direction.reversed())
    }

    /// Returns an iterator over the values in the configured direction.
    pub fn values(&self) -> Values<'_, T> {
        self.values_in(self.direction)
    }

    /// Returns an iterator over the values in an explicit direction.
    pub fn values_in(&self, direction: Direction) -> Values<'_, T> {
        Values {
            iter: self.iter_in(direction),
        }
    }

    /// Pairs every node with its stored position, in the configured
    /// direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::{Direction, IndexedList};
    ///
    /// let list = IndexedList::from(['a', 'b']).with_direction(Direction::Backward);
    /// let pairs: Vec<_> = list.enumerate().map(|(i, node)| (i, *node.value())).collect();
    /// assert_eq!(pairs, [(1, 'b'), (0, 'a')]);
    /// ```
    pub fn enumerate(
        &self,
    ) -> impl DoubleEndedIterator<Item = (usize, NodeRef<'_, T>)> + ExactSizeIterator {
        self.iter().map(|node| (node.position().from_start, node))
    }

    /// Consumes the list, yielding its values in an explicit direction.
    pub fn into_iter_in(self, direction: Direction) -> IntoIter<T> {
        IntoIter::new(self, direction)
    }

    /// Returns `true` if any node holds a value equal to `value`.
    ///
    /// This is a linear scan from the front.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::IndexedList;
    ///
    /// let list = IndexedList::from([10, 20, 30]);
    /// assert!(list.contains(&20));
    /// assert!(!list.contains(&40));
    ///
    /// // A node is looked up through its value.
    /// let node = list.get(2).unwrap();
    /// assert!(list.contains(node.value()));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.values_in(Direction::Forward).any(|v| v == value)
    }

    /// Copies the positions selected by `range` and `step` into a new list.
    ///
    /// A start bound outside `0..len` is treated as `0` and an end bound
    /// outside `0..len` is treated as `len`, so out-of-range requests clamp
    /// instead of failing. The new list keeps this list's direction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroStep`] if `step` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::IndexedList;
    ///
    /// let list: IndexedList<_> = (0..10).collect();
    ///
    /// assert_eq!(list.slice(1..4, 1).unwrap().to_string(), "[1, 2, 3]");
    /// assert_eq!(list.slice(.., 2).unwrap().to_string(), "[0, 2, 4, 6, 8]");
    /// assert_eq!(list.slice(5..20, 1).unwrap().to_string(), "[5, 6, 7, 8, 9]");
    /// ```
    pub fn slice<R>(&self, range: R, step: usize) -> Result<Self, Error>
    where
        R: RangeBounds<usize>,
        T: Clone,
    {
        if step == 0 {
            return Err(Error::ZeroStep);
        }

        let start = match range.start_bound() {
            Bound::Included(&start) => Some(start),
            Bound::Excluded(&start) => start.checked_add(1),
            Bound::Unbounded => None,
        }
        .filter(|&start| start < self.len)
        .unwrap_or(0);
        let stop = match range.end_bound() {
            Bound::Included(&end) => end.checked_add(1),
            Bound::Excluded(&end) => Some(end),
            Bound::Unbounded => None,
        }
        .filter(|&stop| stop < self.len)
        .unwrap_or(self.len);

        let mut list = Self::with_config(ListConfig {
            direction: self.direction,
            capacity: stop.saturating_sub(start).div_ceil(step),
        });
        for position in (start..stop).step_by(step) {
            if let Some(&ptr) = self.index_store.get(&position) {
                list.append(self.nodes[ptr].value.clone());
            }
        }

        Ok(list)
    }

    fn scan_for(&self, position: usize) -> Option<Ptr> {
        self.iter_in(Direction::Forward)
            .find(|node| node.position().from_start == position)
            .map(|node| node.ptr())
    }

    /// Walks from `start` to the tail, assigning consecutive positions
    /// beginning at `position` and rewriting their index-store slots.
    fn renumber_from(&mut self, start: Option<Ptr>, mut position: usize) {
        let mut cursor = start;
        while let Some(ptr) = cursor {
            self.nodes[ptr].position = position;
            self.index_store.insert(position, ptr);
            position += 1;
            cursor = self.nodes.links(ptr).next();
        }
    }
}

impl<T> Index<usize> for IndexedList<T> {
    type Output = T;

    fn index(&self, position: usize) -> &Self::Output {
        match self.get(position) {
            Ok(node) => node.value(),
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> FromIterator<T> for IndexedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        for value in iter {
            list.append(value);
        }
        list
    }
}

impl<T, const N: usize> From<[T; N]> for IndexedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for IndexedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for IndexedList<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        let direction = self.direction;
        IntoIter::new(self, direction)
    }
}

impl<'a, T> IntoIterator for &'a IndexedList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = NodeRef<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(all(test, feature = "std"))]
mod proptests {
    use std::collections::VecDeque;

    use proptest::prelude::*;

    use super::IndexedList;
    use super::tests::assert_consistent;

    #[derive(Clone, Debug)]
    enum Mutation {
        Append(u32),
        Prepend(u32),
        Delete(usize),
        Reverse,
    }

    fn mutation() -> impl Strategy<Value = Mutation> {
        prop_oneof![
            3 => any::<u32>().prop_map(Mutation::Append),
            2 => any::<u32>().prop_map(Mutation::Prepend),
            2 => (0..48usize).prop_map(Mutation::Delete),
            1 => Just(Mutation::Reverse),
        ]
    }

    proptest! {
        #[test]
        fn test_mixed_mutations_keep_invariants(
            mutations in prop::collection::vec(mutation(), 0..300)
        ) {
            let mut list = IndexedList::new();
            let mut model = VecDeque::new();

            for mutation in mutations {
                match mutation {
                    Mutation::Append(value) => {
                        list.append(value);
                        model.push_back(value);
                    }
                    Mutation::Prepend(value) => {
                        list.prepend(value);
                        model.push_front(value);
                    }
                    Mutation::Delete(position) => {
                        prop_assert_eq!(list.delete(position), model.remove(position));
                    }
                    Mutation::Reverse => {
                        list.reverse();
                        model.make_contiguous().reverse();
                    }
                }

                assert_consistent(&list);
                prop_assert_eq!(list.len(), model.len());
                prop_assert!(list.values().eq(model.iter()));
            }
        }
    }
}
