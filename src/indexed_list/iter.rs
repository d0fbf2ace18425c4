use core::iter::FusedIterator;

use super::IndexedList;
use super::NodeRef;
use crate::Direction;
use crate::Ptr;
use crate::arena::Arena;
use crate::arena::Slot;

fn advance<T>(slot: &Slot<T>, direction: Direction) -> Option<Ptr> {
    match direction {
        Direction::Forward => slot.next(),
        Direction::Backward => slot.prev(),
    }
}

fn ends<T>(list: &IndexedList<T>, direction: Direction) -> (Option<Ptr>, Option<Ptr>) {
    match direction {
        Direction::Forward => (list.head, list.tail),
        Direction::Backward => (list.tail, list.head),
    }
}

/// An iterator over the nodes of an `IndexedList`.
///
/// This struct is created by [`iter`], [`iter_in`] and [`reversed`] on
/// [`IndexedList`]. It walks in the direction it was created with; calling
/// `next_back` walks the opposite way from the other end.
///
/// [`iter`]: IndexedList::iter
/// [`iter_in`]: IndexedList::iter_in
/// [`reversed`]: IndexedList::reversed
///
/// # Examples
///
/// ```
/// use indexed_list::{Direction, IndexedList};
///
/// let list = IndexedList::from([1, 2, 3]);
///
/// let mut iter = list.iter_in(Direction::Backward);
/// assert_eq!(iter.next().map(|node| *node.value()), Some(3));
/// assert_eq!(iter.next_back().map(|node| *node.value()), Some(1));
/// assert_eq!(iter.len(), 1);
/// ```
pub struct Iter<'a, T> {
    nodes: &'a Arena<T>,
    front: Option<Ptr>,
    back: Option<Ptr>,
    remaining: usize,
    len: usize,
    direction: Direction,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(list: &'a IndexedList<T>, direction: Direction) -> Self {
        let (front, back) = ends(list, direction);
        Iter {
            nodes: &list.nodes,
            front,
            back,
            remaining: list.len,
            len: list.len,
            direction,
        }
    }

    /// The direction `next` walks in.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
            len: self.len,
            direction: self.direction,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let ptr = self.front?;
        self.front = advance(self.nodes.links(ptr), self.direction);
        self.remaining -= 1;

        Some(NodeRef::new(self.nodes, ptr, self.len))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let ptr = self.back?;
        self.back = advance(self.nodes.links(ptr), self.direction.reversed());
        self.remaining -= 1;

        Some(NodeRef::new(self.nodes, ptr, self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An iterator over the values of an `IndexedList`.
///
/// This struct is created by [`values`] and [`values_in`] on
/// [`IndexedList`].
///
/// [`values`]: IndexedList::values
/// [`values_in`]: IndexedList::values_in
pub struct Values<'a, T> {
    pub(super) iter: Iter<'a, T>,
}

impl<T> Clone for Values<'_, T> {
    fn clone(&self) -> Self {
        Values {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|node| node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for Values<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|node| node.value())
    }
}

impl<T> ExactSizeIterator for Values<'_, T> {}

impl<T> FusedIterator for Values<'_, T> {}

/// An owning iterator over the values of an `IndexedList`.
///
/// This struct is created by the [`into_iter`] method on [`IndexedList`]
/// (provided by the [`IntoIterator`] trait), which walks in the list's
/// configured direction, or by [`into_iter_in`].
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`into_iter_in`]: IndexedList::into_iter_in
///
/// # Examples
///
/// ```
/// use indexed_list::{Direction, IndexedList};
///
/// let list = IndexedList::from([String::from("a"), String::from("b")]);
/// let owned: Vec<String> = list.into_iter_in(Direction::Backward).collect();
/// assert_eq!(owned, ["b", "a"]);
/// ```
#[derive(Debug)]
pub struct IntoIter<T> {
    nodes: Arena<T>,
    front: Option<Ptr>,
    back: Option<Ptr>,
    remaining: usize,
    direction: Direction,
}

impl<T> IntoIter<T> {
    pub(super) fn new(mut list: IndexedList<T>, direction: Direction) -> Self {
        let (front, back) = ends(&list, direction);
        IntoIter {
            nodes: core::mem::replace(&mut list.nodes, Arena::new()),
            front,
            back,
            remaining: list.len,
            direction,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let ptr = self.front?;
        let slot = self.nodes.free(ptr);
        self.front = advance(&slot, self.direction);
        self.remaining -= 1;

        Some(slot.into_data().value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let ptr = self.back?;
        let slot = self.nodes.free(ptr);
        self.back = advance(&slot, self.direction.reversed());
        self.remaining -= 1;

        Some(slot.into_data().value)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
