//! Lexicographic comparison and concatenation.
//!
//! Both walk the operands front to back regardless of their configured
//! [`Direction`].

use core::cmp::Ordering;
use core::ops::Add;

use log::trace;

use super::IndexedList;
use crate::Direction;
use crate::ListConfig;

impl<T: PartialEq> PartialEq for IndexedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .values_in(Direction::Forward)
                .eq(other.values_in(Direction::Forward))
    }
}

impl<T: Eq> Eq for IndexedList<T> {}

impl<T: PartialOrd> PartialOrd for IndexedList<T> {
    /// The first unequal pair decides; a strict prefix orders first.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.values_in(Direction::Forward)
            .partial_cmp(other.values_in(Direction::Forward))
    }
}

impl<T: Ord> Ord for IndexedList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.values_in(Direction::Forward)
            .cmp(other.values_in(Direction::Forward))
    }
}

/// Builds a new list from `self` followed by `rhs`, leaving both untouched.
///
/// The result keeps the left operand's direction.
///
/// # Examples
///
/// ```
/// use indexed_list::IndexedList;
///
/// let a = IndexedList::from([1, 2]);
/// let b = IndexedList::from([3, 4]);
/// let c = &a + &b;
///
/// assert_eq!(c.to_string(), "[1, 2, 3, 4]");
/// assert_eq!(a.len(), 2);
/// assert_eq!(b.len(), 2);
/// ```
impl<T: Clone> Add for &IndexedList<T> {
    type Output = IndexedList<T>;

    fn add(self, rhs: Self) -> Self::Output {
        let mut list = IndexedList::with_config(ListConfig {
            direction: self.direction,
            capacity: self.len + rhs.len,
        });
        for value in self
            .values_in(Direction::Forward)
            .chain(rhs.values_in(Direction::Forward))
        {
            list.append(value.clone());
        }

        trace!("concatenated {} + {} nodes", self.len, rhs.len);
        list
    }
}

impl<T> Add for IndexedList<T> {
    type Output = IndexedList<T>;

    fn add(self, rhs: Self) -> Self::Output {
        let mut list = IndexedList::with_config(ListConfig {
            direction: self.direction,
            capacity: self.len + rhs.len,
        });
        for value in self
            .into_iter_in(Direction::Forward)
            .chain(rhs.into_iter_in(Direction::Forward))
        {
            list.append(value);
        }

        trace!("concatenated {} owned nodes", list.len);
        list
    }
}
