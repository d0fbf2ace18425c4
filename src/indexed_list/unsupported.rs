//! Operations that are deliberately outside the list's contract.
//!
//! Each method exists so callers get an explicit [`Error::Unsupported`]
//! instead of a silently different behaviour. None of them touch the list.

use log::debug;

use super::IndexedList;
use crate::Error;
use crate::Operation;
use crate::Ptr;

fn reject<R>(operation: Operation) -> Result<R, Error> {
    debug!("rejected unsupported operation `{operation}`");
    Err(Error::Unsupported(operation))
}

impl<T> IndexedList<T> {
    /// Always fails with [`Operation::Sort`].
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::{Error, IndexedList, Operation};
    ///
    /// let mut list = IndexedList::from([3, 1, 2]);
    /// assert_eq!(list.sort(), Err(Error::Unsupported(Operation::Sort)));
    /// assert_eq!(list.to_string(), "[3, 1, 2]");
    /// ```
    pub fn sort(&mut self) -> Result<(), Error> {
        reject(Operation::Sort)
    }

    /// Always fails with [`Operation::Pop`].
    pub fn pop(&mut self) -> Result<T, Error> {
        reject(Operation::Pop)
    }

    /// Always fails with [`Operation::Insert`]. Use `append` or `prepend`.
    pub fn insert(&mut self, _position: usize, _value: T) -> Result<(), Error> {
        reject(Operation::Insert)
    }

    /// Always fails with [`Operation::Index`].
    pub fn index(&self, _value: &T) -> Result<usize, Error> {
        reject(Operation::Index)
    }

    /// Always fails with [`Operation::Extend`].
    pub fn extend<I>(&mut self, _values: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
    {
        reject(Operation::Extend)
    }

    /// Always fails with [`Operation::Count`].
    pub fn count(&self, _value: &T) -> Result<usize, Error> {
        reject(Operation::Count)
    }

    /// Always fails with [`Operation::Copy`]. Use `slice(.., 1)` for a copy.
    pub fn copy(&self) -> Result<Self, Error> {
        reject(Operation::Copy)
    }

    /// Always fails with [`Operation::Clear`].
    pub fn clear(&mut self) -> Result<(), Error> {
        reject(Operation::Clear)
    }

    /// Always fails with [`Operation::Remove`]. Use `delete` with a position.
    pub fn remove(&mut self, _value: &T) -> Result<(), Error> {
        reject(Operation::Remove)
    }

    /// Always fails with [`Operation::DeleteNode`].
    pub fn delete_node(&mut self, _ptr: Ptr) -> Result<T, Error> {
        reject(Operation::DeleteNode)
    }

    /// Always fails with [`Operation::SetItem`].
    pub fn set(&mut self, _position: usize, _value: T) -> Result<(), Error> {
        reject(Operation::SetItem)
    }

    /// Always fails with [`Operation::Repeat`].
    pub fn repeat(&self, _times: usize) -> Result<Self, Error> {
        reject(Operation::Repeat)
    }

    /// Always fails with [`Operation::RepeatAssign`].
    pub fn repeat_assign(&mut self, _times: usize) -> Result<(), Error> {
        reject(Operation::RepeatAssign)
    }

    /// Always fails with [`Operation::ReflectedRepeat`].
    pub fn repeat_reflected(&self, _times: usize) -> Result<Self, Error> {
        reject(Operation::ReflectedRepeat)
    }

    /// Always fails with [`Operation::ConcatAssign`]. Use `&a + &b`.
    pub fn concat_assign(&mut self, _other: &Self) -> Result<(), Error> {
        reject(Operation::ConcatAssign)
    }
}
