use alloc::vec::Vec;
use core::ops::Index;
use core::ops::IndexMut;

use crate::Ptr;

#[cold]
#[inline(never)]
fn assert_free() -> ! {
    panic!("Attempted to access data of free slot");
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData<T> {
    pub(crate) prev: Option<Ptr>,
    pub(crate) position: usize,
    pub(crate) value: T,
}

#[derive(Debug, Clone)]
enum DataOrFree<T> {
    Free,
    Data(NodeData<T>),
}

#[derive(Debug, Clone)]
pub(crate) struct Slot<T> {
    next: Option<Ptr>,
    data: DataOrFree<T>,
}

impl<T> Slot<T> {
    pub(crate) fn prev(&self) -> Option<Ptr> {
        match &self.data {
            DataOrFree::Data(data) => data.prev,
            DataOrFree::Free => assert_free(),
        }
    }

    pub(crate) fn prev_mut(&mut self) -> &mut Option<Ptr> {
        match &mut self.data {
            DataOrFree::Data(data) => &mut data.prev,
            DataOrFree::Free => assert_free(),
        }
    }

    pub(crate) fn next(&self) -> Option<Ptr> {
        self.next
    }

    pub(crate) fn next_mut(&mut self) -> &mut Option<Ptr> {
        &mut self.next
    }

    /// Swaps `prev` and `next` in place.
    pub(crate) fn flip(&mut self) {
        let prev = self.prev();
        *self.prev_mut() = self.next;
        self.next = prev;
    }

    pub(crate) fn into_data(self) -> NodeData<T> {
        match self.data {
            DataOrFree::Data(data) => data,
            DataOrFree::Free => assert_free(),
        }
    }

    pub(crate) fn data(&self) -> &NodeData<T> {
        match &self.data {
            DataOrFree::Data(data) => data,
            DataOrFree::Free => assert_free(),
        }
    }

    pub(crate) fn data_mut(&mut self) -> &mut NodeData<T> {
        match &mut self.data {
            DataOrFree::Data(data) => data,
            DataOrFree::Free => assert_free(),
        }
    }
}

/// Slot storage for list nodes. Freed slots are threaded through `next` and
/// handed out again before the backing vector grows.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    nodes: Vec<Slot<T>>,
    free_head: Option<Ptr>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Arena {
            nodes: Vec::new(),
            free_head: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            nodes: Vec::with_capacity(capacity),
            free_head: None,
        }
    }

    pub(crate) fn links(&self, ptr: Ptr) -> &Slot<T> {
        &self.nodes[ptr.unchecked_get()]
    }

    pub(crate) fn links_mut(&mut self, ptr: Ptr) -> &mut Slot<T> {
        &mut self.nodes[ptr.unchecked_get()]
    }

    pub(crate) fn alloc(
        &mut self,
        value: T,
        position: usize,
        prev: Option<Ptr>,
        next: Option<Ptr>,
    ) -> Ptr {
        let slot = Slot {
            next,
            data: DataOrFree::Data(NodeData {
                prev,
                position,
                value,
            }),
        };

        match self.free_head {
            Some(ptr) => {
                let old = core::mem::replace(&mut self.nodes[ptr.unchecked_get()], slot);
                self.free_head = old.next;
                ptr
            }
            None => {
                let ptr = Ptr::unchecked_from(self.nodes.len());
                self.nodes.push(slot);
                ptr
            }
        }
    }

    pub(crate) fn is_occupied(&self, ptr: Ptr) -> bool {
        self.nodes
            .get(ptr.unchecked_get())
            .is_some_and(|slot| matches!(slot.data, DataOrFree::Data(_)))
    }

    pub(crate) fn free(&mut self, ptr: Ptr) -> Slot<T> {
        assert!(self.is_occupied(ptr), "Pointer to free must be occupied");
        let result = core::mem::replace(
            &mut self.nodes[ptr.unchecked_get()],
            Slot {
                next: self.free_head,
                data: DataOrFree::Free,
            },
        );
        self.free_head = Some(ptr);

        result
    }
}

impl<T> Index<Ptr> for Arena<T> {
    type Output = NodeData<T>;

    fn index(&self, index: Ptr) -> &Self::Output {
        self.nodes[index.unchecked_get()].data()
    }
}

impl<T> IndexMut<Ptr> for Arena<T> {
    fn index_mut(&mut self, index: Ptr) -> &mut Self::Output {
        self.nodes[index.unchecked_get()].data_mut()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_ptr_debug() {
        let ptr = Ptr::unchecked_from(42);
        assert_eq!(format!("{:?}", ptr), "Ptr(42)");
        assert_eq!(ptr.unchecked_get(), 42);
    }

    #[test]
    fn test_arena_new() {
        let arena: Arena<i32> = Arena::new();
        assert_eq!(arena.nodes.len(), 0);
        assert!(arena.free_head.is_none());
    }

    #[test]
    fn test_arena_with_capacity() {
        let arena: Arena<i32> = Arena::with_capacity(10);
        assert!(arena.nodes.capacity() >= 10);
    }

    #[test]
    fn test_arena_alloc_multiple() {
        let mut arena = Arena::new();
        let ptr1 = arena.alloc("one".to_string(), 0, None, None);
        let ptr2 = arena.alloc("two".to_string(), 1, Some(ptr1), None);

        assert_ne!(ptr1, ptr2);
        assert!(arena.is_occupied(ptr1));
        assert!(arena.is_occupied(ptr2));

        assert_eq!(arena[ptr1].value, "one");
        assert_eq!(arena[ptr2].position, 1);
        assert_eq!(arena.links(ptr2).prev(), Some(ptr1));
    }

    #[test]
    fn test_arena_free_and_reuse() {
        let mut arena = Arena::new();
        let ptr1 = arena.alloc("one".to_string(), 0, None, None);
        let ptr2 = arena.alloc("two".to_string(), 1, None, None);

        let slot = arena.free(ptr1);
        assert_eq!(slot.data().value, "one");
        assert!(!arena.is_occupied(ptr1));
        assert!(arena.is_occupied(ptr2));

        let ptr3 = arena.alloc("three".to_string(), 0, None, None);
        assert_eq!(ptr3, ptr1);
        assert_eq!(arena[ptr3].value, "three");
        assert_eq!(arena.nodes.len(), 2);
    }

    #[test]
    fn test_arena_free_list_is_lifo() {
        let mut arena = Arena::new();
        let ptrs: [Ptr; 3] = core::array::from_fn(|i| arena.alloc(i, i, None, None));

        arena.free(ptrs[0]);
        arena.free(ptrs[2]);

        assert_eq!(arena.alloc(10, 0, None, None), ptrs[2]);
        assert_eq!(arena.alloc(11, 0, None, None), ptrs[0]);
        assert_eq!(arena.alloc(12, 0, None, None), Ptr::unchecked_from(3));
    }

    #[test]
    fn test_arena_links_and_flip() {
        let mut arena = Arena::new();
        let ptr = arena.alloc(String::from("hello"), 0, None, None);

        *arena.links_mut(ptr).prev_mut() = Some(Ptr::unchecked_from(10));
        *arena.links_mut(ptr).next_mut() = Some(Ptr::unchecked_from(20));
        arena.links_mut(ptr).flip();

        let links = arena.links(ptr);
        assert_eq!(links.prev(), Some(Ptr::unchecked_from(20)));
        assert_eq!(links.next(), Some(Ptr::unchecked_from(10)));
    }

    #[test]
    fn test_arena_into_data() {
        let mut arena = Arena::new();
        let ptr = arena.alloc(7, 3, None, None);
        arena[ptr].value += 1;

        let data = arena.free(ptr).into_data();
        assert_eq!(data.value, 8);
        assert_eq!(data.position, 3);
    }

    #[test]
    fn test_arena_is_occupied_out_of_bounds() {
        let arena: Arena<i32> = Arena::new();
        assert!(!arena.is_occupied(Ptr::unchecked_from(5)));
    }

    #[test]
    #[should_panic(expected = "Attempted to access data of free slot")]
    fn test_arena_index_unoccupied_ptr() {
        let mut arena = Arena::new();
        let ptr = arena.alloc(1, 0, None, None);
        arena.free(ptr);
        let _ = &arena[ptr];
    }

    #[test]
    #[should_panic(expected = "Pointer to free must be occupied")]
    fn test_arena_double_free() {
        let mut arena = Arena::new();
        let ptr = arena.alloc(1, 0, None, None);
        arena.free(ptr);
        arena.free(ptr);
    }
}
