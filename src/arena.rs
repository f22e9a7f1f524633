//! Chunked typed arena that owns the nodes of a red-black tree.

use crate::error::Result;
use log::warn;
use std::cmp;
use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A stable handle to an object stored in a `TypedArena<T>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Slot {
    chunk_index: usize,
    block_index: usize,
}

enum Block<T> {
    Occupied(T),
    Vacant(Option<Slot>),
}

/// An allocator that only allocates a single type of object.
///
/// Objects are stored in fixed-size chunks, so a handle stays valid until the object it refers
/// to is freed, and growing the arena never moves existing objects. Freed blocks are threaded
/// onto a free list and reused by later allocations. Growth goes through `try_reserve`, so
/// running out of memory is reported as an error instead of aborting.
///
/// # Examples
///
/// ```
/// use red_black_collections::arena::TypedArena;
///
/// let mut arena = TypedArena::new(1024);
///
/// let x = arena.allocate(1).unwrap();
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(&x), 2);
/// ```
pub struct TypedArena<T> {
    head: Option<Slot>,
    chunks: Vec<Vec<Block<T>>>,
    chunk_size: usize,
    fill_index: usize,
    size: usize,
    capacity: usize,
}

impl<T> TypedArena<T> {
    fn is_valid_slot(&self, slot: &Slot) -> bool {
        slot.chunk_index < self.chunks.len()
            && slot.block_index < self.chunks[slot.chunk_index].len()
    }

    /// Constructs a new, empty `TypedArena<T>` with a specific number of objects per chunk. A
    /// chunk size of zero is treated as one.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::arena::TypedArena;
    ///
    /// // creates a new TypedArena<T> that contains a maximum of 1024 u32's per chunk
    /// let arena: TypedArena<u32> = TypedArena::new(1024);
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        TypedArena {
            head: None,
            chunks: Vec::new(),
            chunk_size: cmp::max(chunk_size, 1),
            fill_index: 0,
            size: 0,
            capacity: 0,
        }
    }

    /// Returns the number of objects per chunk.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the number of live objects in the arena.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Ensures that the next `additional` allocations will not need to grow the arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::arena::TypedArena;
    ///
    /// let mut arena: TypedArena<u32> = TypedArena::new(16);
    /// arena.reserve(40).unwrap();
    /// ```
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let needed = self.size.saturating_add(additional);
        if self.capacity >= needed {
            return Ok(());
        }
        let missing_chunks = (needed - self.capacity - 1) / self.chunk_size + 1;
        if let Err(err) = self.chunks.try_reserve(missing_chunks) {
            warn!("Failed to reserve {} chunks: {}", missing_chunks, err);
            return Err(err.into());
        }
        for _ in 0..missing_chunks {
            let mut chunk = Vec::new();
            if let Err(err) = chunk.try_reserve_exact(self.chunk_size) {
                warn!("Failed to reserve a chunk of {} blocks: {}", self.chunk_size, err);
                return Err(err.into());
            }
            self.chunks.push(chunk);
            self.capacity += self.chunk_size;
        }
        Ok(())
    }

    /// Allocates an object in the typed arena and returns a `Slot`. The `Slot` can later be used
    /// to retrieve mutable and immutable references to the object, and to deallocate the object.
    /// If the arena cannot grow, the object is dropped and the error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0).unwrap();
    /// ```
    pub fn allocate(&mut self, value: T) -> Result<Slot> {
        if let Some(slot) = self.head.take() {
            let vacant_block = mem::replace(
                &mut self.chunks[slot.chunk_index][slot.block_index],
                Block::Occupied(value),
            );
            match vacant_block {
                Block::Vacant(next_slot) => self.head = next_slot,
                Block::Occupied(_) => panic!("Expected a vacant block."),
            }
            self.size += 1;
            return Ok(slot);
        }

        self.reserve(1)?;
        while self.chunks[self.fill_index].len() == self.chunk_size {
            self.fill_index += 1;
        }
        let chunk = &mut self.chunks[self.fill_index];
        chunk.push(Block::Occupied(value));
        self.size += 1;
        Ok(Slot {
            chunk_index: self.fill_index,
            block_index: chunk.len() - 1,
        })
    }

    /// Deallocates an object in the typed arena and returns the object.
    ///
    /// # Panics
    ///
    /// Panics if slot corresponds to an invalid or vacant value.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0).unwrap();
    /// assert_eq!(arena.free(&x), 0);
    /// ```
    pub fn free(&mut self, slot: &Slot) -> T {
        if !self.is_valid_slot(slot) {
            panic!("Error: attempting to free invalid block.");
        }
        let old_block = mem::replace(
            &mut self.chunks[slot.chunk_index][slot.block_index],
            Block::Vacant(self.head),
        );
        match old_block {
            Block::Vacant(next_slot) => {
                self.chunks[slot.chunk_index][slot.block_index] = Block::Vacant(next_slot);
                panic!("Error: attempting to free vacant block.");
            },
            Block::Occupied(value) => {
                self.size -= 1;
                self.head = Some(*slot);
                value
            },
        }
    }

    /// Drops every object in the arena and releases its chunks.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// arena.allocate(0).unwrap();
    /// arena.clear();
    /// assert!(arena.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.head = None;
        self.chunks.clear();
        self.fill_index = 0;
        self.size = 0;
        self.capacity = 0;
    }

    /// Returns an immutable reference to an object in the typed arena. Returns `None` if the slot
    /// does not correspond to a valid object.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0).unwrap();
    /// assert_eq!(arena.get(&x), Some(&0));
    /// ```
    pub fn get(&self, slot: &Slot) -> Option<&T> {
        if !self.is_valid_slot(slot) {
            return None;
        }
        match self.chunks[slot.chunk_index][slot.block_index] {
            Block::Occupied(ref value) => Some(value),
            Block::Vacant(_) => None,
        }
    }

    /// Returns a mutable reference to an object in the typed arena. Returns `None` if the slot
    /// does not correspond to a valid object.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0).unwrap();
    /// assert_eq!(arena.get_mut(&x), Some(&mut 0));
    /// ```
    pub fn get_mut(&mut self, slot: &Slot) -> Option<&mut T> {
        if !self.is_valid_slot(slot) {
            return None;
        }
        match self.chunks[slot.chunk_index][slot.block_index] {
            Block::Occupied(ref mut value) => Some(value),
            Block::Vacant(_) => None,
        }
    }
}

impl<T> Index<Slot> for TypedArena<T> {
    type Output = T;

    fn index(&self, slot: Slot) -> &Self::Output {
        self.get(&slot).expect("Error: slot out of bounds.")
    }
}

impl<T> IndexMut<Slot> for TypedArena<T> {
    fn index_mut(&mut self, slot: Slot) -> &mut Self::Output {
        self.get_mut(&slot).expect("Error: slot out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::Slot;
    use super::TypedArena;
    use crate::error::Error;

    #[test]
    #[should_panic]
    fn test_free_invalid_block() {
        let mut arena: TypedArena<u32> = TypedArena::new(1024);
        arena.free(&Slot {
            chunk_index: 0,
            block_index: 0,
        });
    }

    #[test]
    #[should_panic]
    fn test_free_vacant_block() {
        let mut arena = TypedArena::new(1024);
        let slot = arena.allocate(0).unwrap();
        arena.free(&slot);
        arena.free(&slot);
    }

    #[test]
    fn test_allocate() {
        let mut arena = TypedArena::new(1024);
        for i in 0..3 {
            assert_eq!(
                arena.allocate(0).unwrap(),
                Slot {
                    chunk_index: 0,
                    block_index: i,
                },
            );
        }
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_allocate_multiple_chunks() {
        let mut arena = TypedArena::new(2);
        arena.allocate(0).unwrap();
        arena.allocate(0).unwrap();
        assert_eq!(
            arena.allocate(0).unwrap(),
            Slot {
                chunk_index: 1,
                block_index: 0,
            },
        );
    }

    #[test]
    fn test_reserve_fills_chunks_in_order() {
        let mut arena = TypedArena::new(2);
        arena.reserve(5).unwrap();
        let slots: Vec<Slot> = (0..5).map(|i| arena.allocate(i).unwrap()).collect();
        assert_eq!(slots[2], Slot { chunk_index: 1, block_index: 0 });
        assert_eq!(slots[4], Slot { chunk_index: 2, block_index: 0 });
        for (i, slot) in slots.iter().enumerate() {
            assert_eq!(arena[*slot], i);
        }
    }

    #[test]
    fn test_allocate_oversized_chunk() {
        let mut arena: TypedArena<u64> = TypedArena::new(usize::max_value() / 4);
        match arena.allocate(0) {
            Err(Error::AllocError(_)) => {},
            other => panic!("expected an allocation error, got {:?}", other),
        }
        assert!(arena.is_empty());
        assert_eq!(arena.get(&Slot { chunk_index: 0, block_index: 0 }), None);
    }

    #[test]
    fn test_reserve_too_many_chunks() {
        let mut arena = TypedArena::new(2);
        arena.allocate(0u64).unwrap();
        match arena.reserve(usize::max_value() / 2) {
            Err(Error::AllocError(_)) => {},
            other => panic!("expected an allocation error, got {:?}", other),
        }
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.allocate(1).unwrap(), Slot { chunk_index: 0, block_index: 1 });
        assert_eq!(arena.allocate(2).unwrap(), Slot { chunk_index: 1, block_index: 0 });
    }

    #[test]
    fn test_free_reuses_slot() {
        let mut arena = TypedArena::new(1024);
        let slot = arena.allocate(0).unwrap();
        assert_eq!(arena.free(&slot), 0);
        assert!(arena.is_empty());
        assert_eq!(arena.allocate(1).unwrap(), slot);
        assert_eq!(arena[slot], 1);
    }

    #[test]
    fn test_get_vacant_block() {
        let mut arena = TypedArena::new(1024);
        let slot = arena.allocate(0).unwrap();
        arena.free(&slot);
        assert_eq!(arena.get(&slot), None);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = TypedArena::new(1024);
        let slot = arena.allocate(0).unwrap();
        *arena.get_mut(&slot).unwrap() = 1;
        assert_eq!(arena.get(&slot), Some(&1));
    }

    #[test]
    fn test_clear() {
        let mut arena = TypedArena::new(2);
        for i in 0..5 {
            arena.allocate(i).unwrap();
        }
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(
            arena.allocate(0).unwrap(),
            Slot {
                chunk_index: 0,
                block_index: 0,
            },
        );
    }

    #[test]
    fn test_zero_chunk_size() {
        let mut arena = TypedArena::new(0);
        assert_eq!(arena.chunk_size(), 1);
        arena.allocate(0).unwrap();
        arena.allocate(1).unwrap();
        assert_eq!(arena.len(), 2);
    }
}
