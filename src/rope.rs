use core::fmt;
use core::mem;
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use crate::chunk::{chunk_index, chunks_for, ChunkStore, Slot};
use crate::error::RopeVecError;

/// Chunk size used when none is given: 256 elements per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 256;

/// A growable random-access sequence stored in fixed-size chunks
///
/// Logical index `i` lives at absolute slot `start_index + i`, counted from the
/// beginning of the front chunk. Growing at the back appends chunks, growing at
/// the front prepends them; existing elements are never copied to a new buffer.
#[derive(Clone)]
pub struct RopeVec<T, const CHUNK_SIZE: usize = DEFAULT_CHUNK_SIZE> {
    pub(crate) store: ChunkStore<T, CHUNK_SIZE>,
    pub(crate) total_size: usize,
    pub(crate) start_index: usize,
}

impl<T, const CHUNK_SIZE: usize> RopeVec<T, CHUNK_SIZE> {
    const CHUNK_SIZE_IS_NONZERO: () = assert!(CHUNK_SIZE > 0, "CHUNK_SIZE must be non-zero");

    /// Creates an empty `RopeVec`. No chunk is allocated until the first push.
    #[must_use]
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CHUNK_SIZE_IS_NONZERO;
        Self {
            store: ChunkStore::new(),
            total_size: 0,
            start_index: 0,
        }
    }

    /// Creates an empty `RopeVec` able to hold `capacity` elements without
    /// allocating again.
    ///
    /// # Errors
    ///
    /// Returns `RopeVecError::AllocationFailed` if a chunk cannot be allocated,
    /// or `RopeVecError::CapacityOverflow` if `capacity` is not representable.
    pub fn with_capacity(capacity: usize) -> Result<Self, RopeVecError> {
        let mut rope = Self::new();
        rope.reserve(capacity)?;
        Ok(rope)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.total_size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_size == 0
    }

    /// Number of element slots per chunk.
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        CHUNK_SIZE
    }

    #[inline]
    fn slot_of(&self, index: usize) -> usize {
        self.start_index + index
    }

    /// Gets the element at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.total_size {
            return None;
        }
        self.store.slot(self.slot_of(index))?.as_ref()
    }

    /// Gets a mutable reference to the element at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.total_size {
            return None;
        }
        let slot = self.slot_of(index);
        self.store.slot_mut(slot)?.as_mut()
    }

    /// Gets the element at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `RopeVecError::IndexOutOfBounds` if `index` is out of bounds.
    pub fn at(&self, index: usize) -> Result<&T, RopeVecError> {
        let length = self.total_size;
        self.get(index)
            .ok_or(RopeVecError::IndexOutOfBounds { index, length })
    }

    /// Gets a mutable reference to the element at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `RopeVecError::IndexOutOfBounds` if `index` is out of bounds.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, RopeVecError> {
        let length = self.total_size;
        self.get_mut(index)
            .ok_or(RopeVecError::IndexOutOfBounds { index, length })
    }

    /// Gets the element at the specified index without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`. This is checked only in debug builds.
    #[allow(unsafe_code)]
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(
            index < self.total_size,
            "Index {} out of bounds for vector of length {}",
            index,
            self.total_size
        );
        // SAFETY: a logical index below `total_size` maps inside the live
        // chunks and its cell holds a value.
        unsafe {
            self.store
                .slot_unchecked(self.slot_of(index))
                .as_ref()
                .unwrap_unchecked()
        }
    }

    /// Mutable counterpart of [`RopeVec::get_unchecked`].
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`. This is checked only in debug builds.
    #[allow(unsafe_code)]
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.total_size,
            "Index {} out of bounds for vector of length {}",
            index,
            self.total_size
        );
        let slot = self.slot_of(index);
        // SAFETY: see `get_unchecked`.
        unsafe { self.store.slot_unchecked_mut(slot).as_mut().unwrap_unchecked() }
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns `RopeVecError::EmptyVector` if the vector is empty.
    pub fn front(&self) -> Result<&T, RopeVecError> {
        self.get(0).ok_or(RopeVecError::EmptyVector)
    }

    /// # Errors
    ///
    /// Returns `RopeVecError::EmptyVector` if the vector is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, RopeVecError> {
        self.get_mut(0).ok_or(RopeVecError::EmptyVector)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `RopeVecError::EmptyVector` if the vector is empty.
    pub fn back(&self) -> Result<&T, RopeVecError> {
        let last = self.total_size.checked_sub(1).ok_or(RopeVecError::EmptyVector)?;
        self.get(last).ok_or(RopeVecError::EmptyVector)
    }

    /// # Errors
    ///
    /// Returns `RopeVecError::EmptyVector` if the vector is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, RopeVecError> {
        let last = self.total_size.checked_sub(1).ok_or(RopeVecError::EmptyVector)?;
        self.get_mut(last).ok_or(RopeVecError::EmptyVector)
    }

    /// Number of elements that fit from logical index 0 without allocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.live_slots() - self.start_index
    }

    /// Appends chunks until absolute `slot` is addressable.
    pub(crate) fn ensure_capacity_for(&mut self, slot: usize) -> Result<(), RopeVecError> {
        while slot >= self.store.live_slots() {
            self.store.push_back_chunk()?;
        }
        Ok(())
    }

    /// Puts a new chunk in front of the data.
    ///
    /// `start_index` moves up by one chunk together with the new front chunk,
    /// so every live element keeps its logical index.
    pub(crate) fn grow_front(&mut self) -> Result<(), RopeVecError> {
        self.store.push_front_chunk()?;
        self.start_index += CHUNK_SIZE;
        Ok(())
    }

    /// Makes room for at least `total` elements, counted from logical index 0.
    /// The length is not changed.
    ///
    /// # Errors
    ///
    /// Returns `RopeVecError::AllocationFailed` if a chunk cannot be allocated,
    /// or `RopeVecError::CapacityOverflow` if the request exceeds `isize::MAX`
    /// bytes.
    pub fn reserve(&mut self, total: usize) -> Result<(), RopeVecError> {
        if total <= self.capacity() {
            return Ok(());
        }
        let last_slot = self
            .start_index
            .checked_add(total - 1)
            .ok_or(RopeVecError::CapacityOverflow)?;
        let bytes = (chunk_index::<CHUNK_SIZE>(last_slot) + 1)
            .checked_mul(CHUNK_SIZE)
            .and_then(|slots| slots.checked_mul(mem::size_of::<Slot<T>>()))
            .ok_or(RopeVecError::CapacityOverflow)?;
        if bytes > isize::MAX as usize {
            return Err(RopeVecError::CapacityOverflow);
        }
        self.ensure_capacity_for(last_slot)
    }

    /// Releases trailing chunks that hold no element.
    ///
    /// Live chunks at the front are kept. Positions of chunks already released
    /// by `erase_front` are dropped from the chunk table.
    pub fn shrink_to_fit(&mut self) {
        if self.total_size == 0 {
            self.start_index = 0;
        }
        let needed = chunks_for::<CHUNK_SIZE>(self.start_index + self.total_size);
        self.store.truncate_live(needed);
        self.store.compact();
    }

    /// Drops every element and releases every chunk.
    pub fn clear(&mut self) {
        self.store.clear();
        self.total_size = 0;
        self.start_index = 0;
    }

    /// Exchanges the contents of two vectors without moving any element.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Cell at absolute `slot`.
    #[allow(clippy::expect_used)]
    pub(crate) fn cell_mut(&mut self, slot: usize) -> &mut Slot<T> {
        self.store
            .slot_mut(slot)
            .expect("Capacity checked before the cell is accessed")
    }
}

impl<T, const CHUNK_SIZE: usize> Default for RopeVec<T, CHUNK_SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const CHUNK_SIZE: usize> Index<usize> for RopeVec<T, CHUNK_SIZE> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "Index {} out of bounds for vector of length {}",
                index, self.total_size
            ),
        }
    }
}

impl<T, const CHUNK_SIZE: usize> IndexMut<usize> for RopeVec<T, CHUNK_SIZE> {
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn index_mut(&mut self, index: usize) -> &mut T {
        let length = self.total_size;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("Index {index} out of bounds for vector of length {length}"),
        }
    }
}

impl<T: fmt::Debug, const CHUNK_SIZE: usize> fmt::Debug for RopeVec<T, CHUNK_SIZE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U, const A: usize, const B: usize> PartialEq<RopeVec<U, B>> for RopeVec<T, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &RopeVec<U, B>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq, const CHUNK_SIZE: usize> Eq for RopeVec<T, CHUNK_SIZE> {}

impl<T, U, const CHUNK_SIZE: usize> PartialEq<[U]> for RopeVec<T, CHUNK_SIZE>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T, U, const CHUNK_SIZE: usize, const N: usize> PartialEq<[U; N]> for RopeVec<T, CHUNK_SIZE>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        *self == other[..]
    }
}

impl<T, U, const CHUNK_SIZE: usize> PartialEq<alloc::vec::Vec<U>> for RopeVec<T, CHUNK_SIZE>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &alloc::vec::Vec<U>) -> bool {
        *self == other[..]
    }
}

impl<T: Hash, const CHUNK_SIZE: usize> Hash for RopeVec<T, CHUNK_SIZE> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.total_size);
        for value in self {
            value.hash(state);
        }
    }
}
