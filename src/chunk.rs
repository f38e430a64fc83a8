use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;

use crate::error::RopeVecError;

/// A single element cell. `None` means the cell holds no live element.
pub(crate) type Slot<T> = Option<T>;

/// A fixed-size block of cells, owned by exactly one arena position.
pub(crate) type Chunk<T> = Box<[Slot<T>]>;

/// Chunk that holds the absolute `slot`, relative to the front chunk.
#[inline]
pub(crate) const fn chunk_index<const CHUNK_SIZE: usize>(slot: usize) -> usize {
    slot / CHUNK_SIZE
}

/// Offset of the absolute `slot` inside its chunk.
#[inline]
pub(crate) const fn within_chunk_index<const CHUNK_SIZE: usize>(slot: usize) -> usize {
    slot % CHUNK_SIZE
}

/// Number of chunks needed to cover absolute slots `0..slots`.
#[inline]
pub(crate) const fn chunks_for<const CHUNK_SIZE: usize>(slots: usize) -> usize {
    slots.div_ceil(CHUNK_SIZE)
}

/// Allocates a chunk of exactly `CHUNK_SIZE` empty cells.
///
/// # Errors
///
/// Returns `RopeVecError::AllocationFailed` if the allocator refuses the request.
pub(crate) fn allocate_chunk<T, const CHUNK_SIZE: usize>() -> Result<Chunk<T>, RopeVecError> {
    let mut cells: Vec<Slot<T>> = Vec::new();
    cells
        .try_reserve_exact(CHUNK_SIZE)
        .map_err(|_| RopeVecError::AllocationFailed {
            bytes: CHUNK_SIZE.saturating_mul(mem::size_of::<Slot<T>>()),
        })?;
    cells.resize_with(CHUNK_SIZE, || None);
    Ok(cells.into_boxed_slice())
}

/// Arena of chunks addressed by position.
///
/// Positions below `front` are released: their memory has been freed and they
/// are kept only so that the positions of the live chunks stay stable. Every
/// position at or after `front` holds an allocated chunk.
#[derive(Clone)]
pub(crate) struct ChunkStore<T, const CHUNK_SIZE: usize> {
    chunks: Vec<Option<Chunk<T>>>,
    front: usize,
}

impl<T, const CHUNK_SIZE: usize> ChunkStore<T, CHUNK_SIZE> {
    pub(crate) const fn new() -> Self {
        Self {
            chunks: Vec::new(),
            front: 0,
        }
    }

    /// Arena length, released positions included.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.chunks.len()
    }

    #[inline]
    pub(crate) fn front_index(&self) -> usize {
        self.front
    }

    /// Number of allocated chunks.
    #[inline]
    pub(crate) fn live_count(&self) -> usize {
        self.chunks.len() - self.front
    }

    /// Number of cells addressable from the front chunk onward.
    #[inline]
    pub(crate) fn live_slots(&self) -> usize {
        self.live_count() * CHUNK_SIZE
    }

    fn reserve_position(&mut self) -> Result<(), RopeVecError> {
        self.chunks
            .try_reserve(1)
            .map_err(|_| RopeVecError::AllocationFailed {
                bytes: mem::size_of::<Option<Chunk<T>>>(),
            })
    }

    /// Appends a freshly allocated chunk after the last one.
    pub(crate) fn push_back_chunk(&mut self) -> Result<(), RopeVecError> {
        let chunk = allocate_chunk::<T, CHUNK_SIZE>()?;
        self.reserve_position()?;
        self.chunks.push(Some(chunk));
        Ok(())
    }

    /// Places a freshly allocated chunk in front of the current front chunk.
    ///
    /// A released position directly before the front is reused when there is
    /// one; otherwise the chunk is inserted at position 0 and every other
    /// position moves up by one.
    pub(crate) fn push_front_chunk(&mut self) -> Result<(), RopeVecError> {
        let chunk = allocate_chunk::<T, CHUNK_SIZE>()?;
        if self.front > 0 {
            self.front -= 1;
            self.chunks[self.front] = Some(chunk);
        } else {
            self.reserve_position()?;
            self.chunks.insert(0, Some(chunk));
        }
        Ok(())
    }

    /// Frees the front chunk and moves the front to the next position.
    pub(crate) fn free_front(&mut self) {
        if self.front < self.chunks.len() {
            self.chunks[self.front] = None;
            self.front += 1;
        }
    }

    /// Frees every chunk past the first `live` allocated ones.
    pub(crate) fn truncate_live(&mut self, live: usize) {
        self.chunks.truncate(self.front + live);
    }

    /// Drops the released positions so that the front chunk sits at position 0.
    pub(crate) fn compact(&mut self) {
        self.chunks.drain(..self.front);
        self.front = 0;
        self.chunks.shrink_to_fit();
    }

    pub(crate) fn clear(&mut self) {
        self.chunks = Vec::new();
        self.front = 0;
    }

    /// Cell at absolute `slot`, counted from the start of the front chunk.
    pub(crate) fn slot(&self, slot: usize) -> Option<&Slot<T>> {
        self.chunks
            .get(self.front + chunk_index::<CHUNK_SIZE>(slot))?
            .as_deref()?
            .get(within_chunk_index::<CHUNK_SIZE>(slot))
    }

    pub(crate) fn slot_mut(&mut self, slot: usize) -> Option<&mut Slot<T>> {
        self.chunks
            .get_mut(self.front + chunk_index::<CHUNK_SIZE>(slot))?
            .as_deref_mut()?
            .get_mut(within_chunk_index::<CHUNK_SIZE>(slot))
    }

    /// Cell at absolute `slot` without any bounds check.
    ///
    /// # Safety
    ///
    /// `slot` must be below `live_slots()`.
    #[allow(unsafe_code)]
    pub(crate) unsafe fn slot_unchecked(&self, slot: usize) -> &Slot<T> {
        let position = self.front + chunk_index::<CHUNK_SIZE>(slot);
        // SAFETY: the caller keeps `slot` inside the live chunks, which are
        // all allocated.
        unsafe {
            self.chunks
                .get_unchecked(position)
                .as_deref()
                .unwrap_unchecked()
                .get_unchecked(within_chunk_index::<CHUNK_SIZE>(slot))
        }
    }

    /// # Safety
    ///
    /// `slot` must be below `live_slots()`.
    #[allow(unsafe_code)]
    pub(crate) unsafe fn slot_unchecked_mut(&mut self, slot: usize) -> &mut Slot<T> {
        let position = self.front + chunk_index::<CHUNK_SIZE>(slot);
        // SAFETY: see `slot_unchecked`.
        unsafe {
            self.chunks
                .get_unchecked_mut(position)
                .as_deref_mut()
                .unwrap_unchecked()
                .get_unchecked_mut(within_chunk_index::<CHUNK_SIZE>(slot))
        }
    }

    /// The allocated chunks, front first.
    pub(crate) fn live_chunks_mut(&mut self) -> &mut [Option<Chunk<T>>] {
        &mut self.chunks[self.front..]
    }
}
