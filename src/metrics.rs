use core::mem;

use crate::chunk::Slot;
use crate::rope::RopeVec;

impl<T, const CHUNK_SIZE: usize> RopeVec<T, CHUNK_SIZE> {
    /// Bytes held by the allocated chunks, unused slots included.
    ///
    /// Chunks released by `erase_front` are not counted.
    #[must_use]
    pub fn memory_used(&self) -> usize {
        self.store.live_slots() * mem::size_of::<Slot<T>>()
    }

    /// Fraction of the chunk table's slots that hold no element.
    ///
    /// `0.0` means every slot is in use. Positions released by `erase_front`
    /// count as unused until `shrink_to_fit` drops them, so the value grows
    /// while the front is consumed. An empty chunk table reports `0.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fragmentation(&self) -> f64 {
        let total_slots = self.store.len() * CHUNK_SIZE;
        if total_slots == 0 {
            return 0.0;
        }
        1.0 - self.total_size as f64 / total_slots as f64
    }

    /// Length of the chunk table, released positions included.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.store.len()
    }

    /// Number of chunks currently allocated.
    #[must_use]
    pub fn live_chunk_count(&self) -> usize {
        self.store.live_count()
    }
}
