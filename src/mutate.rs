use crate::error::RopeVecError;
use crate::rope::RopeVec;

/// How `insert` makes room for a new element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertStrategy {
    /// Open a slot before the first element. O(1).
    Prepend,
    /// Write after the last element. O(1).
    Append,
    /// Move the elements before `pos` one slot towards the front.
    ShiftFront,
    /// Move the elements from `pos` on one slot towards the back.
    ShiftBack,
}

impl InsertStrategy {
    /// Picks the side with fewer elements to move; the midpoint goes to the back.
    pub(crate) fn for_position(pos: usize, len: usize) -> Self {
        if pos == 0 {
            Self::Prepend
        } else if pos == len {
            Self::Append
        } else if pos < len / 2 {
            Self::ShiftFront
        } else {
            Self::ShiftBack
        }
    }
}

impl<T, const CHUNK_SIZE: usize> RopeVec<T, CHUNK_SIZE> {
    #[allow(clippy::expect_used)]
    fn take_live(&mut self, slot: usize) -> T {
        self.cell_mut(slot)
            .take()
            .expect("Cells inside the live range hold a value")
    }

    fn move_cell(&mut self, from: usize, to: usize) {
        let value = self.cell_mut(from).take();
        *self.cell_mut(to) = value;
    }

    /// Extends the live range by one slot at the front.
    fn open_front_slot(&mut self) -> Result<(), RopeVecError> {
        if self.start_index == 0 {
            self.grow_front()?;
        }
        self.start_index -= 1;
        self.total_size += 1;
        Ok(())
    }

    /// Appends an element to the back.
    ///
    /// # Errors
    ///
    /// Returns `RopeVecError::AllocationFailed` if a new chunk is needed and
    /// cannot be allocated.
    pub fn push_back(&mut self, value: T) -> Result<(), RopeVecError> {
        let slot = self.start_index + self.total_size;
        self.ensure_capacity_for(slot)?;
        *self.cell_mut(slot) = Some(value);
        self.total_size += 1;
        Ok(())
    }

    /// Inserts an element at `pos`, moving the elements on the shorter side.
    ///
    /// Inserting at 0 or at `len()` moves nothing.
    ///
    /// # Errors
    ///
    /// Returns `RopeVecError::IndexOutOfBounds` if `pos > len()`, or
    /// `RopeVecError::AllocationFailed` if a chunk cannot be allocated. The
    /// vector is unchanged in both cases.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<(), RopeVecError> {
        if pos > self.total_size {
            return Err(RopeVecError::IndexOutOfBounds {
                index: pos,
                length: self.total_size,
            });
        }

        match InsertStrategy::for_position(pos, self.total_size) {
            InsertStrategy::Prepend => {
                self.open_front_slot()?;
                let slot = self.start_index;
                *self.cell_mut(slot) = Some(value);
            }
            InsertStrategy::Append => return self.push_back(value),
            InsertStrategy::ShiftFront => {
                self.open_front_slot()?;
                let start = self.start_index;
                for slot in start..start + pos {
                    self.move_cell(slot + 1, slot);
                }
                *self.cell_mut(start + pos) = Some(value);
            }
            InsertStrategy::ShiftBack => {
                let start = self.start_index;
                let end = start + self.total_size;
                self.ensure_capacity_for(end)?;
                for slot in (start + pos..end).rev() {
                    self.move_cell(slot, slot + 1);
                }
                *self.cell_mut(start + pos) = Some(value);
                self.total_size += 1;
            }
        }
        Ok(())
    }

    /// Removes and returns the element at `pos`, moving every later element
    /// one slot towards the front.
    ///
    /// # Errors
    ///
    /// Returns `RopeVecError::IndexOutOfBounds` if `pos >= len()`.
    pub fn erase(&mut self, pos: usize) -> Result<T, RopeVecError> {
        if pos >= self.total_size {
            return Err(RopeVecError::IndexOutOfBounds {
                index: pos,
                length: self.total_size,
            });
        }

        let start = self.start_index;
        let end = start + self.total_size;
        let removed = self.take_live(start + pos);
        for slot in start + pos + 1..end {
            self.move_cell(slot, slot - 1);
        }
        self.total_size -= 1;
        Ok(removed)
    }

    /// Removes and returns the first element in O(1).
    ///
    /// When the front chunk becomes empty it is released immediately.
    ///
    /// # Errors
    ///
    /// Returns `RopeVecError::EmptyVector` if the vector is empty.
    pub fn erase_front(&mut self) -> Result<T, RopeVecError> {
        if self.total_size == 0 {
            return Err(RopeVecError::EmptyVector);
        }

        let value = self.take_live(self.start_index);
        self.start_index += 1;
        self.total_size -= 1;
        if self.start_index == CHUNK_SIZE {
            self.store.free_front();
            self.start_index = 0;
        }
        Ok(value)
    }

    /// Removes and returns the last element, or `None` if the vector is empty.
    ///
    /// Chunks are kept; see [`RopeVec::shrink_to_fit`].
    pub fn pop_back(&mut self) -> Option<T> {
        let last = self.total_size.checked_sub(1)?;
        let value = self.take_live(self.start_index + last);
        self.total_size = last;
        Some(value)
    }

    /// Drops the elements from `new_size` on. Chunks are kept.
    pub fn truncate(&mut self, new_size: usize) {
        while self.total_size > new_size {
            drop(self.pop_back());
        }
    }

    /// Resizes to `new_size`, filling new slots with values produced by `fill`.
    ///
    /// Shrinking drops the removed elements but keeps their chunks; call
    /// [`RopeVec::shrink_to_fit`] to release them.
    ///
    /// # Errors
    ///
    /// Returns `RopeVecError::AllocationFailed` or `RopeVecError::CapacityOverflow`
    /// if the vector cannot grow.
    pub fn resize_with<F>(&mut self, new_size: usize, mut fill: F) -> Result<(), RopeVecError>
    where
        F: FnMut() -> T,
    {
        if new_size <= self.total_size {
            self.truncate(new_size);
            return Ok(());
        }

        self.reserve(new_size)?;
        while self.total_size < new_size {
            let slot = self.start_index + self.total_size;
            *self.cell_mut(slot) = Some(fill());
            self.total_size += 1;
        }
        Ok(())
    }

    /// Resizes to `new_size`, filling new slots with `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns `RopeVecError::AllocationFailed` or `RopeVecError::CapacityOverflow`
    /// if the vector cannot grow.
    pub fn resize(&mut self, new_size: usize) -> Result<(), RopeVecError>
    where
        T: Default,
    {
        self.resize_with(new_size, T::default)
    }
}
