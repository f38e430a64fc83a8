use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::ptr;

use crate::error::RopeVecError;
use crate::rope::RopeVec;

/// A read-only position in a `RopeVec`
///
/// A cursor is just the pair (vector, logical index); nothing is cached.
/// Positions run from 0 to `len()`, where `len()` is the past-the-end position.
/// Arithmetic saturates at 0, and positions past the end read as `None`.
pub struct Cursor<'a, T, const CHUNK_SIZE: usize> {
    rope: &'a RopeVec<T, CHUNK_SIZE>,
    index: usize,
}

impl<T, const CHUNK_SIZE: usize> Clone for Cursor<'_, T, CHUNK_SIZE> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const CHUNK_SIZE: usize> Copy for Cursor<'_, T, CHUNK_SIZE> {}

impl<T, const CHUNK_SIZE: usize> fmt::Debug for Cursor<'_, T, CHUNK_SIZE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("len", &self.rope.len())
            .finish()
    }
}

impl<'a, T, const CHUNK_SIZE: usize> Cursor<'a, T, CHUNK_SIZE> {
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Element under the cursor, or `None` at or past the end.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        self.rope.get(self.index)
    }

    /// Element `n` positions away from the cursor.
    #[must_use]
    pub fn peek(&self, n: isize) -> Option<&'a T> {
        let index = self.index.checked_add_signed(n)?;
        self.rope.get(index)
    }

    pub fn move_next(&mut self) {
        self.index = self.index.saturating_add(1);
    }

    pub fn move_prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.index >= self.rope.len()
    }

    /// Signed number of steps from `self` to `other`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn distance_to(&self, other: &Self) -> isize {
        other.index as isize - self.index as isize
    }
}

impl<T, const CHUNK_SIZE: usize> PartialEq for Cursor<'_, T, CHUNK_SIZE> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.rope, other.rope) && self.index == other.index
    }
}

impl<T, const CHUNK_SIZE: usize> Eq for Cursor<'_, T, CHUNK_SIZE> {}

impl<T, const CHUNK_SIZE: usize> PartialOrd for Cursor<'_, T, CHUNK_SIZE> {
    /// Cursors into different vectors are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if ptr::eq(self.rope, other.rope) {
            Some(self.index.cmp(&other.index))
        } else {
            None
        }
    }
}

impl<T, const CHUNK_SIZE: usize> Add<usize> for Cursor<'_, T, CHUNK_SIZE> {
    type Output = Self;

    fn add(mut self, n: usize) -> Self {
        self += n;
        self
    }
}

impl<T, const CHUNK_SIZE: usize> AddAssign<usize> for Cursor<'_, T, CHUNK_SIZE> {
    fn add_assign(&mut self, n: usize) {
        self.index = self.index.saturating_add(n);
    }
}

impl<T, const CHUNK_SIZE: usize> Sub<usize> for Cursor<'_, T, CHUNK_SIZE> {
    type Output = Self;

    fn sub(mut self, n: usize) -> Self {
        self -= n;
        self
    }
}

impl<T, const CHUNK_SIZE: usize> SubAssign<usize> for Cursor<'_, T, CHUNK_SIZE> {
    fn sub_assign(&mut self, n: usize) {
        self.index = self.index.saturating_sub(n);
    }
}

impl<T, const CHUNK_SIZE: usize> Sub for Cursor<'_, T, CHUNK_SIZE> {
    type Output = isize;

    /// Distance `self - other`, as for random-access iterators.
    fn sub(self, other: Self) -> isize {
        other.distance_to(&self)
    }
}

/// A position in a `RopeVec` that can modify the element under it
pub struct CursorMut<'a, T, const CHUNK_SIZE: usize> {
    rope: &'a mut RopeVec<T, CHUNK_SIZE>,
    index: usize,
}

impl<T, const CHUNK_SIZE: usize> CursorMut<'_, T, CHUNK_SIZE> {
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.rope.get(self.index)
    }

    #[must_use]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.rope.get_mut(self.index)
    }

    pub fn move_next(&mut self) {
        self.index = self.index.saturating_add(1);
    }

    pub fn move_prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn seek(&mut self, index: usize) {
        self.index = index;
    }

    /// Read-only view of the same position.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, T, CHUNK_SIZE> {
        Cursor {
            rope: &*self.rope,
            index: self.index,
        }
    }

    /// Inserts `value` at the cursor; the cursor then points at it.
    ///
    /// # Errors
    ///
    /// Same as [`RopeVec::insert`].
    pub fn insert(&mut self, value: T) -> Result<(), RopeVecError> {
        self.rope.insert(self.index, value)
    }

    /// Removes the element under the cursor; the cursor then points at the
    /// element that followed it.
    ///
    /// # Errors
    ///
    /// Same as [`RopeVec::erase`].
    pub fn remove(&mut self) -> Result<T, RopeVecError> {
        self.rope.erase(self.index)
    }
}

impl<T, const CHUNK_SIZE: usize> RopeVec<T, CHUNK_SIZE> {
    /// Cursor at logical `index`; `len()` gives the past-the-end cursor.
    #[must_use]
    pub fn cursor(&self, index: usize) -> Cursor<'_, T, CHUNK_SIZE> {
        Cursor { rope: self, index }
    }

    #[must_use]
    pub fn cursor_mut(&mut self, index: usize) -> CursorMut<'_, T, CHUNK_SIZE> {
        CursorMut { rope: self, index }
    }
}
