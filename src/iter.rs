use core::iter::FusedIterator;
use core::slice;

use crate::chunk::{chunks_for, Chunk, Slot};
use crate::rope::RopeVec;

/// Iterator over references to the elements of a `RopeVec`
///
/// Each step is a logical index lookup, so both ends are O(1).
/// Use `.rev()` for back-to-front traversal.
///
/// This iterator implements `Clone`.
pub struct Iter<'a, T, const CHUNK_SIZE: usize> {
    rope: &'a RopeVec<T, CHUNK_SIZE>,
    front: usize,
    back: usize,
}

impl<T, const CHUNK_SIZE: usize> Clone for Iter<'_, T, CHUNK_SIZE> {
    fn clone(&self) -> Self {
        Self {
            rope: self.rope,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T, const CHUNK_SIZE: usize> Iterator for Iter<'a, T, CHUNK_SIZE> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let result = self.rope.get(self.front);
        self.front += 1;
        result
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<T, const CHUNK_SIZE: usize> DoubleEndedIterator for Iter<'_, T, CHUNK_SIZE> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.rope.get(self.back)
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.back = self.back.saturating_sub(n).max(self.front);
        self.next_back()
    }
}

impl<T, const CHUNK_SIZE: usize> ExactSizeIterator for Iter<'_, T, CHUNK_SIZE> {}

impl<T, const CHUNK_SIZE: usize> FusedIterator for Iter<'_, T, CHUNK_SIZE> {}

fn cells<T>(chunk: &mut Option<Chunk<T>>) -> &mut [Slot<T>] {
    chunk.as_deref_mut().unwrap_or_default()
}

/// Iterator over mutable references to the elements of a `RopeVec`
///
/// Walks the live chunks directly: the partial front chunk, the full chunks in
/// between, then the partial back chunk.
pub struct IterMut<'a, T> {
    head: slice::IterMut<'a, Slot<T>>,
    middle: slice::IterMut<'a, Option<Chunk<T>>>,
    tail: slice::IterMut<'a, Slot<T>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    fn new<const CHUNK_SIZE: usize>(rope: &'a mut RopeVec<T, CHUNK_SIZE>) -> Self {
        let start = rope.start_index;
        let end = start + rope.total_size;
        let remaining = rope.total_size;
        let used = chunks_for::<CHUNK_SIZE>(end);
        let chunks = &mut rope.store.live_chunks_mut()[..used];

        match chunks {
            [] => Self {
                head: Default::default(),
                middle: Default::default(),
                tail: Default::default(),
                remaining,
            },
            [only] => Self {
                head: cells(only)[start..end].iter_mut(),
                middle: Default::default(),
                tail: Default::default(),
                remaining,
            },
            [first, middle @ .., last] => {
                let tail_end = end - (used - 1) * CHUNK_SIZE;
                Self {
                    head: cells(first)[start..].iter_mut(),
                    middle: middle.iter_mut(),
                    tail: cells(last)[..tail_end].iter_mut(),
                    remaining,
                }
            }
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(slot) = self.head.next() {
                self.remaining -= 1;
                return slot.as_mut();
            }
            match self.middle.next() {
                Some(chunk) => self.head = cells(chunk).iter_mut(),
                None => break,
            }
        }
        let slot = self.tail.next()?;
        self.remaining -= 1;
        slot.as_mut()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(slot) = self.tail.next_back() {
                self.remaining -= 1;
                return slot.as_mut();
            }
            match self.middle.next_back() {
                Some(chunk) => self.tail = cells(chunk).iter_mut(),
                None => break,
            }
        }
        let slot = self.head.next_back()?;
        self.remaining -= 1;
        slot.as_mut()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over the elements of a `RopeVec`
///
/// Front chunks are released as soon as they are consumed.
pub struct IntoIter<T, const CHUNK_SIZE: usize> {
    rope: RopeVec<T, CHUNK_SIZE>,
}

impl<T, const CHUNK_SIZE: usize> Iterator for IntoIter<T, CHUNK_SIZE> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.rope.erase_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rope.len(), Some(self.rope.len()))
    }
}

impl<T, const CHUNK_SIZE: usize> DoubleEndedIterator for IntoIter<T, CHUNK_SIZE> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.rope.pop_back()
    }
}

impl<T, const CHUNK_SIZE: usize> ExactSizeIterator for IntoIter<T, CHUNK_SIZE> {}

impl<T, const CHUNK_SIZE: usize> FusedIterator for IntoIter<T, CHUNK_SIZE> {}

impl<T, const CHUNK_SIZE: usize> RopeVec<T, CHUNK_SIZE> {
    /// Returns an iterator over the elements, front to back.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, CHUNK_SIZE> {
        Iter {
            rope: self,
            front: 0,
            back: self.total_size,
        }
    }

    /// Returns an iterator over mutable references to the elements.
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<'a, T, const CHUNK_SIZE: usize> IntoIterator for &'a RopeVec<T, CHUNK_SIZE> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, CHUNK_SIZE>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const CHUNK_SIZE: usize> IntoIterator for &'a mut RopeVec<T, CHUNK_SIZE> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const CHUNK_SIZE: usize> IntoIterator for RopeVec<T, CHUNK_SIZE> {
    type Item = T;
    type IntoIter = IntoIter<T, CHUNK_SIZE>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { rope: self }
    }
}

impl<T, const CHUNK_SIZE: usize> Extend<T> for RopeVec<T, CHUNK_SIZE> {
    /// # Panics
    ///
    /// Panics if a chunk cannot be allocated. Use `push_back` to handle
    /// allocation failure.
    #[allow(clippy::expect_used)]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value)
                .expect("Allocation failed while extending RopeVec");
        }
    }
}

impl<'a, T: Copy + 'a, const CHUNK_SIZE: usize> Extend<&'a T> for RopeVec<T, CHUNK_SIZE> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        <Self as Extend<T>>::extend(self, iter.into_iter().copied());
    }
}

impl<T, const CHUNK_SIZE: usize> FromIterator<T> for RopeVec<T, CHUNK_SIZE> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut rope = Self::new();
        rope.extend(iter);
        rope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_iter_mut_after_front_growth() {
        let mut rope: RopeVec<u32, 4> = (1..=9).collect();
        rope.insert(0, 0).unwrap();

        for value in rope.iter_mut() {
            *value *= 10;
        }
        let collected: Vec<u32> = rope.iter().copied().collect();
        assert_eq!(collected, [0, 10, 20, 30, 40, 50, 60, 70, 80, 90]);
    }

    #[test]
    fn test_iter_mut_meets_in_the_middle() {
        let mut rope: RopeVec<u32, 3> = (0..10).collect();
        let mut iter = rope.iter_mut();
        let mut front = Vec::new();
        let mut back = Vec::new();
        loop {
            match iter.next() {
                Some(value) => front.push(*value),
                None => break,
            }
            match iter.next_back() {
                Some(value) => back.push(*value),
                None => break,
            }
        }
        assert_eq!(front, [0, 1, 2, 3, 4]);
        assert_eq!(back, [9, 8, 7, 6, 5]);
    }

    #[test]
    fn test_iter_mut_empty_with_offset() {
        let mut rope: RopeVec<u32, 4> = (0..2).collect();
        rope.erase_front().unwrap();
        rope.erase_front().unwrap();
        let mut iter = rope.iter_mut();
        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
    }
}
