// This file is part of fixed-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`FixedBuffer`](crate::FixedBuffer).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Elements left unconsumed when
//!   the iterator is dropped are destroyed, newest first, before the region is
//!   released.
//! - `&FixedBuffer` and `&mut FixedBuffer` iterate as slices.

// Crate imports
use crate::buf::FixedBuffer;

// Core imports
use core::{
    iter::FusedIterator,
    mem::{self, ManuallyDrop, MaybeUninit},
};

// Alloc imports
use alloc::boxed::Box;

/// Owned iterator returned by `FixedBuffer::into_iter()`.
///
/// Takes over the buffer's slot region and yields elements by value from
/// front to back, with double-ended iteration via [`DoubleEndedIterator`].
pub struct IntoIter<T> {
    pub(crate) slots: Box<[MaybeUninit<T>]>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

// Invariant: `slots[front..back]` hold the remaining live elements; slots
// outside that window have already been moved out or were never initialized.

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was inside the live window before the increment, so
            // the slot holds an initialized `T`; moving it out and shrinking
            // the window ensures it is never read again.
            Some(unsafe { self.slots[i].assume_init_read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: after the decrement, `back` indexes the last slot of
            // the previous live window, which holds an initialized `T`;
            // shrinking the window ensures it is never read again.
            Some(unsafe { self.slots[self.back].assume_init_read() })
        } else {
            None
        }
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Destroy unconsumed elements newest-first, matching the buffer's own
        // drop order; the boxed slice then releases the region.
        while self.next_back().is_some() {}
    }
}

impl<'a, T> IntoIterator for &'a FixedBuffer<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut FixedBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for FixedBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        // The region changes hands to the iterator; suppress the buffer's own
        // Drop so the elements are not destroyed twice.
        let mut buf = ManuallyDrop::new(self);
        let slots = mem::take(&mut buf.slots);
        IntoIter {
            slots,
            front: 0,
            back: buf.len,
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::FixedBuffer;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    fn filled(n: usize) -> FixedBuffer<i32> {
        let mut buf = FixedBuffer::with_capacity(n).unwrap();
        for i in 0..n {
            buf.push(i as i32).unwrap();
        }
        buf
    }

    #[test]
    fn test_into_iter_yields_in_order() {
        let collected: Vec<i32> = filled(4).into_iter().collect();
        assert_eq!(collected, [0, 1, 2, 3]);
    }

    #[test]
    fn test_into_iter_reversed() {
        let collected: Vec<i32> = filled(4).into_iter().rev().collect();
        assert_eq!(collected, [3, 2, 1, 0]);
    }

    #[test]
    fn test_double_ended_alternation() {
        let mut it = filled(4).into_iter();
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_size_hint_tracks_consumption() {
        let mut it = filled(4).into_iter();
        assert_eq!(it.size_hint(), (4, Some(4)));
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(it.len(), 2);
    }

    #[test]
    fn test_into_iter_empty_and_partial_buffers() {
        let empty: FixedBuffer<i32> = FixedBuffer::with_capacity(3).unwrap();
        assert_eq!(empty.into_iter().next(), None);

        // Unused capacity is not iterated.
        let mut partial: FixedBuffer<i32> = FixedBuffer::with_capacity(8).unwrap();
        partial.push(1).unwrap();
        partial.push(2).unwrap();
        let collected: Vec<i32> = partial.into_iter().collect();
        assert_eq!(collected, [1, 2]);
    }

    #[test]
    fn test_into_iter_drop_destroys_unconsumed() {
        struct Logged {
            id: i32,
            log: Rc<RefCell<Vec<i32>>>,
        }
        impl Drop for Logged {
            fn drop(&mut self) {
                self.log.borrow_mut().push(self.id);
            }
        }

        let log = Rc::new(RefCell::new(Vec::new()));
        let mut buf: FixedBuffer<Logged> = FixedBuffer::with_capacity(4).unwrap();
        for id in [1, 2, 3, 4] {
            buf.push(Logged {
                id,
                log: Rc::clone(&log),
            })
            .unwrap();
        }

        let mut it = buf.into_iter();
        let first = it.next().unwrap();
        assert_eq!(first.id, 1);
        drop(first);
        drop(it);

        // The consumed element dropped first, then the remaining tail
        // newest-first.
        assert_eq!(&*log.borrow(), &[1, 4, 3, 2]);
    }

    #[test]
    fn test_ref_iteration() {
        let mut buf = filled(3);

        let mut collected = Vec::new();
        for x in &buf {
            collected.push(*x);
        }
        assert_eq!(collected, [0, 1, 2]);

        for x in &mut buf {
            *x += 10;
        }
        assert_eq!(buf.as_slice(), &[10, 11, 12]);
    }

    #[test]
    fn test_ref_iteration_empty() {
        let mut buf: FixedBuffer<i32> = FixedBuffer::with_capacity(4).unwrap();
        assert_eq!((&buf).into_iter().count(), 0);
        assert_eq!((&mut buf).into_iter().count(), 0);
    }
}
