// This file is part of fixed-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::buf::{new::uninit_slots, FixedBuffer};

// Core imports
use core::mem::MaybeUninit;

/// Tracks how many slots of a fresh region have been initialized so that an
/// element-clone panic unwinds them (newest first) instead of leaking.
///
/// On success the guard is defused with `mem::forget` and ownership of the
/// initialized prefix passes to the new buffer.
struct CloneGuard<'a, T> {
    slots: &'a mut [MaybeUninit<T>],
    init: usize,
}

impl<T: Clone> CloneGuard<'_, T> {
    fn fill_from(&mut self, src: &[T]) {
        for value in src {
            // A panicking `T::clone` happens before the write, so `init`
            // counts completed slots only.
            self.slots[self.init].write(value.clone());
            self.init += 1;
        }
    }
}

impl<T> Drop for CloneGuard<'_, T> {
    fn drop(&mut self) {
        for slot in self.slots[..self.init].iter_mut().rev() {
            // SAFETY: `slots[..init]` were fully written by `fill_from` and
            // have not been handed over to a buffer, so each holds an
            // initialized `T` that is dropped here exactly once.
            unsafe { slot.assume_init_drop() };
        }
    }
}

impl<T: Clone> Clone for FixedBuffer<T> {
    /// Produces an independent buffer with the source's capacity and a clone
    /// of every live element, in order.
    ///
    /// If cloning some element panics, the elements already cloned are
    /// destroyed and the new region is freed before the panic propagates; the
    /// source is untouched and no partially built buffer escapes.
    fn clone(&self) -> Self {
        let mut slots = uninit_slots(self.capacity());
        {
            let mut guard = CloneGuard {
                slots: &mut slots,
                init: 0,
            };
            guard.fill_from(self.as_slice());
            core::mem::forget(guard);
        }
        Self {
            slots,
            len: self.len,
        }
    }

    /// Replaces `self`'s contents with a copy of the source, **keeping
    /// `self`'s original capacity**.
    ///
    /// This is deliberately *not* the usual "make both equal" assignment: at
    /// most `min(self.capacity(), source.len())` elements are copied, and a
    /// source with more live elements than `self` has capacity is **silently
    /// truncated**. The destination's capacity never changes.
    ///
    /// A fresh region of `self`'s capacity is fully populated before the old
    /// elements are destroyed and the old region released, so a panicking
    /// element clone leaves `self` in its original state.
    ///
    /// ```
    /// use fixed_buffer_vec::FixedBuffer;
    ///
    /// let source = FixedBuffer::try_from(&[1, 2, 3, 4][..])?;
    /// let mut target: FixedBuffer<i32> = FixedBuffer::with_capacity(2)?;
    /// target.clone_from(&source);
    /// assert_eq!(target.as_slice(), &[1, 2]); // truncated!
    /// assert_eq!(target.capacity(), 2);
    /// # Ok::<(), fixed_buffer_vec::Error>(())
    /// ```
    fn clone_from(&mut self, source: &Self) {
        let cnt = core::cmp::min(self.capacity(), source.len);
        let mut slots = uninit_slots(self.capacity());
        {
            let mut guard = CloneGuard {
                slots: &mut slots,
                init: 0,
            };
            guard.fill_from(&source.as_slice()[..cnt]);
            core::mem::forget(guard);
        }
        // Commit point: the new region is fully built, so tearing down the
        // old contents can no longer fail partway.
        self.clear();
        self.slots = slots;
        self.len = cnt;
    }
}
