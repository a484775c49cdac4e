// This file is part of fixed-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::buf::FixedBuffer;

impl<T> FixedBuffer<T> {
    /// Destroys all live elements, newest-first. Capacity is unaffected.
    #[inline]
    pub fn clear(&mut self) {
        // Cannot fail: pop only errs once the buffer is empty.
        while self.pop().is_ok() {}
    }
}

impl<T> Drop for FixedBuffer<T> {
    fn drop(&mut self) {
        // Destroy live elements in reverse order, matching repeated `pop`;
        // the boxed slice then releases the region.
        self.clear();
    }
}
