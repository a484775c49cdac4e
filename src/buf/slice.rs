// This file is part of fixed-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::buf::FixedBuffer;

impl<T> FixedBuffer<T> {
    /// Views the live prefix as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, all elements in `slots[..self.len]` are
        // initialized and `self.len <= capacity`, so this creates a valid
        // shared slice of initialized `T`.
        unsafe { core::slice::from_raw_parts(self.slots.as_ptr() as *const T, self.len) }
    }

    /// Views the live prefix as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: By invariant, all elements in `slots[..self.len]` are
        // initialized and `self.len <= capacity`. We have exclusive access via
        // `&mut self`, so it is sound to create a mutable slice over
        // `slots[..self.len]`.
        unsafe { core::slice::from_raw_parts_mut(self.slots.as_mut_ptr() as *mut T, self.len) }
    }

    /// Returns a raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` elements are logically initialized as `T`. Code
    /// that dereferences this pointer must treat `self.len()` as the number of
    /// initialized elements and avoid reading from `ptr.add(i)` for any
    /// `i >= self.len()`.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.slots.as_ptr() as *const T
    }

    /// Returns a mutable raw pointer to the start of the backing storage.
    ///
    /// Writing to the memory beyond `len` is allowed from Rust's point of
    /// view, but it does **not** update `len`, and such writes will not be
    /// reflected in the logical contents of the `FixedBuffer`.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr() as *mut T
    }
}
