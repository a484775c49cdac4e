// This file is part of fixed-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::buf::FixedBuffer;

// Core imports
use core::mem::MaybeUninit;

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

impl<T> From<Vec<T>> for FixedBuffer<T> {
    /// Adopts the vector's elements; the buffer's capacity equals the element
    /// count, so the result is full.
    fn from(vec: Vec<T>) -> Self {
        let len = vec.len();
        let slots = {
            let raw = Box::into_raw(vec.into_boxed_slice());
            // SAFETY: `MaybeUninit<T>` has the same size and alignment as `T`,
            // and every element of the boxed slice is initialized, so
            // reinterpreting `Box<[T]>` as `Box<[MaybeUninit<T>]>` keeps the
            // allocation and its contents intact. `len` marks all of them
            // live, preserving the buffer invariant.
            unsafe { Box::from_raw(raw as *mut [MaybeUninit<T>]) }
        };
        Self { slots, len }
    }
}
