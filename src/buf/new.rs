// This file is part of fixed-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buf::FixedBuffer, error::Error};

// Core imports
use core::mem::MaybeUninit;

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

/// Allocates a region of `capacity` uninitialized slots, reporting failure
/// instead of aborting.
pub(crate) fn try_uninit_slots<T>(capacity: usize) -> Result<Box<[MaybeUninit<T>]>, Error> {
    let mut slots: Vec<MaybeUninit<T>> = Vec::new();
    if slots.try_reserve_exact(capacity).is_err() {
        return Err(Error::Alloc);
    }
    slots.resize_with(capacity, MaybeUninit::uninit);
    Ok(slots.into_boxed_slice())
}

/// Allocates a region of `capacity` uninitialized slots.
///
/// Used by the `Clone` paths, which cannot surface an error and so follow the
/// std-container convention of letting the global allocator's failure path
/// take over.
pub(crate) fn uninit_slots<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    let mut slots: Vec<MaybeUninit<T>> = Vec::with_capacity(capacity);
    slots.resize_with(capacity, MaybeUninit::uninit);
    slots.into_boxed_slice()
}

impl<T> FixedBuffer<T> {
    /// Constructs an empty buffer with exactly `capacity` slots.
    ///
    /// The region is allocated here, once, and no element is constructed; the
    /// capacity never changes afterwards. Returns [`Error::Alloc`] if the
    /// allocator cannot provide the region or the byte size overflows.
    ///
    /// ```
    /// use fixed_buffer_vec::FixedBuffer;
    ///
    /// let buf: FixedBuffer<u8> = FixedBuffer::with_capacity(16)?;
    /// assert_eq!(buf.capacity(), 16);
    /// assert!(buf.is_empty());
    /// # Ok::<(), fixed_buffer_vec::Error>(())
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            slots: try_uninit_slots(capacity)?,
            len: 0,
        })
    }
}
