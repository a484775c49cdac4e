// This file is part of fixed-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buf::FixedBuffer, error::Error};

impl<T> FixedBuffer<T> {
    /// Returns a reference to the element at `index`, or
    /// [`Error::OutOfBounds`] if `index >= len`.
    ///
    /// Indices are `usize`, so there is no negative-index case; everything at
    /// or past `len` is out of range, including the allocated-but-unused tail.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.as_slice().get(index).ok_or(Error::OutOfBounds)
    }

    /// Mutable variant of [`at`](Self::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.as_mut_slice().get_mut(index).ok_or(Error::OutOfBounds)
    }

    /// Returns the first element; shorthand for `at(0)`.
    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        self.at(0)
    }

    /// Returns the last element; shorthand for `at(len - 1)`.
    #[inline]
    pub fn back(&self) -> Result<&T, Error> {
        let last = self.len.checked_sub(1).ok_or(Error::OutOfBounds)?;
        self.at(last)
    }

    /// Mutable variant of [`front`](Self::front).
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        self.at_mut(0)
    }

    /// Mutable variant of [`back`](Self::back).
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        let last = self.len.checked_sub(1).ok_or(Error::OutOfBounds)?;
        self.at_mut(last)
    }
}
