// This file is part of fixed-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buf::FixedBuffer, error::Error};

impl<T> FixedBuffer<T> {
    /// Appends `value` if not full; returns [`Error::Full`] otherwise.
    ///
    /// On failure the buffer is left completely unchanged. The rejected
    /// `value` is dropped; check [`is_full`](Self::is_full) first if you need
    /// to keep it.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        if self.len == self.slots.len() {
            return Err(Error::Full);
        }

        self.slots[self.len].write(value);

        self.len += 1;
        Ok(())
    }
}
