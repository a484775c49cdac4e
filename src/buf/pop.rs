// This file is part of fixed-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buf::FixedBuffer, error::Error};

impl<T> FixedBuffer<T> {
    /// Removes and returns the last element; returns [`Error::Empty`] if none.
    #[inline]
    pub fn pop(&mut self) -> Result<T, Error> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        self.len -= 1;
        // SAFETY: Before decrementing, all elements in `slots[..old_len]` are
        // initialized by invariant, so `slots[self.len]` (the old last slot)
        // still contains an initialized `T`. Reading it out moves ownership to
        // the caller, and the slot is now past `len`, so it will never be read
        // again.
        let out = unsafe { self.slots[self.len].assume_init_read() };
        Ok(out)
    }
}
