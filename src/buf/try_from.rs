// This file is part of fixed-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buf::FixedBuffer, error::Error};

impl<T: Clone> TryFrom<&[T]> for FixedBuffer<T> {
    type Error = Error;

    /// Builds a full buffer whose capacity equals the slice length.
    ///
    /// Fails only with [`Error::Alloc`]; the pushes cannot overflow a
    /// capacity sized to the source.
    fn try_from(src: &[T]) -> Result<Self, Error> {
        let mut buf = Self::with_capacity(src.len())?;
        for value in src {
            buf.push(value.clone())?;
        }
        Ok(buf)
    }
}
