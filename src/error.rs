// This file is part of fixed-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `FixedBuffer`.
//!
//! These errors represent allocation, capacity, and bounds conditions.
//! They are `Copy` and implement `core::error::Error` (on recent toolchains).

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`FixedBuffer`](crate::FixedBuffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The backing storage could not be allocated.
    ///
    /// Returned by [`FixedBuffer::with_capacity`](crate::FixedBuffer::with_capacity)
    /// when the allocator refuses the request or `capacity * size_of::<T>()`
    /// overflows.
    Alloc,
    /// A push was attempted while `len == capacity`.
    Full,
    /// A pop was attempted on an empty buffer.
    Empty,
    /// An index was outside the live range `[0, len)`.
    OutOfBounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alloc => f.write_str("allocation failed"),
            Self::Full => f.write_str("capacity exceeded"),
            Self::Empty => f.write_str("buffer is empty"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
        }
    }
}

impl CoreError for Error {}
