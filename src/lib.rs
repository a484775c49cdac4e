// This file is part of fixed-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `fixed-buffer-vec`
//!
//! A `no_std` (+ `alloc`), heap-allocated vector whose capacity is chosen **at
//! runtime, once, at construction** and never changes afterwards.
//!
//! The core type, [`FixedBuffer<T>`], owns a single contiguous region of
//! `capacity` element slots and tracks a logical length `len ∈ 0..=capacity`.
//! Elements are constructed in place on [`push`](FixedBuffer::push) and
//! destroyed in place on [`pop`](FixedBuffer::pop); the region itself is never
//! moved, resized, or reallocated for the buffer's lifetime.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You want `Vec`-like ergonomics with a hard, caller-chosen capacity and a
//!   guarantee that no reallocation will ever happen behind your back.
//! - The capacity is only known at runtime, so inline fixed-size types
//!   (`[T; N]`-backed stack vectors) are not an option.
//! - You want capacity overflow to be an explicit, recoverable error
//!   ([`Error::Full`]) rather than a silent grow.
//!
//! It may not be the best fit if:
//!
//! - You need growth; use `Vec`.
//! - Capacities are known at compile time and elements are small `Copy` data;
//!   an inline stack vector avoids the heap entirely.
//!
//! ## Semantics at a glance
//!
//! - Capacity is fixed by [`FixedBuffer::with_capacity`], which is **fallible**
//!   and reports allocation failure as [`Error::Alloc`] instead of aborting.
//! - Only the prefix `[0, len)` holds live elements. Indexing, slicing, and
//!   iteration are restricted to that prefix.
//! - Capacity-related failures never panic: [`push`](FixedBuffer::push)
//!   returns [`Error::Full`], [`pop`](FixedBuffer::pop) returns
//!   [`Error::Empty`], [`at`](FixedBuffer::at) returns
//!   [`Error::OutOfBounds`]. Index/range **operators** panic on out-of-bounds,
//!   exactly like built-in slices.
//! - Dropping a buffer destroys its live elements newest-first (the same order
//!   repeated [`pop`](FixedBuffer::pop) would produce), then releases the
//!   region.
//!
//! ## Cloning and assignment
//!
//! `Clone` gives an independent buffer with the **source's** capacity and a
//! clone of every live element, with a strong guarantee: if an element clone
//! panics partway, everything already cloned is destroyed and the new region
//! freed before the panic continues, and the source is untouched.
//!
//! **`clone_from` is deliberately asymmetric**: it keeps the *destination's*
//! original capacity and copies at most that many elements from the source,
//! silently truncating a larger source. `a.clone_from(&b)` therefore does
//! **not** make `a == b` when `b.len() > a.capacity()`. See
//! [`FixedBuffer::clone_from`](struct.FixedBuffer.html#method.clone_from) for
//! the full contract before relying on it.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `FixedBuffer<T>`.
//!   - Serializes as a plain sequence of the live elements; a deserialized
//!     buffer's capacity equals its element count.
//!
//! ## Example
//!
//! ```rust
//! use fixed_buffer_vec::{Error, FixedBuffer};
//!
//! let mut buf: FixedBuffer<u32> = FixedBuffer::with_capacity(3)?;
//! buf.push(1)?;
//! buf.push(2)?;
//! buf.push(3)?;
//! assert_eq!(buf.push(4), Err(Error::Full));
//! assert_eq!(buf.as_slice(), &[1, 2, 3]);
//! assert_eq!(buf.pop(), Ok(3));
//! # Ok::<(), fixed_buffer_vec::Error>(())
//! ```
//!
//! See [`FixedBuffer`] for detailed behavior, including indexing semantics,
//! iterator behavior, and the assignment contract.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod buf;
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;

// Public exports (crate API surface)
pub use buf::FixedBuffer;
pub use error::Error;
pub use iter::IntoIter;
