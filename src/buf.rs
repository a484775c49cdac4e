// This file is part of fixed-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `FixedBuffer` type and its inherent API.
//!
//! `FixedBuffer<T>` is a heap-allocated vector whose capacity is chosen at
//! construction and never changes. It stores elements contiguously in a single
//! owned region of uninitialized slots and tracks a logical length. Methods
//! generally mirror slice/vector semantics, with explicit capacity checks and
//! fallible variants where appropriate.
//!
//! The region is allocated exactly once and never reallocated.

// Invariants:
// - `0 <= len <= slots.len()` always holds; `slots.len()` is the capacity and
//   never changes after construction (only `clone_from` replaces the region
//   wholesale, with a fresh one of the same capacity).
// - Elements in `slots[..len]` are initialized `T` values.
// - Elements in `slots[len..]` are logically uninitialized and must never be
//   read as `T`.
// - All public methods maintain these invariants.

mod at;
mod clear;
mod clone;
mod from;
mod new;
mod pop;
mod push;
mod slice;
mod try_from;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    iter::Rev,
    mem::MaybeUninit,
    ops::{Deref, DerefMut},
    slice::{Iter, IterMut},
};

// Alloc imports
use alloc::boxed::Box;

/// A heap-allocated vector with a capacity fixed at construction.
///
/// `FixedBuffer<T>` owns one contiguous region of `capacity` element slots and
/// tracks a logical length `len ∈ 0..=capacity`:
///
/// - capacity is chosen at runtime by [`with_capacity`](Self::with_capacity)
///   and is immutable for the buffer's lifetime;
/// - the region is allocated exactly once and never moved, resized, or
///   reallocated;
/// - only the prefix `slots[..len]` holds live elements, and all safe APIs
///   (indexing, slicing, iteration) are restricted to that prefix;
/// - `T: Clone` is required only by the copying operations ([`Clone`],
///   [`TryFrom<&[T]>`](TryFrom)); storage and push/pop work for any `T`.
///
/// # Failure behavior
///
/// Capacity- and bounds-sensitive operations never panic; they return
/// [`Error`](crate::Error) and leave the buffer exactly as it was:
///
/// - [`push`](Self::push) → [`Error::Full`](crate::Error::Full) at capacity;
/// - [`pop`](Self::pop) → [`Error::Empty`](crate::Error::Empty) when empty;
/// - [`at`](Self::at) / [`at_mut`](Self::at_mut) /
///   [`front`](Self::front) / [`back`](Self::back) →
///   [`Error::OutOfBounds`](crate::Error::OutOfBounds);
/// - [`with_capacity`](Self::with_capacity) →
///   [`Error::Alloc`](crate::Error::Alloc) when the allocator refuses.
///
/// Only the index/range **operators** (`buf[i]`, `buf[a..b]`, …) panic on
/// out-of-bounds, exactly like built-in slices. There is no unchecked
/// indexing.
///
/// # Destruction order
///
/// Dropping the buffer destroys the live elements newest-first, the same order
/// repeated [`pop`](Self::pop) would produce, then releases the region.
///
/// # Cloning and assignment
///
/// [`Clone::clone`] produces an independent buffer with the **source's**
/// capacity. [`Clone::clone_from`] instead preserves the **destination's**
/// capacity and truncates a larger source; see its documentation — this is the
/// one deliberately surprising contract in the crate.
///
/// # Example
///
/// ```rust
/// use fixed_buffer_vec::FixedBuffer;
///
/// let mut buf: FixedBuffer<i32> = FixedBuffer::with_capacity(4)?;
/// buf.push(1)?;
/// buf.push(2)?;
/// assert_eq!(buf.as_slice(), &[1, 2]);
/// assert_eq!(buf.capacity(), 4);
/// # Ok::<(), fixed_buffer_vec::Error>(())
/// ```
pub struct FixedBuffer<T> {
    pub(crate) slots: Box<[MaybeUninit<T>]>,
    pub(crate) len: usize,
}

impl<T> FixedBuffer<T> {
    /// Returns the fixed capacity (total slot count).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the current logical length (`0..=capacity`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == capacity`.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    // iterators
    /// Iterates over the live elements from front to back.
    ///
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Iterates over the live elements from back to front.
    ///
    /// A reversed view over the live index range: the first item is the
    /// element at `len - 1`, the last is the element at `0`.
    #[inline]
    pub fn iter_rev(&self) -> Rev<Iter<'_, T>> {
        self.as_slice().iter().rev()
    }
}

impl<T: fmt::Debug> fmt::Debug for FixedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedBuffer")
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

// Equality and ordering compare the live elements only; capacity does not
// participate.
impl<T: PartialEq> PartialEq for FixedBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for FixedBuffer<T> {}
impl<T: Ord> Ord for FixedBuffer<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for FixedBuffer<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for FixedBuffer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for FixedBuffer<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for FixedBuffer<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for FixedBuffer<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for FixedBuffer<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for FixedBuffer<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for FixedBuffer<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
