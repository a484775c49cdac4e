// This file is part of fixed-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`FixedBuffer`](crate::FixedBuffer).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize**: from any sequence. The capacity of a deserialized
//!   buffer equals its element count; spare capacity is not part of the
//!   serialized form.

// Crate imports
use crate::buf::FixedBuffer;

// Core imports
use core::fmt;

// Alloc imports
use alloc::vec::Vec;

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for FixedBuffer<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct BufVisitor<T>(core::marker::PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for BufVisitor<T> {
    type Value = FixedBuffer<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of elements")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = Vec::with_capacity(a.size_hint().unwrap_or(0));
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem);
        }
        Ok(FixedBuffer::from(out))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FixedBuffer<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(BufVisitor::<T>(core::marker::PhantomData))
    }
}
