//! Serialization support for `BitArray` using serde.
//!
//! The value travels as its binary text form, e.g. `"0101"`, so the width
//! round-trips with the bits.

use core::fmt;

use serde::{Deserialize, Serialize, de};

use crate::BitArray;

impl<const W: usize> Serialize for BitArray<W> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, const W: usize> Deserialize<'de> for BitArray<W> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct BitArrayVisitor<const W: usize>;

        impl<const W: usize> de::Visitor<'_> for BitArrayVisitor<W> {
            type Value = BitArray<W>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string of '0' and '1' digits")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(BitArrayVisitor::<W>)
    }
}
