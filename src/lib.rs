//! Fixed-width bit arrays with integer arithmetic and inline storage.
//!
//! This crate provides [`BitArray`], an array of bits whose width is chosen
//! at construction time and which behaves like an unsigned or two's-complement
//! integer of that width. Bits are stored in 64-bit words; the first `W`
//! words live inline in the struct and only wider arrays touch the heap.
//!
//! # Features
//!
//! - **Zero allocation** for widths up to `W * 64` bits
//! - **Modular arithmetic**: increment, decrement, addition, subtraction and
//!   negation wrapping at `2^width`
//! - **Bitwise logic** (AND, OR, XOR, NOT) and logical shifts by any amount
//! - **Unsigned comparison** that ignores the padding above the width
//! - **Binary text round-trip**, optionally through serde
//! - **`no_std` support** with `alloc`
//!
//! # Examples
//!
//! ```
//! use smol_bitarray::BitArray;
//!
//! // 8-bit register, stored inline
//! let mut a: BitArray = "11111111".parse()?;
//! a.increment();
//! assert_eq!(a.to_binary_string(), "00000000");
//!
//! let x: BitArray = "00001111".parse()?;
//! let y: BitArray = "00000001".parse()?;
//! assert_eq!(&x + &y, "00010000".parse::<BitArray>()?);
//!
//! // Widths must match
//! let z: BitArray = "101".parse()?;
//! assert!(x.try_add(&z).is_err());
//! # Ok::<(), smol_bitarray::BitArrayError>(())
//! ```
//!
//! # Storage Strategy
//!
//! `BitArray<W>` keeps `W` words inline (default 1, i.e. 64 bits) plus an
//! overflow buffer for the words above them:
//!
//! - **Inline storage**: widths up to `W * 64` bits never allocate
//! - **Overflow storage**: wider arrays allocate exactly the extra words
//!
//! Every algorithm addresses "word `i`" and carries across the split without
//! the caller noticing. `BitArray<0>` keeps everything on the heap.
//!
//! # Contract Violations
//!
//! Mixing widths in a binary operator, indexing past the width, or asking
//! for a radix other than 2 is an error. The operator traits panic; the
//! `try_*` methods return [`BitArrayError`]. Arithmetic overflow is not an
//! error: it wraps.
//!
//! # Cargo Features
//!
//! - `std` (default): implements `std::error::Error` for [`BitArrayError`]
//! - `serde`: serializes as the binary text form
//! - `tracing`: emits `trace!` events when overflow storage is allocated or
//!   released

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
mod arith;
mod bitarray;
mod iter;
mod logic;
mod macros;
mod storage;
mod traits;

#[cfg(feature = "serde")]
mod ser;

// Re-exports
pub use bitarray::{BitArray, BitRef};
pub use iter::Iter;
pub use traits::BitArrayError;
