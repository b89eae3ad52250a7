//! Example demonstrating `no_std` usage with `BitArray`
// #![no_std]

extern crate alloc;
use alloc::{string::String, vec, vec::Vec};
use smol_bitarray::BitArray;

fn main() {
    // Create an array - works the same in no_std
    let mut bits = BitArray::<1>::new(32);

    bits.set(5, true);
    bits.set(10, true);
    bits.increment();
    core::hint::black_box(bits.count_ones());

    // Build from bools - uses alloc::vec
    let values: Vec<bool> = vec![true, false, true, true];
    let from_vec: BitArray = values.into_iter().collect();
    core::hint::black_box(from_vec.width());

    // Text conversion needs only alloc::string
    let text: String = from_vec.to_binary_string();
    core::hint::black_box(text.len());

    // Fallible forms report errors instead of panicking
    let mismatch = bits.try_add(&from_vec);
    core::hint::black_box(mismatch.is_err());

    // Wide arrays use alloc for the overflow words
    let mut large = BitArray::<1>::new(1000);
    large.set(999, true);
    core::hint::black_box(large.is_spilled());

    for bit in from_vec.iter().take(3) {
        core::hint::black_box(bit);
    }
}
