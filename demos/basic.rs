//! Basic usage examples for `BitArray`

use smol_bitarray::BitArray;

fn main() {
    println!("=== BitArray Basic Usage ===\n");

    // Create a zeroed 16-bit array
    let mut bits = BitArray::<1>::new(16);
    println!("Created {}-bit array: {bits}", bits.width());
    println!("Inline capacity: {} bits", BitArray::<1>::inline_capacity());
    println!("Is using heap storage? {}\n", bits.is_spilled());

    // Set some bits
    bits.set(0, true);
    bits.set(3, true);
    bits.set(15, true);
    println!("Set bits 0, 3, 15: {bits}");
    println!("Number of set bits: {}\n", bits.count_ones());

    // Check individual bits
    println!("Checking individual bits:");
    for i in [0, 1, 3, 15] {
        println!("  Bit {i}: {}", if bits[i] { "set" } else { "unset" });
    }

    // Assign through a bit reference
    bits.bit_mut(1).set(true);
    bits.bit_mut(3).flip();
    println!("\nAfter bit_mut(1).set(true), bit_mut(3).flip(): {bits}");

    // Parse and print
    let parsed: BitArray = "1100101".parse().expect("valid binary string");
    println!("\nParsed \"1100101\": {parsed:#b}");
    println!("Debug: {parsed:?}");
    match "10x1".parse::<BitArray>() {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("Parsing \"10x1\" fails: {err}"),
    }

    // Bitwise operators
    let a: BitArray = "1100".parse().expect("valid binary string");
    let b: BitArray = "1010".parse().expect("valid binary string");
    println!("\n{a} & {b} = {}", &a & &b);
    println!("{a} | {b} = {}", &a | &b);
    println!("{a} ^ {b} = {}", &a ^ &b);
    println!("!{a}     = {}", !&a);
    println!("{a} << 1 = {}", &a << 1);
    println!("{a} >> 2 = {}", &a >> 2);

    // Wide arrays spill past the inline words
    let mut wide = BitArray::<1>::new(200);
    wide.set(199, true);
    println!("\n200-bit array spilled? {}", wide.is_spilled());
    println!("Capacity: {} bits", wide.capacity());
    wide.resize(40, true);
    println!("Resized to 40 bits, spilled? {}", wide.is_spilled());

    // Iterate bit values, least significant first
    print!("\nBits of {a}, bit 0 first: ");
    for bit in &a {
        print!("{} ", u8::from(bit));
    }
    println!();
}
