//! Integer arithmetic on `BitArray`

use smol_bitarray::{BitArray, BitArrayError};

fn main() -> Result<(), BitArrayError> {
    println!("=== BitArray Arithmetic ===\n");

    // A 4-bit counter wraps modulo 16
    let mut counter = BitArray::<1>::new(4);
    print!("Counting up:");
    for _ in 0..18 {
        print!(" {counter}");
        counter.increment();
    }
    println!("\n");

    print!("Counting down:");
    for _ in 0..3 {
        counter.decrement();
        print!(" {counter}");
    }
    println!("\n");

    // Postfix forms return the previous value
    let before = counter.post_increment();
    println!("post_increment: was {before}, now {counter}\n");

    // Addition and subtraction wrap at the width
    let a: BitArray = "11110000".parse()?;
    let b: BitArray = "00100001".parse()?;
    println!("{a} + {b} = {}", &a + &b);
    println!("{a} - {b} = {}", &a - &b);
    println!("-{b}        = {}\n", -&b);

    // Two's complement by hand
    let mut c = b.clone();
    c.ones_complement();
    println!("ones_complement({b}) = {c}");
    c.increment();
    println!("plus one            = {c}\n");

    // Carries ripple from the inline word into the heap words
    let mut wide = BitArray::<1>::from_words(130, &[u64::MAX, u64::MAX]);
    println!("130-bit value spilled? {}", wide.is_spilled());
    wide.increment();
    println!("low word after increment: {:#x}", wide.word(0));
    println!("bit 128 after increment: {}\n", wide.get(128));

    // Width mismatches are reported, not silently truncated
    let narrow: BitArray = "101".parse()?;
    match a.try_add(&narrow) {
        Ok(sum) => println!("unexpected sum {sum}"),
        Err(err) => println!("{a} + {narrow}: {err}"),
    }

    // Unsigned comparison
    let x: BitArray = "0111".parse()?;
    let y: BitArray = "1000".parse()?;
    println!("{x} < {y}: {}", x < y);
    println!("{x} vs {narrow}: {:?}", x.partial_cmp(&narrow));

    Ok(())
}
