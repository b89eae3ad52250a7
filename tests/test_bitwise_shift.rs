use smol_bitarray::BitArray;

fn bits(s: &str) -> BitArray {
    s.parse().unwrap()
}

#[test]
fn test_and_or_xor() {
    let a = bits("1100");
    let b = bits("1010");
    assert_eq!((&a & &b).to_binary_string(), "1000");
    assert_eq!((&a | &b).to_binary_string(), "1110");
    assert_eq!((&a ^ &b).to_binary_string(), "0110");
}

#[test]
fn test_xor_is_not_and() {
    let a = bits("11");
    let b = bits("11");
    assert_eq!((&a ^ &b).to_binary_string(), "00");
    assert_eq!((&a & &b).to_binary_string(), "11");
}

#[test]
fn test_compound_forms() {
    let mut a = bits("1100");
    a &= bits("0110");
    assert_eq!(a.to_binary_string(), "0100");
    a |= &bits("0001");
    assert_eq!(a.to_binary_string(), "0101");
    a ^= bits("1111");
    assert_eq!(a.to_binary_string(), "1010");
}

#[test]
fn test_allocating_forms_leave_operands() {
    let a = bits("1100");
    let b = bits("1010");
    let c = a.try_xor(&b).unwrap();
    assert_eq!(c.to_binary_string(), "0110");
    assert_eq!(a.to_binary_string(), "1100");
    assert_eq!(b.to_binary_string(), "1010");
    assert_eq!(a.try_and(&b).unwrap().to_binary_string(), "1000");
    assert_eq!(a.try_or(&b).unwrap().to_binary_string(), "1110");
}

#[test]
fn test_bitwise_across_boundary() {
    let a = BitArray::<1>::from_words(130, &[0xff00, 0xf0f0, 0b11]);
    let b = BitArray::<1>::from_words(130, &[0x0ff0, 0xff00, 0b01]);
    let and = &a & &b;
    let or = &a | &b;
    let xor = &a ^ &b;
    assert_eq!(and.words().collect::<Vec<_>>(), [0x0f00, 0xf000, 0b01]);
    assert_eq!(or.words().collect::<Vec<_>>(), [0xfff0, 0xfff0, 0b11]);
    assert_eq!(xor.words().collect::<Vec<_>>(), [0xf0f0, 0x0ff0, 0b10]);
}

#[test]
fn test_not() {
    let a = bits("1100");
    assert_eq!((!&a).to_binary_string(), "0011");
    assert_eq!(!!a.clone(), a);

    let wide = BitArray::<1>::new(100);
    let ones = !wide;
    assert_eq!(ones.count_ones(), 100);
}

#[test]
#[should_panic(expected = "operand widths differ")]
fn test_xor_width_mismatch_panics() {
    let _ = bits("01") ^ bits("011");
}

#[test]
fn test_shift_left() {
    let a = bits("00010011");
    assert_eq!((&a << 0).to_binary_string(), "00010011");
    assert_eq!((&a << 1).to_binary_string(), "00100110");
    assert_eq!((&a << 4).to_binary_string(), "00110000");
    assert_eq!((&a << 7).to_binary_string(), "10000000");
    assert_eq!((&a << 8).to_binary_string(), "00000000");
    assert_eq!((&a << 1000).to_binary_string(), "00000000");
}

#[test]
fn test_shift_right() {
    let a = bits("11010000");
    assert_eq!((&a >> 0).to_binary_string(), "11010000");
    assert_eq!((&a >> 1).to_binary_string(), "01101000");
    assert_eq!((&a >> 4).to_binary_string(), "00001101");
    assert_eq!((&a >> 7).to_binary_string(), "00000001");
    assert_eq!((&a >> 8).to_binary_string(), "00000000");
}

#[test]
fn test_shift_assign() {
    let mut a = bits("0110");
    a <<= 1;
    assert_eq!(a.to_binary_string(), "1100");
    a >>= 3;
    assert_eq!(a.to_binary_string(), "0001");
}

#[test]
fn test_shift_left_word_aligned() {
    let a = BitArray::<1>::from_words(200, &[1, 2, 3, 4]);
    let shifted = &a << 64;
    assert_eq!(shifted.words().collect::<Vec<_>>(), [0, 1, 2, 3]);
    let shifted = &a << 128;
    assert_eq!(shifted.words().collect::<Vec<_>>(), [0, 0, 1, 2]);
}

#[test]
fn test_shift_left_bit_granular_across_boundary() {
    let a = BitArray::<1>::from_words(130, &[1 << 63, 0, 0]);
    let shifted = &a << 1;
    assert!(shifted.get(64));
    assert_eq!(shifted.count_ones(), 1);

    let shifted = &a << 66;
    assert!(shifted.get(129));
    assert_eq!(shifted.count_ones(), 1);

    // Falls off the top
    let shifted = &a << 67;
    assert!(shifted.is_zero());
}

#[test]
fn test_shift_left_byte_aligned() {
    let a = BitArray::<1>::from_words(128, &[0x1122_3344_5566_7788, 0]);
    let shifted = &a << 8;
    assert_eq!(shifted.word(0), 0x2233_4455_6677_8800);
    assert_eq!(shifted.word(1), 0x11);
}

#[test]
fn test_shift_right_across_boundary() {
    let a = BitArray::<1>::from_words(130, &[0, 0, 0b10]);
    let shifted = &a >> 66;
    assert!(shifted.get(63));
    assert_eq!(shifted.count_ones(), 1);
    let shifted = &a >> 129;
    assert!(shifted.get(0));
    assert_eq!(shifted.count_ones(), 1);
}

#[test]
fn test_shift_right_word_aligned() {
    let a = BitArray::<1>::from_words(192, &[1, 2, 3]);
    let shifted = &a >> 64;
    assert_eq!(shifted.words().collect::<Vec<_>>(), [2, 3, 0]);
}

#[test]
fn test_shift_round_trip_keeps_low_bits() {
    let a = BitArray::<1>::from_words(100, &[0xdead_beef_cafe_babe, 0xf]);
    let back = &(&a << 13) >> 13;
    let mut expected = a.clone();
    for i in 87..100 {
        expected.set(i, false);
    }
    assert_eq!(back, expected);
}
