use proptest::prelude::*;
use smol_bitarray::BitArray;

/// Mask of the low `width` bits of a `u128`.
fn mask(width: usize) -> u128 {
    if width == 128 { u128::MAX } else { (1 << width) - 1 }
}

fn from_u128<const W: usize>(width: usize, value: u128) -> BitArray<W> {
    BitArray::from_words(width, &[value as u64, (value >> 64) as u64])
}

fn to_u128<const W: usize>(a: &BitArray<W>) -> u128 {
    a.words()
        .enumerate()
        .fold(0, |acc, (i, w)| acc | (u128::from(w) << (64 * i)))
}

// Strategy for a width and a value that fits in it
prop_compose! {
    fn width_and_value()
        (width in 1usize..=128)
        (value in any::<u128>(), width in Just(width))
        -> (usize, u128)
    {
        (width, value & mask(width))
    }
}

// Strategy for a width and three values of that width
prop_compose! {
    fn width_and_values()
        (width in 1usize..=128)
        (a in any::<u128>(), b in any::<u128>(), c in any::<u128>(), width in Just(width))
        -> (usize, u128, u128, u128)
    {
        let m = mask(width);
        (width, a & m, b & m, c & m)
    }
}

proptest! {
    #[test]
    fn test_reflexive_and_double_complement((width, x) in width_and_value()) {
        let a: BitArray = from_u128(width, x);
        prop_assert_eq!(&a, &a);
        prop_assert_eq!(!!a.clone(), a);
    }

    #[test]
    fn test_add_commutative((width, x, y, _) in width_and_values()) {
        let a: BitArray = from_u128(width, x);
        let b: BitArray = from_u128(width, y);
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn test_add_associative((width, x, y, z) in width_and_values()) {
        let a: BitArray = from_u128(width, x);
        let b: BitArray = from_u128(width, y);
        let c: BitArray = from_u128(width, z);
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn test_add_matches_model((width, x, y, _) in width_and_values()) {
        let a: BitArray = from_u128(width, x);
        let b: BitArray = from_u128(width, y);
        prop_assert_eq!(to_u128(&(&a + &b)), x.wrapping_add(y) & mask(width));
        prop_assert_eq!(to_u128(&(&a - &b)), x.wrapping_sub(y) & mask(width));
    }

    #[test]
    fn test_increment_decrement_inverse((width, x) in width_and_value()) {
        let a: BitArray = from_u128(width, x);
        let mut b = a.clone();
        b.decrement().increment();
        prop_assert_eq!(&b, &a);
        b.increment();
        prop_assert_eq!(to_u128(&b), x.wrapping_add(1) & mask(width));
        b.decrement();
        prop_assert_eq!(b, a);
    }

    #[test]
    fn test_negation_matches_model((width, x) in width_and_value()) {
        let a: BitArray = from_u128(width, x);
        prop_assert_eq!(to_u128(&-&a), x.wrapping_neg() & mask(width));
    }

    #[test]
    fn test_bitwise_matches_model((width, x, y, _) in width_and_values()) {
        let a: BitArray = from_u128(width, x);
        let b: BitArray = from_u128(width, y);
        prop_assert_eq!(to_u128(&(&a & &b)), x & y);
        prop_assert_eq!(to_u128(&(&a | &b)), x | y);
        prop_assert_eq!(to_u128(&(&a ^ &b)), x ^ y);
        prop_assert_eq!(to_u128(&!&a), !x & mask(width));
    }

    #[test]
    fn test_shifts_match_model((width, x) in width_and_value(), n in 0usize..140) {
        let a: BitArray = from_u128(width, x);
        let left = if n >= 128 { 0 } else { (x << n) & mask(width) };
        let right = if n >= 128 { 0 } else { x >> n };
        prop_assert_eq!(to_u128(&(&a << n)), left);
        prop_assert_eq!(to_u128(&(&a >> n)), right);
    }

    #[test]
    fn test_ordering_matches_model((width, x, y, _) in width_and_values()) {
        let a: BitArray = from_u128(width, x);
        let b: BitArray = from_u128(width, y);
        prop_assert_eq!(a.partial_cmp(&b), Some(x.cmp(&y)));
        prop_assert_eq!(a == b, x == y);
    }

    #[test]
    fn test_text_round_trip((width, x) in width_and_value()) {
        let a: BitArray = from_u128(width, x);
        let s = a.to_binary_string();
        prop_assert_eq!(s.len(), width);
        prop_assert_eq!(&s, &format!("{x:0width$b}"));
        let back: BitArray = s.parse().unwrap();
        prop_assert_eq!(back, a);
    }

    #[test]
    fn test_padding_never_observed(
        (width, x) in width_and_value(),
        junk in any::<u64>(),
    ) {
        prop_assume!(width % 64 != 0);
        let a: BitArray = from_u128(width, x);
        let mut b = a.clone();
        let top = b.word_len() - 1;
        let live = b.word(top);
        b.set_word(top, live | (junk << (width % 64)));
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.to_binary_string(), b.to_binary_string());
        prop_assert_eq!(a.partial_cmp(&b), Some(core::cmp::Ordering::Equal));
    }

    #[test]
    fn test_storage_layouts_agree((width, x, y, _) in width_and_values()) {
        // All-overflow, split, and all-inline renditions of the same width
        let heap: BitArray<0> = from_u128(width, x);
        let split: BitArray<1> = from_u128(width, x);
        let inline: BitArray<2> = from_u128(width, x);
        let heap_y: BitArray<0> = from_u128(width, y);
        let split_y: BitArray<1> = from_u128(width, y);
        let inline_y: BitArray<2> = from_u128(width, y);

        let sums = [
            to_u128(&(&heap + &heap_y)),
            to_u128(&(&split + &split_y)),
            to_u128(&(&inline + &inline_y)),
        ];
        prop_assert!(sums.iter().all(|&s| s == sums[0]));

        let mut h = heap.clone();
        let mut s = split.clone();
        let mut i = inline.clone();
        h.decrement();
        s.decrement();
        i.decrement();
        prop_assert_eq!(to_u128(&h), to_u128(&s));
        prop_assert_eq!(to_u128(&s), to_u128(&i));
        prop_assert_eq!(h.to_binary_string(), i.to_binary_string());
    }
}

#[test]
fn test_boundary_widths_agree() {
    // Widths straddling the single inline word
    for width in [63, 64, 65, 127, 128] {
        let all_ones = mask(width);
        for x in [0, 1, all_ones, all_ones >> 1, 1 << (width - 1)] {
            let split: BitArray<1> = from_u128(width, x);
            let heap: BitArray<0> = from_u128(width, x);
            let inline: BitArray<2> = from_u128(width, x);

            let mut a = split.clone();
            let mut b = heap.clone();
            let mut c = inline.clone();
            a.increment();
            b.increment();
            c.increment();
            let expected = x.wrapping_add(1) & all_ones;
            assert_eq!(to_u128(&a), expected, "width {width} x {x:#x}");
            assert_eq!(to_u128(&b), expected, "width {width} x {x:#x}");
            assert_eq!(to_u128(&c), expected, "width {width} x {x:#x}");
        }
    }
}
