//! `BitArray` struct and core implementation.

use alloc::string::String;
use core::{cmp::Ordering, convert::Infallible, ops::Index};

use crate::{
    iter::Iter,
    macros::bitpos,
    storage::{WORD_BITS, WordBuf, top_mask, words_for},
    traits::{BitArrayError, expect_ok},
};

/// A fixed-width array of bits with integer semantics.
///
/// # Overview
///
/// `BitArray` behaves like an unsigned (or two's-complement) integer whose
/// width is picked at construction time. Arithmetic wraps modulo
/// `2^width`, bitwise operators work word by word, and the value round-trips
/// through a plain binary string.
///
/// # Storage Strategy
///
/// - **Inline**: the first `W` words (`W * 64` bits) live in the struct
/// - **Overflow**: words beyond that live in a heap buffer, allocated only
///   when the width needs them
///
/// The split is invisible: every operation carries across the boundary.
///
/// Bit `i` is bit `i % 64` of word `i / 64`, words least significant first.
/// Bits above `width` in the top word are padding; they may hold garbage
/// after arithmetic or shifts but never affect comparison, hashing or
/// formatting.
///
/// # Examples
///
/// ```
/// use smol_bitarray::BitArray;
///
/// let mut a: BitArray = "00001111".parse()?;
/// let b: BitArray = "00000001".parse()?;
/// a += &b;
/// assert_eq!(a.to_binary_string(), "00010000");
///
/// // Wider than the inline capacity: spills to the heap
/// let wide = BitArray::<1>::new(100);
/// assert!(wide.is_spilled());
/// # Ok::<(), smol_bitarray::BitArrayError>(())
/// ```
pub struct BitArray<const W: usize = 1> {
    pub(crate) width: usize,
    pub(crate) words: WordBuf<W>,
}

impl<const W: usize> BitArray<W> {
    /// Creates a zeroed bit array of `width` bits.
    ///
    /// # Panics
    ///
    /// Panics if the overflow storage cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let a = BitArray::<1>::new(8);
    /// assert_eq!(a.width(), 8);
    /// assert!(a.is_zero());
    /// ```
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self::with_width(width, true)
    }

    /// Creates a bit array of `width` bits.
    ///
    /// `clear` asks for the contents to be zeroed. Pass `false` when every
    /// bit is about to be overwritten; the initial contents are then
    /// unspecified. Storage is always initialized, so reading them is safe,
    /// just meaningless.
    #[must_use]
    pub fn with_width(width: usize, clear: bool) -> Self {
        let mut array = Self {
            width: 0,
            words: WordBuf::new(),
        };
        array.resize(width, clear);
        array
    }

    /// Fallible form of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::Alloc`] if the overflow storage cannot be
    /// allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::{BitArray, BitArrayError};
    /// assert!(BitArray::<1>::try_new(1000).is_ok());
    /// assert_eq!(BitArray::<1>::try_new(usize::MAX).err(), Some(BitArrayError::Alloc));
    /// ```
    pub fn try_new(width: usize) -> Result<Self, BitArrayError> {
        Ok(Self {
            width,
            words: WordBuf::try_with_len(words_for(width))?,
        })
    }

    /// Creates a bit array of `width` bits from little-endian words.
    ///
    /// Word 0 holds bits 0..64. Missing words are zero, extra words and bits
    /// above `width` are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let a = BitArray::<1>::from_words(70, &[1, 0b11]);
    /// assert!(a.get(0));
    /// assert!(a.get(64));
    /// assert!(a.get(65));
    /// assert_eq!(a.count_ones(), 3);
    /// ```
    #[must_use]
    pub fn from_words(width: usize, words: &[u64]) -> Self {
        let mut array = Self::new(width);
        for (i, &word) in words.iter().take(array.word_len()).enumerate() {
            array.words[i] = word;
        }
        array.mask_padding();
        array
    }

    /// Returns the number of significant bits.
    #[must_use]
    #[inline(always)]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns `true` if the width is zero.
    #[must_use]
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.width == 0
    }

    /// Returns the number of occupied words.
    #[must_use]
    #[inline(always)]
    pub const fn word_len(&self) -> usize {
        self.words.len()
    }

    /// Returns the number of bits stored without heap allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// assert_eq!(BitArray::<1>::inline_capacity(), 64);
    /// assert_eq!(BitArray::<4>::inline_capacity(), 256);
    /// ```
    #[must_use]
    pub const fn inline_capacity() -> usize {
        W * WORD_BITS
    }

    /// Returns the number of bits addressable without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.words.capacity() * WORD_BITS
    }

    /// Returns `true` if the array holds an overflow buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// assert!(!BitArray::<1>::new(64).is_spilled());
    /// assert!(BitArray::<1>::new(65).is_spilled());
    /// ```
    #[must_use]
    #[inline(always)]
    pub const fn is_spilled(&self) -> bool {
        self.words.is_spilled()
    }

    /// Changes the width.
    ///
    /// With `clear`, bits between the old and new width read as zero
    /// afterwards; without it they are unspecified.
    ///
    /// Storage is handled simply: shrinking keeps the overflow buffer unless
    /// the new width fits inline, and growing reallocates only past the
    /// current overflow capacity. Frequent resizing across the inline
    /// boundary therefore reallocates every time it crosses back out.
    ///
    /// # Panics
    ///
    /// Panics if the overflow storage cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let mut a: BitArray = "1011".parse()?;
    /// a.resize(6, true);
    /// assert_eq!(a.to_binary_string(), "001011");
    /// a.resize(2, true);
    /// assert_eq!(a.to_binary_string(), "11");
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    pub fn resize(&mut self, width: usize, clear: bool) {
        if let Err(err) = self.try_resize(width, clear) {
            panic!("failed to resize bit array to {width} bits: {err}");
        }
    }

    /// Fallible form of [`resize`](Self::resize).
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::Alloc`] if the overflow storage cannot be
    /// allocated. The array is left unchanged in that case.
    pub fn try_resize(&mut self, width: usize, clear: bool) -> Result<(), BitArrayError> {
        let old = self.width;
        self.words.try_resize(words_for(width))?;
        self.width = width;
        if clear && width > old {
            self.clear_from(old);
        }
        Ok(())
    }

    /// Zeroes every bit from `beg` up to the end of the occupied words.
    fn clear_from(&mut self, beg: usize) {
        let (idx, bp) = bitpos!(beg);
        if idx >= self.word_len() {
            return;
        }
        self.words[idx] &= !(!0 << bp);
        for i in idx + 1..self.word_len() {
            self.words[i] = 0;
        }
    }

    /// Returns word `i` with padding bits cleared.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.word_len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let a: BitArray = "1111".parse()?;
    /// assert_eq!(a.word(0), 0b1111);
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    #[must_use]
    pub fn word(&self, i: usize) -> u64 {
        let word = self.words[i];
        if i + 1 == self.word_len() {
            word & top_mask(self.width)
        } else {
            word
        }
    }

    /// Overwrites word `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.word_len()`.
    pub fn set_word(&mut self, i: usize, word: u64) {
        self.words[i] = word;
    }

    /// Iterates over the occupied words with padding cleared, least
    /// significant first.
    pub fn words(&self) -> impl DoubleEndedIterator<Item = u64> + ExactSizeIterator {
        (0..self.word_len()).map(|i| self.word(i))
    }

    /// Clears the padding bits of the top word.
    #[inline]
    pub(crate) fn mask_padding(&mut self) {
        if let Some(top) = self.word_len().checked_sub(1) {
            self.words[top] &= top_mask(self.width);
        }
    }

    /// Checks that `i` addresses a bit inside the width.
    #[inline]
    pub(crate) const fn check_index(&self, i: usize) -> Result<(), BitArrayError> {
        if i < self.width {
            Ok(())
        } else {
            Err(BitArrayError::IndexOutOfBounds {
                index: i,
                width: self.width,
            })
        }
    }

    /// Checks that `other` has the same width as `self`.
    #[inline]
    pub(crate) const fn check_width(&self, other: &Self) -> Result<(), BitArrayError> {
        if self.width == other.width {
            Ok(())
        } else {
            Err(BitArrayError::WidthMismatch {
                left: self.width,
                right: other.width,
            })
        }
    }

    // ========================================================================
    // Bit Access
    // ========================================================================

    /// Returns the value of bit `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.width()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let a: BitArray = "1010".parse()?;
    /// assert!(!a.get(0));
    /// assert!(a.get(1));
    /// assert!(a.get(3));
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn get(&self, i: usize) -> bool {
        expect_ok(self.try_get(i))
    }

    /// Returns the value of bit `i`, or an error if it is out of range.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfBounds`] if `i >= self.width()`.
    #[inline]
    pub fn try_get(&self, i: usize) -> Result<bool, BitArrayError> {
        self.check_index(i)?;
        let (idx, bp) = bitpos!(i);
        Ok((self.words[idx] >> bp) & 1 != 0)
    }

    /// Sets bit `i` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.width()`.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, i: usize, value: bool) {
        expect_ok(self.try_set(i, value));
    }

    /// Sets bit `i` to `value`, or returns an error if it is out of range.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::IndexOutOfBounds`] if `i >= self.width()`.
    pub fn try_set(&mut self, i: usize, value: bool) -> Result<(), BitArrayError> {
        self.check_index(i)?;
        let (idx, bp) = bitpos!(i);
        let word = &mut self.words[idx];
        if value {
            *word |= 1 << bp;
        } else {
            *word &= !(1 << bp);
        }
        Ok(())
    }

    /// Inverts bit `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.width()`.
    #[inline]
    #[track_caller]
    pub fn flip(&mut self, i: usize) {
        expect_ok(self.check_index(i));
        let (idx, bp) = bitpos!(i);
        self.words[idx] ^= 1 << bp;
    }

    /// Returns an assignable view of bit `i`.
    ///
    /// The view borrows the array mutably, so it cannot outlive it or be held
    /// across other accesses.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.width()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let mut a = BitArray::<1>::new(4);
    /// a.bit_mut(2).set(true);
    /// a.bit_mut(0).flip();
    /// assert_eq!(a.to_binary_string(), "0101");
    /// ```
    #[track_caller]
    pub fn bit_mut(&mut self, i: usize) -> BitRef<'_, W> {
        expect_ok(self.check_index(i));
        BitRef {
            array: self,
            index: i,
        }
    }

    /// Iterates over the bits from bit 0 upward.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let a: BitArray = "110".parse()?;
    /// let bits: Vec<bool> = a.iter().collect();
    /// assert_eq!(bits, [false, true, true]);
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    pub fn iter(&self) -> Iter<'_, W> {
        Iter::new(self)
    }

    /// Sets every bit to zero.
    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// Sets every bit to `value`.
    pub fn fill(&mut self, value: bool) {
        let word = if value { !0 } else { 0 };
        let (head, tail) = self.words.segments_mut();
        head.fill(word);
        tail.fill(word);
        self.mask_padding();
    }

    /// Returns the number of set bits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let a = BitArray::<1>::from_words(100, &[!0, !0]);
    /// assert_eq!(a.count_ones(), 100);
    /// ```
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if no bit is set.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.words().all(|w| w == 0)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compares two equal-width arrays as unsigned integers.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::WidthMismatch`] if the widths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use core::cmp::Ordering;
    /// # use smol_bitarray::BitArray;
    /// let a: BitArray = "0110".parse()?;
    /// let b: BitArray = "1000".parse()?;
    /// assert_eq!(a.try_cmp(&b)?, Ordering::Less);
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, BitArrayError> {
        self.check_width(other)?;
        Ok(self.cmp_words(other))
    }

    /// Unsigned comparison from the most significant word down. Widths must
    /// already match.
    pub(crate) fn cmp_words(&self, other: &Self) -> Ordering {
        debug_assert_eq!(self.width, other.width);
        for i in (0..self.word_len()).rev() {
            match self.word(i).cmp(&other.word(i)) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// Equality of the significant bits. Widths must already match.
    pub(crate) fn eq_words(&self, other: &Self) -> bool {
        debug_assert_eq!(self.width, other.width);
        let Some(top) = self.word_len().checked_sub(1) else {
            return true;
        };
        (0..top).all(|i| self.words[i] == other.words[i]) && self.word(top) == other.word(top)
    }

    // ========================================================================
    // Shift Operations
    // ========================================================================

    /// Shifts all bits toward the most significant end by `n`, filling with
    /// zeros. Bits pushed past the width are lost.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let mut a: BitArray = "00010011".parse()?;
    /// a.shift_left(3);
    /// assert_eq!(a.to_binary_string(), "10011000");
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    pub fn shift_left(&mut self, n: usize) -> &mut Self {
        if n >= self.width {
            self.clear();
            return self;
        }

        let len = self.word_len();
        let (word_shift, shift) = bitpos!(n);
        if shift == 0 {
            // Word-aligned: plain moves
            for i in (word_shift..len).rev() {
                self.words[i] = self.words[i - word_shift];
            }
        } else {
            for i in (word_shift + 1..len).rev() {
                let hi = self.words[i - word_shift] << shift;
                let lo = self.words[i - word_shift - 1] >> (WORD_BITS - shift);
                self.words[i] = hi | lo;
            }
            self.words[word_shift] = self.words[0] << shift;
        }
        for i in 0..word_shift {
            self.words[i] = 0;
        }
        self
    }

    /// Shifts all bits toward the least significant end by `n`, filling with
    /// zeros. Bits pushed below bit 0 are lost.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let mut a: BitArray = "10011000".parse()?;
    /// a.shift_right(3);
    /// assert_eq!(a.to_binary_string(), "00010011");
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    pub fn shift_right(&mut self, n: usize) -> &mut Self {
        if n >= self.width {
            self.clear();
            return self;
        }

        // Padding would otherwise shift into the significant bits
        self.mask_padding();

        let len = self.word_len();
        let (word_shift, shift) = bitpos!(n);
        let keep = len - word_shift;
        if shift == 0 {
            for i in 0..keep {
                self.words[i] = self.words[i + word_shift];
            }
        } else {
            for i in 0..keep - 1 {
                let lo = self.words[i + word_shift] >> shift;
                let hi = self.words[i + word_shift + 1] << (WORD_BITS - shift);
                self.words[i] = lo | hi;
            }
            self.words[keep - 1] = self.words[len - 1] >> shift;
        }
        for i in keep..len {
            self.words[i] = 0;
        }
        self
    }

    // ========================================================================
    // Text Conversion
    // ========================================================================

    /// Builds a bit array from a base-2 digit string, one bit per character,
    /// most significant first.
    ///
    /// This is the lenient form: only `'1'` sets a bit and every other
    /// character, `'0'` included, clears it. Use [`str::parse`] to reject
    /// anything but `'0'` and `'1'`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let a = BitArray::<1>::from_binary_str("1x01");
    /// assert_eq!(a.width(), 4);
    /// assert_eq!(a.to_binary_string(), "1001");
    /// ```
    #[must_use]
    pub fn from_binary_str(s: &str) -> Self {
        let mut array = Self::with_width(s.chars().count(), false);
        let Ok(()) = array.load_digits::<Infallible>(s, |_, ch| Ok(u64::from(ch == '1')));
        array
    }

    /// Parses a digit string in the given radix.
    ///
    /// Only radix 2 is supported, with the same rules as [`str::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::UnsupportedRadix`] for any radix other than 2,
    /// or [`BitArrayError::InvalidChar`] for a character other than `'0'` or
    /// `'1'`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::{BitArray, BitArrayError};
    /// assert!(BitArray::<1>::from_str_radix("101", 2).is_ok());
    /// assert_eq!(
    ///     BitArray::<1>::from_str_radix("ff", 16).err(),
    ///     Some(BitArrayError::UnsupportedRadix(16))
    /// );
    /// ```
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, BitArrayError> {
        if radix != 2 {
            return Err(BitArrayError::UnsupportedRadix(radix));
        }
        let mut array = Self::with_width(s.chars().count(), false);
        array.load_digits(s, |pos, ch| match ch {
            '1' => Ok(1),
            '0' => Ok(0),
            _ => Err(BitArrayError::InvalidChar { ch, pos }),
        })?;
        Ok(array)
    }

    /// Packs the digits of `s` into the words, least significant digit last
    /// in the string. `digit` maps `(bit index, char)` to a bit.
    fn load_digits<E>(
        &mut self,
        s: &str,
        mut digit: impl FnMut(usize, char) -> Result<u64, E>,
    ) -> Result<(), E> {
        let mut idx = 0;
        let mut twidth = 0;
        let mut tvalue = 0;
        for (pos, ch) in s.chars().rev().enumerate() {
            let bit = digit(pos, ch)?;
            tvalue |= bit << twidth;
            twidth += 1;
            if twidth == WORD_BITS {
                self.words[idx] = tvalue;
                idx += 1;
                twidth = 0;
                tvalue = 0;
            }
        }
        if twidth != 0 {
            self.words[idx] = tvalue;
        }
        Ok(())
    }

    /// Renders the bits as `'0'`/`'1'`, most significant first, without a
    /// prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let a = BitArray::<1>::from_words(6, &[0b100101]);
    /// assert_eq!(a.to_binary_string(), "100101");
    /// ```
    #[must_use]
    pub fn to_binary_string(&self) -> String {
        self.iter().rev().map(|bit| if bit { '1' } else { '0' }).collect()
    }

    /// Renders the bits in the given radix.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::UnsupportedRadix`] for any radix other than 2.
    pub fn to_string_radix(&self, radix: u32) -> Result<String, BitArrayError> {
        match radix {
            2 => Ok(self.to_binary_string()),
            _ => Err(BitArrayError::UnsupportedRadix(radix)),
        }
    }
}

impl<const W: usize> Index<usize> for BitArray<W> {
    type Output = bool;

    /// Returns a reference to a static `bool` matching bit `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.width()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let a: BitArray = "10".parse()?;
    /// assert!(a[1]);
    /// assert!(!a[0]);
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    fn index(&self, index: usize) -> &Self::Output {
        if self.get(index) { &true } else { &false }
    }
}

/// Assignable view of a single bit, returned by
/// [`BitArray::bit_mut`].
///
/// Holds the array's mutable borrow for as long as it lives.
pub struct BitRef<'a, const W: usize> {
    array: &'a mut BitArray<W>,
    index: usize,
}

impl<const W: usize> BitRef<'_, W> {
    /// Index of the viewed bit.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Reads the bit.
    #[must_use]
    pub fn get(&self) -> bool {
        self.array.get(self.index)
    }

    /// Writes the bit.
    pub fn set(&mut self, value: bool) {
        self.array.set(self.index, value);
    }

    /// Inverts the bit.
    pub fn flip(&mut self) {
        self.array.flip(self.index);
    }
}

impl<const W: usize> From<BitRef<'_, W>> for bool {
    fn from(bit: BitRef<'_, W>) -> Self {
        bit.get()
    }
}
