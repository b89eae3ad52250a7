//! Modular arithmetic for `BitArray`.
//!
//! Every operation wraps modulo `2^width`. Carries and borrows move word by
//! word from the least significant end and never see the inline/overflow
//! split. Carries out of the top significant bit land in the padding or fall
//! off the end; both are ignored by every observer.

use crate::{BitArray, macros::msb, traits::BitArrayError};

/// Carry out of the top bit column of a word addition, given both addends
/// and the wrapped sum.
///
/// The column is a full adder over `msb(x)`, `msb(y)` and the carry into bit
/// 63, which is recovered from the sum as `msb(sum) ^ msb(x) ^ msb(y)`.
#[inline(always)]
const fn carry_out(x: u64, y: u64, sum: u64) -> bool {
    let (hx, hy) = (msb!(x), msb!(y));
    let into_top = msb!(sum) ^ hx ^ hy;
    (hx & hy) | (into_top & (hx ^ hy))
}

impl<const W: usize> BitArray<W> {
    /// Adds one in place, wrapping from all ones to all zeros.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let mut a: BitArray = "0111".parse()?;
    /// a.increment();
    /// assert_eq!(a.to_binary_string(), "1000");
    /// a.increment().increment();
    /// assert_eq!(a.to_binary_string(), "1010");
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    pub fn increment(&mut self) -> &mut Self {
        for i in 0..self.word_len() {
            let word = &mut self.words[i];
            *word = word.wrapping_add(1);
            if *word != 0 {
                break;
            }
        }
        self
    }

    /// Subtracts one in place, wrapping from all zeros to all ones.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let mut a: BitArray = "0000".parse()?;
    /// a.decrement();
    /// assert_eq!(a.to_binary_string(), "1111");
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    pub fn decrement(&mut self) -> &mut Self {
        for i in 0..self.word_len() {
            let word = &mut self.words[i];
            let prev = *word;
            *word = prev.wrapping_sub(1);
            if prev != 0 {
                // No borrow out of this word
                return self;
            }
        }
        self
    }

    /// Adds one and returns the value from before the increment.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let mut a: BitArray = "01".parse()?;
    /// let prev = a.post_increment();
    /// assert_eq!(prev.to_binary_string(), "01");
    /// assert_eq!(a.to_binary_string(), "10");
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    #[must_use = "use `increment` if the previous value is not needed"]
    pub fn post_increment(&mut self) -> Self {
        let prev = self.clone();
        self.increment();
        prev
    }

    /// Subtracts one and returns the value from before the decrement.
    #[must_use = "use `decrement` if the previous value is not needed"]
    pub fn post_decrement(&mut self) -> Self {
        let prev = self.clone();
        self.decrement();
        prev
    }

    /// Flips every bit in place.
    pub fn ones_complement(&mut self) -> &mut Self {
        for i in 0..self.word_len() {
            self.words[i] = !self.words[i];
        }
        self
    }

    /// Negates in place: one's complement followed by an increment.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let mut a: BitArray = "0110".parse()?;
    /// a.twos_complement();
    /// assert_eq!(a.to_binary_string(), "1010");
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    pub fn twos_complement(&mut self) -> &mut Self {
        self.ones_complement().increment()
    }

    /// Ripple-carry addition of `rhs` (or its complement) with an initial
    /// carry.
    fn add_words(&mut self, rhs: &Self, complement: bool, mut carry: bool) {
        let flip = if complement { !0 } else { 0 };
        for i in 0..self.word_len() {
            let x = self.words[i];
            let y = rhs.words[i] ^ flip;
            let sum = x.wrapping_add(y).wrapping_add(u64::from(carry));
            carry = carry_out(x, y, sum);
            self.words[i] = sum;
        }
    }

    /// Adds `rhs` in place, wrapping on overflow.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::WidthMismatch`] if the widths differ; `self`
    /// is untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let mut a: BitArray = "1111".parse()?;
    /// let b: BitArray = "0010".parse()?;
    /// a.try_add_assign(&b)?;
    /// assert_eq!(a.to_binary_string(), "0001");
    ///
    /// let c: BitArray = "010".parse()?;
    /// assert!(a.try_add_assign(&c).is_err());
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    pub fn try_add_assign(&mut self, rhs: &Self) -> Result<&mut Self, BitArrayError> {
        self.check_width(rhs)?;
        self.add_words(rhs, false, false);
        Ok(self)
    }

    /// Returns `self + rhs`, wrapping on overflow.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::WidthMismatch`] if the widths differ.
    pub fn try_add(&self, rhs: &Self) -> Result<Self, BitArrayError> {
        let mut sum = self.clone();
        sum.try_add_assign(rhs)?;
        Ok(sum)
    }

    /// Subtracts `rhs` in place, wrapping on underflow.
    ///
    /// Computed as `self + !rhs + 1` in a single pass.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::WidthMismatch`] if the widths differ; `self`
    /// is untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let mut a: BitArray = "0001".parse()?;
    /// let b: BitArray = "0011".parse()?;
    /// a.try_sub_assign(&b)?;
    /// assert_eq!(a.to_binary_string(), "1110");
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    pub fn try_sub_assign(&mut self, rhs: &Self) -> Result<&mut Self, BitArrayError> {
        self.check_width(rhs)?;
        self.add_words(rhs, true, true);
        Ok(self)
    }

    /// Returns `self - rhs`, wrapping on underflow.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::WidthMismatch`] if the widths differ.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, BitArrayError> {
        let mut diff = self.clone();
        diff.try_sub_assign(rhs)?;
        Ok(diff)
    }
}
