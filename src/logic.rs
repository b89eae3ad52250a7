//! Word-wise logic operations for `BitArray`.

use crate::{BitArray, traits::BitArrayError};

impl<const W: usize> BitArray<W> {
    /// Applies `f` to each pair of words, storing into `self`.
    #[inline(always)]
    fn zip_words(
        &mut self,
        rhs: &Self,
        f: impl Fn(u64, u64) -> u64,
    ) -> Result<&mut Self, BitArrayError> {
        self.check_width(rhs)?;
        for i in 0..self.word_len() {
            self.words[i] = f(self.words[i], rhs.words[i]);
        }
        Ok(self)
    }

    /// Performs a bitwise AND with `rhs` in place.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::WidthMismatch`] if the widths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let mut a: BitArray = "1100".parse()?;
    /// let b: BitArray = "1010".parse()?;
    /// a.try_and_assign(&b)?;
    /// assert_eq!(a.to_binary_string(), "1000");
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    pub fn try_and_assign(&mut self, rhs: &Self) -> Result<&mut Self, BitArrayError> {
        self.zip_words(rhs, |a, b| a & b)
    }

    /// Performs a bitwise OR with `rhs` in place.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::WidthMismatch`] if the widths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let mut a: BitArray = "1100".parse()?;
    /// let b: BitArray = "1010".parse()?;
    /// a.try_or_assign(&b)?;
    /// assert_eq!(a.to_binary_string(), "1110");
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    pub fn try_or_assign(&mut self, rhs: &Self) -> Result<&mut Self, BitArrayError> {
        self.zip_words(rhs, |a, b| a | b)
    }

    /// Performs a bitwise XOR with `rhs` in place.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::WidthMismatch`] if the widths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_bitarray::BitArray;
    /// let mut a: BitArray = "1100".parse()?;
    /// let b: BitArray = "1010".parse()?;
    /// a.try_xor_assign(&b)?;
    /// assert_eq!(a.to_binary_string(), "0110");
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    pub fn try_xor_assign(&mut self, rhs: &Self) -> Result<&mut Self, BitArrayError> {
        self.zip_words(rhs, |a, b| a ^ b)
    }

    /// Returns `self & rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::WidthMismatch`] if the widths differ.
    pub fn try_and(&self, rhs: &Self) -> Result<Self, BitArrayError> {
        let mut result = self.clone();
        result.try_and_assign(rhs)?;
        Ok(result)
    }

    /// Returns `self | rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::WidthMismatch`] if the widths differ.
    pub fn try_or(&self, rhs: &Self) -> Result<Self, BitArrayError> {
        let mut result = self.clone();
        result.try_or_assign(rhs)?;
        Ok(result)
    }

    /// Returns `self ^ rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::WidthMismatch`] if the widths differ.
    pub fn try_xor(&self, rhs: &Self) -> Result<Self, BitArrayError> {
        let mut result = self.clone();
        result.try_xor_assign(rhs)?;
        Ok(result)
    }
}
