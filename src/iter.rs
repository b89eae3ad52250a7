//! Iterator implementations for `BitArray`.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::{BitArray, macros::bitpos};

/// An iterator over the bits of a [`BitArray`], from bit 0 upward.
///
/// This struct is created by the [`iter`](BitArray::iter) method. Iterating
/// from the back yields the most significant bit first.
pub struct Iter<'a, const W: usize> {
    array: &'a BitArray<W>,
    front: usize,
    back: usize,
}

impl<'a, const W: usize> Iter<'a, W> {
    pub(crate) const fn new(array: &'a BitArray<W>) -> Self {
        Self {
            array,
            front: 0,
            back: array.width(),
        }
    }

    #[inline(always)]
    fn bit(&self, i: usize) -> bool {
        let (idx, bp) = bitpos!(i);
        (self.array.words[idx] >> bp) & 1 != 0
    }
}

impl<const W: usize> Iterator for Iter<'_, W> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let bit = self.bit(self.front);
        self.front += 1;
        Some(bit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<const W: usize> DoubleEndedIterator for Iter<'_, W> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.bit(self.back))
    }
}

impl<const W: usize> ExactSizeIterator for Iter<'_, W> {}

impl<const W: usize> FusedIterator for Iter<'_, W> {}

impl<const W: usize> FromIterator<bool> for BitArray<W> {
    /// Collects bits, least significant first. The width is the number of
    /// items.
    ///
    /// # Examples
    ///
    /// ```
    /// use smol_bitarray::BitArray;
    ///
    /// let a: BitArray = [true, false, true, true].into_iter().collect();
    /// assert_eq!(a.to_binary_string(), "1101");
    /// ```
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let mut words = Vec::new();
        let mut width = 0;
        for bit in iter {
            let (idx, bp) = bitpos!(width);
            if bp == 0 {
                words.push(0);
            }
            words[idx] |= u64::from(bit) << bp;
            width += 1;
        }
        Self::from_words(width, &words)
    }
}
