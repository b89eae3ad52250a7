//! Hybrid inline/overflow word storage.
//!
//! Words `0..W` live in an inline array, words `W..` in an optional heap
//! buffer. Everything above this module addresses "word `i`" and never sees
//! the split.

use alloc::{boxed::Box, collections::TryReserveError, vec::Vec};
use core::ops::{Index, IndexMut};

use crate::macros::trace;

/// Number of bits in a storage word.
pub(crate) const WORD_BITS: usize = u64::BITS as usize;

/// Number of words needed to hold `bits` bits.
#[inline(always)]
pub(crate) const fn words_for(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

/// Mask of the live bits in the top word of a `width`-bit array.
///
/// When `width` is a whole number of words the full word is live.
#[inline(always)]
pub(crate) const fn top_mask(width: usize) -> u64 {
    match width & (WORD_BITS - 1) {
        0 => !0,
        rem => (1 << rem) - 1,
    }
}

/// Word buffer with `W` inline words and a heap overflow for the rest.
///
/// `len` is the number of logically occupied words. The overflow buffer is
/// present iff `len > W` and holds at least `len - W` words; its length is
/// its capacity, which shrinking never gives back.
pub(crate) struct WordBuf<const W: usize> {
    inline: [u64; W],
    overflow: Option<Box<[u64]>>,
    len: usize,
}

impl<const W: usize> WordBuf<W> {
    /// Creates an empty buffer without touching the heap.
    pub(crate) const fn new() -> Self {
        Self {
            inline: [0; W],
            overflow: None,
            len: 0,
        }
    }

    /// Creates a zeroed buffer of `len` words.
    #[cfg(test)]
    pub(crate) fn with_len(len: usize) -> Self {
        let mut buf = Self::new();
        buf.resize(len);
        buf
    }

    /// Fallible form of [`with_len`](Self::with_len).
    pub(crate) fn try_with_len(len: usize) -> Result<Self, TryReserveError> {
        let mut buf = Self::new();
        buf.try_resize(len)?;
        Ok(buf)
    }

    #[inline(always)]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Total words addressable without reallocating.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        W + self.overflow.as_ref().map_or(0, |o| o.len())
    }

    #[inline(always)]
    pub(crate) const fn is_spilled(&self) -> bool {
        self.overflow.is_some()
    }

    /// Resolves logical word `i` to its slot.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[inline]
    pub(crate) fn word(&self, i: usize) -> &u64 {
        assert!(i < self.len, "word index {i} out of range for {} words", self.len);
        match i.checked_sub(W) {
            None => &self.inline[i],
            Some(j) => match &self.overflow {
                Some(overflow) => &overflow[j],
                None => unreachable!("word {i} beyond inline storage without overflow"),
            },
        }
    }

    /// Mutable form of [`word`](Self::word).
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[inline]
    pub(crate) fn word_mut(&mut self, i: usize) -> &mut u64 {
        assert!(i < self.len, "word index {i} out of range for {} words", self.len);
        match i.checked_sub(W) {
            None => &mut self.inline[i],
            Some(j) => match &mut self.overflow {
                Some(overflow) => &mut overflow[j],
                None => unreachable!("word {i} beyond inline storage without overflow"),
            },
        }
    }

    /// Occupied words as `(inline part, overflow part)`.
    pub(crate) fn segments(&self) -> (&[u64], &[u64]) {
        let head = self.len.min(W);
        let tail = self.len - head;
        let overflow = self.overflow.as_deref().unwrap_or_default();
        (&self.inline[..head], &overflow[..tail])
    }

    /// Mutable form of [`segments`](Self::segments).
    pub(crate) fn segments_mut(&mut self) -> (&mut [u64], &mut [u64]) {
        let head = self.len.min(W);
        let tail = self.len - head;
        let overflow = self.overflow.as_deref_mut().unwrap_or_default();
        (&mut self.inline[..head], &mut overflow[..tail])
    }

    /// Changes the number of occupied words.
    ///
    /// Words exposed by growing are unspecified unless they come from a fresh
    /// allocation, which is zeroed. See [`try_resize`](Self::try_resize).
    ///
    /// # Panics
    ///
    /// Panics if the overflow buffer cannot be allocated.
    pub(crate) fn resize(&mut self, len: usize) {
        if let Err(err) = self.try_resize(len) {
            panic!("failed to allocate overflow storage for {len} words: {err}");
        }
    }

    /// Changes the number of occupied words, reporting allocation failure.
    ///
    /// Falling back inside the inline capacity releases the overflow buffer.
    /// Growing past the overflow capacity reallocates to exactly the needed
    /// size and copies the old overflow words. Shrinking while still spilled
    /// keeps the buffer as is, so a shrink followed by a regrow within the old
    /// capacity never allocates.
    pub(crate) fn try_resize(&mut self, len: usize) -> Result<(), TryReserveError> {
        let Some(needed) = len.checked_sub(W).filter(|&n| n > 0) else {
            if self.overflow.take().is_some() {
                trace!(words = len, "released overflow storage");
            }
            self.len = len;
            return Ok(());
        };

        let current = self.overflow.as_ref().map_or(0, |o| o.len());
        if needed > current {
            let mut grown = Vec::new();
            grown.try_reserve_exact(needed)?;
            grown.extend_from_slice(self.overflow.as_deref().unwrap_or_default());
            grown.resize(needed, 0);
            self.overflow = Some(grown.into_boxed_slice());
            trace!(words = len, overflow = needed, "allocated overflow storage");
        }
        self.len = len;
        Ok(())
    }

    /// Overwrites `self` with the contents of `other`, reusing the overflow
    /// allocation when it is large enough.
    pub(crate) fn copy_from(&mut self, other: &Self) {
        self.resize(other.len);
        self.inline = other.inline;
        let (_, dst) = self.segments_mut();
        let (_, src) = other.segments();
        dst.copy_from_slice(src);
    }
}

impl<const W: usize> Clone for WordBuf<W> {
    fn clone(&self) -> Self {
        let (_, tail) = self.segments();
        Self {
            inline: self.inline,
            overflow: (!tail.is_empty()).then(|| Box::from(tail)),
            len: self.len,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.copy_from(source);
    }
}

impl<const W: usize> Index<usize> for WordBuf<W> {
    type Output = u64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        self.word(index)
    }
}

impl<const W: usize> IndexMut<usize> for WordBuf<W> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.word_mut(index)
    }
}
