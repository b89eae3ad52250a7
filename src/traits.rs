//! Trait implementations for `BitArray`.

use alloc::collections::TryReserveError;
use core::{
    cmp::Ordering,
    fmt::{self, Write},
    hash::{Hash, Hasher},
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Neg, Not,
        Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
    },
    str::FromStr,
};

use crate::{BitArray, iter::Iter, storage::WordBuf};

/// Errors reported by the checked operations of [`BitArray`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitArrayError {
    /// The operands of a binary operation have different widths.
    WidthMismatch {
        /// Width of the left operand
        left: usize,
        /// Width of the right operand
        right: usize,
    },

    /// A bit index is not below the width.
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Width of the array
        width: usize,
    },

    /// A radix other than 2 was requested.
    UnsupportedRadix(u32),

    /// Invalid character found in a binary string.
    InvalidChar {
        /// The invalid character found
        ch: char,
        /// Bit position the character would have occupied
        pos: usize,
    },

    /// The overflow storage could not be allocated.
    Alloc,
}

impl fmt::Display for BitArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WidthMismatch { left, right } => {
                write!(f, "operand widths differ: {left} bits vs {right} bits")
            }
            Self::IndexOutOfBounds { index, width } => {
                write!(f, "bit index {index} out of range for width {width}")
            }
            Self::UnsupportedRadix(radix) => {
                write!(f, "unsupported radix {radix}, only base 2 is supported")
            }
            Self::InvalidChar { ch, pos } => {
                write!(f, "invalid character '{ch}' for bit {pos} in binary string")
            }
            Self::Alloc => f.write_str("failed to allocate overflow storage"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitArrayError {}

impl From<TryReserveError> for BitArrayError {
    fn from(_: TryReserveError) -> Self {
        Self::Alloc
    }
}

/// Unwraps the result of a checked operation, panicking with the error's
/// message at the caller.
#[track_caller]
#[inline]
pub(crate) fn expect_ok<T>(result: Result<T, BitArrayError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

impl<const W: usize> Default for BitArray<W> {
    /// Returns a zero-width array.
    fn default() -> Self {
        Self {
            width: 0,
            words: WordBuf::new(),
        }
    }
}

impl<const W: usize> Clone for BitArray<W> {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            words: self.words.clone(),
        }
    }

    /// Copies `source` into `self`, reusing the overflow allocation when it
    /// is large enough.
    fn clone_from(&mut self, source: &Self) {
        self.words.clone_from(&source.words);
        self.width = source.width;
    }
}

impl<const W: usize> fmt::Display for BitArray<W> {
    /// Writes the bits most significant first, e.g. `0101`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter().rev() {
            f.write_char(if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl<const W: usize> fmt::Binary for BitArray<W> {
    /// Formats the bits most significant first, all `width` of them.
    ///
    /// The alternate flag adds a `0b` prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use smol_bitarray::BitArray;
    ///
    /// let a = BitArray::<1>::from_words(6, &[0b101]);
    /// assert_eq!(format!("{a:b}"), "000101");
    /// assert_eq!(format!("{a:#b}"), "0b000101");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        fmt::Display::fmt(self, f)
    }
}

impl<const W: usize> fmt::Debug for BitArray<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitArray")
            .field("width", &self.width)
            .field("bits", &format_args!("{self}"))
            .field("spilled", &self.is_spilled())
            .finish()
    }
}

impl<const W: usize> FromStr for BitArray<W> {
    type Err = BitArrayError;

    /// Parses the binary text format: one `'0'` or `'1'` per bit, most
    /// significant first, no prefix. The width is the string length.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::InvalidChar`] for any other character,
    /// including radix prefixes such as `0b` or `0x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use smol_bitarray::BitArray;
    ///
    /// let a: BitArray = "1010".parse()?;
    /// assert_eq!(a.width(), 4);
    /// assert!(a.get(3));
    /// assert!("0b1010".parse::<BitArray>().is_err());
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 2)
    }
}

impl<const W: usize> PartialEq for BitArray<W> {
    /// Arrays are equal when their widths match and their significant bits
    /// match. Padding is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.eq_words(other)
    }
}

impl<const W: usize> Eq for BitArray<W> {}

impl<const W: usize> PartialOrd for BitArray<W> {
    /// Unsigned comparison. Arrays of different widths are unordered; use
    /// [`BitArray::try_cmp`] to get an error instead.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.width == other.width).then(|| self.cmp_words(other))
    }
}

impl<const W: usize> Hash for BitArray<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        for word in self.words() {
            word.hash(state);
        }
    }
}

impl<'a, const W: usize> IntoIterator for &'a BitArray<W> {
    type Item = bool;
    type IntoIter = Iter<'a, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Binary Operator Implementations
// ============================================================================

/// Implements an operator and its compound form for owned and borrowed
/// operands on top of a checked in-place method.
macro_rules! impl_binary_op {
    ($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $checked:ident) => {
        impl<const W: usize> $OpAssign<&Self> for BitArray<W> {
            /// # Panics
            ///
            /// Panics if the operand widths differ.
            #[track_caller]
            #[inline]
            fn $op_assign(&mut self, rhs: &Self) {
                expect_ok(self.$checked(rhs));
            }
        }

        impl<const W: usize> $OpAssign for BitArray<W> {
            #[track_caller]
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                expect_ok(self.$checked(&rhs));
            }
        }

        impl<const W: usize> $Op for BitArray<W> {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn $op(mut self, rhs: Self) -> Self::Output {
                expect_ok(self.$checked(&rhs));
                self
            }
        }

        impl<const W: usize> $Op<&BitArray<W>> for BitArray<W> {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn $op(mut self, rhs: &Self) -> Self::Output {
                expect_ok(self.$checked(rhs));
                self
            }
        }

        impl<const W: usize> $Op for &BitArray<W> {
            type Output = BitArray<W>;

            #[track_caller]
            #[inline]
            fn $op(self, rhs: Self) -> Self::Output {
                self.clone().$op(rhs)
            }
        }
    };
}

impl_binary_op!(BitAnd::bitand, BitAndAssign::bitand_assign, try_and_assign);
impl_binary_op!(BitOr::bitor, BitOrAssign::bitor_assign, try_or_assign);
impl_binary_op!(BitXor::bitxor, BitXorAssign::bitxor_assign, try_xor_assign);
impl_binary_op!(Add::add, AddAssign::add_assign, try_add_assign);
impl_binary_op!(Sub::sub, SubAssign::sub_assign, try_sub_assign);

// ============================================================================
// Unary Operator Implementations
// ============================================================================

impl<const W: usize> Not for BitArray<W> {
    type Output = Self;

    /// Returns the one's complement.
    ///
    /// # Examples
    ///
    /// ```
    /// use smol_bitarray::BitArray;
    ///
    /// let a: BitArray = "1100".parse()?;
    /// assert_eq!((!a).to_binary_string(), "0011");
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    #[inline]
    fn not(mut self) -> Self::Output {
        self.ones_complement();
        self
    }
}

impl<const W: usize> Not for &BitArray<W> {
    type Output = BitArray<W>;

    #[inline]
    fn not(self) -> Self::Output {
        self.clone().not()
    }
}

impl<const W: usize> Neg for BitArray<W> {
    type Output = Self;

    /// Returns the two's complement, i.e. `2^width - self` wrapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use smol_bitarray::BitArray;
    ///
    /// let one: BitArray = "0001".parse()?;
    /// assert_eq!((-one).to_binary_string(), "1111");
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    #[inline]
    fn neg(mut self) -> Self::Output {
        self.twos_complement();
        self
    }
}

impl<const W: usize> Neg for &BitArray<W> {
    type Output = BitArray<W>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// ============================================================================
// Shift Operator Implementations
// ============================================================================

impl<const W: usize> Shl<usize> for BitArray<W> {
    type Output = Self;

    /// Logical shift toward the most significant end.
    ///
    /// # Examples
    ///
    /// ```
    /// use smol_bitarray::BitArray;
    ///
    /// let a: BitArray = "0011".parse()?;
    /// assert_eq!((a << 2).to_binary_string(), "1100");
    /// # Ok::<(), smol_bitarray::BitArrayError>(())
    /// ```
    #[inline]
    fn shl(mut self, n: usize) -> Self::Output {
        self.shift_left(n);
        self
    }
}

impl<const W: usize> Shl<usize> for &BitArray<W> {
    type Output = BitArray<W>;

    #[inline]
    fn shl(self, n: usize) -> Self::Output {
        self.clone() << n
    }
}

impl<const W: usize> ShlAssign<usize> for BitArray<W> {
    #[inline]
    fn shl_assign(&mut self, n: usize) {
        self.shift_left(n);
    }
}

impl<const W: usize> Shr<usize> for BitArray<W> {
    type Output = Self;

    /// Logical shift toward the least significant end.
    #[inline]
    fn shr(mut self, n: usize) -> Self::Output {
        self.shift_right(n);
        self
    }
}

impl<const W: usize> Shr<usize> for &BitArray<W> {
    type Output = BitArray<W>;

    #[inline]
    fn shr(self, n: usize) -> Self::Output {
        self.clone() >> n
    }
}

impl<const W: usize> ShrAssign<usize> for BitArray<W> {
    #[inline]
    fn shr_assign(&mut self, n: usize) {
        self.shift_right(n);
    }
}
