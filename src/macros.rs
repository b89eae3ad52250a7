/// Splits a bit index into `(word index, bit position within word)`.
macro_rules! bitpos {
    ($idx:expr) => {{
        let idx: usize = $idx;
        (idx >> 6, idx & 63)
    }};
}

/// Most significant bit of a word.
macro_rules! msb {
    ($val:expr) => {{
        let val: u64 = $val;
        val.cast_signed() < 0
    }};
}

/// Storage diagnostics, compiled out unless the `tracing` feature is on.
macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    }};
}

pub(crate) use bitpos;
pub(crate) use msb;
pub(crate) use trace;
