//! Per-value byte-length classification.
//!
//! Every variant spends exactly `classify(v).byte_len()` payload bytes on a
//! value inside a coded group. The thresholds below define that minimum and
//! are shared by all layouts.

/// A 2-bit length code: the value occupies `code + 1` little-endian bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LengthCode(u8);

impl LengthCode {
    /// Largest legal code (4 bytes).
    pub const MAX: LengthCode = LengthCode(3);

    /// Build a code from the low two bits of `bits`.
    #[inline(always)]
    pub const fn from_bits(bits: u8) -> Self {
        LengthCode(bits & 0b11)
    }

    /// The raw 2-bit code.
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Number of payload bytes this code stands for (1..=4).
    #[inline(always)]
    pub const fn byte_len(self) -> usize {
        self.0 as usize + 1
    }
}

/// Minimal length code for `v`. Zero still costs one byte.
#[inline(always)]
pub const fn classify(v: u32) -> LengthCode {
    if v <= 0xFF {
        LengthCode(0)
    } else if v <= 0xFFFF {
        LengthCode(1)
    } else if v <= 0xFF_FFFF {
        LengthCode(2)
    } else {
        LengthCode(3)
    }
}

/// Total payload bytes a coded encoding would spend on `values`.
pub fn payload_len(values: &[u32]) -> usize {
    values.iter().map(|&v| classify(v).byte_len()).sum()
}
