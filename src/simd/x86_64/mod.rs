//! x86_64 gather kernels
//!
//! `pshufb` (SSSE3) applies a descriptor's gather mask to 16 payload bytes in
//! one instruction. Raw blocks are zero-extended with `pmovzxbd` (SSE4.1).

use crate::simd::lut::ShuffleEntry;

/// Gather one group through `entry` with `pshufb`.
///
/// # Safety
///
/// The CPU must support SSSE3 and `src` must hold at least 16 bytes.
#[target_feature(enable = "ssse3")]
pub(crate) unsafe fn gather_ssse3(entry: &ShuffleEntry, src: &[u8]) -> [u32; 4] {
    unsafe {
        use std::arch::x86_64::*;

        debug_assert!(src.len() >= 16);

        let data = _mm_loadu_si128(src.as_ptr() as *const __m128i);
        let mask = _mm_loadu_si128(entry.mask().as_ptr() as *const __m128i);
        let lanes = _mm_shuffle_epi8(data, mask);

        let mut out = [0u32; 4];
        _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, lanes);
        out
    }
}

/// Widen four literal bytes to four `u32` lanes with `pmovzxbd`.
///
/// # Safety
///
/// The CPU must support SSE4.1 and `src` must hold at least 4 bytes.
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn widen_sse41(src: &[u8]) -> [u32; 4] {
    unsafe {
        use std::arch::x86_64::*;

        debug_assert!(src.len() >= 4);

        let literals = i32::from_le_bytes([src[0], src[1], src[2], src[3]]);
        let lanes = _mm_cvtepu8_epi32(_mm_cvtsi32_si128(literals));

        let mut out = [0u32; 4];
        _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, lanes);
        out
    }
}
