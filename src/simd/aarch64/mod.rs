//! aarch64 gather kernel
//!
//! NEON `tbl` yields zero for any index of 16 or more, so the `0x80` lanes
//! of a shuffle mask behave exactly as they do under `pshufb`.

use crate::simd::lut::ShuffleEntry;

/// Gather one group through `entry` with `vqtbl1q_u8`.
///
/// # Safety
///
/// `src` must hold at least 16 bytes.
#[target_feature(enable = "neon")]
pub(crate) unsafe fn gather_neon(entry: &ShuffleEntry, src: &[u8]) -> [u32; 4] {
    unsafe {
        use std::arch::aarch64::*;

        debug_assert!(src.len() >= 16);

        let data = vld1q_u8(src.as_ptr());
        let mask = vld1q_u8(entry.mask().as_ptr());
        let lanes = vqtbl1q_u8(data, mask);

        let mut out = [0u32; 4];
        vst1q_u8(out.as_mut_ptr() as *mut u8, lanes);
        out
    }
}
