//! Table-driven decode acceleration
//!
//! The decode tables are built once per process and shared read-only by
//! every decoder thread. Runtime CPU feature detection picks the gather
//! kernel; without a usable vector unit the same tables drive a portable
//! gather, so results never depend on the host.

use crate::core::layout::Layout;
use crate::encoders::algorithms::errors::CodecError;
use crate::encoders::algorithms::group;
use std::fmt;
use std::sync::OnceLock;

pub mod lut;

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
mod x86_64;

#[cfg(all(feature = "simd", target_arch = "aarch64", target_endian = "little"))]
mod aarch64;

use lut::{ShuffleEntry, ShuffleTable};

static TABLES: OnceLock<Tables> = OnceLock::new();

// CPU feature detection cache
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
static HAS_SSSE3: OnceLock<bool> = OnceLock::new();

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
static HAS_SSE41: OnceLock<bool> = OnceLock::new();

/// Check if SSSE3 is available (cached after first call)
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub fn has_ssse3() -> bool {
    *HAS_SSSE3.get_or_init(|| is_x86_feature_detected!("ssse3"))
}

/// Check if SSE4.1 is available (cached after first call)
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub fn has_sse41() -> bool {
    *HAS_SSE41.get_or_init(|| is_x86_feature_detected!("sse4.1"))
}

#[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
pub fn has_ssse3() -> bool {
    false
}

#[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
pub fn has_sse41() -> bool {
    false
}

/// Check if NEON is available (aarch64 only)
#[cfg(all(feature = "simd", target_arch = "aarch64", target_endian = "little"))]
pub fn has_neon() -> bool {
    true // NEON is mandatory on aarch64
}

#[cfg(not(all(feature = "simd", target_arch = "aarch64", target_endian = "little")))]
pub fn has_neon() -> bool {
    false
}

/// Gather kernel selected for this host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceleration {
    Ssse3,
    Neon,
    Portable,
}

impl fmt::Display for Acceleration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Acceleration::Ssse3 => "ssse3",
            Acceleration::Neon => "neon",
            Acceleration::Portable => "portable",
        };
        f.write_str(name)
    }
}

/// Report which gather kernel full groups will use.
pub fn acceleration() -> Acceleration {
    if has_ssse3() {
        Acceleration::Ssse3
    } else if has_neon() {
        Acceleration::Neon
    } else {
        Acceleration::Portable
    }
}

/// Decode tables for every table-driven layout.
#[derive(Debug)]
pub struct Tables {
    basic: ShuffleTable,
    nibble: ShuffleTable,
}

impl Tables {
    fn build() -> Self {
        Self {
            basic: ShuffleTable::build(&crate::core::layout::BASIC),
            nibble: ShuffleTable::build(&crate::core::layout::SENTINEL),
        }
    }

    /// Group-of-4 table (codes at bits 0/2/4/6).
    pub fn basic(&self) -> &ShuffleTable {
        &self.basic
    }

    /// Group-of-2 table (codes at bits 0/4).
    pub fn nibble(&self) -> &ShuffleTable {
        &self.nibble
    }

    /// Table matching `layout`'s descriptor format, if one exists.
    pub fn for_layout(&self, layout: &Layout) -> Option<&ShuffleTable> {
        match (layout.group, layout.code_stride) {
            (4, 2) => Some(&self.basic),
            (2, 4) => Some(&self.nibble),
            _ => None,
        }
    }
}

/// Build the shared decode tables. Later calls return the same instance.
pub fn init() -> &'static Tables {
    TABLES.get_or_init(|| {
        let tables = Tables::build();
        log::debug!("G8CU decode tables ready, gather kernel: {}", acceleration());
        tables
    })
}

/// Shared decode tables, built on first use if [`init`] was never called.
pub fn tables() -> &'static Tables {
    match TABLES.get() {
        Some(tables) => tables,
        None => init(),
    }
}

/// Whether [`init`] has already run in this process.
pub fn is_initialized() -> bool {
    TABLES.get().is_some()
}

/// Gather one full group. `src` must hold at least `entry.len()` bytes.
#[inline]
pub(crate) fn gather(entry: &ShuffleEntry, src: &[u8]) -> [u32; 4] {
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        if src.len() >= 16 && has_ssse3() {
            // SAFETY: SSSE3 detected and 16 bytes are readable.
            return unsafe { x86_64::gather_ssse3(entry, src) };
        }
    }

    #[cfg(all(feature = "simd", target_arch = "aarch64", target_endian = "little"))]
    {
        if src.len() >= 16 {
            // SAFETY: NEON is baseline and 16 bytes are readable.
            return unsafe { aarch64::gather_neon(entry, src) };
        }
    }

    lut::gather_portable(entry, src)
}

/// Zero-extend four raw literals. `src` must hold at least 4 bytes.
#[inline]
pub(crate) fn widen_raw(src: &[u8]) -> [u32; 4] {
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        if has_sse41() {
            // SAFETY: SSE4.1 detected and 4 bytes are readable.
            return unsafe { x86_64::widen_sse41(src) };
        }
    }

    [src[0] as u32, src[1] as u32, src[2] as u32, src[3] as u32]
}

/// Decode through the shared table for `layout`, or the scalar loop if the
/// layout has none.
pub fn decode(
    layout: &Layout,
    input: &[u8],
    n: usize,
    out: &mut [u32],
) -> Result<usize, CodecError> {
    match tables().for_layout(layout) {
        Some(table) => group::decode_with_table(layout, table, input, n, out),
        None => group::decode_scalar(layout, input, n, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::{BASIC, HEADERLESS, SENTINEL};

    #[test]
    fn test_init_is_idempotent() {
        let first = init() as *const Tables;
        let second = init() as *const Tables;
        assert_eq!(first, second);
        assert!(is_initialized());
        assert_eq!(tables() as *const Tables, first);
    }

    #[test]
    fn test_for_layout() {
        let tables = tables();
        assert_eq!(tables.for_layout(&BASIC).map(|t| t.group()), Some(4));
        assert_eq!(tables.for_layout(&SENTINEL).map(|t| t.group()), Some(2));
        assert_eq!(tables.for_layout(&HEADERLESS).map(|t| t.group()), Some(2));
    }

    #[test]
    fn test_gather_short_source_uses_portable() {
        let entry = tables().basic().entry(0b01_00_00_01);
        let src = [0x34, 0x12, 5, 6, 0xCD, 0xAB];
        assert_eq!(gather(entry, &src), [0x1234, 5, 6, 0xABCD]);
    }

    #[test]
    fn test_widen_raw() {
        assert_eq!(widen_raw(&[1, 2, 254, 255]), [1, 2, 254, 255]);
    }

    #[test]
    fn test_acceleration_display() {
        assert_eq!(Acceleration::Portable.to_string(), "portable");
        let _ = acceleration();
    }
}
