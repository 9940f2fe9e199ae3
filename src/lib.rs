//! # g8cu
//!
//! Group-varint codecs for sequences of unsigned 32-bit integers.
//!
//! Each value is stored in the fewest little-endian bytes that hold it
//! (1 to 4). A descriptor byte in front of every group records the per-value
//! byte counts, and runs of four one-byte values can be stored as a compact
//! raw block. Four wire variants are provided:
//!
//! - `g8cu`: groups of 4, raw blocks behind `0xFF`, table-driven decode
//! - `g8cu_fast`: groups of 2, unmarked leading raw blocks
//! - `g8cu_fp`: groups of 2, raw blocks behind `0xF0`
//! - `g8cu_nib`: the `g8cu_fp` format decoded through a shared table
//!
//! plus `copy`, a 4-bytes-per-value baseline.
//!
//! Streams do not record their length; the caller passes the value count to
//! the decoder.
//!
//! # Quick Start
//!
//! ```
//! use g8cu::{Variant, decode, encode, max_encoded_len};
//!
//! let values = [1, 2, 3, 4, 300, 70_000];
//! let mut bytes = vec![0u8; max_encoded_len(values.len(), Variant::Basic)];
//! let written = encode(&values, &mut bytes, Variant::Basic).unwrap();
//!
//! let mut decoded = vec![0u32; values.len()];
//! let consumed = decode(&bytes[..written], values.len(), &mut decoded, Variant::Basic).unwrap();
//! assert_eq!(consumed, written);
//! assert_eq!(decoded, values);
//! ```
//!
//! # Registry
//!
//! ```
//! use g8cu::CodecRegistry;
//!
//! let registry = CodecRegistry::new();
//! let codec = registry.get_or_copy("g8cu_nib");
//! let bytes = codec.encode_to_vec(&[10, 20, 30]).unwrap();
//! assert_eq!(codec.decode_to_vec(&bytes, 3).unwrap(), vec![10, 20, 30]);
//! ```

pub mod core;
pub mod encoders;
pub mod simd;

pub use crate::core::config::{Settings, SimdMode};
pub use crate::core::layout::{BASIC, HEADERLESS, Layout, RawMarker, SENTINEL};
pub use crate::core::length::{LengthCode, classify};
pub use crate::core::registry::{CodecRef, CodecRegistry};
pub use encoders::algorithms::delta::{from_gaps, to_gaps};
pub use encoders::algorithms::errors::{CodecError, CodecNotFoundError, find_closest_codec};
pub use encoders::codec::{
    CopyCodec, DecodePath, GroupCodec, IntegerCodec, Variant, words_from_le_bytes,
};

/// Worst-case encoded size of `n` values under `variant`.
pub fn max_encoded_len(n: usize, variant: Variant) -> usize {
    variant.layout().max_encoded_len(n)
}

/// Encode `values` into `out` under `variant`. Returns bytes written.
///
/// Size `out` with [`max_encoded_len`] to rule out
/// [`CodecError::OutputTooSmall`].
pub fn encode(values: &[u32], out: &mut [u8], variant: Variant) -> Result<usize, CodecError> {
    GroupCodec::new(variant).encode(values, out)
}

/// Decode exactly `n` values from `input` into `out[..n]`. Returns bytes consumed.
pub fn decode(input: &[u8], n: usize, out: &mut [u32], variant: Variant) -> Result<usize, CodecError> {
    GroupCodec::new(variant).decode(input, n, out)
}
