//! Codec trait and the concrete G8CU and copy codecs.

use crate::core::config::SimdMode;
use crate::core::layout::{BASIC, HEADERLESS, Layout, SENTINEL};
use crate::encoders::algorithms::errors::CodecError;
use crate::encoders::algorithms::group;
use std::fmt;

/// A block codec for `u32` sequences.
///
/// Streams carry no element count: the decoder is always told `n`.
pub trait IntegerCodec: Send + Sync {
    /// Registered name.
    fn name(&self) -> &'static str;

    /// Upper bound on encoded bytes for `n` values.
    fn max_encoded_len(&self, n: usize) -> usize;

    /// Encode `values` into `out`, returning bytes written.
    fn encode(&self, values: &[u32], out: &mut [u8]) -> Result<usize, CodecError>;

    /// Decode exactly `n` values from `input` into `out[..n]`, returning
    /// bytes consumed.
    fn decode(&self, input: &[u8], n: usize, out: &mut [u32]) -> Result<usize, CodecError>;

    /// Encode into a freshly sized buffer.
    fn encode_to_vec(&self, values: &[u32]) -> Result<Vec<u8>, CodecError> {
        let mut out = vec![0u8; self.max_encoded_len(values.len())];
        let written = self.encode(values, &mut out)?;
        out.truncate(written);
        Ok(out)
    }

    /// Decode `n` values into a new vector.
    fn decode_to_vec(&self, input: &[u8], n: usize) -> Result<Vec<u32>, CodecError> {
        let mut out = vec![0u32; n];
        self.decode(input, n, &mut out)?;
        Ok(out)
    }
}

/// The four G8CU wire formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Groups of 4, raw blocks behind `0xFF`.
    Basic,
    /// Groups of 2, unmarked leading raw blocks.
    Headerless,
    /// Groups of 2, raw blocks behind `0xF0`.
    Sentinel,
    /// Same wire format as [`Variant::Sentinel`], decoded through the shared table.
    SentinelTable,
}

/// How a codec decodes coded groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodePath {
    Scalar,
    Table,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Basic,
        Variant::Headerless,
        Variant::Sentinel,
        Variant::SentinelTable,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Basic => "g8cu",
            Variant::Headerless => "g8cu_fast",
            Variant::Sentinel => "g8cu_fp",
            Variant::SentinelTable => "g8cu_nib",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.name() == name)
    }

    pub fn layout(self) -> &'static Layout {
        match self {
            Variant::Basic => &BASIC,
            Variant::Headerless => &HEADERLESS,
            Variant::Sentinel | Variant::SentinelTable => &SENTINEL,
        }
    }

    /// Decode path used when SIMD mode is `auto`.
    pub fn preferred_path(self) -> DecodePath {
        match self {
            Variant::Basic | Variant::SentinelTable => DecodePath::Table,
            Variant::Headerless | Variant::Sentinel => DecodePath::Scalar,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A G8CU codec bound to one variant and decode path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupCodec {
    variant: Variant,
    path: DecodePath,
}

impl GroupCodec {
    pub fn new(variant: Variant) -> Self {
        Self::with_simd_mode(variant, SimdMode::Auto)
    }

    pub fn with_simd_mode(variant: Variant, mode: SimdMode) -> Self {
        let path = match mode {
            SimdMode::Auto => variant.preferred_path(),
            SimdMode::Scalar => DecodePath::Scalar,
        };
        Self { variant, path }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn decode_path(&self) -> DecodePath {
        self.path
    }
}

impl IntegerCodec for GroupCodec {
    fn name(&self) -> &'static str {
        self.variant.name()
    }

    fn max_encoded_len(&self, n: usize) -> usize {
        self.variant.layout().max_encoded_len(n)
    }

    fn encode(&self, values: &[u32], out: &mut [u8]) -> Result<usize, CodecError> {
        let written = group::encode(self.variant.layout(), values, out)?;
        log::trace!("{}: encoded {} values into {} bytes", self.name(), values.len(), written);
        Ok(written)
    }

    fn decode(&self, input: &[u8], n: usize, out: &mut [u32]) -> Result<usize, CodecError> {
        let layout = self.variant.layout();
        let consumed = match self.path {
            DecodePath::Table => crate::simd::decode(layout, input, n, out)?,
            DecodePath::Scalar => group::decode_scalar(layout, input, n, out)?,
        };
        log::trace!("{}: decoded {} values from {} bytes", self.name(), n, consumed);
        Ok(consumed)
    }
}

/// Baseline codec: 4 little-endian bytes per value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyCodec;

impl CopyCodec {
    pub const NAME: &'static str = "copy";
}

impl IntegerCodec for CopyCodec {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn max_encoded_len(&self, n: usize) -> usize {
        n * 4
    }

    fn encode(&self, values: &[u32], out: &mut [u8]) -> Result<usize, CodecError> {
        let needed = values.len() * 4;
        if out.len() < needed {
            return Err(CodecError::OutputTooSmall {
                needed,
                available: out.len(),
            });
        }
        for (chunk, &v) in out.chunks_exact_mut(4).zip(values) {
            chunk.copy_from_slice(&v.to_le_bytes());
        }
        Ok(needed)
    }

    fn decode(&self, input: &[u8], n: usize, out: &mut [u32]) -> Result<usize, CodecError> {
        if out.len() < n {
            return Err(CodecError::OutputTooShort {
                needed: n,
                available: out.len(),
            });
        }
        let needed = n * 4;
        if input.len() < needed {
            return Err(CodecError::truncated(0, needed, input.len()));
        }
        for (dst, chunk) in out[..n].iter_mut().zip(input.chunks_exact(4)) {
            *dst = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(needed)
    }
}

/// Interpret `bytes` as packed little-endian `u32` values.
pub fn words_from_le_bytes(bytes: &[u8]) -> Result<Vec<u32>, CodecError> {
    if bytes.len() % 4 != 0 {
        return Err(CodecError::InvalidLength { len: bytes.len() });
    }
    CopyCodec.decode_to_vec(bytes, bytes.len() / 4)
}
