//! Scalar group-varint engine shared by every G8CU layout.
//!
//! Encoding walks the input once, preferring a raw block whenever four
//! one-byte values are available (subject to the headerless guard) and
//! otherwise emitting one coded group of `layout.group` values. Decoding is
//! generic over a [`GroupReader`] so the scalar loop and the table-driven
//! loop share the exact same framing.

use super::errors::CodecError;
use crate::core::layout::{Layout, MAX_GROUP, RAW_WIDTH, RawMarker};
use crate::core::length::{LengthCode, classify};
use crate::simd::lut::ShuffleTable;

#[inline(always)]
fn reserve(out: &[u8], pos: usize, len: usize) -> Result<(), CodecError> {
    let needed = pos + len;
    if needed > out.len() {
        return Err(CodecError::OutputTooSmall {
            needed,
            available: out.len(),
        });
    }
    Ok(())
}

/// Encode `values` into `out` using `layout`. Returns bytes written.
///
/// Fails with [`CodecError::OutputTooSmall`] before writing the group that
/// would overflow; bytes of earlier groups are left in place.
pub fn encode(layout: &Layout, values: &[u32], out: &mut [u8]) -> Result<usize, CodecError> {
    let mut pos = 0;
    let mut rest = values;
    // Headerless raw blocks are only legal before the first coded group.
    let mut leading = true;

    while !rest.is_empty() {
        if rest.len() >= RAW_WIDTH && Layout::fits_raw(&rest[..RAW_WIDTH]) {
            let block = &rest[..RAW_WIDTH];
            let header = match layout.raw {
                RawMarker::Sentinel(marker) => Some(Some(marker)),
                RawMarker::Headerless { threshold } if leading && block[0] >= threshold as u32 => {
                    Some(None)
                }
                RawMarker::Headerless { .. } => None,
            };
            if let Some(marker) = header {
                pos = write_raw(marker, block, out, pos)?;
                rest = &rest[RAW_WIDTH..];
                continue;
            }
        }

        leading = false;
        let (group, tail) = rest.split_at(rest.len().min(layout.group));
        pos = write_group(layout, group, out, pos)?;
        rest = tail;
    }

    Ok(pos)
}

fn write_raw(
    marker: Option<u8>,
    block: &[u32],
    out: &mut [u8],
    pos: usize,
) -> Result<usize, CodecError> {
    let header = usize::from(marker.is_some());
    reserve(out, pos, header + RAW_WIDTH)?;
    let mut p = pos;
    if let Some(marker) = marker {
        out[p] = marker;
        p += 1;
    }
    for (dst, &v) in out[p..p + RAW_WIDTH].iter_mut().zip(block) {
        *dst = v as u8;
    }
    Ok(p + RAW_WIDTH)
}

fn write_group(
    layout: &Layout,
    group: &[u32],
    out: &mut [u8],
    pos: usize,
) -> Result<usize, CodecError> {
    let mut codes = [LengthCode::from_bits(0); MAX_GROUP];
    let mut needed = 1;
    for (code, &v) in codes.iter_mut().zip(group) {
        *code = classify(v);
        needed += code.byte_len();
    }
    reserve(out, pos, needed)?;

    let packed = layout.pack(&codes[..group.len()]);
    out[pos] = if group.len() == layout.group {
        layout.wire_descriptor(packed)
    } else {
        packed
    };

    let mut p = pos + 1;
    for (code, &v) in codes.iter().zip(group) {
        let len = code.byte_len();
        out[p..p + len].copy_from_slice(&v.to_le_bytes()[..len]);
        p += len;
    }
    Ok(p)
}

/// Reads one framed unit's payload. `out` holds exactly the slots to fill.
pub(crate) trait GroupReader {
    /// Decode the coded group described by `descriptor` starting at `pos`.
    /// Returns payload bytes consumed.
    fn read_group(
        &self,
        layout: &Layout,
        descriptor: u8,
        input: &[u8],
        pos: usize,
        out: &mut [u32],
    ) -> Result<usize, CodecError>;

    /// Widen raw literals starting at `pos`. Returns bytes consumed.
    fn read_raw(&self, input: &[u8], pos: usize, out: &mut [u32]) -> Result<usize, CodecError>;
}

#[inline(always)]
fn read_le(bytes: &[u8]) -> u32 {
    bytes.iter().rev().fold(0u32, |acc, &b| (acc << 8) | b as u32)
}

/// Reference decoder: one slot at a time, straight from the descriptor bits.
pub(crate) struct ScalarReader;

impl GroupReader for ScalarReader {
    fn read_group(
        &self,
        layout: &Layout,
        descriptor: u8,
        input: &[u8],
        pos: usize,
        out: &mut [u32],
    ) -> Result<usize, CodecError> {
        let mut p = pos;
        for (slot, dst) in out.iter_mut().enumerate() {
            let len = layout.slot_code(descriptor, slot).byte_len();
            let bytes = input
                .get(p..p + len)
                .ok_or_else(|| CodecError::truncated(p, len, input.len()))?;
            *dst = read_le(bytes);
            p += len;
        }
        Ok(p - pos)
    }

    fn read_raw(&self, input: &[u8], pos: usize, out: &mut [u32]) -> Result<usize, CodecError> {
        let bytes = input
            .get(pos..pos + out.len())
            .ok_or_else(|| CodecError::truncated(pos, out.len(), input.len()))?;
        for (dst, &b) in out.iter_mut().zip(bytes) {
            *dst = b as u32;
        }
        Ok(out.len())
    }
}

/// Table-driven decoder: full groups go through a precomputed gather mask.
pub(crate) struct TableReader<'a> {
    table: &'a ShuffleTable,
}

impl<'a> TableReader<'a> {
    pub(crate) fn new(table: &'a ShuffleTable) -> Self {
        Self { table }
    }
}

impl GroupReader for TableReader<'_> {
    fn read_group(
        &self,
        layout: &Layout,
        descriptor: u8,
        input: &[u8],
        pos: usize,
        out: &mut [u32],
    ) -> Result<usize, CodecError> {
        // Partial trailing group: the entry length assumes every slot is present.
        if out.len() < self.table.group() {
            return ScalarReader.read_group(layout, descriptor, input, pos, out);
        }

        let entry = self.table.entry(descriptor);
        let len = entry.len();
        let src = input
            .get(pos..)
            .filter(|src| src.len() >= len)
            .ok_or_else(|| CodecError::truncated(pos, len, input.len()))?;
        let lanes = crate::simd::gather(entry, src);
        out.copy_from_slice(&lanes[..out.len()]);
        Ok(len)
    }

    fn read_raw(&self, input: &[u8], pos: usize, out: &mut [u32]) -> Result<usize, CodecError> {
        match input.get(pos..pos + RAW_WIDTH) {
            Some(src) if out.len() == RAW_WIDTH => {
                out.copy_from_slice(&crate::simd::widen_raw(src));
                Ok(RAW_WIDTH)
            }
            _ => ScalarReader.read_raw(input, pos, out),
        }
    }
}

#[inline(always)]
fn byte_at(input: &[u8], pos: usize) -> Result<u8, CodecError> {
    input
        .get(pos)
        .copied()
        .ok_or_else(|| CodecError::truncated(pos, 1, input.len()))
}

pub(crate) fn decode_with<R: GroupReader>(
    layout: &Layout,
    reader: &R,
    input: &[u8],
    n: usize,
    out: &mut [u32],
) -> Result<usize, CodecError> {
    if out.len() < n {
        return Err(CodecError::OutputTooShort {
            needed: n,
            available: out.len(),
        });
    }
    let out = &mut out[..n];
    let mut pos = 0;
    let mut done = 0;

    if let RawMarker::Headerless { threshold } = layout.raw {
        while done + RAW_WIDTH <= n && byte_at(input, pos)? >= threshold {
            pos += reader.read_raw(input, pos, &mut out[done..done + RAW_WIDTH])?;
            done += RAW_WIDTH;
        }
    }

    while done < n {
        let wire = byte_at(input, pos)?;
        pos += 1;
        let remaining = n - done;

        if layout.sentinel() == Some(wire) {
            let take = remaining.min(RAW_WIDTH);
            pos += reader.read_raw(input, pos, &mut out[done..done + take])?;
            done += take;
            continue;
        }

        let descriptor = layout.resolve_descriptor(wire, remaining);
        let take = remaining.min(layout.group);
        pos += reader.read_group(layout, descriptor, input, pos, &mut out[done..done + take])?;
        done += take;
    }

    Ok(pos)
}

/// Decode exactly `n` values with the reference scalar loop. Returns bytes consumed.
pub fn decode_scalar(
    layout: &Layout,
    input: &[u8],
    n: usize,
    out: &mut [u32],
) -> Result<usize, CodecError> {
    decode_with(layout, &ScalarReader, input, n, out)
}

/// Decode exactly `n` values, gathering full groups through `table`.
pub fn decode_with_table(
    layout: &Layout,
    table: &ShuffleTable,
    input: &[u8],
    n: usize,
    out: &mut [u32],
) -> Result<usize, CodecError> {
    decode_with(layout, &TableReader::new(table), input, n, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::{BASIC, HEADERLESS, SENTINEL};

    fn encode_vec(layout: &Layout, values: &[u32]) -> Vec<u8> {
        let mut out = vec![0u8; layout.max_encoded_len(values.len())];
        let written = encode(layout, values, &mut out).unwrap();
        out.truncate(written);
        out
    }

    fn decode_vec(layout: &Layout, bytes: &[u8], n: usize) -> (Vec<u32>, usize) {
        let mut out = vec![0u32; n];
        let consumed = decode_scalar(layout, bytes, n, &mut out).unwrap();
        (out, consumed)
    }

    #[test]
    fn test_basic_raw_block() {
        assert_eq!(encode_vec(&BASIC, &[1, 2, 3, 4]), vec![0xFF, 1, 2, 3, 4]);
    }

    #[test]
    fn test_basic_coded_group() {
        let bytes = encode_vec(&BASIC, &[1, 300, 70_000, 5]);
        assert_eq!(
            bytes,
            vec![0b00_10_01_00, 1, 0x2C, 0x01, 0x70, 0x11, 0x01, 5]
        );
        assert_eq!(decode_vec(&BASIC, &bytes, 4), (vec![1, 300, 70_000, 5], 8));
    }

    #[test]
    fn test_basic_escape_group() {
        let values = [u32::MAX, 0x0100_0000, 0xDEAD_BEEF, 0x8000_0000];
        let bytes = encode_vec(&BASIC, &values);
        assert_eq!(bytes[0], 0x00);
        assert_eq!(bytes.len(), 17);
        assert_eq!(decode_vec(&BASIC, &bytes, 4), (values.to_vec(), 17));
    }

    #[test]
    fn test_basic_partial_trailing_group() {
        let values = [10, 20, 30, 40, 1000, 7];
        let bytes = encode_vec(&BASIC, &values);
        assert_eq!(bytes, vec![0xFF, 10, 20, 30, 40, 0b01, 0xE8, 0x03, 7]);
        assert_eq!(decode_vec(&BASIC, &bytes, 6), (values.to_vec(), 9));
    }

    #[test]
    fn test_basic_partial_all_small_keeps_zero_descriptor() {
        let bytes = encode_vec(&BASIC, &[9, 8, 7]);
        assert_eq!(bytes, vec![0x00, 9, 8, 7]);
        assert_eq!(decode_vec(&BASIC, &bytes, 3).0, vec![9, 8, 7]);
    }

    #[test]
    fn test_sentinel_layout() {
        let values = [1, 2, 3, 4, 300, 5];
        let bytes = encode_vec(&SENTINEL, &values);
        assert_eq!(bytes, vec![0xF0, 1, 2, 3, 4, 0x01, 0x2C, 0x01, 5]);
        assert_eq!(decode_vec(&SENTINEL, &bytes, 6), (values.to_vec(), 9));
    }

    #[test]
    fn test_headerless_small_literals_are_coded() {
        let bytes = encode_vec(&HEADERLESS, &[1, 2, 3, 4]);
        assert_eq!(bytes, vec![0x00, 1, 2, 0x00, 3, 4]);
        assert_eq!(decode_vec(&HEADERLESS, &bytes, 4).0, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_headerless_leading_raw_run() {
        let values = [200, 1, 2, 3, 100, 9, 9, 9, 500];
        let bytes = encode_vec(&HEADERLESS, &values);
        assert_eq!(&bytes[..8], &[200, 1, 2, 3, 100, 9, 9, 9]);
        assert_eq!(&bytes[8..], &[0x01, 0xF4, 0x01]);
        assert_eq!(decode_vec(&HEADERLESS, &bytes, 9), (values.to_vec(), 11));
    }

    #[test]
    fn test_headerless_no_raw_after_coded_group() {
        let values = [1000, 7, 200, 1, 2, 3];
        let bytes = encode_vec(&HEADERLESS, &values);
        // 1000,7 | 200,1 | 2,3 all coded
        assert_eq!(bytes[0], 0x01);
        assert_eq!(bytes.len(), 10);
        assert_eq!(decode_vec(&HEADERLESS, &bytes, 6).0, values.to_vec());
    }

    #[test]
    fn test_headerless_misreads_unguarded_raw_literal() {
        // A raw block whose first literal is below the threshold reads as a
        // descriptor; this is the boundary the encoder guard avoids.
        let unguarded = [5u8, 6, 7, 8, 0, 0, 0];
        let (decoded, _) = decode_vec(&HEADERLESS, &unguarded, 4);
        assert_eq!(decoded, vec![0x0706, 8, 0, 0]);
    }

    #[test]
    fn test_empty_input() {
        assert!(encode_vec(&BASIC, &[]).is_empty());
        let mut out: [u32; 0] = [];
        assert_eq!(decode_scalar(&BASIC, &[], 0, &mut out), Ok(0));
    }

    #[test]
    fn test_output_too_small() {
        let mut out = [0u8; 4];
        let err = encode(&BASIC, &[1, 2, 3, 4], &mut out).unwrap_err();
        assert_eq!(
            err,
            CodecError::OutputTooSmall {
                needed: 5,
                available: 4
            }
        );
    }

    #[test]
    fn test_output_too_short() {
        let mut out = [0u32; 2];
        let err = decode_scalar(&BASIC, &[0xFF, 1, 2, 3, 4], 4, &mut out).unwrap_err();
        assert_eq!(
            err,
            CodecError::OutputTooShort {
                needed: 4,
                available: 2
            }
        );
    }

    #[test]
    fn test_truncated_input() {
        let mut out = [0u32; 4];
        let err = decode_scalar(&BASIC, &[0xFF, 1, 2], 4, &mut out).unwrap_err();
        assert!(matches!(err, CodecError::TruncatedInput { .. }));

        let err = decode_scalar(&SENTINEL, &[0x11, 0x2C], 2, &mut out).unwrap_err();
        assert!(matches!(err, CodecError::TruncatedInput { offset: 1, .. }));
    }

    #[test]
    fn test_table_reader_matches_scalar() {
        let table = ShuffleTable::build(&BASIC);
        let values = [7, 70_000, 1, 1 << 30, 2, 3, 4, 5, 65_535, 9];
        let bytes = encode_vec(&BASIC, &values);
        let mut out = vec![0u32; values.len()];
        let consumed = decode_with_table(&BASIC, &table, &bytes, values.len(), &mut out).unwrap();
        assert_eq!(out, values);
        assert_eq!(consumed, bytes.len());
    }
}
