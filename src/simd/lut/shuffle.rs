//! Descriptor-indexed gather masks.
//!
//! For every possible descriptor byte the table stores a 16-byte shuffle
//! mask that moves each slot's payload bytes into the low bytes of its
//! 32-bit lane and zeroes the rest, plus the payload length. The same mask
//! drives `pshufb`, NEON `tbl`, and the portable gather below.

use crate::core::layout::Layout;

/// Mask byte that produces a zero lane byte.
pub const ZERO_LANE: u8 = 0x80;

/// Gather mask and payload length for one descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct ShuffleEntry {
    mask: [u8; 16],
    len: u8,
}

impl ShuffleEntry {
    const EMPTY: ShuffleEntry = ShuffleEntry {
        mask: [ZERO_LANE; 16],
        len: 0,
    };

    /// Shuffle control bytes, one per output byte.
    #[inline(always)]
    pub fn mask(&self) -> &[u8; 16] {
        &self.mask
    }

    /// Payload bytes a full group with this descriptor consumes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// True only for descriptors that read no payload at all.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// 256 gather entries for one layout.
#[derive(Debug, Clone)]
pub struct ShuffleTable {
    group: usize,
    entries: Box<[ShuffleEntry]>,
}

impl ShuffleTable {
    /// Precompute entries for all 256 descriptor bytes of `layout`.
    pub fn build(layout: &Layout) -> Self {
        let entries = (0..=u8::MAX)
            .map(|descriptor| Self::entry_for(layout, descriptor))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self {
            group: layout.group,
            entries,
        }
    }

    fn entry_for(layout: &Layout, descriptor: u8) -> ShuffleEntry {
        let mut entry = ShuffleEntry::EMPTY;
        let mut offset = 0u8;
        for slot in 0..layout.group {
            let len = layout.slot_code(descriptor, slot).byte_len();
            for byte in 0..len {
                entry.mask[slot * 4 + byte] = offset + byte as u8;
            }
            offset += len as u8;
        }
        entry.len = offset;
        entry
    }

    /// Values covered by one entry.
    #[inline(always)]
    pub fn group(&self) -> usize {
        self.group
    }

    #[inline(always)]
    pub fn entry(&self, descriptor: u8) -> &ShuffleEntry {
        &self.entries[descriptor as usize]
    }
}

/// Apply `entry` to `src` without vector instructions.
///
/// `src` must hold at least `entry.len()` bytes.
#[inline]
pub fn gather_portable(entry: &ShuffleEntry, src: &[u8]) -> [u32; 4] {
    let mut lanes = [0u8; 16];
    for (lane, &index) in lanes.iter_mut().zip(entry.mask.iter()) {
        if index & ZERO_LANE == 0 {
            *lane = src[index as usize];
        }
    }
    let mut out = [0u32; 4];
    for (value, chunk) in out.iter_mut().zip(lanes.chunks_exact(4)) {
        *value = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    out
}
