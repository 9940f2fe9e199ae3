//! Wire layouts for the G8CU family.
//!
//! A layout fixes how many values one descriptor byte covers, where each
//! slot's 2-bit length code sits inside that byte, and how a run of four
//! one-byte values (a raw block) is told apart from a coded group.

use super::length::LengthCode;

/// Number of literal bytes in a raw block, for every layout.
pub const RAW_WIDTH: usize = 4;

/// Widest group any layout uses.
pub const MAX_GROUP: usize = 4;

/// How a raw block announces itself on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawMarker {
    /// A reserved byte precedes the four literals.
    Sentinel(u8),
    /// No marker. A leading run of raw blocks is recognized by the first
    /// literal of each block being `>= threshold`; every descriptor is below it.
    Headerless { threshold: u8 },
}

/// Replacement descriptor for the one coded pattern that would collide
/// with the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escape {
    /// Byte actually written.
    pub wire: u8,
    /// Descriptor it stands for.
    pub meaning: u8,
}

/// Framing rules for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Values covered by one descriptor.
    pub group: usize,
    /// Bit distance between consecutive slot codes in the descriptor.
    pub code_stride: u32,
    /// Raw block framing.
    pub raw: RawMarker,
    /// Descriptor aliasing used to keep descriptors disjoint from the sentinel.
    pub escape: Option<Escape>,
}

/// Group of 4, codes at bits 0/2/4/6, raw blocks behind `0xFF`.
///
/// Four 4-byte values would pack to `0xFF`, so that group is written with
/// descriptor `0x00` instead. A full group never needs `0x00` as a coded
/// descriptor because four one-byte values always take the raw path.
pub const BASIC: Layout = Layout {
    group: 4,
    code_stride: 2,
    raw: RawMarker::Sentinel(0xFF),
    escape: Some(Escape {
        wire: 0x00,
        meaning: 0xFF,
    }),
};

/// Group of 2, codes at bits 0/4, unmarked raw blocks.
pub const HEADERLESS: Layout = Layout {
    group: 2,
    code_stride: 4,
    raw: RawMarker::Headerless { threshold: 0x40 },
    escape: None,
};

/// Group of 2, codes at bits 0/4, raw blocks behind `0xF0`.
pub const SENTINEL: Layout = Layout {
    group: 2,
    code_stride: 4,
    raw: RawMarker::Sentinel(0xF0),
    escape: None,
};

impl Layout {
    /// Worst-case encoded size for `n` values: every value takes 4 bytes and
    /// every group pays one descriptor.
    pub const fn max_encoded_len(&self, n: usize) -> usize {
        n.div_ceil(self.group) * (1 + self.group * 4)
    }

    /// Length code stored for `slot` in `descriptor`.
    #[inline(always)]
    pub const fn slot_code(&self, descriptor: u8, slot: usize) -> LengthCode {
        LengthCode::from_bits(descriptor >> (slot as u32 * self.code_stride))
    }

    /// Pack per-slot codes into a descriptor. Slots past `codes.len()` stay 0.
    #[inline]
    pub fn pack(&self, codes: &[LengthCode]) -> u8 {
        codes
            .iter()
            .enumerate()
            .fold(0u8, |acc, (slot, code)| {
                acc | (code.bits() << (slot as u32 * self.code_stride))
            })
    }

    /// Sentinel byte, if this layout marks raw blocks explicitly.
    #[inline(always)]
    pub const fn sentinel(&self) -> Option<u8> {
        match self.raw {
            RawMarker::Sentinel(byte) => Some(byte),
            RawMarker::Headerless { .. } => None,
        }
    }

    /// Descriptor to put on the wire for a packed group.
    #[inline(always)]
    pub fn wire_descriptor(&self, packed: u8) -> u8 {
        match self.escape {
            Some(escape) if packed == escape.meaning => escape.wire,
            _ => packed,
        }
    }

    /// Descriptor meaning of a wire byte, given how many values are still owed.
    ///
    /// The escape only applies to full groups; a partial trailing group keeps
    /// its literal descriptor.
    #[inline(always)]
    pub fn resolve_descriptor(&self, wire: u8, remaining: usize) -> u8 {
        match self.escape {
            Some(escape) if wire == escape.wire && remaining >= self.group => escape.meaning,
            _ => wire,
        }
    }

    /// Whether `block` may be written as a raw block.
    #[inline(always)]
    pub fn fits_raw(block: &[u32]) -> bool {
        block.len() == RAW_WIDTH && block.iter().all(|&v| v <= 0xFF)
    }

    /// Every descriptor a coded group can put on the wire.
    ///
    /// Used to check marker disjointness exhaustively.
    pub fn legal_descriptors(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for combo in 0..(1usize << (2 * self.group)) {
            let codes: Vec<LengthCode> = (0..self.group)
                .map(|slot| LengthCode::from_bits((combo >> (2 * slot)) as u8))
                .collect();
            for present in 1..=self.group {
                let packed = self.pack(&codes[..present]);
                let full_raw_candidate = present == self.group
                    && self.group == RAW_WIDTH
                    && codes.iter().all(|c| c.bits() == 0);
                if full_raw_candidate {
                    continue;
                }
                let wire = if present == self.group {
                    self.wire_descriptor(packed)
                } else {
                    packed
                };
                if !out.contains(&wire) {
                    out.push(wire);
                }
            }
        }
        out.sort_unstable();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::length::classify;

    #[test]
    fn test_max_encoded_len() {
        assert_eq!(BASIC.max_encoded_len(0), 0);
        assert_eq!(BASIC.max_encoded_len(1), 17);
        assert_eq!(BASIC.max_encoded_len(4), 17);
        assert_eq!(BASIC.max_encoded_len(6), 34);
        assert_eq!(SENTINEL.max_encoded_len(3), 18);
        assert_eq!(HEADERLESS.max_encoded_len(4), 18);
    }

    #[test]
    fn test_pack_and_slot_code() {
        let codes = [classify(1), classify(300), classify(70_000), classify(u32::MAX)];
        let desc = BASIC.pack(&codes);
        assert_eq!(desc, 0b11_10_01_00);
        for (slot, code) in codes.iter().enumerate() {
            assert_eq!(BASIC.slot_code(desc, slot), *code);
        }

        let nib = SENTINEL.pack(&codes[2..]);
        assert_eq!(nib, 0x32);
        assert_eq!(SENTINEL.slot_code(nib, 0).bits(), 2);
        assert_eq!(SENTINEL.slot_code(nib, 1).bits(), 3);
    }

    #[test]
    fn test_basic_escape_round_trips() {
        assert_eq!(BASIC.wire_descriptor(0xFF), 0x00);
        assert_eq!(BASIC.resolve_descriptor(0x00, 4), 0xFF);
        assert_eq!(BASIC.resolve_descriptor(0x00, 3), 0x00);
        assert_eq!(BASIC.wire_descriptor(0x1B), 0x1B);
        assert_eq!(SENTINEL.wire_descriptor(0xFF), 0xFF);
    }

    #[test]
    fn test_sentinels_disjoint_from_descriptors() {
        for layout in [BASIC, SENTINEL] {
            let marker = layout.sentinel().unwrap();
            assert!(!layout.legal_descriptors().contains(&marker));
        }
    }

    #[test]
    fn test_nibble_descriptors_below_headerless_threshold() {
        let RawMarker::Headerless { threshold } = HEADERLESS.raw else {
            panic!("headerless layout must be unmarked");
        };
        let descriptors = HEADERLESS.legal_descriptors();
        assert_eq!(descriptors.last(), Some(&0x33));
        assert!(descriptors.iter().all(|&d| d < threshold));
    }

    #[test]
    fn test_fits_raw() {
        assert!(Layout::fits_raw(&[1, 2, 3, 255]));
        assert!(!Layout::fits_raw(&[1, 2, 3, 256]));
        assert!(!Layout::fits_raw(&[1, 2, 3]));
    }
}
