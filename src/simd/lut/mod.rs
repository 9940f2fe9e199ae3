//! Lookup tables for the table-driven G8CU decoders.

pub mod shuffle;

pub use shuffle::{ShuffleEntry, ShuffleTable, ZERO_LANE, gather_portable};
