pub mod algorithms;
pub mod codec;

pub use codec::{CopyCodec, DecodePath, GroupCodec, IntegerCodec, Variant};
