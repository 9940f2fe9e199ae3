pub mod delta;
pub mod errors;
pub mod group;

pub use errors::{CodecError, CodecNotFoundError, find_closest_codec};
