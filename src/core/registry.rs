//! Name-keyed codec registry.

use crate::core::config::{Settings, SimdMode};
use crate::encoders::algorithms::errors::{CodecNotFoundError, find_closest_codec};
use crate::encoders::codec::{CopyCodec, GroupCodec, IntegerCodec, Variant};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Shared handle to a registered codec.
pub type CodecRef = Arc<dyn IntegerCodec>;

/// Every codec the crate ships, keyed by name.
pub struct CodecRegistry {
    codecs: BTreeMap<&'static str, CodecRef>,
}

impl CodecRegistry {
    /// Registry with all table-driven codecs on their preferred path.
    pub fn new() -> Self {
        Self::with_simd_mode(SimdMode::Auto)
    }

    pub fn with_simd_mode(mode: SimdMode) -> Self {
        let mut codecs: BTreeMap<&'static str, CodecRef> = BTreeMap::new();
        codecs.insert(CopyCodec::NAME, Arc::new(CopyCodec));
        for variant in Variant::ALL {
            codecs.insert(variant.name(), Arc::new(GroupCodec::with_simd_mode(variant, mode)));
        }
        Self { codecs }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_simd_mode(settings.simd.mode)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.codecs.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodecRef> {
        self.codecs.values()
    }

    /// Codec registered as `name`.
    pub fn get(&self, name: &str) -> Option<CodecRef> {
        self.codecs.get(name).cloned()
    }

    /// Codec registered as `name`, or an error carrying the closest name.
    pub fn lookup(&self, name: &str) -> Result<CodecRef, CodecNotFoundError> {
        self.get(name).ok_or_else(|| {
            let suggestion = find_closest_codec(name, &self.names());
            CodecNotFoundError::new(name, suggestion)
        })
    }

    /// Codec registered as `name`, falling back to `copy` for unknown names.
    pub fn get_or_copy(&self, name: &str) -> CodecRef {
        if let Some(codec) = self.get(name) {
            return codec;
        }
        log::warn!(
            "unknown codec '{}', falling back to '{}'; valid names: {}",
            name,
            CopyCodec::NAME,
            self.names().join(", ")
        );
        Arc::new(CopyCodec)
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}
