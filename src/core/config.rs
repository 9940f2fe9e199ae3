use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which decode path the table-driven codecs take.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimdMode {
    /// Shared tables plus the best gather kernel the CPU offers.
    #[default]
    Auto,
    /// Reference scalar decoder for every codec.
    Scalar,
}

impl std::fmt::Display for SimdMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimdMode::Auto => write!(f, "auto"),
            SimdMode::Scalar => write!(f, "scalar"),
        }
    }
}

fn default_codec() -> String {
    "g8cu".to_string()
}

/// `[codec]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CodecSettings {
    /// Codec used when none is named explicitly
    #[serde(default = "default_codec")]
    pub default: String,
}

impl Default for CodecSettings {
    fn default() -> Self {
        Self {
            default: default_codec(),
        }
    }
}

/// `[simd]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimdSettings {
    #[serde(default)]
    pub mode: SimdMode,
}

/// Global settings for g8cu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub codec: CodecSettings,
    #[serde(default)]
    pub simd: SimdSettings,
}

/// A settings file where every key is optional.
///
/// Only keys that are present replace the values they are merged onto.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsOverride {
    #[serde(default)]
    pub codec: Option<CodecOverride>,
    #[serde(default)]
    pub simd: Option<SimdOverride>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CodecOverride {
    pub default: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SimdOverride {
    pub mode: Option<SimdMode>,
}

impl SettingsOverride {
    /// Parses a partial settings file.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads a partial settings file from disk.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }
}

impl Settings {
    /// Parses complete settings from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in settings bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../config.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads settings with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in settings (from library)
    /// 2. `~/.config/g8cu/config.toml` (user overrides)
    /// 3. `./g8cu.toml` (project-local overrides)
    ///
    /// Later files override earlier ones key by key. A file that fails to
    /// parse is skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("g8cu").join("config.toml");
            settings.merge_file(&user_config_path);
        }

        settings.merge_file(Path::new("g8cu.toml"));

        Ok(settings)
    }

    fn merge_file(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match SettingsOverride::load_from_file(path) {
            Ok(overrides) => {
                log::debug!("applying settings from {:?}", path);
                self.merge(overrides);
            }
            Err(e) => {
                log::warn!("failed to load settings from {:?}: {}", path, e);
            }
        }
    }

    /// Merges present keys of `other` into these settings.
    pub fn merge(&mut self, other: SettingsOverride) {
        if let Some(codec) = other.codec
            && let Some(default) = codec.default
        {
            self.codec.default = default;
        }
        if let Some(simd) = other.simd
            && let Some(mode) = simd.mode
        {
            self.simd.mode = mode;
        }
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
