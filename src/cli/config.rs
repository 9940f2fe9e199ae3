use crate::cli::global::GlobalArgs;
use g8cu::{CodecRef, CodecRegistry, Settings, SimdMode};

/// Load settings with user overrides, then apply global flags.
pub fn load_settings(global: &GlobalArgs) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut settings = Settings::load_with_overrides()?;
    if global.scalar {
        settings.simd.mode = SimdMode::Scalar;
    }
    Ok(settings)
}

/// Resolve an explicitly requested codec, or the configured default.
///
/// Unknown names are an error here: a CLI user asked for a specific format.
pub fn resolve_codec(
    registry: &CodecRegistry,
    requested: Option<&str>,
    settings: &Settings,
) -> Result<CodecRef, Box<dyn std::error::Error>> {
    let name = requested.unwrap_or(&settings.codec.default);
    Ok(registry.lookup(name)?)
}

/// Location of the user settings file, if the platform has a config dir.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|dir| dir.join("g8cu").join("config.toml"))
}
