use g8cu::{CodecRegistry, DecodePath, GroupCodec, RawMarker, SimdMode, Variant};

pub fn handle(registry: &CodecRegistry, mode: SimdMode) -> Result<(), Box<dyn std::error::Error>> {
    println!("Available codecs:\n");
    for name in registry.names() {
        let Some(variant) = Variant::from_name(name) else {
            println!("  {:<10} {:>5}  {:<22} {}", name, "-", "4 bytes per value", "-");
            continue;
        };

        let layout = variant.layout();
        let raw = match layout.raw {
            RawMarker::Sentinel(marker) => format!("raw after {:#04X}", marker),
            RawMarker::Headerless { threshold } => format!("raw if first >= {:#04X}", threshold),
        };
        let path = match GroupCodec::with_simd_mode(variant, mode).decode_path() {
            DecodePath::Table => "table",
            DecodePath::Scalar => "scalar",
        };
        println!(
            "  {:<10} {:>5}  {:<22} {}",
            name,
            format!("x{}", layout.group),
            raw,
            path
        );
    }
    Ok(())
}
