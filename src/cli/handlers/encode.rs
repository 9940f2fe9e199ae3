use crate::cli::{
    args::EncodeArgs,
    commands::{parse_values, read_input, write_output},
    config::resolve_codec,
    global::GlobalArgs,
};
use g8cu::{CodecRegistry, Settings};

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    registry: &CodecRegistry,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = resolve_codec(registry, args.codec.as_deref(), settings)?;

    let input = read_input(args.file.as_ref())?;
    let values = parse_values(&input, args.format)?;
    let encoded = codec.encode_to_vec(&values)?;

    if !global.quiet {
        log::info!(
            "{}: {} values -> {} bytes (decode with --count {})",
            codec.name(),
            values.len(),
            encoded.len(),
            values.len()
        );
    }

    write_output(args.output.as_ref(), &encoded)?;
    Ok(())
}
