use crate::cli::{
    args::DecodeArgs,
    commands::{format_values, read_input, write_output},
    config::resolve_codec,
    global::GlobalArgs,
};
use g8cu::{CodecRegistry, Settings};

pub fn handle(
    args: DecodeArgs,
    _global: &GlobalArgs,
    registry: &CodecRegistry,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = resolve_codec(registry, args.codec.as_deref(), settings)?;

    let input = read_input(args.file.as_ref())?;
    let mut values = vec![0u32; args.count];
    let consumed = codec.decode(&input, args.count, &mut values)?;

    if consumed < input.len() {
        log::warn!(
            "{}: {} trailing bytes after {} values were ignored",
            codec.name(),
            input.len() - consumed,
            args.count
        );
    }

    let rendered = format_values(&values, args.format)?;
    write_output(args.output.as_ref(), &rendered)?;
    Ok(())
}
