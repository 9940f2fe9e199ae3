use crate::cli::{
    args::StatsArgs,
    commands::{parse_values, read_input},
    global::GlobalArgs,
};
use g8cu::{CodecRef, CodecRegistry};

pub fn handle(
    args: StatsArgs,
    _global: &GlobalArgs,
    registry: &CodecRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_ref())?;
    let values = parse_values(&input, args.format)?;

    let codecs: Vec<CodecRef> = if args.codecs.is_empty() {
        registry.iter().cloned().collect()
    } else {
        args.codecs
            .iter()
            .map(|name| registry.lookup(name))
            .collect::<Result<_, _>>()?
    };

    println!("{} values\n", values.len());
    println!("  {:<10} {:>12} {:>10}  {}", "codec", "bytes", "bits/int", "round-trip");
    for codec in codecs {
        let encoded = codec.encode_to_vec(&values)?;
        let decoded = codec.decode_to_vec(&encoded, values.len())?;
        let bits = if values.is_empty() {
            0.0
        } else {
            encoded.len() as f64 * 8.0 / values.len() as f64
        };
        let verdict = if decoded == values {
            "ok"
        } else {
            log::error!("{}: decoded output differs from input", codec.name());
            "MISMATCH"
        };
        println!(
            "  {:<10} {:>12} {:>10.3}  {}",
            codec.name(),
            encoded.len(),
            bits,
            verdict
        );
    }
    Ok(())
}
