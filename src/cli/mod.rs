mod args;
mod commands;
mod config;
mod global;
mod handlers;

use args::{ConfigAction, DecodeArgs, EncodeArgs, StatsArgs};
use clap::{Parser, Subcommand};
use g8cu::{CodecRegistry, SimdMode};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "g8cu")]
#[command(version)]
#[command(about = "Group-varint (G8CU) compression for unsigned 32-bit integer sequences", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress integers with a codec
    Encode(EncodeArgs),

    /// Decompress a stream of a known number of integers
    Decode(DecodeArgs),

    /// List available codecs
    List,

    /// Compare encoded size of every codec on one input
    Stats(StatsArgs),

    /// Inspect settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    // RUST_LOG, when set, takes precedence over -v.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let settings = config::load_settings(&cli.global)?;
    if settings.simd.mode == SimdMode::Auto {
        g8cu::simd::init();
    }
    let registry = CodecRegistry::from_settings(&settings);

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &registry, &settings),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &registry, &settings),
        Commands::List => handlers::list::handle(&registry, settings.simd.mode),
        Commands::Stats(args) => handlers::stats::handle(args, &cli.global, &registry),
        Commands::Config { action } => handlers::config::handle(action, &settings),
    }
}
