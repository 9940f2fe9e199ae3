mod cli;

use g8cu::CodecNotFoundError;

fn main() {
    if let Err(e) = cli::run() {
        // Not-found errors carry their own "error:" prefix and hints.
        if e.downcast_ref::<CodecNotFoundError>().is_some() {
            eprintln!("{}", e);
        } else {
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }
}
