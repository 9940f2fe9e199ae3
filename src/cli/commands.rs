use crate::cli::args::ValueFormat;
use g8cu::{CopyCodec, IntegerCodec, from_gaps, to_gaps, words_from_le_bytes};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Read the whole input from `file`, or stdin when absent.
pub fn read_input(file: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Write `bytes` to `output`, or stdout when absent.
pub fn write_output(output: Option<&PathBuf>, bytes: &[u8]) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, bytes),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()
        }
    }
}

/// Parse integers in `format`, applying the gap transform if requested.
pub fn parse_values(bytes: &[u8], format: ValueFormat) -> Result<Vec<u32>, Box<dyn std::error::Error>> {
    let values = if format.text {
        let text = std::str::from_utf8(bytes).map_err(|_| "text input must be valid UTF-8")?;
        text.split_whitespace()
            .map(|token| {
                token
                    .parse::<u32>()
                    .map_err(|_| format!("invalid integer '{}': expected 0..=4294967295", token))
            })
            .collect::<Result<Vec<_>, _>>()?
    } else {
        words_from_le_bytes(bytes)?
    };

    Ok(if format.delta { to_gaps(&values) } else { values })
}

/// Render decoded integers in `format`, undoing the gap transform if requested.
pub fn format_values(values: &[u32], format: ValueFormat) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let values = if format.delta {
        from_gaps(values)
    } else {
        values.to_vec()
    };

    if format.text {
        let mut out = String::with_capacity(values.len() * 8);
        for v in &values {
            out.push_str(&v.to_string());
            out.push('\n');
        }
        Ok(out.into_bytes())
    } else {
        Ok(CopyCodec.encode_to_vec(&values)?)
    }
}
