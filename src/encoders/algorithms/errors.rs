use std::fmt;
use thiserror::Error;

/// Errors raised by encode and decode calls.
///
/// Every variant is a caller precondition violation; nothing is written past
/// the buffers the caller handed in.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The encode output buffer cannot hold the next group.
    #[error("output buffer too small: need {needed} bytes, have {available}")]
    OutputTooSmall { needed: usize, available: usize },

    /// The decode target holds fewer than the requested number of values.
    #[error("output buffer too short: need {needed} values, have {available}")]
    OutputTooShort { needed: usize, available: usize },

    /// Decoding ran off the end of the encoded input.
    #[error("truncated input: need {needed} bytes at offset {offset}, only {available} total")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A byte count that cannot hold whole 32-bit values.
    #[error("invalid length {len}: expected a multiple of 4")]
    InvalidLength { len: usize },
}

impl CodecError {
    pub(crate) fn truncated(offset: usize, needed: usize, available: usize) -> Self {
        CodecError::TruncatedInput {
            offset,
            needed,
            available,
        }
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when a codec name is not registered
#[derive(Debug)]
pub struct CodecNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl CodecNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for CodecNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(f, "\x1b[1;31merror:\x1b[0m codec '{}' not found", self.name)?;
        } else {
            writeln!(f, "error: codec '{}' not found", self.name)?;
        }

        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        if use_color {
            write!(f, "      run \x1b[1m`g8cu list`\x1b[0m to see all codecs")?;
        } else {
            write!(f, "      run `g8cu list` to see all codecs")?;
        }

        Ok(())
    }
}

impl std::error::Error for CodecNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest registered codec name
pub fn find_closest_codec<S: AsRef<str>>(name: &str, available: &[S]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate.as_ref()), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.as_ref().to_string())
}
