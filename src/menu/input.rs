//! Interpretation of raw answer lines

use std::num::{IntErrorKind, ParseIntError};

/// Trim and lowercase a raw answer
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Index picked on a single-select level.
///
/// Only a bare run of ASCII digits naming an existing option is accepted.
pub fn parse_single(choice: &str, option_count: usize) -> Option<usize> {
    if choice.is_empty() || !choice.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    choice
        .parse::<usize>()
        .ok()
        .filter(|&index| index < option_count)
}

/// Indices picked on a multi-select level.
///
/// Tokens are separated by commas and/or whitespace. Every token must
/// be an integer; indices outside `0..option_count` are dropped, as
/// are repeats. The result keeps the order in which indices were typed
/// and may be empty.
pub fn parse_indices(choice: &str, option_count: usize) -> Result<Vec<usize>, ParseIntError> {
    let mut indices = Vec::new();
    for token in choice.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        let value = match token.parse::<i64>() {
            Ok(value) => value,
            Err(e)
                if matches!(
                    e.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                ) =>
            {
                continue;
            }
            Err(e) => return Err(e),
        };
        let Ok(index) = usize::try_from(value) else {
            continue;
        };
        if index < option_count && !indices.contains(&index) {
            indices.push(index);
        }
    }
    Ok(indices)
}

/// Answer at the final confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// `y`: accept the selections
    Accept,
    /// `n`: discard them
    Reject,
    /// `r`: start over from the first level
    Restart,
    /// `l`: go back to where the walk ended
    Last,
}

impl Confirmation {
    pub fn parse(choice: &str) -> Option<Self> {
        match choice {
            "y" => Some(Confirmation::Accept),
            "n" => Some(Confirmation::Reject),
            "r" => Some(Confirmation::Restart),
            "l" => Some(Confirmation::Last),
            _ => None,
        }
    }
}
