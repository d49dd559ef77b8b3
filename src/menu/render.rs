//! Prompt text assembly

use super::level::Level;
use super::value::Selections;
use crate::console::LineKind;

pub const PROMPT: &str = "Choose an option: ";
pub const CONFIRM_PROMPT: &str = "Confirm selection? (y/n/r=restart/l=last): ";

pub const MSG_EXITING: &str = "Exiting...";
pub const MSG_RETURNING: &str = "Returning to parent menu...";
pub const MSG_INVALID: &str = "Invalid input. Please try again.";
pub const MSG_EMPTY_SELECTION: &str = "Error: You must select at least one option.";
pub const MSG_INVALID_FORMAT: &str =
    "Invalid input format. Please enter indices separated by space or comma.";
pub const MSG_INVALID_CONFIRM: &str = "Invalid input. Please enter y/n/r/l";
pub const MSG_CURRENT_SELECTIONS: &str = "Current selections:";

const SEPARATOR_WIDTH: usize = 30;

pub type Lines = Vec<(LineKind, String)>;

/// Full question for the level at `index`, with the answers of every
/// level before it as history
pub fn question(levels: &[Level], index: usize) -> Lines {
    let level = &levels[index];
    let separator = "-".repeat(SEPARATOR_WIDTH);

    let mut lines = vec![
        (LineKind::Plain, String::new()),
        (LineKind::Heading, separator.clone()),
        (LineKind::Heading, format!("Step {}: {}", index + 1, level.title())),
        (LineKind::Heading, separator),
    ];

    if let Some(history) = history(&levels[..index]) {
        lines.push((LineKind::Plain, history));
    }

    for (idx, option) in level.options().iter().enumerate() {
        lines.push((LineKind::Plain, format!("[{}]: {}", idx, option)));
    }

    lines.push((LineKind::Plain, "[q]: Quit".to_string()));
    if index > 0 {
        lines.push((LineKind::Plain, "[r]: Return to parent".to_string()));
    }
    if level.multiple_allowed() {
        lines.push((
            LineKind::Plain,
            "[*]: Enter indices (e.g., 0 1,2) to select multiple".to_string(),
        ));
    }

    lines
}

/// One-line trail of earlier answers, e.g. `History: file=data1.csv -> class_name=A`
pub fn history(previous: &[Level]) -> Option<String> {
    if previous.is_empty() {
        return None;
    }

    let steps: Vec<String> = previous
        .iter()
        .map(|level| {
            let value = level.result().map(ToString::to_string).unwrap_or_default();
            match level.key() {
                Some(key) => format!("{}={}", key, value),
                None => value,
            }
        })
        .collect();

    Some(format!("History: {}", steps.join(" -> ")))
}

/// Preview shown before the confirmation prompt
pub fn preview(selections: &Selections) -> Lines {
    let mut lines = vec![
        (LineKind::Plain, String::new()),
        (LineKind::Heading, MSG_CURRENT_SELECTIONS.to_string()),
    ];
    for (key, value) in selections.iter() {
        lines.push((LineKind::Plain, format!("{}: {}", key, value)));
    }
    lines
}
