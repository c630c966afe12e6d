//! Line-oriented parser for generated recipe text.
//!
//! The generator loosely follows this layout:
//!
//! ```text
//! Title: Golden Latte
//! Ingredients:
//! - Oat Milk
//! - Honey
//! Directions:
//! 1. Warm milk
//! 2. Whisk matcha
//! ```
//!
//! Anything that doesn't fit is skipped rather than rejected.

use crate::model::{ParsedRecipe, DEFAULT_TITLE};

const TITLE_MARKER: &str = "Title:";
const INGREDIENTS_MARKER: &str = "Ingredients:";
const DIRECTIONS_MARKER: &str = "Directions:";

/// Parse raw generated text into a [`ParsedRecipe`].
///
/// Never fails. Missing sections come back as empty lists and a missing
/// title falls back to [`DEFAULT_TITLE`].
pub fn parse(raw: &str) -> ParsedRecipe {
    let lines: Vec<&str> = raw.split('\n').collect();

    let ingredients_start = lines.iter().position(|l| l.contains(INGREDIENTS_MARKER));
    let directions_start = lines.iter().position(|l| l.contains(DIRECTIONS_MARKER));

    let ingredients = match (ingredients_start, directions_start) {
        // An inverted marker order gives an empty range
        (Some(start), Some(end)) if start < end => lines[start + 1..end]
            .iter()
            .filter_map(|l| strip_bullet(l))
            .collect(),
        _ => Vec::new(),
    };

    let directions = match directions_start {
        Some(start) => lines[start + 1..]
            .iter()
            .filter_map(|l| strip_ordinal(l))
            .collect(),
        None => Vec::new(),
    };

    ParsedRecipe {
        title: extract_title(&lines),
        ingredients,
        directions,
    }
}

fn extract_title(lines: &[&str]) -> String {
    lines
        .iter()
        .find_map(|l| l.strip_prefix(TITLE_MARKER))
        .map(|title| title.trim().to_string())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// `"  - Oat Milk "` -> `Some("Oat Milk")`
fn strip_bullet(line: &str) -> Option<String> {
    line.trim()
        .strip_prefix('-')
        .map(|rest| rest.trim().to_string())
}

/// `"12. Stir well"` -> `Some("Stir well")`
fn strip_ordinal(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    trimmed[digits..]
        .strip_prefix('.')
        .map(|rest| rest.trim().to_string())
}
