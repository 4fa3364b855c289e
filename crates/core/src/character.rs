//! Character business rules: normalization and validation applied
//! before every create and update.
//!
//! Everything here is pure; the uniqueness check against existing
//! rows needs the store and lives in the service layer.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// The fixed set of playable classes. Compared against the
/// *normalized* class string.
pub const VALID_CLASSES: [&str; 4] = ["Warrior", "Mage", "Rogue", "Archer"];

/// Maximum accepted length of a character name, in characters.
pub const MAX_NAME_LEN: usize = 20;

/// Rogues are capped below the global level ceiling.
pub const ROGUE_LEVEL_CAP: i32 = 40;

/// First word-character of each word (`\b\w`), used to capitalize.
static WORD_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w").expect("valid regex"));

/// Names may only contain letters, digits, and whitespace.
static NAME_CHARSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\s]+$").expect("valid regex"));

/// Normalize a character name: trim, then uppercase the first letter
/// of every word. Remaining letters are left as typed.
///
/// # Examples
///
/// ```
/// use quest_core::character::normalize_name;
///
/// assert_eq!(normalize_name("  conan the barbarian "), "Conan The Barbarian");
/// assert_eq!(normalize_name("coNAN"), "CoNAN");
/// ```
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    WORD_START_RE
        .replace_all(trimmed, |caps: &regex::Captures<'_>| {
            caps[0].to_uppercase()
        })
        .into_owned()
}

/// Normalize a class name: trim, uppercase the first letter,
/// lowercase the rest.
///
/// # Examples
///
/// ```
/// use quest_core::character::normalize_class;
///
/// assert_eq!(normalize_class(" ROGUE "), "Rogue");
/// assert_eq!(normalize_class("mage"), "Mage");
/// ```
pub fn normalize_class(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Validate an already-normalized character. Checks run in order and
/// the first failure wins.
pub fn validate(name: &str, class: &str, level: i32, health: i32) -> Result<(), CoreError> {
    if !NAME_CHARSET_RE.is_match(name) {
        return Err(CoreError::Validation(
            "Name must only contain letters, numbers, and spaces.".to_string(),
        ));
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Name must be at most {MAX_NAME_LEN} characters."
        )));
    }

    if !VALID_CLASSES.contains(&class) {
        return Err(CoreError::Validation(format!(
            "{class} is not a valid class"
        )));
    }

    if class == "Rogue" && level > ROGUE_LEVEL_CAP {
        return Err(CoreError::Validation(
            "Rogues cannot be above level 40.".to_string(),
        ));
    }

    if !(1..=50).contains(&level) {
        return Err(CoreError::Validation(
            "Level must be between 1 and 50.".to_string(),
        ));
    }

    if !(0..=10_000).contains(&health) {
        return Err(CoreError::Validation(
            "Health must be between 0 and 10000.".to_string(),
        ));
    }

    Ok(())
}
