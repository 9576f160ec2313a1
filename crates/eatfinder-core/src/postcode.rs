//! UK postcode validation and canonical formatting.

use regex::Regex;

/// Outcome of validating a raw user-entered postcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostcodeValidation {
    /// Structurally a UK postcode; carries the trimmed, single-spaced,
    /// uppercased form.
    Valid(String),
    /// Blank after trimming.
    Empty,
    /// Does not match the UK postcode shape.
    InvalidFormat,
}

/// Validates raw user input as a UK postcode.
///
/// Trims, collapses internal whitespace runs to a single space, and
/// uppercases before matching. Pure and deterministic; idempotent on its
/// own `Valid` output.
#[must_use]
pub fn validate_postcode(raw: &str) -> PostcodeValidation {
    if raw.trim().is_empty() {
        return PostcodeValidation::Empty;
    }

    let normalized = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase();

    let pattern = Regex::new(r"^[A-Z]{1,2}[0-9][0-9A-Z]? ?[0-9][A-Z]{2}$").expect("valid regex");
    if pattern.is_match(&normalized) {
        PostcodeValidation::Valid(normalized)
    } else {
        PostcodeValidation::InvalidFormat
    }
}

/// Formats an already-uppercased postcode into the canonical `XX9[X] 9XX`
/// shape.
///
/// Strips all whitespace first, then inserts a single space before the
/// 3-character inward segment. Values that do not match the UK shape pass
/// through whitespace-stripped and otherwise unchanged.
#[must_use]
pub fn canonicalize_postcode(postcode: &str) -> String {
    let compact: String = postcode.split_whitespace().collect();

    let pattern = Regex::new(r"^([A-Z]{1,2}[0-9][A-Z0-9]?)([0-9][A-Z]{2})$").expect("valid regex");
    match pattern.captures(&compact) {
        Some(caps) => format!("{} {}", &caps[1], &caps[2]),
        None => compact,
    }
}

#[cfg(test)]
#[path = "postcode_test.rs"]
mod tests;
