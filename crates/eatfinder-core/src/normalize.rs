//! Normalization from raw upstream records to the display-ready
//! [`Restaurant`] domain model.
//!
//! All functions here are pure and never fail: malformed or missing
//! fields degrade to blank strings, `None` ratings, or empty cuisine
//! lists rather than rejecting the record. The text transformations are
//! order-sensitive (name cleanup runs against the *already-normalized*
//! address), so keep the pipeline sequence intact when changing them.

use std::collections::HashSet;

use regex::Regex;

use crate::cuisines::is_known_cuisine;
use crate::model::{Address, Restaurant};
use crate::postcode::canonicalize_postcode;
use crate::raw::{RawAddress, RawRestaurant};

/// Tokenization boundary shared by name cleanup and address dedup.
/// Hyphen covers both ASCII `-` and the en dash seen in live data.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '-' | '\u{2013}')
}

/// Normalizes one raw upstream record into a sanitized [`Restaurant`].
#[must_use]
pub fn normalize_restaurant(raw: RawRestaurant) -> Restaurant {
    let address = sanitize_address(&raw.address);

    let cuisines = raw
        .cuisines
        .iter()
        .map(|cuisine| cuisine.name.trim())
        .filter(|name| is_known_cuisine(name))
        .map(str::to_owned)
        .collect();

    Restaurant {
        name: clean_name(&raw.name, &address),
        cuisines,
        rating: raw.rating.and_then(|r| r.star_rating),
        id: raw.id,
        address,
    }
}

/// Strips social handles, parenthesized tags, and address fragments from a
/// restaurant name.
///
/// The address passed in must already be sanitized: dedup works by
/// dropping name tokens that also occur in the address, so both sides
/// need identical formatting for the comparison to hold.
fn clean_name(raw_name: &str, address: &Address) -> String {
    let handles = Regex::new(r"@\S+").expect("valid regex");
    let parens = Regex::new(r"\(.*?\)").expect("valid regex");

    let stripped = handles.replace_all(raw_name, "");
    let stripped = parens.replace_all(&stripped, "");
    let stripped = stripped.trim();

    let address_tokens: HashSet<String> = [
        address.first_line.as_str(),
        address.city.as_str(),
        address.postal_code.as_str(),
    ]
    .iter()
    .flat_map(|part| part.split(is_separator))
    .map(|token| token.trim().to_lowercase())
    .filter(|token| !token.is_empty())
    .collect();

    let pre_filter: Vec<&str> = stripped
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .collect();

    let kept: Vec<&str> = pre_filter
        .iter()
        .copied()
        .filter(|token| !address_tokens.contains(&token.to_lowercase()))
        .collect();

    let name = strip_edge_punctuation(&kept.join(" "));

    if name.is_empty() {
        // Every token was an address fragment. Prefer the first original
        // token with a letter in it so an all-digit postcode fragment
        // never becomes the displayed name.
        return pre_filter
            .iter()
            .find(|token| token.chars().any(char::is_alphabetic))
            .map_or_else(|| stripped.to_owned(), |token| (*token).to_owned());
    }
    name
}

/// Removes leading/trailing comma-or-hyphen runs and collapses repeated
/// whitespace.
fn strip_edge_punctuation(name: &str) -> String {
    let trailing = Regex::new(r"[-\u{2013},]+\s*$").expect("valid regex");
    let leading = Regex::new(r"^\s*[-\u{2013},]+").expect("valid regex");
    let whitespace = Regex::new(r"\s{2,}").expect("valid regex");

    let name = trailing.replace_all(name, "");
    let name = leading.replace_all(&name, "");
    whitespace.replace_all(&name, " ").trim().to_owned()
}

/// Sanitizes address fields into UK display conventions: title-cased
/// street and city, canonical postcode spacing, and no city/postcode
/// echoed inside the first line.
fn sanitize_address(raw: &RawAddress) -> Address {
    let first_line = normalize_component(raw.first_line.trim());
    let city = normalize_component(raw.city.trim());
    let postal_code = canonicalize_postcode(&raw.postal_code.trim().to_uppercase());

    // "123 London Road, London" must not render the city twice.
    let duplicates: HashSet<String> =
        HashSet::from([city.to_lowercase(), postal_code.to_lowercase()]);

    let first_line = first_line
        .split([',', ' '])
        .map(str::trim)
        .filter(|token| !token.is_empty() && !duplicates.contains(&token.to_lowercase()))
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ");

    Address {
        first_line,
        city,
        postal_code,
    }
}

/// Cleans up casing, whitespace, and stray punctuation in a single
/// address component (first line or city).
fn normalize_component(raw: &str) -> String {
    let punct_runs = Regex::new(r"[,\-\u{2013}]{2,}").expect("valid regex");
    let whitespace = Regex::new(r"\s{2,}").expect("valid regex");
    let adjacent_commas = Regex::new(r",\s*,").expect("valid regex");
    let trailing = Regex::new(r"[\s,]+$").expect("valid regex");
    let leading = Regex::new(r"^\s*,*").expect("valid regex");

    let value = punct_runs.replace_all(raw, ",");
    let value = whitespace.replace_all(&value, " ");
    let value = adjacent_commas.replace_all(&value, ",");
    let value = trailing.replace_all(&value, "");
    let value = leading.replace_all(&value, "");

    value
        .split(' ')
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_owned()
}

/// Lowercases a word and uppercases its first character.
fn title_case_word(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
