//! Whitelist of cuisine labels recognized for display.

/// Cuisine labels shown to users. Upstream cuisine tags are free text and
/// include non-cuisine noise ("Deals", "Collect stamps"); anything outside
/// this list is dropped silently during normalization.
pub const KNOWN_CUISINES: &[&str] = &[
    "Indian",
    "Chinese",
    "Japanese",
    "Thai",
    "Pizza",
    "Burgers",
    "Italian",
    "Kebab",
    "Greek",
    "Turkish",
    "Halal",
    "Korean",
    "Vietnamese",
    "Mexican",
    "Breakfast",
    "Salads",
    "American",
    "British",
    "Spanish",
    "Caribbean",
    "Persian",
    "BBQ",
    "Vegan",
    "Vegetarian",
    "French",
    "Seafood",
    "Sushi",
    "Sandwiches",
];

/// Returns `true` when `name` is a recognized cuisine label (exact,
/// case-sensitive match).
#[must_use]
pub fn is_known_cuisine(name: &str) -> bool {
    KNOWN_CUISINES.contains(&name)
}
