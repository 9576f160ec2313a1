//! Sanitized domain model produced by [`crate::normalize`].

use serde::Serialize;

/// A cleaned UK address.
///
/// `postal_code` is in the canonical `XX9[X] 9XX` form whenever the source
/// value was structurally recognizable; otherwise it is the best-effort
/// uppercased, whitespace-stripped value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub first_line: String,
    pub city: String,
    pub postal_code: String,
}

/// A display-ready restaurant record.
///
/// `rating` stays `None` when the upstream record carries no rating;
/// `Some(0.0)` is a valid low rating, distinct from unrated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    /// Whitelisted cuisine labels, in source order, duplicates preserved.
    pub cuisines: Vec<String>,
    pub rating: Option<f64>,
    pub address: Address,
}

impl Restaurant {
    /// Joins the non-blank address components with `", "` in the order
    /// first line, city, postcode.
    #[must_use]
    pub fn full_address(&self) -> String {
        [
            self.address.first_line.as_str(),
            self.address.city.as_str(),
            self.address.postal_code.as_str(),
        ]
        .iter()
        .filter(|part| !part.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
    }
}
