//! Raw restaurant types as returned by the Just Eat UK discovery endpoint.
//!
//! ## Observed shape from `GET /discovery/uk/restaurants/enriched/bypostcode/{postcode}`
//!
//! ### Names
//! Free text and frequently noisy: social handles (`"@pizzaslice"`),
//! parenthesized promo tags (`"(Halal)"`), and embedded address fragments
//! (`"Chicken Hut London EC1A"`) all appear in live responses. Cleanup is
//! the normalizer's job; these types preserve the mess as-is.
//!
//! ### `rating`
//! An object wrapping `starRating`. Either the whole object or the inner
//! value may be `null`/absent for new venues. Both are modeled as
//! `Option` so "unrated" survives normalization instead of collapsing to
//! `0.0`.
//!
//! ### `cuisines`
//! An array of `{ name }` objects. The names are free text curated by the
//! venues themselves, so anything from `"Italian"` to `"Collect stamps"`
//! shows up. Filtering against the display whitelist happens in
//! [`crate::normalize`].
//!
//! ### Postal codes
//! Arrive in every casing and spacing variant (`"ec1a1bb"`, `"EC1A1BB"`,
//! `"ec1a 1bb"`). Canonical formatting happens in [`crate::postcode`].
//!
//! Every optional field uses `#[serde(default)]` so partially filled
//! records deserialize instead of failing the whole payload.

use serde::Deserialize;

/// Top-level envelope of the discovery response.
#[derive(Debug, Clone, Deserialize)]
pub struct RestaurantsResponse {
    #[serde(default)]
    pub restaurants: Vec<RawRestaurant>,
}

/// A single untrusted restaurant record.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRestaurant {
    /// Upstream identifier; an opaque string.
    #[serde(default)]
    pub id: String,

    /// Display name, possibly polluted with handles, tags, or address
    /// fragments.
    #[serde(default)]
    pub name: String,

    /// Free-text cuisine tags in source order.
    #[serde(default)]
    pub cuisines: Vec<RawCuisine>,

    /// Aggregate rating object; `null`/absent for unrated venues.
    #[serde(default)]
    pub rating: Option<RawRating>,

    #[serde(default)]
    pub address: RawAddress,
}

/// A free-text cuisine tag.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawCuisine {
    #[serde(default)]
    pub name: String,
}

/// Aggregate rating wrapper.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRating {
    #[serde(default)]
    pub star_rating: Option<f64>,
}

/// Unsanitized address fields.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAddress {
    #[serde(default)]
    pub first_line: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "restaurants": [{
                "id": "42",
                "name": "Pizza Place",
                "cuisines": [{"name": "Italian"}, {"name": "Vegan"}],
                "rating": {"starRating": 4.5},
                "address": {"firstLine": "1 Main Street", "city": "London", "postalCode": "EC1A 1BB"}
            }]
        }"#;
        let parsed: RestaurantsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.restaurants.len(), 1);
        let r = &parsed.restaurants[0];
        assert_eq!(r.id, "42");
        assert_eq!(r.cuisines[1].name, "Vegan");
        assert_eq!(r.rating.as_ref().unwrap().star_rating, Some(4.5));
        assert_eq!(r.address.postal_code, "EC1A 1BB");
    }

    #[test]
    fn deserializes_sparse_record_with_defaults() {
        let json = r#"{"restaurants": [{"id": "7"}]}"#;
        let parsed: RestaurantsResponse = serde_json::from_str(json).unwrap();
        let r = &parsed.restaurants[0];
        assert_eq!(r.name, "");
        assert!(r.cuisines.is_empty());
        assert!(r.rating.is_none());
        assert_eq!(r.address.first_line, "");
    }

    #[test]
    fn null_star_rating_is_none() {
        let json = r#"{"restaurants": [{"id": "7", "rating": {"starRating": null}}]}"#;
        let parsed: RestaurantsResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.restaurants[0]
            .rating
            .as_ref()
            .unwrap()
            .star_rating
            .is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{"restaurants": [{"id": "7", "logoUrl": "https://x/y.png", "deliveryCost": 2.5}]}"#;
        let parsed: RestaurantsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.restaurants[0].id, "7");
    }
}
