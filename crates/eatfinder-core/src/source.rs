//! Restaurant fetch capability and its failure taxonomy.

use std::future::Future;

use thiserror::Error;

use crate::raw::RawRestaurant;

/// Closed set of transport failures a [`RestaurantSource`] may signal.
///
/// The engine matches these exhaustively to produce user-facing error
/// messages; raw detail in the payload only ever reaches the log sink.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No connectivity, connection reset, or a non-2xx response.
    #[error("network failure: {0}")]
    Network(String),

    /// The request exceeded the transport's deadline.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Anything else: malformed payload, unexpected client failure.
    #[error("unexpected failure: {0}")]
    Unknown(String),
}

/// Capability for fetching raw restaurant records by postcode.
///
/// `postcode` is already normalized (trimmed, uppercased, single-spaced)
/// by the time it reaches this interface; implementations own any
/// wire-level encoding.
pub trait RestaurantSource: Send + Sync {
    fn fetch(
        &self,
        postcode: &str,
    ) -> impl Future<Output = Result<Vec<RawRestaurant>, FetchError>> + Send;
}
