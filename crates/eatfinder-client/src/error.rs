use thiserror::Error;

/// Construction-time failures of [`crate::JustEatClient`].
///
/// Transport failures during a fetch are not represented here; those are
/// folded into the closed [`eatfinder_core::FetchError`] taxonomy so the
/// engine can match them exhaustively.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP client construction failed: {0}")]
    Http(#[from] reqwest::Error),
}
