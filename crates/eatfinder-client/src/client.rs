use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;

use eatfinder_core::config::AppConfig;
use eatfinder_core::raw::{RawRestaurant, RestaurantsResponse};
use eatfinder_core::source::{FetchError, RestaurantSource};

use crate::error::ClientError;

/// HTTP client for the Just Eat UK discovery endpoint
/// (`GET /discovery/uk/restaurants/enriched/bypostcode/{postcode}`).
///
/// Implements [`RestaurantSource`]: every transport outcome is folded
/// into the closed [`FetchError`] taxonomy, so callers never see a raw
/// `reqwest` error. Requests are not retried.
pub struct JustEatClient {
    client: Client,
    base_url: String,
}

impl JustEatClient {
    /// Creates a `JustEatClient` with the configured timeouts and
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Builds the discovery URL for `postcode`.
    ///
    /// The postcode arrives normalized but may contain a space, so the
    /// path segment is percent-encoded.
    fn restaurants_url(&self, postcode: &str) -> String {
        let encoded = utf8_percent_encode(postcode, NON_ALPHANUMERIC);
        format!(
            "{}/discovery/uk/restaurants/enriched/bypostcode/{encoded}",
            self.base_url
        )
    }
}

impl RestaurantSource for JustEatClient {
    async fn fetch(&self, postcode: &str) -> Result<Vec<RawRestaurant>, FetchError> {
        let url = self.restaurants_url(postcode);
        tracing::debug!(url, "requesting restaurants by postcode");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!(
                "unexpected HTTP status {status} from {url}"
            )));
        }

        let body = response.text().await.map_err(map_transport_error)?;
        let parsed = serde_json::from_str::<RestaurantsResponse>(&body).map_err(|e| {
            FetchError::Unknown(format!("malformed restaurants payload for {postcode}: {e}"))
        })?;

        Ok(parsed.restaurants)
    }
}

/// Folds a `reqwest` transport failure into the fetch taxonomy: deadline
/// overruns become `Timeout`, everything else at this layer is `Network`.
fn map_transport_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(err.to_string())
    } else {
        FetchError::Network(err.to_string())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
