//! Search orchestration: validate input, fetch, normalize, publish.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tokio::sync::watch;

use eatfinder_core::logger::Logger;
use eatfinder_core::normalize::normalize_restaurant;
use eatfinder_core::postcode::{validate_postcode, PostcodeValidation};
use eatfinder_core::source::{FetchError, RestaurantSource};

use crate::state::SearchState;

const LOG_TAG: &str = "SearchEngine";

const MSG_EMPTY_POSTCODE: &str = "Please enter a postcode";
const MSG_INVALID_POSTCODE: &str = "Invalid UK postcode format";
const MSG_NETWORK: &str = "No internet connection. Please check your network.";
const MSG_TIMEOUT: &str = "Server timeout. Please try again shortly.";
const MSG_UNKNOWN: &str = "Something went wrong. Please try again later.";

/// Drives the search lifecycle: Idle → Validating → {Rejected | Loading →
/// {Loaded | Failed}} → quiescent, one traversal per [`Self::search`]
/// call.
///
/// State is published through a `watch` channel as whole-object
/// snapshots. Each attempt is generation-stamped; when a newer search
/// starts while an older fetch is still in flight, the older attempt's
/// publications are dropped, so a slow stale response can never overwrite
/// a fresher result.
///
/// No failure is fatal to the engine itself; it stays usable for the
/// next call regardless of prior outcome.
pub struct SearchEngine<S, L> {
    source: S,
    logger: L,
    state_tx: watch::Sender<SearchState>,
    generation: AtomicU64,
    publish_lock: Mutex<()>,
}

impl<S: RestaurantSource, L: Logger> SearchEngine<S, L> {
    #[must_use]
    pub fn new(source: S, logger: L) -> Self {
        let (state_tx, _) = watch::channel(SearchState::default());
        Self {
            source,
            logger,
            state_tx,
            generation: AtomicU64::new(0),
            publish_lock: Mutex::new(()),
        }
    }

    /// Subscribes to state snapshots. Within one attempt, snapshots are
    /// observed in publication order.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state_tx.subscribe()
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn state(&self) -> SearchState {
        self.state_tx.borrow().clone()
    }

    /// Runs one search attempt for raw user input. No return value: the
    /// outcome, including validation rejections and transport failures,
    /// is observable only through state snapshots.
    pub async fn search(&self, raw_postcode: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let normalized = match validate_postcode(raw_postcode) {
            PostcodeValidation::Empty => {
                self.publish_rejection(generation, MSG_EMPTY_POSTCODE);
                return;
            }
            PostcodeValidation::InvalidFormat => {
                self.publish_rejection(generation, MSG_INVALID_POSTCODE);
                return;
            }
            PostcodeValidation::Valid(normalized) => normalized,
        };

        let mut loading = self.state();
        loading.is_loading = true;
        loading.error_message = None;
        loading.has_searched = true;
        self.publish(generation, loading);

        self.logger
            .debug(LOG_TAG, &format!("fetching restaurants for {normalized}"));

        match self.source.fetch(&normalized).await {
            Ok(records) => {
                let restaurants: Vec<_> = records.into_iter().map(normalize_restaurant).collect();
                let loaded = SearchState {
                    is_empty: restaurants.is_empty(),
                    restaurants,
                    is_loading: false,
                    error_message: None,
                    has_searched: true,
                };
                self.publish(generation, loaded);
            }
            Err(err) => {
                self.logger.error(LOG_TAG, &err.to_string());
                let message = match err {
                    FetchError::Network(_) => MSG_NETWORK,
                    FetchError::Timeout(_) => MSG_TIMEOUT,
                    FetchError::Unknown(_) => MSG_UNKNOWN,
                };
                let mut failed = self.state();
                failed.is_loading = false;
                failed.error_message = Some(message.to_owned());
                failed.has_searched = true;
                self.publish(generation, failed);
            }
        }
    }

    /// Publishes the terminal state of a validation rejection, keeping
    /// the previous result list visible behind the message.
    fn publish_rejection(&self, generation: u64, message: &str) {
        let mut rejected = self.state();
        rejected.is_loading = false;
        rejected.error_message = Some(message.to_owned());
        rejected.has_searched = true;
        self.publish(generation, rejected);
    }

    /// Publishes a whole-object snapshot unless a newer attempt has
    /// started. The generation check and the send happen under one lock,
    /// so publications never interleave and stale attempts are dropped
    /// silently.
    fn publish(&self, generation: u64, state: SearchState) {
        let _guard = self.publish_lock.lock().expect("publish lock poisoned");
        if self.generation.load(Ordering::SeqCst) != generation {
            return;
        }
        self.state_tx.send_replace(state);
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
