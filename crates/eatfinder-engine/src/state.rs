//! Observable search state.

use eatfinder_core::Restaurant;

/// One atomic snapshot of the search lifecycle, published wholesale on
/// every transition. Readers never observe a partially updated state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Sanitized results of the latest completed fetch, in source order.
    /// Replaced wholesale; a loading or failed transition keeps the
    /// previous list so the UI does not flash empty.
    pub restaurants: Vec<Restaurant>,

    pub is_loading: bool,

    /// User-facing message for the latest rejection or failure; `None`
    /// while loading and after a completed fetch.
    pub error_message: Option<String>,

    /// True iff the latest completed, non-errored fetch returned zero
    /// records.
    pub is_empty: bool,

    /// True once any search attempt, valid or not, has been initiated.
    pub has_searched: bool,
}
