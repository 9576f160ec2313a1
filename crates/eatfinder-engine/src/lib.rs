pub mod engine;
pub mod state;

pub use engine::SearchEngine;
pub use state::SearchState;
