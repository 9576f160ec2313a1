pub mod client;
pub mod error;

pub use client::JustEatClient;
pub use error::ClientError;
