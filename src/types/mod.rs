use thiserror::Error;

mod colors;
mod domain_types;
mod ids;
mod rich_text;

pub use colors::*;
pub use domain_types::*;
pub use ids::*;
pub use rich_text::*;

/// Local validation failures, always detected before any network call.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid {kind}, expected a 32-character hex UUID: {input}")]
    InvalidId { kind: &'static str, input: String },

    #[error("Invalid API key format: {reason}")]
    InvalidApiKey { reason: String },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
