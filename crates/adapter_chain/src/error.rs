//! Chain adapter error types.

use thiserror::Error;

/// Errors raised while sourcing option-chain data.
///
/// Providers fail with a retrievable error; the caller (or a
/// [`FallbackChain`](crate::FallbackChain)) decides whether to try the
/// next source. Nothing in this crate retries automatically.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// The provider has no data for the requested ticker.
    #[error("provider '{provider}' does not know ticker '{ticker}'")]
    UnknownTicker {
        /// The requested ticker symbol
        ticker: String,
        /// The provider that rejected it
        provider: &'static str,
    },

    /// The upstream source could not be reached or answered abnormally.
    #[error("provider '{provider}' unavailable: {reason}")]
    Unavailable {
        /// The failing provider
        provider: &'static str,
        /// Human-readable failure description
        reason: String,
    },

    /// The source answered with data that does not match the expected
    /// shape (bad JSON, unparseable expiry label, malformed IV).
    #[error("malformed chain data: {reason}")]
    MalformedData {
        /// What failed to parse
        reason: String,
    },

    /// Every provider in a fallback chain failed.
    #[error("all {attempts} chain providers failed for '{ticker}'; last error: {last_error}")]
    AllProvidersFailed {
        /// The requested ticker symbol
        ticker: String,
        /// How many providers were tried
        attempts: usize,
        /// Display form of the final provider's error
        last_error: String,
    },
}
