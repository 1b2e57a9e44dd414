//! Provider trait and ordered fallback chain.

use tracing::{debug, warn};

use super::error::ChainError;
use super::types::ChainSnapshot;

/// A source of option-chain snapshots.
///
/// Implementations are expected to be cheap to query repeatedly and to
/// fail with a retrievable [`ChainError`] when the ticker is unknown or
/// the upstream source is unreachable. Retrying and fallback are the
/// caller's concern, not the provider's.
pub trait ChainProvider {
    /// Short provider name for logging and error reporting.
    fn name(&self) -> &'static str;

    /// Fetches the chain snapshot for a ticker.
    fn fetch(&self, ticker: &str) -> Result<ChainSnapshot, ChainError>;
}

/// Ordered list of providers tried in sequence.
///
/// The three-tier production setup (live source, secondary network
/// source, bundled static dataset) becomes an explicit strategy list
/// rather than nested error handling: each provider either answers or
/// the chain moves on, and only full exhaustion is an error.
///
/// # Examples
/// ```
/// use adapter_chain::{BundledDataset, FallbackChain};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
/// let bundled = BundledDataset::demo(today).unwrap();
///
/// let chain = FallbackChain::new(vec![Box::new(bundled)]);
/// let snapshot = chain.fetch("DEMO").unwrap();
/// assert!(snapshot.spot_price() > 0.0);
/// ```
pub struct FallbackChain {
    providers: Vec<Box<dyn ChainProvider>>,
}

impl FallbackChain {
    /// Creates a chain from an ordered provider list (first = most
    /// preferred).
    pub fn new(providers: Vec<Box<dyn ChainProvider>>) -> Self {
        Self { providers }
    }

    /// Appends a provider as the new last resort.
    pub fn push(&mut self, provider: Box<dyn ChainProvider>) {
        self.providers.push(provider);
    }

    /// Fetches from the first provider that answers.
    ///
    /// # Errors
    /// `ChainError::AllProvidersFailed` when every provider failed (or
    /// the chain is empty), carrying the last provider's error text.
    pub fn fetch(&self, ticker: &str) -> Result<ChainSnapshot, ChainError> {
        let mut last_error = String::from("no providers configured");

        for provider in &self.providers {
            match provider.fetch(ticker) {
                Ok(snapshot) => {
                    debug!(provider = provider.name(), ticker, "chain snapshot fetched");
                    return Ok(snapshot);
                }
                Err(err) => {
                    warn!(
                        provider = provider.name(),
                        ticker,
                        error = %err,
                        "chain provider failed, falling back"
                    );
                    last_error = err.to_string();
                }
            }
        }

        Err(ChainError::AllProvidersFailed {
            ticker: ticker.to_string(),
            attempts: self.providers.len(),
            last_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChainSlice;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    struct Unreachable;

    impl ChainProvider for Unreachable {
        fn name(&self) -> &'static str {
            "unreachable"
        }

        fn fetch(&self, _ticker: &str) -> Result<ChainSnapshot, ChainError> {
            Err(ChainError::Unavailable {
                provider: self.name(),
                reason: "connection refused".to_string(),
            })
        }
    }

    struct Static {
        spot: f64,
    }

    impl ChainProvider for Static {
        fn name(&self) -> &'static str {
            "static"
        }

        fn fetch(&self, ticker: &str) -> Result<ChainSnapshot, ChainError> {
            if ticker != "DEMO" {
                return Err(ChainError::UnknownTicker {
                    ticker: ticker.to_string(),
                    provider: self.name(),
                });
            }
            let mut chain = BTreeMap::new();
            chain.insert(
                NaiveDate::from_ymd_opt(2026, 12, 18).unwrap(),
                ChainSlice::default(),
            );
            Ok(ChainSnapshot::new("DEMO", self.spot, chain))
        }
    }

    #[test]
    fn test_first_success_wins() {
        let chain = FallbackChain::new(vec![
            Box::new(Static { spot: 101.0 }),
            Box::new(Static { spot: 999.0 }),
        ]);
        let snapshot = chain.fetch("DEMO").unwrap();
        assert_eq!(snapshot.spot_price(), 101.0);
    }

    #[test]
    fn test_falls_back_in_order() {
        let chain = FallbackChain::new(vec![
            Box::new(Unreachable),
            Box::new(Static { spot: 42.0 }),
        ]);
        let snapshot = chain.fetch("DEMO").unwrap();
        assert_eq!(snapshot.spot_price(), 42.0);
    }

    #[test]
    fn test_exhaustion_reports_last_error() {
        let chain = FallbackChain::new(vec![
            Box::new(Unreachable),
            Box::new(Static { spot: 42.0 }),
        ]);
        let err = chain.fetch("NOPE").unwrap_err();
        match err {
            ChainError::AllProvidersFailed {
                ticker,
                attempts,
                last_error,
            } => {
                assert_eq!(ticker, "NOPE");
                assert_eq!(attempts, 2);
                assert!(last_error.contains("NOPE"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_chain_fails() {
        let chain = FallbackChain::new(vec![]);
        assert!(matches!(
            chain.fetch("DEMO"),
            Err(ChainError::AllProvidersFailed { attempts: 0, .. })
        ));
    }
}
