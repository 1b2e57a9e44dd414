//! Option-chain snapshot values.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One quoted contract in a chain table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionQuote {
    /// Strike price
    pub strike: f64,
    /// Last traded market price
    pub last_price: f64,
    /// Implied volatility on the 0-1 scale
    pub implied_volatility: f64,
}

/// The call and put tables for one expiry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainSlice {
    /// Call contracts, in source order
    pub calls: Vec<OptionQuote>,
    /// Put contracts, in source order
    pub puts: Vec<OptionQuote>,
}

/// A ticker's option chain at a point in time: spot price plus the
/// quote tables for every listed expiry.
///
/// Expiries are kept in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSnapshot {
    ticker: String,
    spot_price: f64,
    chain: BTreeMap<NaiveDate, ChainSlice>,
}

impl ChainSnapshot {
    /// Assembles a snapshot from per-expiry slices.
    pub fn new(
        ticker: impl Into<String>,
        spot_price: f64,
        chain: BTreeMap<NaiveDate, ChainSlice>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            spot_price,
            chain,
        }
    }

    /// Returns the ticker symbol.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Returns the spot price at snapshot time.
    pub fn spot_price(&self) -> f64 {
        self.spot_price
    }

    /// Lists expiries in chronological order.
    pub fn expiries(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.chain.keys().copied()
    }

    /// Looks up the quote tables for one expiry.
    pub fn slice(&self, expiry: NaiveDate) -> Option<&ChainSlice> {
        self.chain.get(&expiry)
    }

    /// Returns the number of listed expiries.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns whether the snapshot lists no expiries.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}
