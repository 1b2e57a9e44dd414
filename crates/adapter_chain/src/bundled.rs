//! Static chain dataset bundled with the crate.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::Deserialize;

use super::error::ChainError;
use super::provider::ChainProvider;
use super::types::{ChainSlice, ChainSnapshot, OptionQuote};

const DEMO_CHAIN_JSON: &str = include_str!("../data/demo_chain.json");

/// A chain provider backed by a JSON document loaded at construction.
///
/// Serves exactly one ticker (matched case-insensitively) and never
/// fails after construction, which makes it the natural last entry in a
/// [`FallbackChain`](crate::FallbackChain).
///
/// The source document may label expiries either as ISO dates
/// (`"2026-12-18"`) or relative to a reference date
/// (`"today + 30 days"`); relative labels are resolved against the
/// `reference_date` passed in, so the bundled data never goes stale.
/// Implied volatilities may be fractions (`0.25`) or percent strings
/// (`"25%"`); both normalise to the 0-1 scale.
#[derive(Debug, Clone)]
pub struct BundledDataset {
    snapshot: ChainSnapshot,
}

#[derive(Deserialize)]
struct RawDocument {
    ticker: String,
    stock_price: f64,
    #[serde(alias = "chain")]
    option_chain: BTreeMap<String, RawSlice>,
}

#[derive(Deserialize)]
struct RawSlice {
    #[serde(default)]
    calls: Vec<RawQuote>,
    #[serde(default)]
    puts: Vec<RawQuote>,
}

#[derive(Deserialize)]
struct RawQuote {
    #[serde(alias = "Strike")]
    strike: f64,
    #[serde(alias = "Last Price", alias = "lastPrice")]
    last_price: f64,
    #[serde(alias = "Implied Volatility", alias = "impliedVolatility")]
    implied_volatility: IvValue,
}

/// An implied volatility as it appears on the wire: already a fraction,
/// or a percent string like `"25%"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum IvValue {
    Fraction(f64),
    Percent(String),
}

impl IvValue {
    fn normalise(self) -> Result<f64, ChainError> {
        match self {
            IvValue::Fraction(v) => Ok(v),
            IvValue::Percent(text) => {
                let trimmed = text.trim();
                let digits = trimmed.strip_suffix('%').ok_or_else(|| {
                    ChainError::MalformedData {
                        reason: format!("implied volatility '{trimmed}' is neither a number nor a percent string"),
                    }
                })?;
                let percent: f64 =
                    digits
                        .trim()
                        .parse()
                        .map_err(|_| ChainError::MalformedData {
                            reason: format!("unparseable implied volatility '{trimmed}'"),
                        })?;
                Ok(percent / 100.0)
            }
        }
    }
}

/// Resolves an expiry label to a date.
///
/// Accepts ISO `%Y-%m-%d` dates and relative labels of the form
/// `today + N days` (the unit word is optional).
fn resolve_expiry_label(label: &str, reference_date: NaiveDate) -> Result<NaiveDate, ChainError> {
    if let Ok(date) = NaiveDate::parse_from_str(label, "%Y-%m-%d") {
        return Ok(date);
    }

    let malformed = || ChainError::MalformedData {
        reason: format!("unparseable expiry label '{label}'"),
    };

    let rest = label.trim().strip_prefix("today").ok_or_else(malformed)?;
    let rest = rest.trim_start().strip_prefix('+').ok_or_else(malformed)?;
    let rest = rest.trim();
    let digits = rest
        .strip_suffix("days")
        .or_else(|| rest.strip_suffix("day"))
        .unwrap_or(rest)
        .trim();
    let days: i64 = digits.parse().map_err(|_| malformed())?;

    Ok(reference_date + Duration::days(days))
}

impl BundledDataset {
    /// Parses a dataset from its JSON source.
    ///
    /// # Errors
    /// `ChainError::MalformedData` when the document does not deserialize
    /// or an expiry label / implied volatility fails to normalise.
    pub fn from_json(json: &str, reference_date: NaiveDate) -> Result<Self, ChainError> {
        let raw: RawDocument =
            serde_json::from_str(json).map_err(|err| ChainError::MalformedData {
                reason: format!("invalid chain document: {err}"),
            })?;

        let mut chain = BTreeMap::new();
        for (label, slice) in raw.option_chain {
            let expiry = resolve_expiry_label(&label, reference_date)?;
            chain.insert(
                expiry,
                ChainSlice {
                    calls: convert_quotes(slice.calls)?,
                    puts: convert_quotes(slice.puts)?,
                },
            );
        }

        Ok(Self {
            snapshot: ChainSnapshot::new(raw.ticker, raw.stock_price, chain),
        })
    }

    /// Loads the demonstration dataset shipped with the crate.
    pub fn demo(reference_date: NaiveDate) -> Result<Self, ChainError> {
        Self::from_json(DEMO_CHAIN_JSON, reference_date)
    }

    /// Returns the parsed snapshot regardless of ticker.
    pub fn snapshot(&self) -> &ChainSnapshot {
        &self.snapshot
    }
}

fn convert_quotes(raw: Vec<RawQuote>) -> Result<Vec<OptionQuote>, ChainError> {
    raw.into_iter()
        .map(|quote| {
            Ok(OptionQuote {
                strike: quote.strike,
                last_price: quote.last_price,
                implied_volatility: quote.implied_volatility.normalise()?,
            })
        })
        .collect()
}

impl ChainProvider for BundledDataset {
    fn name(&self) -> &'static str {
        "bundled"
    }

    fn fetch(&self, ticker: &str) -> Result<ChainSnapshot, ChainError> {
        if ticker.eq_ignore_ascii_case(self.snapshot.ticker()) {
            Ok(self.snapshot.clone())
        } else {
            Err(ChainError::UnknownTicker {
                ticker: ticker.to_string(),
                provider: self.name(),
            })
        }
    }
}
