//! Insertion-ordered collection of option positions.

use super::position::OptionPosition;

/// An ordered sequence of option positions.
///
/// Order is insertion order and duplicates are permitted: there is no
/// identity key on a position. The book is append-only apart from
/// [`clear`](Portfolio::clear), which resets it wholesale.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use hedgelab_core::OptionType;
/// use hedgelab_models::{OptionPosition, Portfolio};
///
/// let expiry = NaiveDate::from_ymd_opt(2026, 10, 22).unwrap();
/// let mut book = Portfolio::new();
/// book.push(OptionPosition::new(OptionType::Call, 100.0, expiry, 1, 0.25, 5.0).unwrap());
/// assert_eq!(book.len(), 1);
/// book.clear();
/// assert!(book.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Portfolio {
    positions: Vec<OptionPosition>,
}

impl Portfolio {
    /// Creates an empty portfolio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a position, preserving insertion order.
    pub fn push(&mut self, position: OptionPosition) {
        self.positions.push(position);
    }

    /// Removes every position.
    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Returns the number of positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns whether the portfolio holds no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterates positions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionPosition> {
        self.positions.iter()
    }

    /// Builds a spot grid spanning the portfolio's strikes:
    /// `n_points` evenly spaced values over
    /// `[max(1, 0.6 * min strike), 1.4 * max strike]`.
    ///
    /// Returns `None` for an empty portfolio or `n_points < 2`.
    pub fn spot_grid(&self, n_points: usize) -> Option<Vec<f64>> {
        if self.positions.is_empty() || n_points < 2 {
            return None;
        }

        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for pos in &self.positions {
            lo = lo.min(pos.strike());
            hi = hi.max(pos.strike());
        }

        let start = (0.6 * lo).max(1.0);
        let end = 1.4 * hi;
        let step = (end - start) / (n_points - 1) as f64;

        Some((0..n_points).map(|i| start + step * i as f64).collect())
    }
}

impl FromIterator<OptionPosition> for Portfolio {
    fn from_iter<I: IntoIterator<Item = OptionPosition>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}
