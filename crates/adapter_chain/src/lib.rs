//! # adapter_chain
//!
//! Option-chain data sourcing for hedgelab.
//!
//! The pricing core consumes a plain [`ChainSnapshot`] (spot price plus
//! per-expiry call/put quote tables) and never touches the network
//! itself. Where the snapshot comes from is decided here: a
//! [`FallbackChain`] walks an explicit, ordered list of
//! [`ChainProvider`] strategies, trying each in turn and surfacing
//! [`ChainError::AllProvidersFailed`] only when every source is
//! exhausted. The last strategy in a production stack is typically the
//! [`BundledDataset`], a static JSON snapshot that always answers for
//! its own ticker.
//!
//! Fetching is synchronous: a snapshot is fully resolved (or has
//! failed over) before any pricing computation begins, and nothing in
//! this crate retries on its own.

mod bundled;
mod error;
mod provider;
mod types;

pub use bundled::BundledDataset;
pub use error::ChainError;
pub use provider::{ChainProvider, FallbackChain};
pub use types::{ChainSlice, ChainSnapshot, OptionQuote};
