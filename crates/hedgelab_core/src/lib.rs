//! # hedgelab_core
//!
//! Foundation layer for the hedgelab workspace.
//!
//! Provides the shared vocabulary used by the analytical and simulation
//! layers:
//!
//! - [`types::OptionType`]: closed call/put enumeration with intrinsic
//!   payoff evaluation
//! - [`types::CoreError`]: validation error taxonomy
//! - [`math::distributions`]: standard normal CDF/PDF, generic over
//!   `num_traits::Float`
//!
//! This crate has no I/O, no randomness, and no logging; everything here
//! is a pure function or an immutable value type.

pub mod math;
pub mod types;

pub use math::distributions::{norm_cdf, norm_pdf};
pub use types::{CoreError, OptionType};
