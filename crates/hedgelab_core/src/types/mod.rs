//! Shared value types for the hedgelab workspace.

mod error;
mod option_type;

pub use error::CoreError;
pub use option_type::OptionType;
