//! Error type shared by the pricer and the payoff calculator.

use thiserror::Error;

/// The only failure mode of the pricing functions.
///
/// Numeric degeneracies (for example `T = 0` or `sigma = 0`) are not errors:
/// they surface as `NaN` or infinite prices.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// The option type tag was neither `"call"` nor `"put"`.
    #[error("option_type must be 'call' or 'put', got '{0}'")]
    InvalidOptionType(String),
}

/// Shorthand `Result` used by the pricing functions.
pub type Result<T, E = PricingError> = std::result::Result<T, E>;
