//! Intrinsic value of a European option at expiry.

use crate::error::Result;
use crate::models::types::OptionType;

/// Payoff at expiry for a single spot price.
pub fn payoff(spot: f64, strike: f64, option_type: OptionType) -> f64 {
    match option_type {
        OptionType::Call => (spot - strike).max(0.0),
        OptionType::Put => (strike - spot).max(0.0),
    }
}

/// Element-wise payoff at expiry over a vector of spot prices.
///
/// The option type is validated once, before any element is evaluated.
pub fn option_payoff(spots: &[f64], strike: f64, option_type: &str) -> Result<Vec<f64>> {
    let option_type: OptionType = option_type.parse()?;
    Ok(spots
        .iter()
        .map(|&s| payoff(s, strike, option_type))
        .collect())
}
