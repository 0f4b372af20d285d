//! Price and payoff curves over a shared spot axis.

use crate::error::Result;
use crate::models::bs::black_scholes;
use crate::models::payoff::option_payoff;
use crate::models::types::ContractParams;

/// One `(spot, value)` sample on a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Underlying price
    pub spot: f64,
    /// Option price or payoff at that spot
    pub value: f64,
}

/// `n` evenly spaced samples over `[start, end]`, both endpoints included.
///
/// `n == 0` yields an empty vector and `n == 1` yields `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Prices every spot independently with the Black-Scholes formula.
pub fn price_curve(
    spots: &[f64],
    params: &ContractParams,
    option_type: &str,
) -> Result<Vec<CurvePoint>> {
    spots
        .iter()
        .map(|&spot| {
            black_scholes(
                spot,
                params.strike,
                params.years_to_exp,
                params.rate,
                params.volatility,
                option_type,
            )
            .map(|value| CurvePoint { spot, value })
        })
        .collect()
}

/// Payoff at expiry over the whole spot vector in a single evaluation.
pub fn payoff_curve(spots: &[f64], strike: f64, option_type: &str) -> Result<Vec<CurvePoint>> {
    let values = option_payoff(spots, strike, option_type)?;
    Ok(spots
        .iter()
        .zip(values)
        .map(|(&spot, value)| CurvePoint { spot, value })
        .collect())
}
