// Closed-form Black-Scholes pricing for European calls and puts.
// Degenerate inputs (T = 0 or sigma = 0) are not clamped: the division in d1
// produces NaN or +/-inf and the price inherits it.

use crate::error::Result;
use crate::models::types::OptionType;

/// Standard normal cumulative distribution function.
pub fn norm_cdf(x: f64) -> f64 {
    // 0.5 * [1 + erf(x / sqrt(2))]
    0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
}

/// Returns `(d1, d2)` for the given inputs.
#[allow(non_snake_case)]
pub fn d1_d2(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> (f64, f64) {
    let sigma_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / sigma_sqrt_t;
    (d1, d1 - sigma_sqrt_t)
}

/// Price of a European call option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, T, r, sigma);
    S * norm_cdf(d1) - K * (-r * T).exp() * norm_cdf(d2)
}

/// Price of a European put option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, T, r, sigma);
    K * (-r * T).exp() * norm_cdf(-d2) - S * norm_cdf(-d1)
}

/// Typed entry point: dispatches on an already-validated [`OptionType`].
#[allow(non_snake_case)]
pub fn black_scholes_price(
    option_type: OptionType,
    S: f64,
    K: f64,
    T: f64,
    r: f64,
    sigma: f64,
) -> f64 {
    match option_type {
        OptionType::Call => bs_call_price(S, K, T, r, sigma),
        OptionType::Put => bs_put_price(S, K, T, r, sigma),
    }
}

/// Black-Scholes price for a string-tagged option type.
///
/// # Errors
///
/// Returns [`PricingError::InvalidOptionType`](crate::PricingError::InvalidOptionType)
/// when `option_type` is not exactly `"call"` or `"put"`.
#[allow(non_snake_case)]
pub fn black_scholes(
    S: f64,
    K: f64,
    T: f64,
    r: f64,
    sigma: f64,
    option_type: &str,
) -> Result<f64> {
    let option_type: OptionType = option_type.parse()?;
    Ok(black_scholes_price(option_type, S, K, T, r, sigma))
}
