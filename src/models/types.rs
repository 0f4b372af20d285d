use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;

/// European option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Capitalised name used in chart titles ("Call" / "Put").
    pub fn label(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Tags match exactly: `"Call"` or `" call"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            other => Err(PricingError::InvalidOptionType(other.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => f.write_str("call"),
            OptionType::Put => f.write_str("put"),
        }
    }
}

/// Contract and market inputs that stay fixed while the spot price varies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContractParams {
    /// Strike price
    pub strike: f64,
    /// Time to expiration in years
    pub years_to_exp: f64,
    /// Continuously compounded risk-free rate
    pub rate: f64,
    /// Annualised volatility (as decimal, e.g., 0.20 for 20%)
    pub volatility: f64,
}

impl Default for ContractParams {
    fn default() -> Self {
        Self {
            strike: 100.0,
            years_to_exp: 1.0,
            rate: 0.05,
            volatility: 0.20,
        }
    }
}
