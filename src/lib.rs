//! # payoff-curve: Black-Scholes Price vs Payoff at Expiry
//!
//! `payoff-curve` prices a European call or put with the Black-Scholes closed form
//! across a grid of underlying prices and charts the result against the option's
//! payoff at expiry.
//!
//! ## Core Features
//!
//! - **Pricer**: closed-form Black-Scholes price for one contract and spot
//! - **Payoff**: intrinsic value at expiry over a vector of spots
//! - **Driver**: spot grid, both curves, and an SVG chart in one pass
//!
//! ## Quick Start
//!
//! ```rust
//! use payoff_curve::{black_scholes, option_payoff, PricingError};
//!
//! let price = black_scholes(100.0, 100.0, 1.0, 0.05, 0.20, "call")?;
//! assert!((price - 10.4506).abs() < 1e-3);
//!
//! let payoffs = option_payoff(&[80.0, 120.0], 100.0, "put")?;
//! assert_eq!(payoffs, vec![20.0, 0.0]);
//!
//! assert!(matches!(
//!     black_scholes(100.0, 100.0, 1.0, 0.05, 0.20, "straddle"),
//!     Err(PricingError::InvalidOptionType(_))
//! ));
//! # Ok::<(), PricingError>(())
//! ```
//!
//! Inputs are not range-checked. `T = 0` or `sigma = 0` make `d1` divide by zero
//! and the resulting `NaN` or infinite price is returned as is.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod curve;
pub mod driver;
pub mod error;
pub mod models;
pub mod plot;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use config::{ChartConfig, DriverConfig};
pub use curve::{linspace, payoff_curve, price_curve, CurvePoint};
pub use driver::{compute_curves, DriverOutput};
pub use error::{PricingError, Result};
pub use models::bs::{black_scholes, black_scholes_price, norm_cdf};
pub use models::payoff::{option_payoff, payoff};
pub use models::types::{ContractParams, OptionType};
pub use plot::{chart_title, render_chart, render_chart_to_string};
