use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::models::types::ContractParams;

/// Output settings for the rendered chart
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    /// Where the SVG document is written
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Canvas width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Inputs of one driver run: the spot grid, the contract, and the chart.
#[derive(Debug, Clone, Deserialize)]
pub struct DriverConfig {
    /// Lowest spot price on the grid
    #[serde(default = "default_spot_min")]
    pub spot_min: f64,

    /// Highest spot price on the grid
    #[serde(default = "default_spot_max")]
    pub spot_max: f64,

    /// Number of evenly spaced spot prices
    #[serde(default = "default_num_points")]
    pub num_points: usize,

    #[serde(default = "default_strike")]
    pub strike: f64,

    /// Time to expiration in years
    #[serde(default = "default_years_to_exp")]
    pub years_to_exp: f64,

    /// Risk-free rate
    #[serde(default = "default_rate")]
    pub rate: f64,

    #[serde(default = "default_volatility")]
    pub volatility: f64,

    /// Option type tag: "call" or "put". Validated by the pricer, not at parse time.
    #[serde(default = "default_option_type")]
    pub option_type: String,

    #[serde(default)]
    pub chart: ChartConfig,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            spot_min: default_spot_min(),
            spot_max: default_spot_max(),
            num_points: default_num_points(),
            strike: default_strike(),
            years_to_exp: default_years_to_exp(),
            rate: default_rate(),
            volatility: default_volatility(),
            option_type: default_option_type(),
            chart: ChartConfig::default(),
        }
    }
}

impl DriverConfig {
    /// Default grid and contract, priced as a call
    pub fn call() -> Self {
        Self::default()
    }

    /// Default grid and contract, priced as a put
    pub fn put() -> Self {
        Self {
            option_type: "put".to_string(),
            ..Self::default()
        }
    }

    pub fn contract_params(&self) -> ContractParams {
        ContractParams {
            strike: self.strike,
            years_to_exp: self.years_to_exp,
            rate: self.rate,
            volatility: self.volatility,
        }
    }

    /// Parses a TOML document; missing keys fall back to the defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("invalid driver configuration")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Loads `path` when it exists, otherwise returns [`DriverConfig::default`].
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::info!(path = %path.display(), "loading driver configuration");
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

fn default_spot_min() -> f64 {
    50.0
}

fn default_spot_max() -> f64 {
    150.0
}

fn default_num_points() -> usize {
    100
}

fn default_strike() -> f64 {
    100.0
}

fn default_years_to_exp() -> f64 {
    1.0
}

fn default_rate() -> f64 {
    0.05
}

fn default_volatility() -> f64 {
    0.20
}

fn default_option_type() -> String {
    "call".to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("option_price_vs_payoff.svg")
}

fn default_width() -> u32 {
    1000
}

fn default_height() -> u32 {
    600
}
