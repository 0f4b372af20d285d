//! One-shot driver: spot grid, both curves, chart.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::DriverConfig;
use crate::curve::{linspace, payoff_curve, price_curve, CurvePoint};
use crate::models::types::OptionType;
use crate::plot::render_chart;

/// Curves computed by [`compute_curves`]; both share the `spots` axis.
#[derive(Debug, Clone)]
pub struct DriverOutput {
    pub option_type: OptionType,
    pub spots: Vec<f64>,
    pub prices: Vec<CurvePoint>,
    pub payoffs: Vec<CurvePoint>,
}

/// Builds the spot grid, prices each spot, and evaluates the payoff once over
/// the whole grid.
pub fn compute_curves(config: &DriverConfig) -> Result<DriverOutput> {
    let spots = linspace(config.spot_min, config.spot_max, config.num_points);
    let params = config.contract_params();

    let prices =
        price_curve(&spots, &params, &config.option_type).context("pricing the spot grid")?;
    let payoffs = payoff_curve(&spots, params.strike, &config.option_type)
        .context("evaluating payoff at expiry")?;
    let option_type: OptionType = config.option_type.parse()?;

    tracing::debug!(
        %option_type,
        points = spots.len(),
        strike = params.strike,
        years_to_exp = params.years_to_exp,
        rate = params.rate,
        volatility = params.volatility,
        "computed price and payoff curves"
    );

    Ok(DriverOutput {
        option_type,
        spots,
        prices,
        payoffs,
    })
}

/// Computes both curves and writes the chart; returns the chart path.
pub fn run(config: &DriverConfig) -> Result<PathBuf> {
    let output = compute_curves(config)?;
    let path = config.chart.output_path.clone();
    render_chart(
        &path,
        (config.chart.width, config.chart.height),
        output.option_type,
        &output.prices,
        &output.payoffs,
    )?;
    Ok(path)
}
