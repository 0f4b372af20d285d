
use payoff_curve::plot::{PAYOFF_SERIES_LABEL, PRICE_SERIES_LABEL, X_LABEL, Y_LABEL};
use payoff_curve::{
    chart_title, compute_curves, driver, render_chart_to_string, DriverConfig, OptionType,
    PricingError,
};
use test_utils::{assert_close, polyline_point_counts, reference_contract, scratch_config};

#[test]
fn test_default_config_matches_reference_run() {
    let config = DriverConfig::default();
    assert_eq!(config.spot_min, 50.0);
    assert_eq!(config.spot_max, 150.0);
    assert_eq!(config.num_points, 100);
    assert_eq!(config.option_type, "call");
    assert_eq!(config.contract_params(), reference_contract());
    assert_eq!((config.chart.width, config.chart.height), (1000, 600));
}

#[test]
fn test_curves_share_spot_axis() {
    let output = compute_curves(&DriverConfig::default()).unwrap();

    assert_eq!(output.option_type, OptionType::Call);
    assert_eq!(output.spots.len(), 100);
    assert_eq!(output.spots[0], 50.0);
    assert_eq!(output.spots[99], 150.0);
    assert_eq!(output.prices.len(), output.spots.len());
    assert_eq!(output.payoffs.len(), output.spots.len());

    for ((spot, price), payoff) in output.spots.iter().zip(&output.prices).zip(&output.payoffs) {
        assert_eq!(price.spot, *spot);
        assert_eq!(payoff.spot, *spot);
        // With r > 0 a European call is worth at least its intrinsic value
        assert!(price.value >= payoff.value, "price below payoff at {}", spot);
    }
}

#[test]
fn test_put_run() {
    let output = compute_curves(&DriverConfig::put()).unwrap();
    assert_eq!(output.option_type, OptionType::Put);
    assert_close(output.payoffs[0].value, 50.0, 1e-12, "put payoff at S=50");
    assert_close(output.payoffs[99].value, 0.0, 1e-12, "put payoff at S=150");
}

#[test]
fn test_unknown_option_type_propagates() {
    let config = DriverConfig {
        option_type: "straddle".to_string(),
        ..DriverConfig::default()
    };
    let err = compute_curves(&config).unwrap_err();
    assert_eq!(
        err.downcast_ref::<PricingError>(),
        Some(&PricingError::InvalidOptionType("straddle".to_string()))
    );
}

#[test]
fn test_config_from_toml() {
    let empty = DriverConfig::from_toml_str("").unwrap();
    assert_eq!(empty.num_points, 100);
    assert_eq!(empty.option_type, "call");

    let partial = DriverConfig::from_toml_str(
        r#"
        option_type = "put"
        strike = 110.0

        [chart]
        width = 800
        "#,
    )
    .unwrap();
    assert_eq!(partial.option_type, "put");
    assert_eq!(partial.strike, 110.0);
    assert_eq!(partial.volatility, 0.20);
    assert_eq!(partial.chart.width, 800);
    assert_eq!(partial.chart.height, 600);

    assert!(DriverConfig::from_toml_str("num_points = \"many\"").is_err());
}

#[test]
fn test_load_or_default_without_file() {
    let config = DriverConfig::load_or_default("does/not/exist/payoff_curve.toml").unwrap();
    assert_eq!(config.spot_max, 150.0);
}

#[test]
fn test_rendered_chart_contains_labels() {
    let output = compute_curves(&DriverConfig::default()).unwrap();
    let svg = render_chart_to_string(
        (1000, 600),
        output.option_type,
        &output.prices,
        &output.payoffs,
    )
    .unwrap();

    assert!(svg.contains("<svg"));
    for text in [
        chart_title(OptionType::Call).as_str(),
        X_LABEL,
        Y_LABEL,
        PRICE_SERIES_LABEL,
        PAYOFF_SERIES_LABEL,
    ] {
        assert!(svg.contains(text), "chart is missing '{}'", text);
    }
}

/// Price is one solid polyline, payoff is broken into dashes, and the mesh is drawn.
#[test]
fn test_rendered_chart_line_styles_and_grid() {
    let output = compute_curves(&DriverConfig::default()).unwrap();
    let svg = render_chart_to_string(
        (1000, 600),
        output.option_type,
        &output.prices,
        &output.payoffs,
    )
    .unwrap();

    // Blue: the price curve plus its legend swatch
    let price_lines = polyline_point_counts(&svg, "#0000FF");
    assert_eq!(price_lines.len(), 2, "price polylines: {:?}", price_lines);
    assert_eq!(price_lines.iter().max(), Some(&100));

    // Green: many short dashes plus the legend swatch
    let payoff_lines = polyline_point_counts(&svg, "#00FF00");
    assert!(payoff_lines.len() > 20, "payoff dashes: {}", payoff_lines.len());
    let longest_dash = payoff_lines.iter().max().copied().unwrap_or(0);
    assert!(longest_dash < 100, "payoff drawn as one line of {} points", longest_dash);

    let grid_lines = svg
        .lines()
        .filter(|line| line.starts_with("<line") && line.contains("stroke=\"#000000\""))
        .count();
    assert!(grid_lines > 10, "expected a mesh grid, found {} lines", grid_lines);
}

/// T = 0 puts a NaN at S = K; the price curve breaks there instead of joining
/// its neighbours.
#[test]
fn test_degenerate_maturity_leaves_gap_in_price_curve() {
    let config = DriverConfig {
        years_to_exp: 0.0,
        spot_min: 98.0,
        spot_max: 102.0,
        num_points: 5,
        ..DriverConfig::default()
    };
    let output = compute_curves(&config).unwrap();
    assert!(output.prices[2].value.is_nan());
    assert_close(output.prices[1].value, 0.0, 1e-12, "S=99 at T=0");
    assert_close(output.prices[3].value, 1.0, 1e-12, "S=101 at T=0");

    let svg = render_chart_to_string(
        (640, 480),
        output.option_type,
        &output.prices,
        &output.payoffs,
    )
    .unwrap();

    // Two runs of two points each, plus the two-point legend swatch
    assert_eq!(polyline_point_counts(&svg, "#0000FF"), vec![2, 2, 2]);
    // Only one legend entry for the split price curve
    assert_eq!(svg.matches(PRICE_SERIES_LABEL).count(), 1);
}

/// Wider grid with the NaN in the middle still renders.
#[test]
fn test_degenerate_maturity_still_renders() {
    let config = DriverConfig {
        years_to_exp: 0.0,
        num_points: 101,
        ..DriverConfig::default()
    };
    let output = compute_curves(&config).unwrap();
    assert!(output.prices[50].value.is_nan());

    let svg = render_chart_to_string(
        (640, 480),
        output.option_type,
        &output.prices,
        &output.payoffs,
    )
    .unwrap();
    let price_lines = polyline_point_counts(&svg, "#0000FF");
    assert_eq!(price_lines.len(), 3, "price polylines: {:?}", price_lines);
}

#[test]
fn test_run_writes_svg_file() {
    let config = scratch_config("run");
    let path = driver::run(&config).unwrap();
    assert_eq!(path, config.chart.output_path);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Call Option Price vs Payoff at Expiry"));
    std::fs::remove_file(&path).ok();
}
