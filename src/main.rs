use payoff_curve::{driver, DriverConfig};

const CONFIG_PATH: &str = "payoff_curve.toml";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = DriverConfig::load_or_default(CONFIG_PATH)?;
    tracing::info!(
        option_type = %config.option_type,
        spot_min = config.spot_min,
        spot_max = config.spot_max,
        num_points = config.num_points,
        "pricing option across spot grid"
    );
    driver::run(&config)?;
    Ok(())
}
