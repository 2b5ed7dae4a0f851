//! Intermittent demand walkthrough: classify a series, then forecast it with
//! every method and report accuracy.
//!
//! Run with: cargo run --example intermittent
//! Set RUST_LOG=anofox_intermittent=debug to see the recursion trace.

use anofox_intermittent::features::extract_demand;
use anofox_intermittent::prelude::*;
use chrono::NaiveDate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "anofox_intermittent=info".into()),
        )
        .init();

    println!("=== Intermittent Demand Forecasting ===\n");

    // 1. Build the daily calendar from dated observations
    let raw = [5.0, 10.0, 0.0, 0.0, 0.0, 0.0, 7.0, 0.0, 0.0, 0.0, 6.0, 0.0];
    let start = NaiveDate::from_ymd_opt(2020, 8, 21).expect("valid date");
    let observations: Vec<(NaiveDate, f64)> = raw
        .iter()
        .enumerate()
        .map(|(i, &v)| (start + chrono::Days::new(i as u64), v))
        .collect();
    let series = DemandSeries::from_observations(&observations)?;

    println!("Total Number of Observations: {}", series.len());
    println!("Total Number of Zeros: {}", series.zero_count());
    println!("Start Date: {}", series.start());
    println!("End Date: {}\n", series.end());

    // 2. Demand events and classification
    let events = extract_demand(&series);
    println!("Demand sizes: {:?}", events.sizes());
    println!("Intervals:    {:?}", events.intervals());
    println!("{}\n", classify(&series));

    // 3. Forecast with every method
    for method in Method::ALL {
        let config = ForecastConfig::new(method)
            .with_alpha(0.5)
            .with_beta(0.2)
            .with_horizon(4, Frequency::daily());
        let forecast = config.run(&series)?;
        let metrics = evaluate(&series, &forecast)?;

        println!("--- {} ---", forecast.method());
        for (date, value) in forecast.iter().skip(forecast.observed_len()) {
            println!("  {}  {:.4}", date, value);
        }
        println!("  {}\n", metrics);
    }

    Ok(())
}
