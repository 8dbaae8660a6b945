//! Builds a small seeded population and logs a summary.
//!
//! Run with:
//! ```
//! cargo run -p population --example build_population
//! ```

use population::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let population = PopulationBuilder::new()
        .with_individuals(1000)
        .with_age_distribution(AgeDistribution::new(42.0, 14.0))
        .with_seed(12345) // Reproducible data
        .with_metrics(true)
        .build()?;

    if let Some(metrics) = &population.metrics {
        tracing::info!("Population built in {} ms", metrics.generation_time_ms);
        tracing::info!("  Individuals: {}", metrics.individual_count);
        tracing::info!("  Mean age: {:.1}", metrics.mean_age);
        tracing::info!("  Mean credit score: {:.1}", metrics.mean_credit_score);
        tracing::info!("  Mean clicks: {:.1}", metrics.mean_clicks);
        tracing::info!("  Mean net worth: {:.0}", metrics.mean_net_worth);
    }

    for individual in population.iter().take(5) {
        tracing::info!(
            "age={} credit_score={} clicks={} net_worth={}",
            individual.age,
            individual.credit_score,
            individual.clicks,
            individual.net_worth
        );
    }

    Ok(())
}
