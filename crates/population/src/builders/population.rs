//! Fluent builder for assembling a population table.

use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{AgeDistribution, PopulationConfig};
use crate::error::{GenerateError, GenerateResult};
use crate::generators::{
    ClickCounts, ClickInputs, NetWorthComponents, generate_ages, generate_ages_with_rng,
    generate_clicks, generate_credit_scores, generate_credit_scores_with_rng, generate_z_scores,
};
use crate::rng::{SeedStreams, Stage};

/// One simulated individual: a row of the population table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    pub age: i32,
    pub credit_score: i32,
    pub personality_z_score: f64,
    pub click_counts: ClickCounts,
    /// Sum of the three click contributions.
    pub clicks: i32,
    pub net_worth_components: NetWorthComponents,
    /// Sum of the four net worth components.
    pub net_worth: i64,
}

/// An ordered table of individuals. Row `i` is the same individual in every column.
#[derive(Debug, Clone)]
pub struct Population {
    pub individuals: Vec<Individual>,
    /// Metrics from generation (populated if metrics tracking enabled).
    pub metrics: Option<PopulationMetrics>,
}

impl Population {
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// The age column.
    pub fn ages(&self) -> Vec<i32> {
        self.iter().map(|i| i.age).collect()
    }

    /// The credit score column.
    pub fn credit_scores(&self) -> Vec<i32> {
        self.iter().map(|i| i.credit_score).collect()
    }

    /// The total clicks column.
    pub fn clicks(&self) -> Vec<i32> {
        self.iter().map(|i| i.clicks).collect()
    }

    /// The total net worth column.
    pub fn net_worths(&self) -> Vec<i64> {
        self.iter().map(|i| i.net_worth).collect()
    }
}

/// Summary statistics from population generation.
#[derive(Debug, Clone, Serialize)]
pub struct PopulationMetrics {
    /// Time spent generating data (milliseconds).
    pub generation_time_ms: u64,
    pub individual_count: usize,
    pub mean_age: f64,
    pub mean_credit_score: f64,
    pub mean_clicks: f64,
    pub mean_net_worth: f64,
}

impl PopulationMetrics {
    fn from_individuals(individuals: &[Individual], start: Instant) -> Self {
        Self {
            generation_time_ms: start.elapsed().as_millis() as u64,
            individual_count: individuals.len(),
            mean_age: mean_of(individuals, |i| i.age as f64),
            mean_credit_score: mean_of(individuals, |i| i.credit_score as f64),
            mean_clicks: mean_of(individuals, |i| i.clicks as f64),
            mean_net_worth: mean_of(individuals, |i| i.net_worth as f64),
        }
    }
}

/// Mean of a column; zero for an empty table.
fn mean_of(individuals: &[Individual], column: impl Fn(&Individual) -> f64) -> f64 {
    if individuals.is_empty() {
        return 0.0;
    }
    individuals.iter().map(column).sum::<f64>() / individuals.len() as f64
}

/// Builder for creating a population.
///
/// # Example
///
/// ```rust
/// use population::prelude::*;
///
/// let population = PopulationBuilder::new()
///     .with_individuals(50)
///     .with_age_distribution(AgeDistribution::new(38.0, 9.0))
///     .with_seed(2024)
///     .with_metrics(true)
///     .build()?;
///
/// let again = PopulationBuilder::new()
///     .with_individuals(50)
///     .with_age_distribution(AgeDistribution::new(38.0, 9.0))
///     .with_seed(2024)
///     .build()?;
///
/// assert_eq!(population.individuals, again.individuals);
/// # Ok::<(), GenerateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PopulationBuilder {
    config: PopulationConfig,
    z_scores: Option<Vec<f64>>,
    track_metrics: bool,
}

impl Default for PopulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PopulationBuilder {
    /// Creates a new population builder with default settings.
    pub fn new() -> Self {
        Self::from_config(PopulationConfig::default())
    }

    /// Creates a builder from an existing configuration.
    pub fn from_config(config: PopulationConfig) -> Self {
        Self {
            config,
            z_scores: None,
            track_metrics: false,
        }
    }

    /// Sets the number of individuals to generate.
    pub fn with_individuals(mut self, count: usize) -> Self {
        self.config.individuals = count;
        self
    }

    /// Sets the distribution ages are drawn from.
    pub fn with_age_distribution(mut self, distribution: AgeDistribution) -> Self {
        self.config.age = distribution;
        self
    }

    /// Sets the master seed, making every stage reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Sets the seed for the age and credit score columns when no master seed is set.
    pub fn with_column_seed(mut self, seed: u64) -> Self {
        self.config.column_seed = seed;
        self
    }

    /// Supplies personality z-scores instead of drawing them.
    ///
    /// Must contain exactly one value per individual.
    pub fn with_z_scores(mut self, z_scores: Vec<f64>) -> Self {
        self.z_scores = Some(z_scores);
        self
    }

    /// Enables metrics tracking.
    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.track_metrics = enabled;
        self
    }

    /// Returns the configuration the builder will use.
    pub fn config(&self) -> &PopulationConfig {
        &self.config
    }

    /// Builds the population.
    ///
    /// With a master seed every stage draws from its own seeded stream. Without one, ages
    /// and credit scores are seeded from the column seed and the remaining stages draw from
    /// the thread-local generator.
    pub fn build(&self) -> GenerateResult<Population> {
        match self.config.seed {
            Some(seed) => self.build_seeded(SeedStreams::new(seed)),
            None => self.build_with_rng(&mut rand::thread_rng()),
        }
    }

    /// Builds the population using `rng` for the z-score, click and net worth stages.
    ///
    /// Ages and credit scores are always seeded from the column seed, so only `rng`
    /// decides whether the rest of the table is reproducible.
    pub fn build_with_rng(&self, rng: &mut impl Rng) -> GenerateResult<Population> {
        let start = Instant::now();
        let AgeDistribution { mean, std_dev } = self.config.age;
        let seed = self.config.column_seed;

        let ages = generate_ages(mean, std_dev, self.config.individuals, seed)?;
        let credit_scores = generate_credit_scores(&ages, seed);
        let z_scores = self.resolve_z_scores(rng)?;
        let rows = ClickInputs::from_columns(&ages, &credit_scores, &z_scores)?;
        let clicks = generate_clicks(&rows, rng)?;
        let net_worth = net_worth_components(&rows, &clicks, rng)?;

        self.assemble(rows, clicks, net_worth, start)
    }

    fn build_seeded(&self, streams: SeedStreams) -> GenerateResult<Population> {
        let start = Instant::now();
        debug!(
            master_seed = streams.master_seed(),
            "Building population from seeded streams"
        );

        let ages = generate_ages_with_rng(
            self.config.age,
            self.config.individuals,
            &mut streams.stream(Stage::Ages),
        )?;
        let credit_scores =
            generate_credit_scores_with_rng(&ages, &mut streams.stream(Stage::CreditScores));
        let z_scores = self.resolve_z_scores(&mut streams.stream(Stage::ZScores))?;
        let rows = ClickInputs::from_columns(&ages, &credit_scores, &z_scores)?;
        let clicks = generate_clicks(&rows, &mut streams.stream(Stage::Clicks))?;
        let net_worth =
            net_worth_components(&rows, &clicks, &mut streams.stream(Stage::NetWorth))?;

        self.assemble(rows, clicks, net_worth, start)
    }

    /// Returns the supplied z-scores, or draws fresh ones.
    fn resolve_z_scores(&self, rng: &mut impl Rng) -> GenerateResult<Vec<f64>> {
        let expected = self.config.individuals;
        match &self.z_scores {
            Some(z_scores) if z_scores.len() != expected => {
                Err(GenerateError::ZScoreCountMismatch {
                    expected,
                    actual: z_scores.len(),
                })
            }
            Some(z_scores) => Ok(z_scores.clone()),
            None => Ok(generate_z_scores(expected, rng)),
        }
    }

    fn assemble(
        &self,
        rows: Vec<ClickInputs>,
        clicks: Vec<ClickCounts>,
        net_worth: Vec<NetWorthComponents>,
        start: Instant,
    ) -> GenerateResult<Population> {
        let individuals = rows
            .into_iter()
            .zip(clicks)
            .zip(net_worth)
            .map(|((inputs, click_counts), components)| {
                Ok(Individual {
                    age: inputs.age,
                    credit_score: inputs.credit_score,
                    personality_z_score: inputs.personality_z_score,
                    click_counts,
                    clicks: click_counts.total(),
                    net_worth_components: components,
                    net_worth: components.total()?,
                })
            })
            .collect::<GenerateResult<Vec<_>>>()?;

        let metrics = PopulationMetrics::from_individuals(&individuals, start);
        info!(
            individuals = metrics.individual_count,
            mean_age = metrics.mean_age,
            mean_credit_score = metrics.mean_credit_score,
            mean_net_worth = metrics.mean_net_worth,
            "Generated population"
        );

        Ok(Population {
            individuals,
            metrics: self.track_metrics.then_some(metrics),
        })
    }
}

/// Computes net worth components for every row, in row order.
fn net_worth_components(
    rows: &[ClickInputs],
    clicks: &[ClickCounts],
    rng: &mut impl Rng,
) -> GenerateResult<Vec<NetWorthComponents>> {
    rows.iter()
        .zip(clicks)
        .map(|(inputs, counts)| {
            NetWorthComponents::generate(inputs.age, inputs.credit_score, counts.total(), rng)
        })
        .collect()
}
