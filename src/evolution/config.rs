//! Run configuration.
//!
//! [`EvolutionConfig`] holds every parameter of the generational loop.

use super::gene::{Mutation, MutationStrategy};
use crate::error::GaError;

/// Tolerance when checking that `population_size * elite_fraction` is whole.
const SPLIT_TOLERANCE: f64 = 1e-9;

/// Configuration for one evolutionary run.
///
/// # Defaults
///
/// ```
/// use u_genetic::evolution::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.convergence_threshold, 0.0001);
/// assert!(config.validate().is_ok());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_genetic::evolution::{EvolutionConfig, MutationStrategy};
///
/// let config = EvolutionConfig::default()
///     .with_population_size(500)
///     .with_convergence_threshold(1e-6)
///     .with_mutation_strategy(MutationStrategy::BitFlip)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Number of individuals in every generation.
    ///
    /// Must split evenly by `elite_fraction`; with the default 0.1 that
    /// means a multiple of 10.
    pub population_size: usize,

    /// Fraction of the ranked population that forms the elite (0.0–1.0).
    ///
    /// `1 - elite_fraction` of the next generation is resampled from the
    /// elite, the remaining `elite_fraction` from everyone else.
    pub elite_fraction: f64,

    /// Number of crossover pairs as a fraction of the population (0.0–0.5).
    ///
    /// At 0.1 with 1000 individuals, 100 disjoint pairs (200 individuals)
    /// are recombined each generation. Ignored by individuals that do not
    /// recombine.
    pub crossover_fraction: f64,

    /// Probability that a single gene mutates in a generation (0.0–1.0).
    pub mutation_probability: f64,

    /// Mutation operator applied to genes.
    pub mutation_strategy: MutationStrategy,

    /// Maximum change in the best result between consecutive generations
    /// that still counts as converged.
    pub convergence_threshold: f64,

    /// Consecutive converged generations required before stopping.
    ///
    /// 1 stops on the first small change.
    pub convergence_window: usize,

    /// Hard cap on the number of generations.
    pub max_generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            elite_fraction: 0.1,
            crossover_fraction: 0.1,
            mutation_probability: 0.5,
            mutation_strategy: MutationStrategy::Perturb,
            convergence_threshold: 0.0001,
            convergence_window: 1,
            max_generations: 10_000,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_elite_fraction(mut self, fraction: f64) -> Self {
        self.elite_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    pub fn with_crossover_fraction(mut self, fraction: f64) -> Self {
        self.crossover_fraction = fraction.clamp(0.0, 0.5);
        self
    }

    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    pub fn with_mutation_strategy(mut self, strategy: MutationStrategy) -> Self {
        self.mutation_strategy = strategy;
        self
    }

    /// Sets the convergence threshold.
    ///
    /// Stored as given; [`validate`](Self::validate) rejects NaN, infinite
    /// and negative values.
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Requires `k` consecutive generations below the threshold to stop.
    ///
    /// Larger windows guard against stopping on a slow slope, at the price
    /// of more generations than the single-step rule.
    pub fn with_convergence_window(mut self, k: usize) -> Self {
        self.convergence_window = k;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for the one-variable problem: 100 individuals, threshold 1e-4.
    pub fn single_variable() -> Self {
        Self::default()
    }

    /// Preset for the two-variable problem: 1000 individuals, threshold 1e-4.
    pub fn two_variable() -> Self {
        Self {
            population_size: 1000,
            ..Self::default()
        }
    }

    /// Preset for the bit-flip variant of the one-variable problem:
    /// 100 individuals, [`MutationStrategy::BitFlip`], threshold 1e-6.
    pub fn bit_flip() -> Self {
        Self {
            mutation_strategy: MutationStrategy::BitFlip,
            convergence_threshold: 0.000001,
            ..Self::default()
        }
    }

    /// Size of the elite partition.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_fraction).round() as usize
    }

    /// Number of disjoint crossover pairs per generation.
    pub fn crossover_pairs(&self) -> usize {
        (self.population_size as f64 * self.crossover_fraction).round() as usize
    }

    /// Mutation parameters handed to genes.
    pub fn mutation(&self) -> Mutation {
        Mutation {
            strategy: self.mutation_strategy,
            probability: self.mutation_probability,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfiguration`] describing the first
    /// invalid parameter.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size < 2 {
            return Err(GaError::invalid("population_size must be at least 2"));
        }
        if !(0.0..=1.0).contains(&self.elite_fraction) {
            return Err(GaError::invalid(format!(
                "elite_fraction must be within [0, 1], got {}",
                self.elite_fraction
            )));
        }
        let exact = self.population_size as f64 * self.elite_fraction;
        if (exact - exact.round()).abs() > SPLIT_TOLERANCE {
            return Err(GaError::indivisible_population(
                self.population_size,
                self.elite_fraction,
            ));
        }
        let elite_count = self.elite_count();
        if elite_count == 0 {
            return Err(GaError::invalid("elite_fraction too small: empty elite"));
        }
        if elite_count >= self.population_size {
            return Err(GaError::invalid(
                "elite_fraction too high: elite fills entire population",
            ));
        }
        if !(0.0..=0.5).contains(&self.crossover_fraction) {
            return Err(GaError::invalid(format!(
                "crossover_fraction must be within [0, 0.5], got {}",
                self.crossover_fraction
            )));
        }
        if 2 * self.crossover_pairs() > self.population_size {
            return Err(GaError::invalid(format!(
                "{} crossover pairs do not fit in {} individuals",
                self.crossover_pairs(),
                self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(GaError::invalid(format!(
                "mutation_probability must be within [0, 1], got {}",
                self.mutation_probability
            )));
        }
        if !self.convergence_threshold.is_finite() || self.convergence_threshold < 0.0 {
            return Err(GaError::invalid(
                "convergence_threshold must be finite and non-negative",
            ));
        }
        if self.convergence_window == 0 {
            return Err(GaError::invalid("convergence_window must be at least 1"));
        }
        if self.max_generations == 0 {
            return Err(GaError::invalid("max_generations must be at least 1"));
        }
        Ok(())
    }
}
