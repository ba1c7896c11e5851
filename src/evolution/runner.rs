//! Generational loop execution.
//!
//! [`EvolutionRunner`] drives one run:
//! initialize → evaluate → rank → check convergence → select →
//! (recombine) → mutate → repeat.

use super::config::EvolutionConfig;
use super::individual::Individual;
use super::population::Population;
use super::problem::Problem;
use crate::error::GaError;
use crate::random::rng_from_seed;
use tracing::{debug, info, instrument, warn};

/// Progress record for one evaluated generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based generation index.
    pub generation: usize,

    /// Best result of this generation after ranking.
    pub best_result: f64,

    /// Absolute change from the previous generation's best (`+∞` for the
    /// first generation).
    pub change: f64,
}

/// Result of an evolutionary run.
#[derive(Debug, Clone)]
pub struct EvolutionResult<I: Individual> {
    /// Best individual of the final generation.
    pub best: I,

    /// Result of `best` (same as `best.result()`).
    pub best_result: f64,

    /// Best individual seen in any generation.
    ///
    /// Usually equal to `best`; differs when the final generation lost the
    /// best-so-far through resampling or mutation.
    pub best_ever: I,

    /// Number of generations evaluated.
    pub generations: usize,

    /// Whether the run stopped on the convergence test (as opposed to the
    /// generation cap).
    pub converged: bool,

    /// One record per evaluated generation.
    pub history: Vec<GenerationStats>,
}

/// Executes the generational loop.
///
/// # Usage
///
/// ```
/// use u_genetic::evolution::{EvolutionConfig, EvolutionRunner, SingleVariableProblem};
///
/// let problem = SingleVariableProblem::new();
/// let config = EvolutionConfig::single_variable().with_seed(42);
/// let result = EvolutionRunner::run(&problem, &config).unwrap();
/// assert!(result.best_result >= 0.0);
/// ```
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Runs the GA until convergence or the generation cap.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfiguration`] if `config` is invalid.
    pub fn run<P: Problem>(
        problem: &P,
        config: &EvolutionConfig,
    ) -> Result<EvolutionResult<P::Individual>, GaError> {
        Self::run_with_observer(problem, config, |_| {})
    }

    /// Runs the GA, calling `observer` once per evaluated generation.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfiguration`] if `config` is invalid.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            problem = problem.name(),
            population = config.population_size,
            threshold = config.convergence_threshold
        )
    )]
    pub fn run_with_observer<P, F>(
        problem: &P,
        config: &EvolutionConfig,
        mut observer: F,
    ) -> Result<EvolutionResult<P::Individual>, GaError>
    where
        P: Problem,
        F: FnMut(&GenerationStats),
    {
        config.validate()?;

        let mut rng = rng_from_seed(config.seed);
        let elite_count = config.elite_count();
        let crossover_pairs = config.crossover_pairs();
        let mutation = config.mutation();

        info!(
            strategy = ?config.mutation_strategy,
            seed = ?config.seed,
            "starting evolution"
        );

        let mut population = Population::generate(config.population_size, &mut rng, |rng| {
            problem.create_individual(rng)
        });

        let mut previous_best = f64::INFINITY;
        let mut calm_generations = 0usize;
        let mut best_ever: Option<P::Individual> = None;
        let mut history = Vec::new();
        let mut converged = false;

        for generation in 1..=config.max_generations {
            population.evaluate();
            population.rank();

            let current = &population.members()[0];
            let best_result = current.result();
            let change = (previous_best - best_result).abs();
            previous_best = best_result;

            let improved = match &best_ever {
                Some(b) => best_result < b.result(),
                None => true,
            };
            if improved {
                best_ever = Some(current.clone());
            }

            let stats = GenerationStats {
                generation,
                best_result,
                change,
            };
            debug!(generation, best_result, change, "generation evaluated");
            observer(&stats);
            history.push(stats);

            if change <= config.convergence_threshold {
                calm_generations += 1;
            } else {
                calm_generations = 0;
            }
            if calm_generations >= config.convergence_window {
                converged = true;
                break;
            }
            if generation == config.max_generations {
                break;
            }

            population = population.select(elite_count, &mut rng);
            if <P::Individual as Individual>::RECOMBINES && crossover_pairs > 0 {
                population.recombine(crossover_pairs, &mut rng);
            }
            population.mutate(&mutation, &mut rng);
        }

        let best = population.members()[0].clone();
        let best_result = best.result();
        let generations = history.len();

        if converged {
            info!(generations, best_result, "converged");
        } else {
            warn!(
                generations,
                best_result,
                "stopped at generation cap without converging"
            );
        }

        Ok(EvolutionResult {
            best_ever: best_ever.unwrap_or_else(|| best.clone()),
            best,
            best_result,
            generations,
            converged,
            history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::gene::{Bounds, MutationStrategy};
    use crate::evolution::individual::SingleVariable;
    use crate::evolution::problem::{SingleVariableProblem, TwoVariableProblem};
    use rand::Rng;

    #[test]
    fn test_invalid_config_rejected() {
        let problem = SingleVariableProblem::new();
        let config = EvolutionConfig::default().with_population_size(105);
        assert!(EvolutionRunner::run(&problem, &config).is_err());
    }

    #[test]
    fn test_single_variable_converges_near_zero() {
        let problem = SingleVariableProblem::new();
        let config = EvolutionConfig::single_variable().with_seed(42);
        let result = EvolutionRunner::run(&problem, &config).unwrap();

        assert!(result.converged);
        assert!(result.generations < config.max_generations);
        assert!(result.best_result >= 0.0);
        assert!(
            result.best_result < 0.1,
            "expected near-zero result, got {}",
            result.best_result
        );
    }

    #[test]
    fn test_same_seed_reproduces_run() {
        let problem = TwoVariableProblem::new();
        let config = EvolutionConfig::default().with_seed(7);
        let a = EvolutionRunner::run(&problem, &config).unwrap();
        let b = EvolutionRunner::run(&problem, &config).unwrap();
        assert_eq!(a.generations, b.generations);
        assert_eq!(a.history, b.history);
        assert_eq!(a.best.x().value(), b.best.x().value());
        assert_eq!(a.best.y().value(), b.best.y().value());
    }

    #[test]
    fn test_history_matches_generations() {
        let problem = SingleVariableProblem::new();
        let config = EvolutionConfig::default().with_seed(42);
        let result = EvolutionRunner::run(&problem, &config).unwrap();

        assert_eq!(result.history.len(), result.generations);
        assert!(result.history[0].change.is_infinite());
        for (i, stats) in result.history.iter().enumerate() {
            assert_eq!(stats.generation, i + 1);
        }
        for w in result.history.windows(2) {
            assert!((w[1].change - (w[0].best_result - w[1].best_result).abs()).abs() < 1e-15);
        }
        let last = result.history.last().unwrap();
        assert!(last.change <= config.convergence_threshold);
        assert_eq!(last.best_result, result.best_result);
    }

    #[test]
    fn test_best_ever_is_no_worse() {
        let problem = TwoVariableProblem::new();
        let config = EvolutionConfig::default().with_seed(3);
        let result = EvolutionRunner::run(&problem, &config).unwrap();
        assert!(result.best_ever.result() <= result.best_result);
        let min_seen = result
            .history
            .iter()
            .map(|s| s.best_result)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(result.best_ever.result(), min_seen);
    }

    #[test]
    fn test_observer_sees_every_generation() {
        let problem = SingleVariableProblem::new();
        let config = EvolutionConfig::default().with_seed(42);
        let mut seen = Vec::new();
        let result =
            EvolutionRunner::run_with_observer(&problem, &config, |s| seen.push(*s)).unwrap();
        assert_eq!(seen, result.history);
    }

    // ---- Plateau: every individual scores the same ----

    struct Flat;

    impl Problem for Flat {
        type Individual = SingleVariable;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> SingleVariable {
            SingleVariable::random(Bounds::UNIT, |_| 1.0, rng)
        }
    }

    #[test]
    fn test_plateau_stops_after_second_generation() {
        let config = EvolutionConfig::default().with_seed(42);
        let result = EvolutionRunner::run(&Flat, &config).unwrap();
        assert!(result.converged);
        assert_eq!(result.generations, 2);
    }

    #[test]
    fn test_convergence_window_delays_stop() {
        let config = EvolutionConfig::default()
            .with_seed(42)
            .with_convergence_window(5);
        let result = EvolutionRunner::run(&Flat, &config).unwrap();
        assert!(result.converged);
        assert_eq!(result.generations, 6);
    }

    #[test]
    fn test_generation_cap() {
        let problem = SingleVariableProblem::new();
        let config = EvolutionConfig::default()
            .with_seed(42)
            .with_convergence_threshold(0.0)
            .with_convergence_window(1000)
            .with_max_generations(25);
        let result = EvolutionRunner::run(&problem, &config).unwrap();
        assert!(!result.converged);
        assert_eq!(result.generations, 25);
        assert_eq!(result.history.len(), 25);
    }

    #[test]
    fn test_bit_flip_strategy_runs() {
        let problem = SingleVariableProblem::new();
        let config = EvolutionConfig::bit_flip().with_seed(42);
        assert_eq!(config.mutation_strategy, MutationStrategy::BitFlip);
        let result = EvolutionRunner::run(&problem, &config).unwrap();
        assert!(result.converged);
        assert!(Bounds::UNIT.contains(result.best.x().value()));
        assert!(result.best_ever.result() <= result.history[0].best_result);
    }
}
