//! Entry points for the two built-in problems.
//!
//! These wrap [`EvolutionRunner`] with the default problem definitions and
//! flatten the result into plain outcome records.

use super::config::EvolutionConfig;
use super::problem::{SingleVariableProblem, TwoVariableProblem};
use super::runner::{EvolutionRunner, GenerationStats};
use crate::error::GaError;
use tracing::instrument;

/// Outcome of minimizing `f(x) = x`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SingleVariableOutcome {
    pub best_value: f64,
    pub best_x: f64,
    pub generations: usize,
    pub converged: bool,
    pub progress: Vec<GenerationStats>,
}

/// Outcome of minimizing `g(x, y)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwoVariableOutcome {
    pub best_value: f64,
    pub best_x: f64,
    pub best_y: f64,
    pub generations: usize,
    pub converged: bool,
    pub progress: Vec<GenerationStats>,
}

/// Minimizes `f(x) = x` on `[0, 1]` with an unseeded RNG.
///
/// # Errors
/// Returns [`GaError::InvalidConfiguration`] if `population_size` is not a
/// positive multiple of 10 or `threshold` is not finite.
///
/// # Examples
///
/// ```
/// let outcome = u_genetic::run_single_variable(100, 0.0001).unwrap();
/// assert!((0.0..=1.0).contains(&outcome.best_x));
/// ```
pub fn run_single_variable(
    population_size: usize,
    threshold: f64,
) -> Result<SingleVariableOutcome, GaError> {
    let config = EvolutionConfig::single_variable()
        .with_population_size(population_size)
        .with_convergence_threshold(threshold);
    solve_single_variable(&config)
}

/// Minimizes `g(x, y)` on `[0, 1] × [-2, 2]` with an unseeded RNG.
///
/// # Errors
/// Returns [`GaError::InvalidConfiguration`] if `population_size` is not a
/// positive multiple of 10 or `threshold` is not finite.
pub fn run_two_variable(
    population_size: usize,
    threshold: f64,
) -> Result<TwoVariableOutcome, GaError> {
    let config = EvolutionConfig::two_variable()
        .with_population_size(population_size)
        .with_convergence_threshold(threshold);
    solve_two_variable(&config)
}

/// Minimizes `f(x) = x` with a full configuration.
#[instrument(level = "debug", skip(config), fields(seed = ?config.seed))]
pub fn solve_single_variable(config: &EvolutionConfig) -> Result<SingleVariableOutcome, GaError> {
    let result = EvolutionRunner::run(&SingleVariableProblem::new(), config)?;
    Ok(SingleVariableOutcome {
        best_value: result.best_result,
        best_x: result.best.x().value(),
        generations: result.generations,
        converged: result.converged,
        progress: result.history,
    })
}

/// Minimizes `g(x, y)` with a full configuration.
#[instrument(level = "debug", skip(config), fields(seed = ?config.seed))]
pub fn solve_two_variable(config: &EvolutionConfig) -> Result<TwoVariableOutcome, GaError> {
    let result = EvolutionRunner::run(&TwoVariableProblem::new(), config)?;
    Ok(TwoVariableOutcome {
        best_value: result.best_result,
        best_x: result.best.x().value(),
        best_y: result.best.y().value(),
        generations: result.generations,
        converged: result.converged,
        progress: result.history,
    })
}
