//! Generational genetic algorithm for box-constrained minimization.
//!
//! Candidate solutions are built from bounded scalar genes. Each generation
//! the population is evaluated and ranked, then the next generation is
//! resampled with a bias toward the elite, partly recombined, and mutated.
//! The run stops once the best result stops moving.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with a cached result
//! - [`Problem`]: How to create random individuals
//!
//! # Key Types
//!
//! - [`Gene`] / [`Bounds`]: A bounded decision variable
//! - [`SingleVariable`] / [`TwoVariable`]: The built-in individuals
//! - [`Population`]: One generation, with ranking, selection, crossover and
//!   mutation operators
//! - [`EvolutionConfig`]: Algorithm parameters (population size, split
//!   fractions, mutation, convergence)
//! - [`EvolutionRunner`]: Executes the generational loop
//! - [`EvolutionResult`]: Final result with per-generation progress
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod gene;
mod individual;
pub mod objective;
mod population;
mod problem;
mod runner;
mod solve;

pub use config::EvolutionConfig;
pub use gene::{Bounds, Gene, Mutation, MutationStrategy};
pub use individual::{Individual, SingleVariable, TwoVariable};
pub use population::Population;
pub use problem::{Problem, SingleVariableProblem, TwoVariableProblem};
pub use runner::{EvolutionResult, EvolutionRunner, GenerationStats};
pub use solve::{
    run_single_variable, run_two_variable, solve_single_variable, solve_two_variable,
    SingleVariableOutcome, TwoVariableOutcome,
};
