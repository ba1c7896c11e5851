//! Generational genetic algorithm for small box-constrained minimization
//! problems.
//!
//! Provides:
//!
//! - **Genes and individuals**: bounded scalar genes with perturbation or
//!   bit-flip mutation, one- and two-variable candidate solutions.
//! - **Evolution driver**: evaluate → rank → biased elite resampling →
//!   crossover → mutation, repeated until the best result stops moving or a
//!   generation cap is reached.
//! - **Built-in problems**: `f(x) = x` on `[0, 1]` and
//!   `g(x, y) = 1 + y² − x − 0.1·sin(3πx)` on `[0, 1] × [−2, 2]`.
//!
//! Every run threads a single seeded RNG through all random operations, so a
//! fixed [`EvolutionConfig::seed`](evolution::EvolutionConfig::seed)
//! reproduces the run exactly.
//!
//! # Quick Start
//!
//! ```
//! use u_genetic::evolution::{solve_two_variable, EvolutionConfig};
//!
//! let config = EvolutionConfig::two_variable().with_seed(42);
//! let outcome = solve_two_variable(&config).unwrap();
//! assert!(outcome.best_y.abs() < 0.5);
//! ```

pub mod error;
pub mod evolution;
pub mod random;

pub use error::GaError;
pub use evolution::{run_single_variable, run_two_variable};
