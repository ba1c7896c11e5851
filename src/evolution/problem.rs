//! Problem definitions.
//!
//! A [`Problem`] tells the runner how to create a random individual. The two
//! built-in problems carry their variable bounds and objective function.

use super::gene::Bounds;
use super::individual::{Individual, SingleVariable, TwoVariable};
use super::objective::{self, BinaryObjective, UnaryObjective};
use crate::error::GaError;
use rand::Rng;

/// Defines what the runner evolves.
///
/// # Implementing
///
/// ```
/// use rand::Rng;
/// use u_genetic::evolution::{
///     Bounds, EvolutionConfig, EvolutionRunner, Individual, Problem, SingleVariable,
/// };
///
/// struct ShiftedLine;
///
/// impl Problem for ShiftedLine {
///     type Individual = SingleVariable;
///     fn create_individual<R: Rng>(&self, rng: &mut R) -> SingleVariable {
///         SingleVariable::random(Bounds::UNIT, |x| (x - 0.5).abs(), rng)
///     }
/// }
///
/// let config = EvolutionConfig::single_variable().with_seed(7);
/// let result = EvolutionRunner::run(&ShiftedLine, &config).unwrap();
/// assert!(result.best.result() < 0.1);
/// ```
pub trait Problem {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Short name used in log output.
    fn name(&self) -> &str {
        "problem"
    }

    /// Creates a random individual for the initial population.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;
}

/// Minimize a one-variable objective over a bounded interval.
///
/// Defaults to `f(x) = x` on `[0, 1]`.
#[derive(Debug, Clone)]
pub struct SingleVariableProblem {
    x_bounds: Bounds,
    objective: UnaryObjective,
}

impl Default for SingleVariableProblem {
    fn default() -> Self {
        Self {
            x_bounds: Bounds::UNIT,
            objective: objective::f,
        }
    }
}

impl SingleVariableProblem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the bounds of `x`.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfiguration`] if the bounds are invalid.
    pub fn with_x_bounds(mut self, min: f64, max: f64) -> Result<Self, GaError> {
        self.x_bounds = Bounds::new(min, max)?;
        Ok(self)
    }

    pub fn with_objective(mut self, objective: UnaryObjective) -> Self {
        self.objective = objective;
        self
    }

    pub fn x_bounds(&self) -> Bounds {
        self.x_bounds
    }
}

impl Problem for SingleVariableProblem {
    type Individual = SingleVariable;

    fn name(&self) -> &str {
        "single-variable"
    }

    fn create_individual<R: Rng>(&self, rng: &mut R) -> SingleVariable {
        SingleVariable::random(self.x_bounds, self.objective, rng)
    }
}

/// Minimize a two-variable objective over a bounded box.
///
/// Defaults to `g(x, y)` on `[0, 1] × [-2, 2]`.
#[derive(Debug, Clone)]
pub struct TwoVariableProblem {
    x_bounds: Bounds,
    y_bounds: Bounds,
    objective: BinaryObjective,
}

impl Default for TwoVariableProblem {
    fn default() -> Self {
        Self {
            x_bounds: Bounds::UNIT,
            y_bounds: Bounds::SYMMETRIC_TWO,
            objective: objective::g,
        }
    }
}

impl TwoVariableProblem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the bounds of `x`.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfiguration`] if the bounds are invalid.
    pub fn with_x_bounds(mut self, min: f64, max: f64) -> Result<Self, GaError> {
        self.x_bounds = Bounds::new(min, max)?;
        Ok(self)
    }

    /// Replaces the bounds of `y`.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfiguration`] if the bounds are invalid.
    pub fn with_y_bounds(mut self, min: f64, max: f64) -> Result<Self, GaError> {
        self.y_bounds = Bounds::new(min, max)?;
        Ok(self)
    }

    pub fn with_objective(mut self, objective: BinaryObjective) -> Self {
        self.objective = objective;
        self
    }

    pub fn x_bounds(&self) -> Bounds {
        self.x_bounds
    }

    pub fn y_bounds(&self) -> Bounds {
        self.y_bounds
    }
}

impl Problem for TwoVariableProblem {
    type Individual = TwoVariable;

    fn name(&self) -> &str {
        "two-variable"
    }

    fn create_individual<R: Rng>(&self, rng: &mut R) -> TwoVariable {
        TwoVariable::random(self.x_bounds, self.y_bounds, self.objective, rng)
    }
}
