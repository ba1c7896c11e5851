//! Candidate solutions.
//!
//! The [`Individual`] trait is the contract between the generational loop and
//! a solution representation. Two concrete variants are provided:
//!
//! - [`SingleVariable`]: one gene `x`, result `objective(x)`
//! - [`TwoVariable`]: genes `x` and `y`, result `objective(x, y)`, and a
//!   uniform gene-swap crossover

use super::gene::{Bounds, Gene, Mutation};
use super::objective::{self, BinaryObjective, UnaryObjective};
use rand::Rng;

/// A candidate solution carrying a cached result.
///
/// The cached [`result`](Individual::result) is only meaningful after
/// [`update_result`](Individual::update_result) has been called for the
/// current generation; it is `+∞` on a freshly created individual.
/// Lower results are better.
pub trait Individual: Clone + std::fmt::Debug {
    /// Whether [`crossover`](Individual::crossover) does anything.
    ///
    /// The runner skips the recombination phase entirely when this is `false`.
    const RECOMBINES: bool = false;

    /// Returns the cached result.
    fn result(&self) -> f64;

    /// Recomputes the cached result from the current genes.
    fn update_result(&mut self);

    /// Mutates every gene in place.
    fn mutate<R: Rng>(&mut self, mutation: &Mutation, rng: &mut R);

    /// Recombines two individuals, returning the new pair.
    ///
    /// The default keeps both unchanged.
    fn crossover<R: Rng>(self, other: Self, _rng: &mut R) -> (Self, Self) {
        (self, other)
    }
}

/// Individual for one-variable problems such as `f(x) = x`.
#[derive(Debug, Clone)]
pub struct SingleVariable {
    x: Gene,
    result: f64,
    objective: UnaryObjective,
}

impl SingleVariable {
    /// Creates an individual with `x` drawn uniformly from `bounds`.
    pub fn random<R: Rng>(bounds: Bounds, objective: UnaryObjective, rng: &mut R) -> Self {
        Self::from_gene(Gene::random(bounds, rng), objective)
    }

    /// Creates an individual from an existing gene.
    pub fn from_gene(x: Gene, objective: UnaryObjective) -> Self {
        Self {
            x,
            result: f64::INFINITY,
            objective,
        }
    }

    /// `x ∈ [0, 1]`, minimizing [`objective::f`].
    pub fn for_f<R: Rng>(rng: &mut R) -> Self {
        Self::random(Bounds::UNIT, objective::f, rng)
    }

    pub fn x(&self) -> &Gene {
        &self.x
    }
}

impl Individual for SingleVariable {
    fn result(&self) -> f64 {
        self.result
    }

    fn update_result(&mut self) {
        self.result = (self.objective)(self.x.value());
    }

    fn mutate<R: Rng>(&mut self, mutation: &Mutation, rng: &mut R) {
        self.x.mutate(mutation, rng);
    }
}

/// Individual for two-variable problems such as `g(x, y)`.
#[derive(Debug, Clone)]
pub struct TwoVariable {
    x: Gene,
    y: Gene,
    result: f64,
    objective: BinaryObjective,
}

impl TwoVariable {
    /// Creates an individual with `x` and `y` drawn uniformly from their bounds.
    pub fn random<R: Rng>(
        x_bounds: Bounds,
        y_bounds: Bounds,
        objective: BinaryObjective,
        rng: &mut R,
    ) -> Self {
        let x = Gene::random(x_bounds, rng);
        let y = Gene::random(y_bounds, rng);
        Self::from_genes(x, y, objective)
    }

    /// Creates an individual from existing genes.
    pub fn from_genes(x: Gene, y: Gene, objective: BinaryObjective) -> Self {
        Self {
            x,
            y,
            result: f64::INFINITY,
            objective,
        }
    }

    /// `x ∈ [0, 1]`, `y ∈ [-2, 2]`, minimizing [`objective::g`].
    pub fn for_g<R: Rng>(rng: &mut R) -> Self {
        Self::random(Bounds::UNIT, Bounds::SYMMETRIC_TWO, objective::g, rng)
    }

    pub fn x(&self) -> &Gene {
        &self.x
    }

    pub fn y(&self) -> &Gene {
        &self.y
    }
}

impl Individual for TwoVariable {
    const RECOMBINES: bool = true;

    fn result(&self) -> f64 {
        self.result
    }

    fn update_result(&mut self) {
        self.result = (self.objective)(self.x.value(), self.y.value());
    }

    fn mutate<R: Rng>(&mut self, mutation: &Mutation, rng: &mut R) {
        self.x.mutate(mutation, rng);
        self.y.mutate(mutation, rng);
    }

    /// Uniform crossover: each gene is swapped with probability 0.5,
    /// independently of the other.
    fn crossover<R: Rng>(mut self, mut other: Self, rng: &mut R) -> (Self, Self) {
        if rng.random_bool(0.5) {
            self.x.swap_value(&mut other.x);
        }
        if rng.random_bool(0.5) {
            self.y.swap_value(&mut other.y);
        }
        (self, other)
    }
}
