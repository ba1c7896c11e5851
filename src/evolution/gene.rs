//! Bounded scalar genes and their mutation operators.
//!
//! A [`Gene`] is the smallest mutable unit of a candidate solution: one `f64`
//! that is kept inside its [`Bounds`] at every observation point. Mutation is
//! driven by a [`Mutation`] descriptor built from the run configuration.

use crate::error::GaError;
use rand::Rng;

/// Divisor applied to the bounds width to get the maximum perturbation step.
const PERTURB_DIVISOR: f64 = 1000.0;

/// Width of the IEEE-754 `f64` bit pattern.
const F64_BITS: u32 = 64;

/// Closed interval `[min, max]` a gene is confined to.
///
/// Both ends are finite and `min < max`; [`Bounds::new`] rejects anything
/// else, so every `Bounds` value in circulation is valid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    /// `[0, 1]`, the domain of `x` in both built-in problems.
    pub const UNIT: Bounds = Bounds { min: 0.0, max: 1.0 };

    /// `[-2, 2]`, the domain of `y` in the two-variable problem.
    pub const SYMMETRIC_TWO: Bounds = Bounds {
        min: -2.0,
        max: 2.0,
    };

    /// Creates validated bounds.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfiguration`] if either end is not finite,
    /// `min >= max`, or the width `max - min` overflows.
    pub fn new(min: f64, max: f64) -> Result<Self, GaError> {
        if !min.is_finite() || !max.is_finite() || min >= max || !(max - min).is_finite() {
            return Err(GaError::invalid_bounds(min, max));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the interval, `max - min`.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Saturates `value` into the interval.
    pub fn clamp(&self, value: f64) -> f64 {
        if value > self.max {
            self.max
        } else if value < self.min {
            self.min
        } else {
            value
        }
    }

    /// Draws a value uniformly from `[min, max]`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.min..=self.max)
    }
}

/// How a gene's value is perturbed when it mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MutationStrategy {
    /// Add a uniformly drawn step in `[0, width / 1000]` with a random sign.
    ///
    /// Small, local moves. This is the default.
    #[default]
    Perturb,

    /// Flip one random bit of the value's IEEE-754 bit pattern.
    ///
    /// Mantissa flips are local moves; sign and exponent flips jump far and
    /// usually end up clipped to a bound. A flip that produces infinity or
    /// NaN is discarded.
    BitFlip,
}

/// Mutation parameters handed to every [`Gene::mutate`] call of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mutation {
    /// Which operator to apply.
    pub strategy: MutationStrategy,

    /// Probability that a single gene mutates (0.0–1.0).
    pub probability: f64,
}

impl Default for Mutation {
    fn default() -> Self {
        Self {
            strategy: MutationStrategy::Perturb,
            probability: 0.5,
        }
    }
}

/// A bounded `f64` decision variable.
///
/// # Examples
///
/// ```
/// use u_genetic::evolution::{Bounds, Gene, Mutation};
/// use u_genetic::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let mut gene = Gene::random(Bounds::UNIT, &mut rng);
/// for _ in 0..1000 {
///     gene.mutate(&Mutation::default(), &mut rng);
///     assert!(Bounds::UNIT.contains(gene.value()));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gene {
    value: f64,
    bounds: Bounds,
}

impl Gene {
    /// Creates a gene with a value drawn uniformly from `bounds`.
    pub fn random<R: Rng>(bounds: Bounds, rng: &mut R) -> Self {
        Self {
            value: bounds.sample(rng),
            bounds,
        }
    }

    /// Creates a gene with an explicit starting value.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfiguration`] if `value` lies outside
    /// `bounds` (NaN included).
    pub fn with_value(value: f64, bounds: Bounds) -> Result<Self, GaError> {
        if !bounds.contains(value) {
            return Err(GaError::invalid(format!(
                "gene value {value} outside [{}, {}]",
                bounds.min(),
                bounds.max()
            )));
        }
        Ok(Self { value, bounds })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Mutates the value in place.
    ///
    /// With probability `1 - mutation.probability` nothing happens. The value
    /// is clipped back into bounds afterwards either way.
    pub fn mutate<R: Rng>(&mut self, mutation: &Mutation, rng: &mut R) {
        if rng.random_bool(mutation.probability) {
            match mutation.strategy {
                MutationStrategy::Perturb => self.perturb(rng),
                MutationStrategy::BitFlip => self.flip_bit(rng),
            }
        }
        self.value = self.bounds.clamp(self.value);
    }

    fn perturb<R: Rng>(&mut self, rng: &mut R) {
        let step = rng.random_range(0.0..=self.bounds.width().abs() / PERTURB_DIVISOR);
        if rng.random_bool(0.5) {
            self.value += step;
        } else {
            self.value -= step;
        }
    }

    fn flip_bit<R: Rng>(&mut self, rng: &mut R) {
        let bit = rng.random_range(0..F64_BITS);
        let flipped = f64::from_bits(self.value.to_bits() ^ (1u64 << bit));
        if flipped.is_finite() {
            self.value = flipped;
        }
    }

    /// Exchanges values with `other`.
    ///
    /// Bounds are not compared; swapping between genes with different bounds
    /// can leave either value outside its own interval until the next
    /// mutation clips it.
    pub fn swap_value(&mut self, other: &mut Gene) {
        std::mem::swap(&mut self.value, &mut other.value);
    }
}
