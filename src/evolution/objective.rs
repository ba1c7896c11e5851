//! Built-in objective functions.
//!
//! Both are minimized:
//!
//! - [`f`]: `f(x) = x` on `x ∈ [0, 1]`, minimum `0` at `x = 0`.
//! - [`g`]: `g(x, y) = 1 + y² − x − 0.1·sin(3πx)` on `x ∈ [0, 1]`,
//!   `y ∈ [−2, 2]`. The sine term puts ripples on the slope in `x` (flat
//!   stretches where the best result barely moves between generations); the
//!   `y²` term has a single sharp minimum at `y = 0`. The global minimum is
//!   `g(1, 0) = 0`.

use std::f64::consts::PI;

/// Objective over one decision variable.
pub type UnaryObjective = fn(f64) -> f64;

/// Objective over two decision variables.
pub type BinaryObjective = fn(f64, f64) -> f64;

/// `f(x) = x`.
pub fn f(x: f64) -> f64 {
    x
}

/// `g(x, y) = 1 + y² − x − 0.1·sin(3πx)`.
pub fn g(x: f64, y: f64) -> f64 {
    1.0 + y * y - x - 0.1 * (3.0 * PI * x).sin()
}
