//! Error type for setting up a GA run.

/// Errors raised while validating a run's configuration or problem bounds.
///
/// Once a run has started nothing can fail; every error surfaces before the
/// first generation is created.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    #[error("InvalidConfiguration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl GaError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_bounds(min: f64, max: f64) -> Self {
        Self::invalid(format!(
            "bounds must be finite with min < max. min = {min}, max = {max}"
        ))
    }

    pub(crate) fn indivisible_population(population_size: usize, elite_fraction: f64) -> Self {
        Self::invalid(format!(
            "population_size ({population_size}) does not split evenly by elite_fraction ({elite_fraction})"
        ))
    }
}
