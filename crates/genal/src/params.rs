//! Evolution parameters.
//!
//! [`EvolutionParams`] holds every value that governs how the operators of a
//! [`Population`](crate::genetic::Population) behave. It is plain data: the
//! setters store exactly what they are given, and [`EvolutionParams::validate`]
//! is the single place where values are checked.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Parameters shared by every individual of a population.
///
/// # Examples
///
/// ```
/// use genal::params::EvolutionParams;
///
/// let params = EvolutionParams::default()
///     .with_mutation_prob(0.2)
///     .with_bounds(-5.0, 5.0);
/// assert!(params.validate(10).is_ok());
///
/// let params = params.with_mutation_prob(1.5);
/// assert!(params.validate(10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionParams {
    /// Probability that a single gene is perturbed during mutation (0.0–1.0)
    pub mutation_prob: f32,
    /// Width of the zero-centred interval mutation perturbations are drawn from
    pub mutation_range: f32,
    /// Fraction of the population replaced by offspring per reproduction pass (0.0–1.0)
    pub reproduction_rate: f32,
    /// Lower bound for initial gene sampling
    pub min: f32,
    /// Upper bound for initial gene sampling
    pub max: f32,
}

impl Default for EvolutionParams {
    fn default() -> Self {
        Self {
            mutation_prob: 0.1,
            mutation_range: 0.5,
            reproduction_rate: 0.25,
            min: -1.0,
            max: 1.0,
        }
    }
}

impl EvolutionParams {
    #[must_use]
    pub fn with_mutation_prob(mut self, prob: f32) -> Self {
        self.mutation_prob = prob;
        self
    }

    #[must_use]
    pub fn with_mutation_range(mut self, range: f32) -> Self {
        self.mutation_range = range;
        self
    }

    #[must_use]
    pub fn with_reproduction_rate(mut self, rate: f32) -> Self {
        self.reproduction_rate = rate;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Number of individuals replaced by one reproduction pass over a
    /// population of `n_individuals`: `floor(n_individuals * reproduction_rate)`.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    #[must_use]
    pub fn offspring_count(&self, n_individuals: usize) -> usize {
        (n_individuals as f64 * f64::from(self.reproduction_rate)).floor() as usize
    }

    /// Checks every parameter against its domain for a population of
    /// `n_individuals`.
    ///
    /// Besides the per-field checks, a reproduction pass must not replace more
    /// than half of the population, otherwise parent pairs would run past the
    /// end of the ranking.
    pub fn validate(&self, n_individuals: usize) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.mutation_prob) {
            return Err(ConfigError::MutationProbOutOfRange {
                value: self.mutation_prob,
            });
        }
        if !(0.0..=1.0).contains(&self.reproduction_rate) {
            return Err(ConfigError::ReproductionRateOutOfRange {
                value: self.reproduction_rate,
            });
        }
        if !self.mutation_range.is_finite() || self.mutation_range < 0.0 {
            return Err(ConfigError::InvalidMutationRange {
                value: self.mutation_range,
            });
        }
        if !self.min.is_finite()
            || !self.max.is_finite()
            || self.min > self.max
            || !(self.max - self.min).is_finite()
        {
            return Err(ConfigError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        let offspring = self.offspring_count(n_individuals);
        if offspring > n_individuals / 2 {
            return Err(ConfigError::OffspringOverflow {
                offspring,
                individuals: n_individuals,
            });
        }
        Ok(())
    }
}
