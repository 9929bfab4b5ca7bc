use std::collections::TryReserveError;

/// Invalid evolution parameters.
///
/// Parameters are never clamped: a value outside its domain is rejected and no
/// population is built from it.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("mutation_prob should be a number between 0 and 1, got {value}")]
    MutationProbOutOfRange { value: f32 },
    #[display("reproduction_rate should be a number between 0 and 1, got {value}")]
    ReproductionRateOutOfRange { value: f32 },
    #[display("mutation_range should be a finite non-negative number, got {value}")]
    InvalidMutationRange { value: f32 },
    #[display("initial bounds should be finite with min <= max and a finite span, got [{min}, {max}]")]
    InvalidBounds { min: f32, max: f32 },
    #[display(
        "reproduction_rate replaces {offspring} of {individuals} individuals, \
         but at most half can be replaced"
    )]
    OffspringOverflow {
        offspring: usize,
        individuals: usize,
    },
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CreatePopulationError {
    #[display("invalid evolution parameters")]
    InvalidConfig(ConfigError),
    #[display("failed to allocate population")]
    Allocation(TryReserveError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MutateError {
    #[display("cannot mutate individuals without weights")]
    EmptyGenome,
}
