//! Minimal real-valued genetic algorithm engine.
//!
//! This crate maintains a population of fixed-length `f32` weight vectors
//! ("individuals") and exposes the primitive evolutionary operators needed to
//! drive a search loop. The loop itself, the fitness function and the random
//! generator all belong to the caller.
//!
//! # How Evolution Works
//!
//! 1. **Population** - [`genetic::Population::random`] samples every weight uniformly
//!    in `[min, max]`
//! 2. **Evaluation** - A caller-supplied [`genetic::FitnessEvaluator`] scores every
//!    individual (higher is better)
//! 3. **Ranking** - Individuals are sorted by fitness, best first
//! 4. **Reproduction** - The worst individuals are overwritten by the elementwise mean
//!    of the best pairs
//! 5. **Mutation** - Each weight is perturbed with a fixed probability by bounded
//!    uniform noise
//! 6. **Repeat** - The mutated population is the input of the next generation
//!
//! # Parameters
//!
//! See [`params::EvolutionParams`]:
//!
//! - **Mutation probability** - Per-weight probability of being perturbed
//! - **Mutation range** - Width of the zero-centred perturbation interval
//! - **Reproduction rate** - Fraction of the population replaced per generation
//! - **Bounds** - Interval for initial sampling only; weights may drift outside it
//!
//! # Randomness
//!
//! Every operator that needs randomness takes the generator as an argument.
//! Seeding is the caller's job, and a seeded generator makes a run fully
//! reproducible.
//!
//! # Current Limitations
//!
//! - **Truncation replacement only**: no tournament, roulette-wheel or other
//!   selection strategies
//! - **Fixed-length real vectors only**: no other genome encodings
//! - **Sequential**: evaluation and operators run on the calling thread
//! - **No persistence**: populations live only as long as the process

pub mod error;
pub mod genetic;
pub mod params;
pub mod sampling;
pub mod stats;
pub mod weights;
