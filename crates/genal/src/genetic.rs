//! Population lifecycle and evolutionary operators.
//!
//! A [`Population`] owns a fixed number of [`Individual`]s, each a real-valued
//! weight vector of fixed length plus a fitness score. The caller drives the
//! evolution loop by invoking the operators in order:
//!
//! 1. **Evaluate Fitness** - [`Population::evaluate_fitness`] hands all individuals
//!    to a caller-supplied [`FitnessEvaluator`]
//! 2. **Rank and Reproduce** - [`Population::rank_and_reproduce`] sorts individuals
//!    by fitness (best first) and overwrites the worst ones with offspring of the best
//! 3. **Mutate** - [`Population::mutate`] perturbs genes at random
//!
//! No operator calls another one, and none of them adds or removes individuals.
//!
//! # Genetic Operators
//!
//! ## Truncation Replacement
//!
//! With `k = floor(n * reproduction_rate)`, the `i`-th worst individual is
//! replaced by the child of the ranked pair `(2i, 2i + 1)`. Children are computed
//! from the ranking as it stood before the pass, so a freshly written child is
//! never used as a parent in the same pass. Construction rejects parameters
//! where `k > n / 2`. The replaced individual keeps its old fitness until the
//! next evaluation.
//!
//! ## Arithmetic Crossover
//!
//! A child is the elementwise mean of its two parents.
//!
//! ## Uniform Mutation
//!
//! Every gene is perturbed with probability `mutation_prob` by a value drawn from
//! `[-mutation_range / 2, mutation_range / 2]`. Genes are not clamped afterwards.
//!
//! # Example
//!
//! ```
//! use genal::{
//!     genetic::{PerIndividual, Population},
//!     params::EvolutionParams,
//! };
//!
//! let mut rng = rand::rng();
//! let params = EvolutionParams::default().with_bounds(-5.0, 5.0);
//! let mut population = Population::random(20, 3, params, &mut rng)?;
//!
//! let sphere = PerIndividual(|w: &[f32]| -w.iter().map(|x| x * x).sum::<f32>());
//! for _ in 0..10 {
//!     population.evaluate_fitness(&sphere);
//!     population.rank_and_reproduce();
//!     population.mutate(&mut rng)?;
//! }
//! population.evaluate_fitness(&sphere);
//! population.rank();
//! assert!(population.best().is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::TryReserveError;

use rand::Rng;

use crate::{
    error::{CreatePopulationError, MutateError},
    params::EvolutionParams,
    stats::Summary,
    weights,
};

/// A single candidate solution: a weight vector and its fitness score.
///
/// The weight vector length is fixed at construction. Code outside this crate
/// can read the weights and set the fitness, but cannot resize the vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    weights: Vec<f32>,
    fitness: f32,
}

impl Individual {
    fn random<R>(rng: &mut R, min: f32, max: f32, len: usize) -> Result<Self, TryReserveError>
    where
        R: Rng + ?Sized,
    {
        Ok(Self {
            weights: weights::try_random(rng, min, max, len)?,
            fitness: 0.0,
        })
    }

    /// Returns the weights (genome) of this individual.
    #[must_use]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Returns the fitness score for this individual.
    ///
    /// Higher fitness is better. The score is `0.0` until the first evaluation
    /// and goes stale when reproduction overwrites the weights.
    #[must_use]
    pub fn fitness(&self) -> f32 {
        self.fitness
    }

    /// Sets the fitness score. Intended for [`FitnessEvaluator`] implementations.
    pub fn set_fitness(&mut self, fitness: f32) {
        self.fitness = fitness;
    }
}

/// Scores a whole population.
///
/// Implementations are trusted to set the fitness of every individual as a
/// function of its weights. Any `Fn(&mut [Individual])` closure is an
/// evaluator; [`PerIndividual`] adapts a per-genome scoring function.
pub trait FitnessEvaluator {
    fn evaluate(&self, individuals: &mut [Individual]);
}

impl<F> FitnessEvaluator for F
where
    F: Fn(&mut [Individual]),
{
    fn evaluate(&self, individuals: &mut [Individual]) {
        self(individuals);
    }
}

/// Evaluator that scores each individual independently from its weights.
#[derive(Debug, Clone, Copy)]
pub struct PerIndividual<F>(pub F);

impl<F> FitnessEvaluator for PerIndividual<F>
where
    F: Fn(&[f32]) -> f32,
{
    fn evaluate(&self, individuals: &mut [Individual]) {
        for ind in individuals {
            ind.fitness = (self.0)(&ind.weights);
        }
    }
}

/// A population of individuals for genetic algorithm evolution.
///
/// The number of individuals and the length of their weight vectors never
/// change after construction; operators only overwrite weights, fitness
/// scores and the order of individuals.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Individual>,
    number_weights: usize,
    params: EvolutionParams,
}

impl Population {
    /// Creates a new population with random individuals.
    ///
    /// Every weight is drawn independently and uniformly from
    /// `[params.min, params.max]`, and every fitness starts at `0.0`.
    ///
    /// # Arguments
    ///
    /// * `n_individuals` - Number of individuals in the population (may be 0)
    /// * `number_weights` - Length of every weight vector (may be 0)
    /// * `params` - Evolution parameters, validated before anything is allocated
    /// * `rng` - Random number generator
    ///
    /// # Errors
    ///
    /// * [`CreatePopulationError::InvalidConfig`] if `params` fail
    ///   [`EvolutionParams::validate`]
    /// * [`CreatePopulationError::Allocation`] if memory for the individuals
    ///   cannot be reserved; everything allocated so far is released
    pub fn random<R>(
        n_individuals: usize,
        number_weights: usize,
        params: EvolutionParams,
        rng: &mut R,
    ) -> Result<Self, CreatePopulationError>
    where
        R: Rng + ?Sized,
    {
        params.validate(n_individuals)?;

        let mut individuals = Vec::new();
        individuals.try_reserve_exact(n_individuals)?;
        for _ in 0..n_individuals {
            individuals.push(Individual::random(
                rng,
                params.min,
                params.max,
                number_weights,
            )?);
        }

        log::debug!(
            "created population: {n_individuals} individuals x {number_weights} weights, {params:?}"
        );
        Ok(Self {
            individuals,
            number_weights,
            params,
        })
    }

    /// Releases the population and every individual it owns.
    ///
    /// Equivalent to dropping the value.
    pub fn destroy(self) {
        log::trace!("destroying population of {} individuals", self.len());
        drop(self);
    }

    /// Returns all individuals in this population.
    ///
    /// After [`rank`](Self::rank) or [`rank_and_reproduce`](Self::rank_and_reproduce)
    /// they are ordered by fitness, best first.
    #[must_use]
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Returns the length of every weight vector.
    #[must_use]
    pub fn number_weights(&self) -> usize {
        self.number_weights
    }

    #[must_use]
    pub fn params(&self) -> &EvolutionParams {
        &self.params
    }

    /// Returns the first individual, which is the best one after ranking.
    #[must_use]
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.first()
    }

    /// Evaluates fitness for all individuals.
    ///
    /// The evaluator is invoked exactly once with the whole population.
    pub fn evaluate_fitness<E>(&mut self, evaluator: &E)
    where
        E: FitnessEvaluator + ?Sized,
    {
        evaluator.evaluate(&mut self.individuals);
        log::trace!("evaluated {} individuals", self.len());
    }

    /// Sorts individuals by fitness in descending order (best first).
    ///
    /// The sort is stable: individuals with equal fitness keep their relative
    /// order.
    pub fn rank(&mut self) {
        self.individuals.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
    }

    /// Ranks the population, then replaces the worst individuals with offspring
    /// of the best pairs.
    ///
    /// With `k = floor(len * reproduction_rate)`, the individual at ranked
    /// position `len - 1 - i` receives the elementwise mean of positions `2i`
    /// and `2i + 1`, for each `i` in `0..k`. Parents are read as they were
    /// before the pass. Overwritten individuals keep their stale fitness.
    pub fn rank_and_reproduce(&mut self) {
        self.rank();
        self.reproduce_ranked();
    }

    fn reproduce_ranked(&mut self) {
        let len = self.individuals.len();
        let offspring_count = self.params.offspring_count(len);
        debug_assert!(offspring_count <= len / 2);

        let offspring = (0..offspring_count)
            .map(|i| {
                weights::arithmetic_mean(
                    &self.individuals[2 * i].weights,
                    &self.individuals[2 * i + 1].weights,
                )
            })
            .collect::<Vec<_>>();
        for (i, child) in offspring.into_iter().enumerate() {
            self.individuals[len - 1 - i].weights = child;
        }

        log::debug!("replaced {offspring_count} of {len} individuals with offspring");
    }

    /// Applies uniform mutation to every weight of every individual.
    ///
    /// # Errors
    ///
    /// Returns [`MutateError::EmptyGenome`] if the individuals have no weights.
    /// Nothing is modified in that case.
    pub fn mutate<R>(&mut self, rng: &mut R) -> Result<(), MutateError>
    where
        R: Rng + ?Sized,
    {
        if self.number_weights < 1 {
            return Err(MutateError::EmptyGenome);
        }
        let EvolutionParams {
            mutation_prob,
            mutation_range,
            ..
        } = self.params;
        for ind in &mut self.individuals {
            weights::mutate(&mut ind.weights, mutation_prob, mutation_range, rng);
        }
        log::trace!("mutated {} individuals", self.len());
        Ok(())
    }

    /// Computes summary statistics for each weight across all individuals.
    ///
    /// Returns one entry per weight position, or an empty vector if the
    /// population has no individuals.
    #[must_use]
    pub fn weight_stats(&self) -> Vec<Summary> {
        (0..self.number_weights)
            .filter_map(|i| Summary::new(self.individuals.iter().map(|ind| ind.weights[i])))
            .collect()
    }

    /// Computes summary statistics for fitness across all individuals.
    #[must_use]
    pub fn fitness_stats(&self) -> Option<Summary> {
        Summary::new(self.individuals.iter().map(|ind| ind.fitness))
    }
}
