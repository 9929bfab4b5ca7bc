//! Weight vector (genome) operations.
//!
//! These are the building blocks used by [`genetic::Population`](crate::genetic::Population)
//! for initialization, crossover and mutation. They work on plain `f32`
//! slices and never change a vector's length once it is built.
//!
//! # Operations
//!
//! - **Initialization**: [`try_random`] samples a genome uniformly in `[min, max]`
//! - **Crossover**: [`arithmetic_mean`] averages two parents gene by gene
//! - **Mutation**: [`mutate`] applies zero-centred uniform noise to some genes

use std::collections::TryReserveError;

use rand::Rng;

use crate::sampling;

/// Creates a weight vector by applying a function to each index.
///
/// # Examples
///
/// ```
/// use genal::weights;
///
/// let weights = weights::from_fn(|i| i as f32 * 0.5, 4);
/// assert_eq!(weights, vec![0.0, 0.5, 1.0, 1.5]);
/// ```
pub fn from_fn<F>(mut f: F, len: usize) -> Vec<f32>
where
    F: FnMut(usize) -> f32,
{
    let mut values = Vec::with_capacity(len);
    for i in 0..len {
        values.push(f(i));
    }
    values
}

/// Like [`from_fn`], but reports allocation failure instead of aborting.
pub fn try_from_fn<F>(mut f: F, len: usize) -> Result<Vec<f32>, TryReserveError>
where
    F: FnMut(usize) -> f32,
{
    let mut values = Vec::new();
    values.try_reserve_exact(len)?;
    for i in 0..len {
        values.push(f(i));
    }
    Ok(values)
}

/// Samples a weight vector with every gene drawn independently from `[min, max]`.
///
/// # Panics
///
/// Panics if `min > max`, if either bound is not finite, or if `max - min`
/// overflows to infinity.
pub fn try_random<R>(
    rng: &mut R,
    min: f32,
    max: f32,
    len: usize,
) -> Result<Vec<f32>, TryReserveError>
where
    R: Rng + ?Sized,
{
    try_from_fn(|_| sampling::uniform(rng, min, max), len)
}

/// Elementwise arithmetic mean of two parent weight vectors.
///
/// # Panics
///
/// Panics if parent vectors have different lengths.
///
/// # Examples
///
/// ```
/// use genal::weights;
///
/// let child = weights::arithmetic_mean(&[1.0, -2.0], &[3.0, 2.0]);
/// assert_eq!(child, vec![2.0, 0.0]);
/// ```
#[must_use]
pub fn arithmetic_mean(p1: &[f32], p2: &[f32]) -> Vec<f32> {
    assert_eq!(p1.len(), p2.len());
    from_fn(|i| f32::midpoint(p1[i], p2[i]), p1.len())
}

/// Applies uniform mutation to a weight vector in-place.
///
/// Each weight is independently selected with probability `prob`; a selected
/// weight gets a perturbation drawn from `[-range / 2, range / 2]` added to it.
/// Results are not clamped, so weights may leave their initial bounds.
///
/// `prob = 0` or `range = 0` leaves every weight bit-for-bit unchanged.
///
/// # Panics
///
/// Panics if `prob` is outside `[0, 1]` or `range` is negative or not finite.
pub fn mutate<R>(weights: &mut [f32], prob: f32, range: f32, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let half = range / 2.0;
    for w in weights {
        if sampling::bernoulli(rng, prob) {
            *w += sampling::uniform(rng, -half, half);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_try_random_respects_bounds_and_length() {
        let mut rng = Pcg32::seed_from_u64(1);
        let weights = try_random(&mut rng, -3.0, 5.0, 64).unwrap();
        assert_eq!(weights.len(), 64);
        assert!(weights.iter().all(|w| (-3.0..=5.0).contains(w)));
    }

    #[test]
    fn test_try_random_empty() {
        let mut rng = Pcg32::seed_from_u64(1);
        let weights = try_random(&mut rng, 0.0, 1.0, 0).unwrap();
        assert!(weights.is_empty());
    }

    #[test]
    fn test_arithmetic_mean() {
        let child = arithmetic_mean(&[0.0, 10.0, -4.0], &[2.0, 20.0, 4.0]);
        assert_eq!(child, vec![1.0, 15.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn test_arithmetic_mean_length_mismatch() {
        let _ = arithmetic_mean(&[0.0, 1.0], &[1.0]);
    }

    #[test]
    fn test_mutate_zero_prob_is_noop() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut weights = vec![0.25, -1.5, 3.0];
        mutate(&mut weights, 0.0, 10.0, &mut rng);
        assert_eq!(weights, vec![0.25, -1.5, 3.0]);
    }

    #[test]
    fn test_mutate_zero_range_is_noop() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut weights = vec![0.25, -1.5, 3.0];
        mutate(&mut weights, 1.0, 0.0, &mut rng);
        assert_eq!(weights, vec![0.25, -1.5, 3.0]);
    }

    #[test]
    fn test_mutate_perturbation_bounded() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut weights = vec![0.0; 256];
        mutate(&mut weights, 1.0, 2.0, &mut rng);
        assert!(weights.iter().all(|w| (-1.0..=1.0).contains(w)));
        assert!(weights.iter().any(|w| *w != 0.0));
    }
}
