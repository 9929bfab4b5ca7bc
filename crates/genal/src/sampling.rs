//! Random sampling primitives.
//!
//! Every random draw made by the engine goes through these two functions, and
//! both take the generator explicitly. Nothing in this crate touches a global
//! or thread-local generator, so a seeded generator reproduces a run exactly.

use rand::Rng;

/// Draws a value uniformly from the closed interval `[min, max]`.
///
/// `min == max` is allowed and always yields `min`.
///
/// # Panics
///
/// Panics if `min > max`, if either bound is not finite, or if `max - min`
/// overflows to infinity.
///
/// # Examples
///
/// ```
/// use genal::sampling;
///
/// let mut rng = rand::rng();
/// let x = sampling::uniform(&mut rng, -1.0, 1.0);
/// assert!((-1.0..=1.0).contains(&x));
/// assert_eq!(sampling::uniform(&mut rng, 0.5, 0.5), 0.5);
/// ```
pub fn uniform<R>(rng: &mut R, min: f32, max: f32) -> f32
where
    R: Rng + ?Sized,
{
    rng.random_range(min..=max)
}

/// Returns `true` with probability `p`.
///
/// `p = 0.0` never succeeds and `p = 1.0` always does.
///
/// # Panics
///
/// Panics if `p` is outside `[0, 1]`.
pub fn bernoulli<R>(rng: &mut R, p: f32) -> bool
where
    R: Rng + ?Sized,
{
    rng.random_bool(p.into())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_uniform_stays_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let x = uniform(&mut rng, -2.5, 3.0);
            assert!((-2.5..=3.0).contains(&x));
        }
    }

    #[test]
    fn test_uniform_degenerate_interval() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(uniform(&mut rng, 0.0, 0.0), 0.0);
        assert_eq!(uniform(&mut rng, -4.0, -4.0), -4.0);
    }

    #[test]
    fn test_bernoulli_extremes() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert!((0..1000).all(|_| !bernoulli(&mut rng, 0.0)));
        assert!((0..1000).all(|_| bernoulli(&mut rng, 1.0)));
    }

    #[test]
    fn test_bernoulli_frequency() {
        let mut rng = Pcg32::seed_from_u64(11);
        let hits = (0..10_000).filter(|_| bernoulli(&mut rng, 0.3)).count();
        // 0.3 * 10_000 with a generous margin
        assert!((2_500..3_500).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = Pcg32::seed_from_u64(3);
        let mut b = Pcg32::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(uniform(&mut a, 0.0, 10.0), uniform(&mut b, 0.0, 10.0));
        }
    }
}
