use std::f32::consts::TAU;

/// Benchmark functions evolved by the `evolve` command.
///
/// Each is a classic minimization problem negated so that higher fitness is
/// better. All of them peak at `0.0`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum Objective {
    /// `-Σ x²`, optimum at the origin
    #[default]
    Sphere,
    /// `-(10n + Σ (x² - 10 cos 2πx))`, optimum at the origin
    Rastrigin,
    /// `-Σ 100 (x[i+1] - x[i]²)² + (1 - x[i])²`, optimum at `(1, ..., 1)`
    Rosenbrock,
}

impl Objective {
    pub fn name(self) -> &'static str {
        match self {
            Objective::Sphere => "sphere",
            Objective::Rastrigin => "rastrigin",
            Objective::Rosenbrock => "rosenbrock",
        }
    }

    pub fn fitness(self, weights: &[f32]) -> f32 {
        match self {
            Objective::Sphere => -weights.iter().map(|x| x * x).sum::<f32>(),
            Objective::Rastrigin => {
                #[expect(clippy::cast_precision_loss)]
                let n = weights.len() as f32;
                -(10.0 * n
                    + weights
                        .iter()
                        .map(|x| x * x - 10.0 * (TAU * x).cos())
                        .sum::<f32>())
            }
            Objective::Rosenbrock => -weights
                .windows(2)
                .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
                .sum::<f32>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("sphere".parse::<Objective>().unwrap(), Objective::Sphere);
        assert_eq!("Rastrigin".parse::<Objective>().unwrap(), Objective::Rastrigin);
        assert_eq!("rosenbrock".parse::<Objective>().unwrap(), Objective::Rosenbrock);
        assert!("ackley".parse::<Objective>().is_err());
    }

    #[test]
    fn test_name_parses_back() {
        for objective in [Objective::Sphere, Objective::Rastrigin, Objective::Rosenbrock] {
            assert_eq!(objective.name().parse::<Objective>().unwrap(), objective);
        }
    }

    #[test]
    fn test_optimum_is_zero() {
        assert_eq!(Objective::Sphere.fitness(&[0.0, 0.0, 0.0]), 0.0);
        assert!(Objective::Rastrigin.fitness(&[0.0, 0.0, 0.0]).abs() < 1e-4);
        assert_eq!(Objective::Rosenbrock.fitness(&[1.0, 1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_worse_away_from_optimum() {
        for objective in [Objective::Sphere, Objective::Rastrigin] {
            assert!(objective.fitness(&[0.5, -0.5]) < objective.fitness(&[0.0, 0.0]));
        }
        assert!(Objective::Rosenbrock.fitness(&[0.0, 0.0]) < Objective::Rosenbrock.fitness(&[1.0, 1.0]));
    }

    #[test]
    fn test_sphere_value() {
        assert_eq!(Objective::Sphere.fitness(&[1.0, -2.0, 3.0]), -14.0);
    }
}
