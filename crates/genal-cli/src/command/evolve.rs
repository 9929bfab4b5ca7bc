use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use genal::{
    genetic::{PerIndividual, Population},
    params::EvolutionParams,
};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::{model::report::EvolutionReport, objective::Objective, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EvolveArg {
    /// Objective function to maximize (sphere, rastrigin, rosenbrock)
    #[arg(long, default_value = "sphere")]
    objective: Objective,
    /// Number of individuals in the population
    #[arg(long, default_value_t = 30)]
    individuals: usize,
    /// Number of weights per individual
    #[arg(long, default_value_t = 8)]
    weights: usize,
    /// Number of generations to evaluate
    #[arg(long, default_value_t = 200)]
    generations: usize,
    /// JSON file with evolution parameters; the flags below override its values
    #[arg(long)]
    params: Option<PathBuf>,
    /// Per-weight mutation probability (0.0–1.0)
    #[arg(long)]
    mutation_prob: Option<f32>,
    /// Width of the zero-centred mutation perturbation interval
    #[arg(long)]
    mutation_range: Option<f32>,
    /// Fraction of the population replaced by offspring per generation (0.0–1.0)
    #[arg(long)]
    reproduction_rate: Option<f32>,
    /// Lower bound for initial weights
    #[arg(long, allow_hyphen_values = true)]
    min: Option<f32>,
    /// Upper bound for initial weights
    #[arg(long, allow_hyphen_values = true)]
    max: Option<f32>,
    /// Random seed; a fresh one is drawn (and reported) when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Number of best individuals listed in each generation report
    #[arg(long, default_value_t = 5)]
    show: usize,
    /// Suppress per-generation reports
    #[arg(long)]
    quiet: bool,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

impl EvolveArg {
    fn evolution_params(&self) -> anyhow::Result<EvolutionParams> {
        let mut params = match &self.params {
            Some(path) => util::read_json_file("evolution parameters", path)?,
            None => EvolutionParams::default(),
        };
        if let Some(prob) = self.mutation_prob {
            params.mutation_prob = prob;
        }
        if let Some(range) = self.mutation_range {
            params.mutation_range = range;
        }
        if let Some(rate) = self.reproduction_rate {
            params.reproduction_rate = rate;
        }
        if let Some(min) = self.min {
            params.min = min;
        }
        if let Some(max) = self.max {
            params.max = max;
        }
        Ok(params)
    }
}

pub(crate) fn run(arg: &EvolveArg) -> anyhow::Result<()> {
    let params = arg.evolution_params()?;
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let report = evolve(arg, params, seed)?;

    eprintln!();
    eprintln!("Evolution completed");
    eprintln!("  Objective: {}", report.objective);
    eprintln!("  Seed: {}", report.seed);
    eprintln!("  Final fitness: {:.6}", report.final_fitness);
    eprintln!("  Weights: {:.4?}", report.weights);

    util::write_json(&report, arg.output.as_deref())?;
    if let Some(path) = &arg.output {
        eprintln!("Report saved to {}", path.display());
    }
    Ok(())
}

fn evolve(arg: &EvolveArg, params: EvolutionParams, seed: u64) -> anyhow::Result<EvolutionReport> {
    anyhow::ensure!(arg.individuals > 0, "--individuals must be at least 1");
    anyhow::ensure!(arg.weights > 0, "--weights must be at least 1");
    anyhow::ensure!(arg.generations > 0, "--generations must be at least 1");

    let objective = arg.objective;
    let evaluator = PerIndividual(|weights: &[f32]| objective.fitness(weights));

    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let mut population = Population::random(arg.individuals, arg.weights, params, &mut rng)
        .context("Failed to create population")?;
    log::info!(
        "evolving {} individuals x {} weights on {} (seed {seed})",
        arg.individuals,
        arg.weights,
        objective.name(),
    );

    for generation in 0..arg.generations {
        population.evaluate_fitness(&evaluator);
        population.rank();
        if !arg.quiet {
            print_generation_report(generation, &population, arg.show);
        }

        if generation + 1 < arg.generations {
            population.rank_and_reproduce();
            population
                .mutate(&mut rng)
                .with_context(|| format!("Failed to mutate generation #{generation}"))?;
        }
    }

    let best = population
        .best()
        .context("Population has no individuals")?;
    Ok(EvolutionReport {
        objective: objective.name().to_owned(),
        evolved_at: Utc::now(),
        seed,
        generations: arg.generations,
        individuals: arg.individuals,
        params,
        final_fitness: best.fitness(),
        weights: best.weights().to_vec(),
    })
}

fn print_generation_report(generation: usize, population: &Population, show: usize) {
    eprintln!("Generation #{generation}:");

    eprintln!("  Individuals:");
    for (i, ind) in population.individuals().iter().take(show).enumerate() {
        eprintln!("  {i:2}: {:.3?} => {:.4}", ind.weights(), ind.fitness());
    }

    let weight_stats = population.weight_stats();
    eprintln!("  Weights Stats:");
    eprintln!(
        "    Min:    {:.3?}",
        weight_stats.iter().map(|s| s.min).collect::<Vec<_>>()
    );
    eprintln!(
        "    Max:    {:.3?}",
        weight_stats.iter().map(|s| s.max).collect::<Vec<_>>()
    );
    eprintln!(
        "    Mean:   {:.3?}",
        weight_stats.iter().map(|s| s.mean).collect::<Vec<_>>()
    );
    eprintln!(
        "    Stddev: {:.3?}",
        weight_stats.iter().map(|s| s.std_dev).collect::<Vec<_>>()
    );

    if let Some(fitness_stats) = population.fitness_stats() {
        eprintln!("  Fitness Stats:");
        eprintln!("    Min:  {:.4}", fitness_stats.min);
        eprintln!("    Max:  {:.4}", fitness_stats.max);
        eprintln!("    Mean: {:.4}", fitness_stats.mean);
    }
}
