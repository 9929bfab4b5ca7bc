use chrono::{DateTime, Utc};
use genal::params::EvolutionParams;
use serde::{Deserialize, Serialize};

/// Outcome of an `evolve` run: the best individual and how it was produced.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EvolutionReport {
    pub objective: String,
    pub evolved_at: DateTime<Utc>,
    pub seed: u64,
    pub generations: usize,
    pub individuals: usize,
    pub params: EvolutionParams,
    pub final_fitness: f32,
    pub weights: Vec<f32>,
}
