// src/simulation/config.rs

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::ConfigError;
use crate::model::distribution::Distributions;
use crate::model::state::{CostParameters, InventoryState};
use crate::policy::MnPolicy;

/// How the simulation's pseudo-random stream is initialised.
///
/// `Fixed` gives a deterministic stream: two runs with the same seed and the
/// same configuration produce bit-identical results. `FromEntropy` seeds
/// from the operating system and is not reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    Fixed(u64),
    FromEntropy,
}

impl Seed {
    pub fn into_rng(self) -> StdRng {
        match self {
            Seed::Fixed(seed) => StdRng::seed_from_u64(seed),
            Seed::FromEntropy => StdRng::from_entropy(),
        }
    }
}

/// Number of review cycles simulated by default.
pub const DEFAULT_NUM_CYCLES: u32 = 10;

/// Default cost parameters: holding 20, shortage 10, purchasing 50 per unit,
/// flat ordering fee 10.
pub fn default_costs() -> CostParameters {
    CostParameters {
        holding_cost: 20.0,
        shortage_cost: 10.0,
        unit_cost: 50.0,
        ordering_cost: 10.0,
    }
}

/// Default starting state: 3 units on hand plus an order of 8 units already
/// in transit, due in 2 days.
pub fn default_initial_state() -> InventoryState {
    InventoryState::new(3, 8, 2)
}

/// Default demand and lead-time distributions.
///
/// Demand: 0..=4 units per day with probabilities .10/.25/.35/.21/.09.
/// Lead time: 1..=3 days with probabilities .60/.30/.10.
pub fn default_distributions() -> Result<Distributions, ConfigError> {
    Distributions::from_tables(
        vec![0, 1, 2, 3, 4],
        vec![0.10, 0.25, 0.35, 0.21, 0.09],
        vec![1, 2, 3],
        vec![0.60, 0.30, 0.10],
    )
}

/// The four preset (M, N) policies compared by the demo binary.
pub fn preset_policies() -> Result<Vec<(&'static str, MnPolicy)>, ConfigError> {
    Ok(vec![
        ("Policy A (M=11, N=5)", MnPolicy::new(11, 5)?),
        ("Policy B (M=11, N=6)", MnPolicy::new(11, 6)?),
        ("Policy C (M=12, N=5)", MnPolicy::new(12, 5)?),
        ("Policy D (M=12, N=6)", MnPolicy::new(12, 6)?),
    ])
}
