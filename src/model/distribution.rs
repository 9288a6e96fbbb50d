// src/model/distribution.rs

use rand::distributions::WeightedIndex;
use rand::Rng;
use rand_distr::Distribution;

use crate::error::{ConfigError, DistributionError};

/// Floating tolerance when checking that probabilities sum to 1.
const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// A finite categorical distribution: an ordered sequence of values and a
/// parallel sequence of probabilities summing to 1.
///
/// The same type models both daily demand and replenishment lead time, each
/// with its own instance. Construction validates the tables; sampling is
/// infallible afterwards.
#[derive(Debug, Clone)]
pub struct DiscreteDistribution {
    values: Vec<u32>,
    probs: Vec<f64>,
    index: WeightedIndex<f64>,
}

impl DiscreteDistribution {
    pub fn new(values: Vec<u32>, probs: Vec<f64>) -> Result<Self, DistributionError> {
        if values.len() != probs.len() {
            return Err(DistributionError::LengthMismatch {
                values: values.len(),
                probs: probs.len(),
            });
        }
        if values.is_empty() {
            return Err(DistributionError::Empty);
        }
        for (index, &probability) in probs.iter().enumerate() {
            if probability < 0.0 {
                return Err(DistributionError::NegativeProbability { index, probability });
            }
        }
        let sum: f64 = probs.iter().sum();
        if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err(DistributionError::BadProbabilitySum { sum });
        }

        // Cannot fail after the checks above, but propagate rather than panic.
        let index = WeightedIndex::new(&probs)
            .map_err(|_| DistributionError::BadProbabilitySum { sum })?;

        Ok(Self {
            values,
            probs,
            index,
        })
    }

    /// Draws one value using the supplied generator.
    ///
    /// Each call consumes from the generator's sequential stream, so the
    /// order of sample calls across a run determines reproducibility.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        self.values[self.index.sample(rng)]
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn probs(&self) -> &[f64] {
        &self.probs
    }
}

/// The pair of distributions a simulation run needs: daily demand and
/// replenishment lead time (in days).
#[derive(Debug, Clone)]
pub struct Distributions {
    pub demand: DiscreteDistribution,
    pub lead_time: DiscreteDistribution,
}

impl Distributions {
    pub fn new(demand: DiscreteDistribution, lead_time: DiscreteDistribution) -> Self {
        Self { demand, lead_time }
    }

    /// Builds both distributions from raw value/probability tables, tagging
    /// any validation failure with the distribution it came from.
    pub fn from_tables(
        demand_values: Vec<u32>,
        demand_probs: Vec<f64>,
        lead_values: Vec<u32>,
        lead_probs: Vec<f64>,
    ) -> Result<Self, ConfigError> {
        let demand = DiscreteDistribution::new(demand_values, demand_probs).map_err(|source| {
            ConfigError::Distribution {
                which: "demand",
                source,
            }
        })?;
        let lead_time = DiscreteDistribution::new(lead_values, lead_probs).map_err(|source| {
            ConfigError::Distribution {
                which: "lead time",
                source,
            }
        })?;
        Ok(Self { demand, lead_time })
    }
}
