//! Stochastic simulation of the (M, N) periodic-review inventory policy.
//!
//! Every N days the inventory level is reviewed; if the ending inventory is
//! below the order-up-to level M and no order is already in transit, an order
//! is placed to bring the inventory position back up to M. Daily demand and
//! replenishment lead time are drawn from discrete distributions.
//!
//! The crate is a library: [`simulation::engine::simulate`] is the entry
//! point, and the binary in `main.rs` is just one caller that runs the
//! preset policies and exports CSV reports.

pub mod error;
pub mod io;
pub mod model;
pub mod policy;
pub mod simulation;

pub use crate::error::{ConfigError, DistributionError};
pub use crate::model::distribution::{DiscreteDistribution, Distributions};
pub use crate::model::state::{CostParameters, InventoryState};
pub use crate::policy::MnPolicy;
pub use crate::simulation::config::Seed;
pub use crate::simulation::engine::{simulate, DayRecord, PolicySimulation, SimulationResult};
