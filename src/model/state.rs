// src/model/state.rs

use crate::error::ConfigError;

/// Cost structure for the inventory system. Immutable for the duration of a
/// run; the same rates apply every day and every order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostParameters {
    /// Cost per unit of ending inventory per day.
    pub holding_cost: f64,
    /// Cost per unit of unsatisfied demand per day.
    pub shortage_cost: f64,
    /// Purchasing cost per unit ordered.
    pub unit_cost: f64,
    /// Flat fee incurred whenever an order is placed, independent of quantity.
    pub ordering_cost: f64,
}

impl CostParameters {
    /// All four rates must be non-negative; a negative rate would silently
    /// reward holding stock or running short.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("holding_cost", self.holding_cost),
            ("shortage_cost", self.shortage_cost),
            ("unit_cost", self.unit_cost),
            ("ordering_cost", self.ordering_cost),
        ];
        for (name, value) in fields {
            if value < 0.0 {
                return Err(ConfigError::NegativeCost { name, value });
            }
        }
        Ok(())
    }
}

/// Inventory and outstanding-order state, owned by the simulation driver and
/// threaded through the daily transitions.
///
/// At most one replenishment order may be outstanding at a time: a non-zero
/// `outstanding_qty` means a single order is in flight. `lead_remaining == 0`
/// while `outstanding_qty > 0` means that order arrives at the start of the
/// next simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryState {
    /// Units available on hand.
    pub on_hand: u32,
    /// Units ordered but not yet received.
    pub outstanding_qty: u32,
    /// Days remaining until the outstanding order arrives.
    pub lead_remaining: u32,
}

impl InventoryState {
    pub fn new(on_hand: u32, outstanding_qty: u32, lead_remaining: u32) -> Self {
        Self {
            on_hand,
            outstanding_qty,
            lead_remaining,
        }
    }
}
