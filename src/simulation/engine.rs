// src/simulation/engine.rs

use log::{debug, info};
use rand::rngs::StdRng;
use serde::Serialize;

use crate::error::ConfigError;
use crate::model::distribution::Distributions;
use crate::model::state::{CostParameters, InventoryState};
use crate::policy::MnPolicy;
use crate::simulation::config::Seed;

/// One simulated day's full audit trail. Constructed once by the daily
/// transition and never mutated afterwards.
///
/// The field order is part of the contract for tabular output: the CSV
/// column order follows the declaration order here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DayRecord {
    pub day: u32,
    pub cycle: u32,
    /// On-hand inventory after the arrival step, before demand.
    pub on_hand_start: u32,
    /// Units received from a replenishment order arriving this morning.
    pub incoming_today: u32,
    pub demand: u32,
    pub sales: u32,
    pub ending_inventory: u32,
    pub shortage_qty: u32,
    pub holding_cost: f64,
    pub shortage_cost: f64,
    /// Units ordered today, 0 when no order was placed.
    pub order_qty: u32,
    /// Lead time sampled for today's order; `None` when no order was placed.
    pub lead_time_new_order: Option<u32>,
    pub lead_remaining_end: u32,
    pub purchasing_cost: f64,
    pub ordering_cost: f64,
    pub total_cost_day: f64,
}

/// Outcome of one full simulation run: the ordered day ledger plus totals.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub records: Vec<DayRecord>,
    pub total_cost: f64,
    /// `total_cost / num_cycles`.
    pub avg_cost_per_cycle: f64,
}

/// Driver for one (M, N) policy run.
///
/// Owns the single mutable [`InventoryState`] and the pseudo-random stream
/// for the duration of the run. All sampling goes through the one stream in
/// a fixed call order (demand before lead time within a day), so a fixed
/// seed reproduces the run exactly.
pub struct PolicySimulation {
    policy: MnPolicy,
    num_cycles: u32,
    costs: CostParameters,
    distributions: Distributions,
    state: InventoryState,
    rng: StdRng,
    current_day: u32,
    records: Vec<DayRecord>,
    total_cost: f64,
}

impl PolicySimulation {
    /// Validates the configuration and prepares a run. All configuration
    /// errors surface here, before any day is simulated.
    pub fn new(
        policy: MnPolicy,
        num_cycles: u32,
        costs: &CostParameters,
        initial_state: InventoryState,
        distributions: &Distributions,
        seed: Seed,
    ) -> Result<Self, ConfigError> {
        if num_cycles == 0 {
            return Err(ConfigError::ZeroCycles);
        }
        costs.validate()?;

        let horizon = policy.review_period * num_cycles;
        Ok(Self {
            policy,
            num_cycles,
            costs: *costs,
            distributions: distributions.clone(),
            state: initial_state,
            rng: seed.into_rng(),
            current_day: 1,
            records: Vec::with_capacity(horizon as usize),
            total_cost: 0.0,
        })
    }

    /// Runs all `N * num_cycles` days and returns the result.
    pub fn run(mut self) -> SimulationResult {
        let num_days = self.policy.review_period * self.num_cycles;
        while self.current_day <= num_days {
            self.step();
        }

        info!(
            "run complete: M={}, N={}, {} days, total cost {:.2}",
            self.policy.order_up_to, self.policy.review_period, num_days, self.total_cost
        );

        let avg_cost_per_cycle = self.total_cost / f64::from(self.num_cycles);
        SimulationResult {
            records: self.records,
            total_cost: self.total_cost,
            avg_cost_per_cycle,
        }
    }

    /// One day's transition. The step order is a correctness requirement:
    /// each step feeds the next.
    fn step(&mut self) {
        let day = self.current_day;
        let cycle = self.policy.cycle_of(day);

        // 1) Arrival: an outstanding order whose lead time has expired is
        //    received at the start of the day.
        let mut incoming_today = 0;
        if self.state.lead_remaining == 0 && self.state.outstanding_qty > 0 {
            incoming_today = self.state.outstanding_qty;
            self.state.on_hand += incoming_today;
            self.state.outstanding_qty = 0;
        }
        let on_hand_start = self.state.on_hand;

        // 2) Demand realisation.
        let demand = self.distributions.demand.sample(&mut self.rng);

        // 3) Sales are capped by what is on hand; the rest is shortage.
        let sales = self.state.on_hand.min(demand);
        let shortage_qty = demand.saturating_sub(self.state.on_hand);
        let ending_inventory = self.state.on_hand - sales;

        // 4) Holding and shortage costs for the day.
        let holding_cost = f64::from(ending_inventory) * self.costs.holding_cost;
        let shortage_cost = f64::from(shortage_qty) * self.costs.shortage_cost;

        // 5)–6) Review and ordering decision. Only one order may be in
        //    flight at a time: no new order while outstanding_qty > 0,
        //    however low the inventory has fallen.
        let mut order_qty = 0;
        let mut lead_time_new_order = None;
        let mut purchasing_cost = 0.0;
        let mut ordering_cost = 0.0;
        if self.policy.is_review_day(day)
            && ending_inventory < self.policy.order_up_to
            && self.state.outstanding_qty == 0
        {
            order_qty = self.policy.order_quantity(ending_inventory);
            let lead_time = self.distributions.lead_time.sample(&mut self.rng);
            lead_time_new_order = Some(lead_time);

            self.state.outstanding_qty = order_qty;
            self.state.lead_remaining = lead_time;

            purchasing_cost = f64::from(order_qty) * self.costs.unit_cost;
            ordering_cost = self.costs.ordering_cost;

            debug!(
                "day {day}: ordered {order_qty} units, lead time {lead_time} day(s)"
            );
        }

        // 7) Lead-time decrement. An order placed today is decremented on
        //    the same day, so a lead time of 1 arrives at the start of the
        //    next day.
        if self.state.outstanding_qty > 0 && self.state.lead_remaining > 0 {
            self.state.lead_remaining -= 1;
        }

        // 8) Carry ending inventory into the next day.
        self.state.on_hand = ending_inventory;

        // 9) Daily cost total.
        let total_cost_day = holding_cost + shortage_cost + purchasing_cost + ordering_cost;
        self.total_cost += total_cost_day;

        self.records.push(DayRecord {
            day,
            cycle,
            on_hand_start,
            incoming_today,
            demand,
            sales,
            ending_inventory,
            shortage_qty,
            holding_cost,
            shortage_cost,
            order_qty,
            lead_time_new_order,
            lead_remaining_end: self.state.lead_remaining,
            purchasing_cost,
            ordering_cost,
            total_cost_day,
        });
        self.current_day += 1;
    }

    /// Day records produced so far.
    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }
}

/// Simulates the (M, N) policy over `N * num_cycles` days.
///
/// This is the primary entry point: validate, run, return the full day
/// ledger plus the total cost and the average cost per review cycle.
/// Calling it twice with the same [`Seed::Fixed`] value and identical
/// configuration produces identical results.
pub fn simulate(
    policy: MnPolicy,
    num_cycles: u32,
    costs: &CostParameters,
    initial_state: InventoryState,
    distributions: &Distributions,
    seed: Seed,
) -> Result<SimulationResult, ConfigError> {
    let sim = PolicySimulation::new(
        policy,
        num_cycles,
        costs,
        initial_state,
        distributions,
        seed,
    )?;
    Ok(sim.run())
}
