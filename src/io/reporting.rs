// src/io/reporting.rs

use crate::simulation::engine::DayRecord;
use serde::Serialize;
use std::error::Error;
use std::path::Path;

/// One row of the cross-policy comparison table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyReport {
    pub policy: String,
    pub order_up_to: u32,
    pub review_period: u32,
    pub total_cost: f64,
    pub avg_cost_per_cycle: f64,
}

/// Writes a run's full day ledger to a CSV file, one row per simulated day,
/// columns in the DayRecord field order.
pub fn write_day_records(file_path: &str, records: &[DayRecord]) -> Result<(), Box<dyn Error>> {
    let path = Path::new(file_path);
    let mut wtr = csv::Writer::from_path(path)?;

    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the policy comparison table to a CSV file.
pub fn write_policy_summary(
    file_path: &str,
    reports: &[PolicyReport],
) -> Result<(), Box<dyn Error>> {
    let path = Path::new(file_path);
    let mut wtr = csv::Writer::from_path(path)?;

    for report in reports {
        wtr.serialize(report)?;
    }
    wtr.flush()?;
    Ok(())
}
