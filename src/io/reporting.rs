// src/io/reporting.rs

use std::path::Path;

use serde::Serialize;

use crate::engine::RoleDecision;

/// One CSV row of the replay trace: what the engine saw and decided for one
/// role in one week.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionTraceRow {
    pub week: u32,
    pub role: &'static str,
    pub forecast: f64,
    pub forecast_error: f64,
    pub lead_time: usize,
    pub pipeline: u32,
    pub position: i64,
    pub target: f64,
    pub order: u32,
}

impl DecisionTraceRow {
    pub fn new(week: u32, decision: &RoleDecision) -> Self {
        Self {
            week,
            role: decision.role.as_str(),
            forecast: decision.forecast.level,
            forecast_error: decision.forecast.error,
            lead_time: decision.lead_time,
            pipeline: decision.pipeline,
            position: decision.position,
            target: decision.target,
            order: decision.order,
        }
    }
}

/// Writes the replay trace to a CSV file, one row per role per week.
pub fn write_decision_trace(file_path: &Path, rows: &[DecisionTraceRow]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_path(file_path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Forecast, RoleDecision};
    use crate::model::Role;

    #[test]
    fn trace_rows_serialize_with_a_stable_header() {
        let decision = RoleDecision {
            role: Role::Retailer,
            forecast: Forecast {
                level: 7.5,
                error: 1.25,
            },
            lead_time: 2,
            pipeline: 9,
            position: -3,
            target: 24.0,
            order: 11,
        };
        let row = DecisionTraceRow::new(4, &decision);

        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.serialize(&row).unwrap();
        let text = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        assert!(text.starts_with(
            "week,role,forecast,forecast_error,lead_time,pipeline,position,target,order"
        ));
        assert!(text.contains("4,retailer,7.5,1.25,2,9,-3,24.0,11"));
    }
}
