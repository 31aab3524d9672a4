// src/engine/forecast.rs

use crate::engine::config::DemandField;
use crate::model::{Role, RoleState, WeekRecord};

/// Smoothed demand estimate for one role, derived by replaying its full
/// demand series oldest-to-newest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forecast {
    /// Exponentially smoothed demand level.
    pub level: f64,
    /// Exponentially smoothed absolute forecast error (MAE-style).
    pub error: f64,
}

/// Picks the demand observation for one week per the role's configured
/// signal.
pub fn demand_signal(state: &RoleState, field: DemandField) -> u32 {
    match field {
        DemandField::IncomingOrders => state.incoming_orders.get(),
        DemandField::CustomerOrders => state
            .customer_orders
            .map(|q| q.get())
            .unwrap_or(state.incoming_orders.get()),
    }
}

/// Exponential smoothing over the role's demand history.
///
/// Cold start: the first observation becomes the level outright and the
/// error stays 0. Every later week updates the level with weight `alpha`
/// and the error against the level *before* that update. Replaying the same
/// prefix always reproduces the same intermediate values, so extending the
/// history by one week and recomputing from scratch matches an incremental
/// update exactly.
pub fn forecast(history: &[WeekRecord], role: Role, alpha: f64, field: DemandField) -> Forecast {
    let mut level: Option<f64> = None;
    let mut error = 0.0;

    for week in history {
        let d = demand_signal(week.state(role), field) as f64;
        match level {
            None => level = Some(d),
            Some(prev) => {
                level = Some(alpha * d + (1.0 - alpha) * prev);
                error = alpha * (d - prev).abs() + (1.0 - alpha) * error;
            }
        }
    }

    Forecast {
        level: level.unwrap_or(0.0),
        error,
    }
}
