// src/engine/target.rs

use crate::engine::forecast::Forecast;
use crate::model::RoleState;

/// Inventory position and order-up-to target for one role this week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// On-hand stock including this week's arrivals.
    pub on_hand: u32,
    /// on_hand - backlog + pipeline. Negative means we owe more than we
    /// hold or expect.
    pub position: i64,
    /// Review-plus-lead horizon in weeks.
    pub horizon: u32,
    /// The stock level the policy orders up to.
    pub target: f64,
}

/// Combines the week's visible state with the reconstructed pipeline.
///
/// Convention: `arriving_shipments` folds into on-hand here, and the
/// pipeline covers only orders that have NOT arrived yet, so arrivals are
/// never counted twice.
pub fn compute_target_and_position(
    state: &RoleState,
    forecast: Forecast,
    lead_time: usize,
    pipeline: u32,
    review_period: u32,
    k_safety: f64,
) -> Position {
    let on_hand = state
        .inventory
        .get()
        .saturating_add(state.arriving_shipments.get());
    let position = on_hand as i64 - state.backlog.get() as i64 + pipeline as i64;

    let horizon = review_period + lead_time as u32;
    let safety = k_safety * forecast.error * (horizon as f64).sqrt();
    let target = forecast.level * horizon as f64 + safety;

    Position {
        on_hand,
        position,
        horizon,
        target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Qty;

    fn state(inventory: u32, backlog: u32, arriving: u32) -> RoleState {
        RoleState {
            inventory: Qty(inventory),
            backlog: Qty(backlog),
            arriving_shipments: Qty(arriving),
            ..RoleState::default()
        }
    }

    #[test]
    fn arrivals_fold_into_on_hand() {
        let fc = Forecast {
            level: 8.0,
            error: 0.0,
        };
        let pos = compute_target_and_position(&state(10, 4, 6), fc, 2, 12, 1, 0.6);
        assert_eq!(pos.on_hand, 16);
        assert_eq!(pos.position, 16 - 4 + 12);
    }

    #[test]
    fn backlog_can_push_position_negative() {
        let fc = Forecast {
            level: 5.0,
            error: 1.0,
        };
        let pos = compute_target_and_position(&state(0, 30, 2), fc, 2, 5, 1, 0.6);
        assert_eq!(pos.position, 2 - 30 + 5);
    }

    #[test]
    fn target_is_forecast_over_horizon_plus_safety() {
        let fc = Forecast {
            level: 8.0,
            error: 2.0,
        };
        let pos = compute_target_and_position(&state(0, 0, 0), fc, 3, 0, 1, 0.6);
        assert_eq!(pos.horizon, 4);
        let expected = 8.0 * 4.0 + 0.6 * 2.0 * 4.0f64.sqrt();
        assert!((pos.target - expected).abs() < 1e-12);
    }

    #[test]
    fn zero_error_means_no_safety_buffer() {
        let fc = Forecast {
            level: 10.0,
            error: 0.0,
        };
        let pos = compute_target_and_position(&state(0, 0, 0), fc, 1, 0, 1, 0.6);
        assert_eq!(pos.target, 20.0);
    }
}
