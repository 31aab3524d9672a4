// src/engine/lead_time.rs

use crate::model::{Role, WeekRecord};

/// Infers the effective order-to-arrival delay for a role.
///
/// The game never tells us the transit delay, so we look for the lag at
/// which our own past orders line up best with the shipments we later
/// received: score(L) = sum over t of orders[t - L] * arrivals[t]. Candidate
/// lags run from 1 to `min(max_lag, len - 1)`; the scan is ascending and
/// only a strictly better score replaces the incumbent, so ties resolve to
/// the smallest lag. This is a best-effort heuristic, not ground truth.
///
/// Histories too short to score any candidate fall back to
/// `default_lead_time`. The result is always at least 1.
pub fn estimate_lead_time(
    history: &[WeekRecord],
    role: Role,
    max_lag: usize,
    default_lead_time: usize,
) -> usize {
    let n = history.len();
    let upper = max_lag.min(n.saturating_sub(1));
    if upper == 0 {
        return default_lead_time.max(1);
    }

    let orders: Vec<u64> = history
        .iter()
        .map(|w| w.order_placed(role).unwrap_or(0) as u64)
        .collect();
    let arrivals: Vec<u64> = history
        .iter()
        .map(|w| w.state(role).arriving_shipments.get() as u64)
        .collect();

    let mut best_lag = 1;
    let mut best_score = 0u64;
    let mut scored_any = false;
    for lag in 1..=upper {
        let score: u64 = (lag..n).map(|t| orders[t - lag] * arrivals[t]).sum();
        if !scored_any || score > best_score {
            best_score = score;
            best_lag = lag;
            scored_any = true;
        }
    }
    best_lag.max(1)
}
