// src/engine/policy.rs

use crate::engine::config::{EngineConfig, RoleParams};
use crate::engine::forecast::Forecast;
use crate::engine::target::Position;

/// Deterministic half-up rounding with a floor of zero.
pub fn round_half_up(x: f64) -> u32 {
    if x <= 0.0 {
        0
    } else {
        (x + 0.5).floor().min(u32::MAX as f64) as u32
    }
}

/// Turns the target/position gap into a bounded order quantity.
///
/// Three damping stages, in order:
/// 1. partial adjustment: move only a beta-fraction of the way from the
///    last order toward closing the gap;
/// 2. ramp: the order may move at most `ramp_fraction` of the forecast
///    (never less than 1 unit) away from the last order in one week;
/// 3. hard cap at `cap_multiplier` times the target, so a target spike
///    cannot launch a runaway order.
///
/// `last_order` is `None` on a role's very first decision; the baseline
/// order stands in so the ramp does not pin the first order near zero.
pub fn decide_order(
    position: &Position,
    forecast: Forecast,
    last_order: Option<u32>,
    backlog: u32,
    params: &RoleParams,
    config: &EngineConfig,
) -> u32 {
    let last = last_order.unwrap_or(config.baseline_order) as f64;

    let gap = position.target - position.position as f64;
    let raw = params.beta * gap + (1.0 - params.beta) * last;

    let ramp = round_half_up(config.ramp_fraction * forecast.level.max(1.0)).max(1) as f64;
    let ramped = raw.clamp(last - ramp, last + ramp);

    let capped = ramped.min(config.cap_multiplier * position.target);

    let mut order = round_half_up(capped);

    // Optional hold-back: flush nothing extra into the chain while sitting
    // on excess stock with no backlog.
    if params.hold_when_overstocked && backlog == 0 && position.on_hand as f64 > position.target {
        order = order.min(round_half_up(forecast.level));
    }

    order
}
