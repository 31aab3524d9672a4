// src/engine/mod.rs
//
// The per-role decision engine: forecast demand, infer the lead time,
// reconstruct the pipeline, compute an order-up-to target, then emit a
// damped order. Pure and stateless: every call replays the supplied history
// from scratch, so identical histories always produce identical orders.

pub mod config;
pub mod forecast;
pub mod lead_time;
pub mod pipeline;
pub mod policy;
pub mod target;

use std::panic::{self, AssertUnwindSafe};

use crate::model::{Role, RoleTable, WeekRecord};

pub use config::{DemandField, EngineConfig, RoleParams};
pub use forecast::Forecast;
pub use target::Position;

/// Everything the engine derived for one role in one week. The transport
/// layer only needs `order`; the replay tool records the rest.
#[derive(Debug, Clone, Copy)]
pub struct RoleDecision {
    pub role: Role,
    pub forecast: Forecast,
    pub lead_time: usize,
    pub pipeline: u32,
    pub position: i64,
    pub target: f64,
    pub order: u32,
}

/// Runs the full decision chain for one role. History must be non-empty.
pub fn decide_for_role(history: &[WeekRecord], role: Role, config: &EngineConfig) -> RoleDecision {
    let params = config.roles.get(role);
    let current = &history[history.len() - 1];
    let state = current.state(role);

    let fc = forecast::forecast(history, role, config.alpha, params.demand_field);
    let lead_time = lead_time::estimate_lead_time(
        history,
        role,
        config.max_lag,
        config.default_lead_time,
    );
    let pipeline = pipeline::reconstruct_pipeline(history, role, lead_time);
    let position = target::compute_target_and_position(
        state,
        fc,
        lead_time,
        pipeline,
        config.review_period,
        config.k_safety,
    );
    let order = policy::decide_order(
        &position,
        fc,
        current.order_placed(role),
        state.backlog.get(),
        params,
        config,
    );

    RoleDecision {
        role,
        forecast: fc,
        lead_time,
        pipeline,
        position: position.position,
        target: position.target,
        order,
    }
}

/// The engine's single entry point: one order per role.
///
/// Total by construction. An empty history yields the baseline order for
/// every role, and should any role's computation panic the whole response
/// degrades to the baseline set as well: the game server treats a failed
/// reply like a bad order, so a hard failure must never escape.
pub fn decide_orders(history: &[WeekRecord], config: &EngineConfig) -> RoleTable<u32> {
    if history.is_empty() {
        return RoleTable::from_fn(|_| config.baseline_order);
    }

    let computed = panic::catch_unwind(AssertUnwindSafe(|| {
        RoleTable::from_fn(|role| decide_for_role(history, role, config).order)
    }));
    match computed {
        Ok(orders) => orders,
        Err(_) => {
            eprintln!("engine fault; falling back to baseline orders");
            RoleTable::from_fn(|_| config.baseline_order)
        }
    }
}
