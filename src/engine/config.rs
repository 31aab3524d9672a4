// src/engine/config.rs

use crate::model::{Role, RoleTable};

/// Which history field a role treats as its demand signal.
///
/// The retailer faces external customers, so feeds that expose
/// `customer_orders` separately should drive its forecast from that field;
/// everyone else forecasts the orders arriving from the stage below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemandField {
    IncomingOrders,
    /// `customer_orders` when present, `incoming_orders` otherwise.
    CustomerOrders,
}

/// Per-role tuning.
#[derive(Debug, Clone, Copy)]
pub struct RoleParams {
    /// Partial-adjustment weight toward the order-up-to target.
    /// Smaller upstream, so the factory reacts slower than the retailer and
    /// does not amplify swings it receives second-hand.
    pub beta: f64,
    pub demand_field: DemandField,
    /// When on, a role with zero backlog and on-hand stock above target
    /// orders at most its forecast for the week instead of chasing the gap.
    pub hold_when_overstocked: bool,
}

impl Default for RoleParams {
    fn default() -> Self {
        Self {
            beta: 0.5,
            demand_field: DemandField::IncomingOrders,
            hold_when_overstocked: false,
        }
    }
}

/// All engine tunables, fixed for the lifetime of the process.
///
/// Deliberately a plain immutable value handed to the engine on every call;
/// nothing here is ever mutated at runtime.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Exponential smoothing weight for the demand forecast.
    pub alpha: f64,
    /// Safety buffer multiplier on the smoothed absolute forecast error.
    pub k_safety: f64,
    /// Weeks between order reviews. The classic game reviews weekly.
    pub review_period: u32,
    /// Largest order-to-arrival delay the lead-time search will consider.
    pub max_lag: usize,
    /// Lead time assumed when history is too short to estimate one.
    pub default_lead_time: usize,
    /// Bound on week-over-week order change, as a fraction of the forecast.
    pub ramp_fraction: f64,
    /// Hard ceiling on any order, as a multiple of the order-up-to target.
    pub cap_multiplier: f64,
    /// Order returned when there is no history to reason from, and the
    /// stand-in for `last_order` on a role's first real decision.
    pub baseline_order: u32,
    pub roles: RoleTable<RoleParams>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            alpha: 0.3,
            k_safety: 0.6,
            review_period: 1,
            max_lag: 8,
            default_lead_time: 2,
            ramp_fraction: 0.30,
            cap_multiplier: 1.8,
            baseline_order: 10,
            roles: RoleTable::from_fn(|role| RoleParams {
                beta: match role {
                    Role::Retailer => 0.60,
                    Role::Wholesaler => 0.50,
                    Role::Distributor => 0.40,
                    Role::Factory => 0.35,
                },
                demand_field: match role {
                    Role::Retailer => DemandField::CustomerOrders,
                    _ => DemandField::IncomingOrders,
                },
                hold_when_overstocked: false,
            }),
        }
    }
}
