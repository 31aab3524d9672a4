// src/model/week.rs

use serde::{Deserialize, Deserializer, Serialize};

/// The four stages of the supply chain, downstream to upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Retailer,
    Wholesaler,
    Distributor,
    Factory,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Retailer,
        Role::Wholesaler,
        Role::Distributor,
        Role::Factory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Retailer => "retailer",
            Role::Wholesaler => "wholesaler",
            Role::Distributor => "distributor",
            Role::Factory => "factory",
        }
    }
}

/// A non-negative quantity with lenient decoding.
///
/// The game server occasionally sends garbage (negative numbers, floats,
/// strings, null). Per the API contract we must never reject a request over
/// it, so anything that does not decode as a non-negative integer becomes 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Qty(pub u32);

impl Qty {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for Qty {
    fn from(value: u32) -> Self {
        Qty(value)
    }
}

impl<'de> Deserialize<'de> for Qty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Qty(coerce_qty(&value)))
    }
}

fn coerce_qty(value: &serde_json::Value) -> u32 {
    match value {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.clamp(0, u32::MAX as i64) as u32
            } else if let Some(f) = n.as_f64() {
                if f <= 0.0 {
                    0
                } else {
                    f.min(u32::MAX as f64).floor() as u32
                }
            } else {
                0
            }
        }
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(|i| i.clamp(0, u32::MAX as i64) as u32)
            .unwrap_or(0),
        _ => 0,
    }
}

/// One value per supply chain role.
///
/// Keeps role lookup in the type system instead of stringly-keyed maps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct RoleTable<T> {
    pub retailer: T,
    pub wholesaler: T,
    pub distributor: T,
    pub factory: T,
}

impl<T> RoleTable<T> {
    pub fn get(&self, role: Role) -> &T {
        match role {
            Role::Retailer => &self.retailer,
            Role::Wholesaler => &self.wholesaler,
            Role::Distributor => &self.distributor,
            Role::Factory => &self.factory,
        }
    }

    pub fn get_mut(&mut self, role: Role) -> &mut T {
        match role {
            Role::Retailer => &mut self.retailer,
            Role::Wholesaler => &mut self.wholesaler,
            Role::Distributor => &mut self.distributor,
            Role::Factory => &mut self.factory,
        }
    }

    /// Builds a table by evaluating `f` once per role.
    pub fn from_fn(mut f: impl FnMut(Role) -> T) -> Self {
        Self {
            retailer: f(Role::Retailer),
            wholesaler: f(Role::Wholesaler),
            distributor: f(Role::Distributor),
            factory: f(Role::Factory),
        }
    }
}

/// What one role can see about itself in one week. All figures are counts of
/// units at the start of / during that week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleState {
    pub inventory: Qty,
    pub backlog: Qty,
    /// Demand received this week: orders from the downstream stage, or
    /// external customer orders for the retailer.
    pub incoming_orders: Qty,
    /// Units that arrived from upstream this week.
    pub arriving_shipments: Qty,
    /// External customer demand, when the feed exposes it separately from
    /// `incoming_orders` (retailer only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_orders: Option<Qty>,
}

/// One snapshot in the growing game history. Appended once per elapsed week
/// by the game server and never mutated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekRecord {
    #[serde(alias = "week_number")]
    pub week: Qty,
    pub roles: RoleTable<RoleState>,
    /// Orders each role placed that week: our own past decisions, fed back
    /// to us as history. `None` means the role has not ordered yet.
    #[serde(alias = "orders_placed")]
    pub orders: RoleTable<Option<Qty>>,
}

impl WeekRecord {
    pub fn state(&self, role: Role) -> &RoleState {
        self.roles.get(role)
    }

    /// The order the role placed that week, if any.
    pub fn order_placed(&self, role: Role) -> Option<u32> {
        self.orders.get(role).map(Qty::get)
    }
}

/// Decodes a history out of a decision-request body or a recorded game
/// file. Accepts either `{"weeks": [...]}` or a bare array; anything else
/// is an empty history. Entries that fail to decode (wrong shape, not an
/// object) degrade to an all-zero week rather than poisoning the rest.
pub fn weeks_from_value(value: &serde_json::Value) -> Vec<WeekRecord> {
    let weeks = match value {
        serde_json::Value::Array(weeks) => weeks.as_slice(),
        serde_json::Value::Object(_) => match value.get("weeks").and_then(|v| v.as_array()) {
            Some(weeks) => weeks.as_slice(),
            None => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    weeks
        .iter()
        .map(|entry| serde_json::from_value(entry.clone()).unwrap_or_default())
        .collect()
}
