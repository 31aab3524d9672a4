pub mod week;

pub use week::{weeks_from_value, Qty, Role, RoleState, RoleTable, WeekRecord};
