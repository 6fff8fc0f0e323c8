//! Plan model: items, the collection with its selection, and the cadence
//! that lays items out over the 30-day horizon.

pub mod cadence;
pub mod collection;
pub mod item;

pub use cadence::{PLAN_HORIZON_DAYS, build_plan, every_n_days, is_scheduled};
pub use collection::{PlanCollection, PlanError};
pub use item::{FormatParseError, PlanItem, PostFormat};
