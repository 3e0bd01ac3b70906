pub mod engine;
pub mod planner;
pub mod report;

pub use crate::domain::model::{PlanForm, PlanSummary, PlotDimensions, RoomSpec};
pub use crate::domain::ports::{OutputFormat, PlanSource, Storage};
pub use crate::utils::error::Result;
