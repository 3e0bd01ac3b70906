pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::session::{PlanSession, SessionState};
pub use config::{cli::LocalStorage, toml_config::PlanFile};
pub use crate::core::{
    engine::{PlanEngine, PlanReport},
    planner::compute_plan,
};
pub use domain::model::{PlanForm, PlanSummary, PlotDimensions, RoomArea, RoomRow, RoomSpec, RoomType};
pub use domain::ports::OutputFormat;
pub use utils::error::{PlanError, PlannerError, Result};
