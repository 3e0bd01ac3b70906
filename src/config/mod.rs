pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::{NumberField, PlanFile};
#[cfg(feature = "cli")]
use crate::domain::ports::OutputFormat;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "plot-planner")]
#[command(about = "Check a set of rooms against a plot and report their areas")]
pub struct CliConfig {
    /// TOML plan file; flags below override its values
    #[arg(long)]
    pub plan: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub plot_width: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub plot_length: Option<String>,

    /// Unit label shown in the report (default: m)
    #[arg(long)]
    pub unit: Option<String>,

    /// Defaults to the number of --room arguments
    #[arg(long, allow_hyphen_values = true)]
    pub room_count: Option<String>,

    /// Room as TYPE:WIDTHxLENGTH, repeatable (e.g. --room "Dining Room:3.5x2")
    #[arg(long = "room", value_name = "TYPE:WxL", allow_hyphen_values = true)]
    pub rooms: Vec<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also write the rendered plan to this file
    #[arg(long)]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入計畫檔 (如有)，再套用命令列覆蓋設定
    pub fn to_plan_file(&self) -> Result<PlanFile> {
        let mut plan = match &self.plan {
            Some(path) => {
                tracing::info!("📁 Loading plan from: {}", path);
                PlanFile::from_file(path)?
            }
            None => PlanFile::default(),
        };

        if let Some(width) = &self.plot_width {
            plan.plot.width = Some(NumberField::Text(width.clone()));
        }
        if let Some(length) = &self.plot_length {
            plan.plot.length = Some(NumberField::Text(length.clone()));
        }
        if let Some(unit) = &self.unit {
            plan.plot.unit = Some(unit.clone());
        }
        if !self.rooms.is_empty() {
            plan.rooms = self
                .rooms
                .iter()
                .map(|arg| cli::parse_room_arg(arg))
                .collect::<Result<Vec<_>>>()?;
            // 計畫檔的房間數對應的是被取代的房間
            plan.plot.room_count = None;
            tracing::debug!("🔧 {} rooms taken from command line", plan.rooms.len());
        }
        if let Some(count) = &self.room_count {
            plan.plot.room_count = Some(NumberField::Text(count.clone()));
        }
        if let Some(format) = self.format {
            plan.output.format = Some(format);
        }
        if let Some(output) = &self.output {
            plan.output.path = Some(output.clone());
        }

        Ok(plan)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(plan) = &self.plan {
            validate_path("plan", plan)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        if let Some(unit) = &self.unit {
            validate_non_empty_string("unit", unit)?;
        }
        Ok(())
    }
}
