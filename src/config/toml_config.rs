use crate::domain::model::{PlanForm, RoomRow, RoomType};
use crate::domain::ports::{OutputFormat, PlanSource};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_UNIT: &str = "m";

/// TOML 計畫檔
///
/// ```toml
/// [plot]
/// width = 10
/// length = 10
/// unit = "m"
///
/// [[rooms]]
/// type = "Hall"
/// width = 4
/// length = 5
///
/// [output]
/// format = "csv"
/// path = "plan.csv"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanFile {
    #[serde(default)]
    pub plot: PlotSection,
    #[serde(default)]
    pub rooms: Vec<RoomEntry>,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlotSection {
    pub width: Option<NumberField>,
    pub length: Option<NumberField>,
    pub unit: Option<String>,
    pub room_count: Option<NumberField>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomEntry {
    #[serde(rename = "type", default)]
    pub room_type: RoomType,
    pub width: Option<NumberField>,
    pub length: Option<NumberField>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
    pub path: Option<String>,
}

/// 數字欄位可寫成 TOML 數字或字串，字串與表單輸入走相同的解析規則
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberField {
    Number(f64),
    Text(String),
}

impl NumberField {
    pub fn to_text(&self) -> String {
        match self {
            NumberField::Number(n) => n.to_string(),
            NumberField::Text(s) => s.clone(),
        }
    }
}

fn field_text(field: &Option<NumberField>) -> String {
    field.as_ref().map(NumberField::to_text).unwrap_or_default()
}

impl PlanFile {
    /// 從 TOML 檔案載入計畫
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析計畫
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn unit(&self) -> &str {
        self.plot.unit.as_deref().unwrap_or(DEFAULT_UNIT)
    }

    /// 轉成表單；未指定房間數時以房間列數為準
    pub fn to_form(&self) -> PlanForm {
        let rows: Vec<RoomRow> = self
            .rooms
            .iter()
            .map(|room| RoomRow::new(room.room_type, field_text(&room.width), field_text(&room.length)))
            .collect();

        let room_count = match &self.plot.room_count {
            Some(count) => count.to_text(),
            None => rows.len().to_string(),
        };

        PlanForm {
            plot_width: field_text(&self.plot.width),
            plot_length: field_text(&self.plot.length),
            unit: self.unit().to_string(),
            room_count,
            rows,
        }
    }
}

impl PlanSource for PlanFile {
    fn plan_form(&self) -> Result<PlanForm> {
        Ok(self.to_form())
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }
}

impl Validate for PlanFile {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string("plot.unit", self.unit())?;

        if let Some(path) = &self.output.path {
            crate::utils::validation::validate_path("output.path", path)?;
        }

        Ok(())
    }
}
