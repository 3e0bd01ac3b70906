use crate::domain::model::PlanForm;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// 提供一次提交的表單內容 (CLI 參數、TOML 計畫檔等)
pub trait PlanSource {
    fn plan_form(&self) -> Result<PlanForm>;
    fn output_format(&self) -> OutputFormat;
    fn output_path(&self) -> Option<&str>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}
