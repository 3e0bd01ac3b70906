use crate::app::session::PlanSession;
use crate::core::report;
use crate::domain::model::PlanSummary;
use crate::domain::ports::{PlanSource, Storage};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct PlanReport {
    pub summary: PlanSummary,
    pub rendered: String,
    pub saved_to: Option<String>,
}

pub struct PlanEngine<P: PlanSource, S: Storage> {
    source: P,
    storage: S,
}

impl<P: PlanSource, S: Storage> PlanEngine<P, S> {
    pub fn new(source: P, storage: S) -> Self {
        Self { source, storage }
    }

    pub fn run(&self) -> Result<PlanReport> {
        // 讀取表單
        let form = self.source.plan_form()?;
        tracing::debug!(
            "Plan input: plot {:?} x {:?} {}, room count {:?}, {} rows",
            form.plot_width,
            form.plot_length,
            form.unit,
            form.room_count,
            form.rows.len()
        );

        // 驗證並計算
        let mut session = PlanSession::from_form(form);
        let summary = session.submit()?;
        tracing::info!(
            "✅ Plan accepted: {} rooms, remaining {:.2} {}",
            summary.rooms.len(),
            summary.remaining_area,
            summary.plot.unit
        );

        // 輸出
        let format = self.source.output_format();
        let rendered = report::render(&summary, format)?;

        let saved_to = match self.source.output_path() {
            Some(path) => {
                tracing::debug!("Writing {:?} plan ({} bytes) to {}", format, rendered.len(), path);
                self.storage.write_file(path, rendered.as_bytes())?;
                Some(path.to_string())
            }
            None => None,
        };

        Ok(PlanReport {
            summary,
            rendered,
            saved_to,
        })
    }
}
