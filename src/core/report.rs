use crate::domain::model::{PlanSummary, PlotDimensions};
use crate::domain::ports::OutputFormat;
use crate::utils::error::{PlannerError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 表格中的一列 (已格式化為顯示字串)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomRowView {
    #[serde(rename = "no")]
    pub number: usize,
    #[serde(rename = "type")]
    pub room_type: String,
    pub width: String,
    pub length: String,
    pub area: String,
}

#[derive(Serialize)]
struct PlanDocument<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    summary: &'a PlanSummary,
}

pub fn rows(summary: &PlanSummary) -> Vec<RoomRowView> {
    summary
        .rooms
        .iter()
        .map(|room| RoomRowView {
            number: room.index,
            room_type: room.spec.room_type.label().to_string(),
            width: room.spec.width.to_string(),
            length: room.spec.length.to_string(),
            area: format!("{:.2}", room.area),
        })
        .collect()
}

pub fn render(summary: &PlanSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(summary)),
        OutputFormat::Csv => render_csv(summary),
        OutputFormat::Json => render_json(summary),
    }
}

pub fn render_text(summary: &PlanSummary) -> String {
    let PlotDimensions {
        width,
        length,
        unit,
    } = &summary.plot;

    let headers = [
        "No.".to_string(),
        "Type".to_string(),
        "Width".to_string(),
        "Length".to_string(),
        format!("Area ({}²)", unit),
    ];
    let body: Vec<[String; 5]> = rows(summary)
        .into_iter()
        .map(|r| [r.number.to_string(), r.room_type, r.width, r.length, r.area])
        .collect();

    let mut widths = headers.clone().map(|h| h.chars().count());
    for row in &body {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[String; 5]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| {
                let pad = w - cell.chars().count();
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![
        "Details of Plan".to_string(),
        format!("Plot Size: {} x {} {}", width, length, unit),
        String::new(),
        format_row(&headers),
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    ];
    lines.extend(body.iter().map(format_row));
    lines.push(String::new());
    lines.push(format!("Total Area: {} {}²", summary.total_area, unit));
    lines.push(format!("Remaining: {:.2} {}²", summary.remaining_area, unit));

    lines.join("\n")
}

pub fn render_csv(summary: &PlanSummary) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows(summary) {
        writer.serialize(row)?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| PlannerError::IoError(e.into_error()))?;

    String::from_utf8(data).map_err(|e| PlannerError::ConfigError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

pub fn render_json(summary: &PlanSummary) -> Result<String> {
    render_json_at(summary, Utc::now())
}

pub fn render_json_at(summary: &PlanSummary, generated_at: DateTime<Utc>) -> Result<String> {
    let document = PlanDocument {
        generated_at,
        summary,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
