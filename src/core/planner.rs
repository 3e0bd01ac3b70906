use crate::domain::model::{
    PlanForm, PlanSummary, PlotDimensions, RoomArea, RoomSpec, MAX_ROOMS, MIN_ROOMS,
};
use crate::utils::error::PlanError;

/// 驗證並計算整體面積
///
/// Checks run in a fixed order and stop at the first failure: plot
/// dimensions, room count, then each room in order (dimensions before fit),
/// and finally the aggregate area. The aggregate comparison uses the exact
/// sum; only the reported per-room and remaining areas are rounded.
pub fn compute_plan(plot: &PlotDimensions, rooms: &[RoomSpec]) -> Result<PlanSummary, PlanError> {
    if !is_positive(plot.width) || !is_positive(plot.length) || !plot.area().is_finite() {
        return Err(PlanError::InvalidPlotDimensions);
    }

    if !(MIN_ROOMS..=MAX_ROOMS).contains(&rooms.len()) {
        return Err(PlanError::InvalidRoomCount);
    }

    for (i, room) in rooms.iter().enumerate() {
        let index = i + 1;
        if !is_positive(room.width) || !is_positive(room.length) {
            return Err(PlanError::InvalidRoomDimensions(index));
        }
        check_fits_plot(plot, index, room.width, room.length)?;
    }

    summarize(plot, rooms)
}

impl PlanForm {
    /// Parse and validate the raw form, then compute the plan.
    ///
    /// Only the first `room_count` rows are read. A row missing from the
    /// form counts as a room with empty dimensions.
    pub fn evaluate(&self) -> Result<PlanSummary, PlanError> {
        let plot = match (parse_number(&self.plot_width), parse_number(&self.plot_length)) {
            (Some(width), Some(length))
                if width > 0.0 && length > 0.0 && (width * length).is_finite() =>
            {
                PlotDimensions::new(width, length, self.unit.clone())
            }
            _ => return Err(PlanError::InvalidPlotDimensions),
        };

        let count = parse_room_count(&self.room_count).ok_or(PlanError::InvalidRoomCount)?;

        let mut rooms = Vec::with_capacity(count);
        for index in 1..=count {
            let row = self
                .rows
                .get(index - 1)
                .ok_or(PlanError::InvalidRoomDimensions(index))?;

            let (width, length) = match (parse_number(&row.width), parse_number(&row.length)) {
                (Some(w), Some(l)) if w > 0.0 && l > 0.0 => (w, l),
                _ => return Err(PlanError::InvalidRoomDimensions(index)),
            };

            check_fits_plot(&plot, index, width, length)?;
            rooms.push(RoomSpec::new(row.room_type, width, length));
        }

        summarize(&plot, &rooms)
    }
}

/// Strict numeric parse of a form field; non-finite values are rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// 房間數必須是 1..=20 的整數
pub fn parse_room_count(text: &str) -> Option<usize> {
    let count: i64 = text.trim().parse().ok()?;
    usize::try_from(count)
        .ok()
        .filter(|c| (MIN_ROOMS..=MAX_ROOMS).contains(c))
}

/// 四捨五入到小數兩位；放大後溢位的值本身已無小數部分，原樣返回
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        value
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn check_fits_plot(
    plot: &PlotDimensions,
    index: usize,
    width: f64,
    length: f64,
) -> Result<(), PlanError> {
    if width > plot.width || length > plot.length {
        tracing::debug!(
            "Room {} ({} x {}) exceeds plot ({} x {})",
            index,
            width,
            length,
            plot.width,
            plot.length
        );
        return Err(PlanError::RoomExceedsPlot(index));
    }
    Ok(())
}

fn summarize(plot: &PlotDimensions, rooms: &[RoomSpec]) -> Result<PlanSummary, PlanError> {
    let total_area: f64 = rooms.iter().map(RoomSpec::area).sum();
    let plot_area = plot.area();

    // 房間數多時總和可能溢位成 inf，一律視為超出
    if !total_area.is_finite() || total_area > plot_area {
        tracing::debug!("Total room area {} exceeds plot area {}", total_area, plot_area);
        return Err(PlanError::TotalAreaExceedsPlot);
    }

    let rooms = rooms
        .iter()
        .enumerate()
        .map(|(i, spec)| RoomArea {
            index: i + 1,
            spec: *spec,
            area: round2(spec.area()),
        })
        .collect();

    Ok(PlanSummary {
        plot: plot.clone(),
        rooms,
        total_area,
        remaining_area: round2(plot_area - total_area),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{RoomRow, RoomType};

    fn plot(width: f64, length: f64) -> PlotDimensions {
        PlotDimensions::new(width, length, "m")
    }

    fn room(room_type: RoomType, width: f64, length: f64) -> RoomSpec {
        RoomSpec::new(room_type, width, length)
    }

    fn form(width: &str, length: &str, count: &str, rows: &[(&str, &str)]) -> PlanForm {
        PlanForm {
            plot_width: width.to_string(),
            plot_length: length.to_string(),
            unit: "m".to_string(),
            room_count: count.to_string(),
            rows: rows
                .iter()
                .map(|(w, l)| RoomRow::new(RoomType::Hall, *w, *l))
                .collect(),
        }
    }

    #[test]
    fn test_single_room_plan() {
        let summary = compute_plan(&plot(10.0, 10.0), &[room(RoomType::Hall, 4.0, 5.0)]).unwrap();

        assert_eq!(summary.total_area, 20.0);
        assert_eq!(summary.remaining_area, 80.0);
        assert_eq!(summary.rooms.len(), 1);
        assert_eq!(summary.rooms[0].index, 1);
        assert_eq!(summary.rooms[0].area, 20.0);
    }

    #[test]
    fn test_two_room_plan() {
        let rooms = [room(RoomType::Hall, 4.0, 5.0), room(RoomType::Bedroom, 6.0, 6.0)];
        let summary = compute_plan(&plot(10.0, 10.0), &rooms).unwrap();

        assert_eq!(summary.total_area, 56.0);
        assert_eq!(summary.remaining_area, 44.0);
        assert_eq!(summary.rooms[1].index, 2);
        assert_eq!(summary.rooms[1].spec.room_type, RoomType::Bedroom);
    }

    #[test]
    fn test_room_exceeding_plot_width() {
        let result = compute_plan(&plot(5.0, 5.0), &[room(RoomType::Hall, 6.0, 2.0)]);
        assert_eq!(result, Err(PlanError::RoomExceedsPlot(1)));
    }

    #[test]
    fn test_total_area_exceeds_plot() {
        let rooms = [room(RoomType::Hall, 8.0, 8.0), room(RoomType::Bedroom, 8.0, 8.0)];
        let result = compute_plan(&plot(10.0, 10.0), &rooms);
        assert_eq!(result, Err(PlanError::TotalAreaExceedsPlot));
    }

    #[test]
    fn test_exactly_filled_plot_is_accepted() {
        let rooms = [room(RoomType::Hall, 10.0, 5.0), room(RoomType::Kitchen, 10.0, 5.0)];
        let summary = compute_plan(&plot(10.0, 10.0), &rooms).unwrap();
        assert_eq!(summary.total_area, 100.0);
        assert_eq!(summary.remaining_area, 0.0);
    }

    #[test]
    fn test_invalid_plot_dimensions() {
        let rooms = [room(RoomType::Hall, 1.0, 1.0)];
        for (w, l) in [(0.0, 10.0), (10.0, 0.0), (-1.0, 5.0), (f64::NAN, 5.0), (5.0, f64::INFINITY)] {
            assert_eq!(
                compute_plan(&plot(w, l), &rooms),
                Err(PlanError::InvalidPlotDimensions)
            );
        }
    }

    #[test]
    fn test_room_count_bounds() {
        assert_eq!(compute_plan(&plot(10.0, 10.0), &[]), Err(PlanError::InvalidRoomCount));

        let many = vec![room(RoomType::Storage, 0.5, 0.5); 21];
        assert_eq!(compute_plan(&plot(10.0, 10.0), &many), Err(PlanError::InvalidRoomCount));

        let twenty = vec![room(RoomType::Storage, 0.5, 0.5); 20];
        let summary = compute_plan(&plot(10.0, 10.0), &twenty).unwrap();
        assert_eq!(summary.rooms.len(), 20);
        assert_eq!(summary.total_area, 5.0);
    }

    #[test]
    fn test_first_bad_room_is_reported() {
        let rooms = [
            room(RoomType::Hall, 2.0, 2.0),
            room(RoomType::Bedroom, 0.0, 2.0),
            room(RoomType::Kitchen, 50.0, 2.0),
        ];
        assert_eq!(
            compute_plan(&plot(10.0, 10.0), &rooms),
            Err(PlanError::InvalidRoomDimensions(2))
        );
    }

    #[test]
    fn test_per_room_check_precedes_aggregate_check() {
        // 總面積也超過，但單間超出應先回報
        let rooms = [room(RoomType::Hall, 9.0, 9.0), room(RoomType::Bedroom, 9.0, 11.0)];
        assert_eq!(
            compute_plan(&plot(10.0, 10.0), &rooms),
            Err(PlanError::RoomExceedsPlot(2))
        );
    }

    #[test]
    fn test_rounding_only_at_presentation() {
        let rooms = [room(RoomType::Study, 1.111, 1.111)];
        let summary = compute_plan(&plot(3.0, 3.0), &rooms).unwrap();
        assert_eq!(summary.total_area, 1.111 * 1.111);
        assert_eq!(summary.rooms[0].area, 1.23);
        assert_eq!(summary.remaining_area, 7.77);
    }

    #[test]
    fn test_compute_plan_is_pure() {
        let rooms = [room(RoomType::Hall, 3.3, 2.7), room(RoomType::Balcony, 1.5, 4.0)];
        let first = compute_plan(&plot(12.0, 8.0), &rooms).unwrap();
        let second = compute_plan(&plot(12.0, 8.0), &rooms).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("4.5"), Some(4.5));
        assert_eq!(parse_number("  7 "), Some(7.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("4abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_parse_room_count() {
        assert_eq!(parse_room_count("1"), Some(1));
        assert_eq!(parse_room_count(" 20 "), Some(20));
        for bad in ["0", "21", "-1", "3.5", "three", "", "1e1"] {
            assert_eq!(parse_room_count(bad), None, "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_form_evaluate_success() {
        let summary = form("10", "10", "2", &[("4", "5"), ("6", "6")]).evaluate().unwrap();
        assert_eq!(summary.total_area, 56.0);
        assert_eq!(summary.remaining_area, 44.0);
        assert_eq!(summary.plot.unit, "m");
    }

    #[test]
    fn test_form_plot_errors_come_first() {
        let result = form("abc", "10", "0", &[]).evaluate();
        assert_eq!(result, Err(PlanError::InvalidPlotDimensions));

        let result = form("", "10", "1", &[("1", "1")]).evaluate();
        assert_eq!(result, Err(PlanError::InvalidPlotDimensions));
    }

    #[test]
    fn test_form_room_count_errors() {
        for count in ["0", "21", "-1", "2.5", "many", ""] {
            let result = form("10", "10", count, &[("1", "1")]).evaluate();
            assert_eq!(result, Err(PlanError::InvalidRoomCount), "count {count:?}");
        }
    }

    #[test]
    fn test_form_invalid_room_dimensions() {
        let result = form("10", "10", "3", &[("1", "1"), ("x", "2"), ("0", "0")]).evaluate();
        assert_eq!(result, Err(PlanError::InvalidRoomDimensions(2)));

        let result = form("10", "10", "1", &[("-2", "2")]).evaluate();
        assert_eq!(result, Err(PlanError::InvalidRoomDimensions(1)));
    }

    #[test]
    fn test_form_missing_row_is_invalid_dimensions() {
        let result = form("10", "10", "3", &[("1", "1"), ("1", "1")]).evaluate();
        assert_eq!(result, Err(PlanError::InvalidRoomDimensions(3)));
    }

    #[test]
    fn test_form_ignores_rows_beyond_count() {
        let summary = form("10", "10", "1", &[("2", "2"), ("oops", "")]).evaluate().unwrap();
        assert_eq!(summary.rooms.len(), 1);
        assert_eq!(summary.total_area, 4.0);
    }

    #[test]
    fn test_form_room_exceeds_plot_length() {
        let result = form("10", "4", "1", &[("2", "5")]).evaluate();
        assert_eq!(result, Err(PlanError::RoomExceedsPlot(1)));
    }

    #[test]
    fn test_plot_area_overflow_is_invalid_plot() {
        let huge = plot(1e200, 1e200);
        assert_eq!(
            compute_plan(&huge, &[room(RoomType::Hall, 1e200, 1e200)]),
            Err(PlanError::InvalidPlotDimensions)
        );
        assert_eq!(
            form("1e200", "1e200", "1", &[("1", "1")]).evaluate(),
            Err(PlanError::InvalidPlotDimensions)
        );
    }

    #[test]
    fn test_total_area_overflow_exceeds_plot() {
        let side = 1e154;
        let big = plot(side, side);
        let rooms = vec![room(RoomType::Hall, side, side); 20];
        assert_eq!(compute_plan(&big, &rooms), Err(PlanError::TotalAreaExceedsPlot));
    }

    #[test]
    fn test_large_finite_plan_keeps_remaining_non_negative() {
        let side = 1e154;
        let summary = compute_plan(&plot(side, side), &[room(RoomType::Study, 1.0, 1.0)]).unwrap();
        assert!(summary.remaining_area.is_finite());
        assert!(summary.remaining_area >= 0.0);
        assert_eq!(round2(f64::MAX), f64::MAX);
    }
}
