use crate::core::planner::parse_room_count;
use crate::domain::model::{PlanForm, PlanSummary, RoomRow, RoomType};
use crate::utils::error::{PlanError, PlannerError, Result};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    AwaitingInput,
    Rendered(PlanSummary),
    Failed(PlanError),
}

/// 表單編輯狀態機
///
/// Holds the form as typed and the outcome of the last submission. Any edit
/// drops the outcome, so a summary is only ever shown for the exact input it
/// was computed from.
#[derive(Debug, Clone, Default)]
pub struct PlanSession {
    form: PlanForm,
    state: SessionState,
    default_unit: String,
}

impl PlanSession {
    pub fn new(unit: impl Into<String>) -> Self {
        Self::from_form(PlanForm::new(unit))
    }

    pub fn from_form(form: PlanForm) -> Self {
        Self {
            default_unit: form.unit.clone(),
            form,
            state: SessionState::AwaitingInput,
        }
    }

    pub fn form(&self) -> &PlanForm {
        &self.form
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn summary(&self) -> Option<&PlanSummary> {
        match &self.state {
            SessionState::Rendered(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn set_plot_width(&mut self, text: &str) {
        self.form.plot_width = text.to_string();
        self.invalidate();
    }

    pub fn set_plot_length(&mut self, text: &str) {
        self.form.plot_length = text.to_string();
        self.invalidate();
    }

    pub fn set_unit(&mut self, unit: &str) {
        self.form.unit = unit.to_string();
        self.invalidate();
    }

    /// Rebuilds the room rows as blank rows when the count is valid, and
    /// clears them otherwise. Previous row contents are not kept.
    pub fn set_room_count(&mut self, text: &str) {
        self.form.room_count = text.to_string();
        self.form.rows = match parse_room_count(text) {
            Some(count) => vec![RoomRow::default(); count],
            None => Vec::new(),
        };
        tracing::debug!("Room count set to {:?}, {} rows", text, self.form.rows.len());
        self.invalidate();
    }

    pub fn set_room_type(&mut self, index: usize, room_type: RoomType) -> Result<()> {
        self.row_mut(index)?.room_type = room_type;
        self.invalidate();
        Ok(())
    }

    pub fn set_room_width(&mut self, index: usize, text: &str) -> Result<()> {
        self.row_mut(index)?.width = text.to_string();
        self.invalidate();
        Ok(())
    }

    pub fn set_room_length(&mut self, index: usize, text: &str) -> Result<()> {
        self.row_mut(index)?.length = text.to_string();
        self.invalidate();
        Ok(())
    }

    /// 提交表單，新的結果取代之前的結果
    pub fn submit(&mut self) -> std::result::Result<PlanSummary, PlanError> {
        let outcome = self.form.evaluate();
        self.state = match &outcome {
            Ok(summary) => {
                tracing::debug!(
                    "Plan computed: {} rooms, total {}, remaining {:.2}",
                    summary.rooms.len(),
                    summary.total_area,
                    summary.remaining_area
                );
                SessionState::Rendered(summary.clone())
            }
            Err(e) => {
                tracing::debug!("Plan rejected: {}", e);
                SessionState::Failed(e.clone())
            }
        };
        outcome
    }

    /// Clears every field, all rows and the outcome. The unit returns to the
    /// one the session was created with.
    pub fn reset(&mut self) {
        self.form = PlanForm::new(self.default_unit.clone());
        self.state = SessionState::AwaitingInput;
    }

    fn row_mut(&mut self, index: usize) -> Result<&mut RoomRow> {
        index
            .checked_sub(1)
            .and_then(|i| self.form.rows.get_mut(i))
            .ok_or(PlannerError::RoomNotFound { index })
    }

    fn invalidate(&mut self) {
        self.state = SessionState::AwaitingInput;
    }
}
