use thiserror::Error;

/// 單次提交的驗證錯誤，每次只回報第一個遇到的錯誤。
///
/// Room indices are 1-based, matching the numbering shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("Please enter valid plot dimensions.")]
    InvalidPlotDimensions,

    #[error("Please enter a valid number of rooms (1-20).")]
    InvalidRoomCount,

    #[error("Please enter valid dimensions for Room {0}.")]
    InvalidRoomDimensions(usize),

    #[error("Room {0} dimensions exceed plot size.")]
    RoomExceedsPlot(usize),

    #[error("Total area of all rooms exceeds plot area.")]
    TotalAreaExceedsPlot,
}

impl PlanError {
    /// The offending room, when the error refers to one.
    pub fn room_index(&self) -> Option<usize> {
        match self {
            PlanError::InvalidRoomDimensions(i) | PlanError::RoomExceedsPlot(i) => Some(*i),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Room {index} does not exist")]
    RoomNotFound { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PlannerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlannerError::Plan(_) | PlannerError::RoomNotFound { .. } => ErrorCategory::Validation,
            PlannerError::IoError(_) => ErrorCategory::Io,
            PlannerError::CsvError(_) | PlannerError::SerializationError(_) => {
                ErrorCategory::Serialization
            }
            PlannerError::TomlError(_)
            | PlannerError::ConfigError { .. }
            | PlannerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io | ErrorCategory::Serialization => ErrorSeverity::Critical,
        }
    }

    /// 出錯的房間編號 (僅限計畫驗證錯誤)
    pub fn room_index(&self) -> Option<usize> {
        match self {
            PlannerError::Plan(e) => e.room_index(),
            _ => None,
        }
    }

    /// 給使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PlannerError::Plan(e) => e.to_string(),
            PlannerError::IoError(e) => format!("Could not read or write a file: {}", e),
            PlannerError::TomlError(e) => format!("The plan file is not valid TOML: {}", e),
            PlannerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PlannerError::Plan(PlanError::InvalidPlotDimensions) => {
                "Plot width and length must be numbers greater than zero"
            }
            PlannerError::Plan(PlanError::InvalidRoomCount) => {
                "Use a whole number of rooms between 1 and 20"
            }
            PlannerError::Plan(PlanError::InvalidRoomDimensions(_)) => {
                "Room width and length must be numbers greater than zero"
            }
            PlannerError::Plan(PlanError::RoomExceedsPlot(_)) => {
                "Make the room narrower or shorter than the plot, or enlarge the plot"
            }
            PlannerError::Plan(PlanError::TotalAreaExceedsPlot) => {
                "Remove a room or shrink some rooms so they fit in the plot area"
            }
            PlannerError::RoomNotFound { .. } => "Set the room count first, then edit its rooms",
            PlannerError::TomlError(_) => "Check the plan file syntax against the documented layout",
            PlannerError::ConfigError { .. } | PlannerError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted options"
            }
            PlannerError::IoError(_) => "Check that the path exists and is writable",
            PlannerError::CsvError(_) | PlannerError::SerializationError(_) => {
                "Try another output format"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
