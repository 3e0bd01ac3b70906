use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_ROOMS: usize = 1;
pub const MAX_ROOMS: usize = 20;

/// 房間類型，固定的封閉集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum RoomType {
    #[default]
    Hall,
    Bedroom,
    Kitchen,
    Bathroom,
    #[serde(rename = "Dining Room")]
    DiningRoom,
    Study,
    Storage,
    Balcony,
}

impl RoomType {
    /// Selector order: the first entry is the default choice for a new row.
    pub const ALL: [RoomType; 8] = [
        RoomType::Hall,
        RoomType::Bedroom,
        RoomType::Kitchen,
        RoomType::Bathroom,
        RoomType::DiningRoom,
        RoomType::Study,
        RoomType::Storage,
        RoomType::Balcony,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Hall => "Hall",
            RoomType::Bedroom => "Bedroom",
            RoomType::Kitchen => "Kitchen",
            RoomType::Bathroom => "Bathroom",
            RoomType::DiningRoom => "Dining Room",
            RoomType::Study => "Study",
            RoomType::Storage => "Storage",
            RoomType::Balcony => "Balcony",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoomType(pub String);

impl fmt::Display for UnknownRoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = RoomType::ALL.iter().map(RoomType::label).collect();
        write!(
            f,
            "unknown room type '{}', expected one of: {}",
            self.0,
            labels.join(", ")
        )
    }
}

impl std::error::Error for UnknownRoomType {}

impl TryFrom<String> for RoomType {
    type Error = UnknownRoomType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for RoomType {
    type Err = UnknownRoomType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 不分大小寫，空白、'-'、'_' 視為相同分隔符
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        RoomType::ALL
            .iter()
            .copied()
            .find(|t| t.label().replace(' ', "").to_lowercase() == normalized)
            .ok_or_else(|| UnknownRoomType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotDimensions {
    pub width: f64,
    pub length: f64,
    pub unit: String,
}

impl PlotDimensions {
    pub fn new(width: f64, length: f64, unit: impl Into<String>) -> Self {
        Self {
            width,
            length,
            unit: unit.into(),
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.length
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub width: f64,
    pub length: f64,
}

impl RoomSpec {
    pub fn new(room_type: RoomType, width: f64, length: f64) -> Self {
        Self {
            room_type,
            width,
            length,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.length
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomArea {
    /// 1-based position in the submitted list
    pub index: usize,
    #[serde(flatten)]
    pub spec: RoomSpec,
    /// Rounded to 2 decimals.
    pub area: f64,
}

/// 計算結果，僅在一次提交內有效
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    pub plot: PlotDimensions,
    pub rooms: Vec<RoomArea>,
    /// Exact sum of room areas.
    pub total_area: f64,
    /// Plot area minus total area, rounded to 2 decimals.
    pub remaining_area: f64,
}

/// One row of the room form, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomRow {
    pub room_type: RoomType,
    pub width: String,
    pub length: String,
}

impl RoomRow {
    pub fn new(room_type: RoomType, width: impl Into<String>, length: impl Into<String>) -> Self {
        Self {
            room_type,
            width: width.into(),
            length: length.into(),
        }
    }
}

/// 表單原始輸入 (字串)，提交時才解析與驗證
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanForm {
    pub plot_width: String,
    pub plot_length: String,
    pub unit: String,
    pub room_count: String,
    pub rows: Vec<RoomRow>,
}

impl PlanForm {
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            ..Self::default()
        }
    }
}
