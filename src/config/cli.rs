use crate::config::toml_config::{NumberField, RoomEntry};
use crate::domain::model::RoomType;
use crate::domain::ports::Storage;
use crate::utils::error::{PlannerError, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

const ROOM_ARG_PATTERN: &str =
    r"^\s*(?P<kind>[^:=]+?)\s*[:=]\s*(?P<width>[^xX×]*?)\s*[xX×]\s*(?P<length>.*?)\s*$";

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

/// 解析 `--room` 參數，例如 `Hall:4x5`、`Dining Room=3.5 x 2`
///
/// Only the shape of the argument is checked here. The dimensions stay as
/// text so they go through the same validation as form input.
pub fn parse_room_arg(arg: &str) -> Result<RoomEntry> {
    let re = Regex::new(ROOM_ARG_PATTERN).map_err(|e| PlannerError::ConfigError {
        message: format!("room pattern failed to compile: {}", e),
    })?;

    let caps = re
        .captures(arg)
        .ok_or_else(|| PlannerError::InvalidConfigValueError {
            field: "room".to_string(),
            value: arg.to_string(),
            reason: "Expected TYPE:WIDTHxLENGTH, for example Hall:4x5".to_string(),
        })?;

    let room_type = caps["kind"].parse::<RoomType>().map_err(|e| {
        PlannerError::InvalidConfigValueError {
            field: "room".to_string(),
            value: arg.to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(RoomEntry {
        room_type,
        width: Some(NumberField::Text(caps["width"].to_string())),
        length: Some(NumberField::Text(caps["length"].to_string())),
    })
}
