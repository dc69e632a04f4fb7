use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Directory holding every artifact the file manager produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingFolder {
    pub path: PathBuf,
    /// `true` when this call created the directory, `false` when it already existed.
    pub created: bool,
}

#[derive(Debug, Clone)]
pub struct RecordFile {
    pub file_name: String,
    pub path: PathBuf,
    pub created_at: DateTime<Local>,
}

#[derive(Debug, Clone)]
pub struct FileInfo {
    pub contents: String,
    pub size_bytes: u64,
    pub modified: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    Cancelled,
    Declined,
    NotFound(String),
    Deleted(String),
    Failed(String),
}

/// One entry of the score input. Keys are looked up best-effort, so every
/// field tolerates being absent or of an unexpected JSON type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentRecord {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub scores: Value,
}

impl StudentRecord {
    pub fn numeric_scores(&self) -> Vec<f64> {
        match &self.scores {
            Value::Array(items) => items.iter().filter_map(Value::as_f64).collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub id: String,
    pub name: String,
    #[serde(serialize_with = "serialize_average")]
    pub average: f64,
}

/// Renders a JSON scalar the way it should appear in a CSV cell.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Whole averages keep one decimal (`85.0`); others use the shortest form (`84.33`).
pub fn format_average(average: f64) -> String {
    if average.fract() == 0.0 {
        format!("{average:.1}")
    } else {
        average.to_string()
    }
}

fn serialize_average<S>(average: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_average(*average))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_scores_skip_noise() {
        let record: StudentRecord =
            serde_json::from_value(json!({"id": 1, "scores": ["x", 100, true, null, 7.5]}))
                .unwrap();
        assert_eq!(record.numeric_scores(), vec![100.0, 7.5]);
    }

    #[test]
    fn non_array_scores_are_empty() {
        let record: StudentRecord =
            serde_json::from_value(json!({"scores": "ninety"})).unwrap();
        assert!(record.numeric_scores().is_empty());
    }

    #[test]
    fn missing_keys_default_to_null() {
        let record: StudentRecord = serde_json::from_value(json!({})).unwrap();
        assert_eq!(display_value(&record.id), "");
        assert_eq!(display_value(&record.name), "");
    }

    #[test]
    fn values_render_like_csv_cells() {
        assert_eq!(display_value(&json!(3)), "3");
        assert_eq!(display_value(&json!("S-12")), "S-12");
        assert_eq!(display_value(&json!(2.5)), "2.5");
    }

    #[test]
    fn averages_keep_one_decimal_when_whole() {
        assert_eq!(format_average(85.0), "85.0");
        assert_eq!(format_average(0.0), "0.0");
        assert_eq!(format_average(84.33), "84.33");
        assert_eq!(format_average(72.5), "72.5");
    }
}
