use super::record::Completeness;
use chrono::{DateTime, Utc};
use super::timestamp::deserialize_utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    #[serde(default)]
    pub history_records: usize,
    #[serde(default)]
    pub forecast_days: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completeness: Option<Completeness>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunLogEntry {
    #[serde(deserialize_with = "deserialize_utc")]
    pub timestamp: DateTime<Utc>,
    pub success: bool,
    #[serde(default)]
    pub stats: RunStats,
    pub error: Option<String>,
}

impl RunLogEntry {
    pub fn new(stats: RunStats, success: bool, error: Option<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            success,
            stats,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_entries_with_empty_stats() {
        let json = r#"{"timestamp":"2024-01-15T07:35:00Z","success":true,"stats":{},"error":null}"#;
        let entry: RunLogEntry = serde_json::from_str(json).unwrap();
        assert!(entry.success);
        assert_eq!(entry.stats, RunStats::default());
        assert!(entry.error.is_none());
    }
}
