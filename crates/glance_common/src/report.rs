//! Analysis report data model
//!
//! The report is a static snapshot assembled once at startup: monitored
//! features with their health status, headline system metrics, and the
//! global recommendation list. Its only consumer-visible operation is
//! serialization to JSON for export, so the serde field names match the
//! export format exactly (camelCase keys, lowercase statuses).

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::GlanceError;

/// Health status of a monitored feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureStatus {
    Healthy,
    Warning,
    Error,
}

impl FeatureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureStatus::Healthy => "healthy",
            FeatureStatus::Warning => "warning",
            FeatureStatus::Error => "error",
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, FeatureStatus::Healthy)
    }
}

/// A monitored subsystem with its health status and recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: String,
    pub name: String,
    pub status: FeatureStatus,
    pub description: String,
    pub last_checked: String,
    pub recommendations: Vec<String>,
}

/// Headline system metrics shown on the dashboard cards
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetrics {
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub response_time: f64,
    pub uptime: f64,
}

/// Full analysis snapshot, constructed once and immutable afterwards
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub timestamp: String,
    pub features: Vec<Feature>,
    pub metrics: SystemMetrics,
    pub recommendations: Vec<String>,
}

/// Current time in the export's timestamp format (ISO 8601, millis, Z suffix)
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl AnalysisReport {
    /// Build the static sample snapshot stamped with the current time
    pub fn sample() -> Self {
        let now = iso_timestamp();
        Self {
            timestamp: now.clone(),
            features: vec![
                Feature {
                    id: "1".to_string(),
                    name: "Authentication Service".to_string(),
                    status: FeatureStatus::Healthy,
                    description: "User authentication and authorization system".to_string(),
                    last_checked: now.clone(),
                    recommendations: vec![
                        "Consider implementing 2FA for enhanced security".to_string(),
                    ],
                },
                Feature {
                    id: "2".to_string(),
                    name: "Data Processing Pipeline".to_string(),
                    status: FeatureStatus::Warning,
                    description: "Real-time data processing and analysis".to_string(),
                    last_checked: now.clone(),
                    recommendations: vec![
                        "Optimize batch processing".to_string(),
                        "Add error recovery mechanism".to_string(),
                    ],
                },
                Feature {
                    id: "3".to_string(),
                    name: "API Gateway".to_string(),
                    status: FeatureStatus::Error,
                    description: "API routing and management".to_string(),
                    last_checked: now,
                    recommendations: vec![
                        "Implement rate limiting".to_string(),
                        "Add request validation".to_string(),
                    ],
                },
            ],
            metrics: SystemMetrics {
                cpu_usage: 45.0,
                memory_usage: 68.0,
                response_time: 250.0,
                uptime: 99.9,
            },
            recommendations: vec![
                "Implement caching layer for better performance".to_string(),
                "Add monitoring for API endpoints".to_string(),
                "Update security protocols".to_string(),
            ],
        }
    }

    /// Serialize to the export format: 2-space-indented JSON
    pub fn to_json_pretty(&self) -> Result<String, GlanceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Export filename, derived from the report's own timestamp
    pub fn export_filename(&self) -> String {
        format!("system-report-{}.json", self.timestamp)
    }

    /// Write the report JSON into `dir`, returning the created path
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, GlanceError> {
        let json = self.to_json_pretty()?;
        let path = dir.join(self.export_filename());
        std::fs::write(&path, json).map_err(|source| GlanceError::ReportWrite {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "report exported");
        Ok(path)
    }

    /// Count of features not in the healthy state
    pub fn degraded_count(&self) -> usize {
        self.features.iter().filter(|f| !f.status.is_healthy()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_fixture_shape() {
        let report = AnalysisReport::sample();
        assert_eq!(report.features.len(), 3);
        assert_eq!(report.metrics.uptime, 99.9);
        assert_eq!(report.recommendations.len(), 3);
        assert_eq!(report.degraded_count(), 2);
    }

    #[test]
    fn test_export_round_trips() {
        let report = AnalysisReport::sample();
        let json = report.to_json_pretty().unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["features"].as_array().unwrap().len(), 3);
        assert_eq!(parsed["metrics"]["uptime"].as_f64().unwrap(), 99.9);

        // Export keys are camelCase, statuses lowercase
        assert!(parsed["metrics"]["cpuUsage"].is_number());
        assert_eq!(parsed["features"][0]["status"], "healthy");
        assert_eq!(parsed["features"][2]["status"], "error");
        assert!(parsed["features"][0]["lastChecked"].is_string());
    }

    #[test]
    fn test_pretty_output_uses_two_space_indent() {
        let json = AnalysisReport::sample().to_json_pretty().unwrap();
        let second_line = json.lines().nth(1).unwrap();
        assert!(second_line.starts_with("  \""));
        assert!(!second_line.starts_with("    "));
    }

    #[test]
    fn test_export_filename_pattern() {
        let report = AnalysisReport::sample();
        let name = report.export_filename();
        assert!(name.starts_with("system-report-"));
        assert!(name.ends_with(".json"));
        assert!(name.contains(&report.timestamp));
    }

    #[test]
    fn test_write_to_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let report = AnalysisReport::sample();

        let path = report.write_to(dir.path()).unwrap();
        assert!(path.exists());

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.timestamp, report.timestamp);
        assert_eq!(parsed.features.len(), 3);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&FeatureStatus::Warning).unwrap(),
            "\"warning\""
        );
        let status: FeatureStatus = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(status, FeatureStatus::Error);
    }
}
