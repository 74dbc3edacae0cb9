//! Dashboard data model
//!
//! The payload produced by a load attempt. Values are immutable once built and
//! shared behind an `Arc` by the store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Headline figures shown on the metric cards.
///
/// `active <= total` and `0 <= efficiency <= 100` are conventions of the data
/// source and are not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total: u64,
    pub active: u64,
    /// Signed percentage.
    pub growth: f64,
    /// Percentage, conventionally 0 to 100.
    pub efficiency: f64,
}

/// One named numeric sequence plus its display styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub label: String,
    pub data: Vec<f64>,
    /// CSS colour string for the line, e.g. `rgba(147, 51, 234, 0.8)`.
    pub border_color: String,
    /// CSS colour string for the area under the line.
    pub background_color: String,
    pub border_width: u16,
    /// Curve tension, 0.0 for straight segments.
    pub tension: f64,
}

/// Raised when a series does not have one sample per label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("series '{series}' has {samples} samples but there are {labels} labels")]
pub struct ShapeError {
    pub series: String,
    pub samples: usize,
    pub labels: usize,
}

/// Time-series bundle: shared category labels and the series plotted against them.
///
/// Every series holds exactly `labels.len()` samples. The fields are private so
/// this can only be built through [`ChartData::new`] or deserialization, both of
/// which check the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawChartData")]
pub struct ChartData {
    labels: Vec<String>,
    datasets: Vec<Series>,
}

#[derive(Deserialize)]
struct RawChartData {
    labels: Vec<String>,
    datasets: Vec<Series>,
}

impl TryFrom<RawChartData> for ChartData {
    type Error = ShapeError;

    fn try_from(raw: RawChartData) -> Result<Self, Self::Error> {
        ChartData::new(raw.labels, raw.datasets)
    }
}

impl ChartData {
    pub fn new(labels: Vec<String>, datasets: Vec<Series>) -> Result<Self, ShapeError> {
        if let Some(bad) = datasets.iter().find(|s| s.data.len() != labels.len()) {
            return Err(ShapeError {
                series: bad.label.clone(),
                samples: bad.data.len(),
                labels: labels.len(),
            });
        }
        Ok(Self { labels, datasets })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn datasets(&self) -> &[Series] {
        &self.datasets
    }
}

/// Everything a successful load produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub metrics: Metrics,
    pub chart_data: ChartData,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(label: &str, data: Vec<f64>) -> Series {
        Series {
            label: label.to_string(),
            data,
            border_color: "rgba(147, 51, 234, 0.8)".to_string(),
            background_color: "rgba(147, 51, 234, 0.1)".to_string(),
            border_width: 2,
            tension: 0.4,
        }
    }

    fn labels(n: usize) -> Vec<String> {
        ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
            .iter()
            .take(n)
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_chart_data_accepts_matching_lengths() {
        let chart = ChartData::new(labels(3), vec![series("A", vec![1.0, 2.0, 3.0])]).unwrap();
        assert_eq!(chart.labels().len(), 3);
        assert_eq!(chart.datasets()[0].data, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_chart_data_rejects_short_series() {
        let err = ChartData::new(
            labels(6),
            vec![
                series("Good", vec![1.0; 6]),
                series("Short", vec![1.0, 2.0]),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ShapeError {
                series: "Short".to_string(),
                samples: 2,
                labels: 6,
            }
        );
        assert_eq!(
            err.to_string(),
            "series 'Short' has 2 samples but there are 6 labels"
        );
    }

    #[test]
    fn test_chart_data_allows_no_series() {
        let chart = ChartData::new(labels(2), Vec::new()).unwrap();
        assert!(chart.datasets().is_empty());
    }

    #[test]
    fn test_deserialize_uses_camel_case_field_names() {
        let json = r#"{
            "metrics": { "total": 1250, "active": 892, "growth": 23.5, "efficiency": 94.2 },
            "chartData": {
                "labels": ["Jan", "Feb"],
                "datasets": [{
                    "label": "Performance",
                    "data": [65, 78],
                    "borderColor": "rgba(147, 51, 234, 0.8)",
                    "backgroundColor": "rgba(147, 51, 234, 0.1)",
                    "borderWidth": 2,
                    "tension": 0.4
                }]
            }
        }"#;
        let data: AppData = serde_json::from_str(json).unwrap();
        assert_eq!(data.metrics.total, 1250);
        assert_eq!(data.chart_data.datasets()[0].data, vec![65.0, 78.0]);
    }

    #[test]
    fn test_deserialize_rejects_mismatched_series() {
        let json = r#"{
            "labels": ["Jan", "Feb", "Mar"],
            "datasets": [{
                "label": "Performance",
                "data": [65, 78],
                "borderColor": "red",
                "backgroundColor": "red",
                "borderWidth": 1,
                "tension": 0.0
            }]
        }"#;
        let result: Result<ChartData, _> = serde_json::from_str(json);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("series 'Performance' has 2 samples"), "{err}");
    }
}
