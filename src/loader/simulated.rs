//! Simulated data source
//!
//! Stands in for a metrics backend: waits a fixed latency, then resolves with a
//! canned outcome.

use super::{DataProvider, LoadError};
use crate::models::{AppData, ChartData, Metrics, Series};
use async_trait::async_trait;
use log::debug;
use std::time::Duration;

const SAMPLE_LABELS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
const SAMPLE_PERFORMANCE: [f64; 6] = [65.0, 78.0, 82.0, 89.0, 94.0, 98.0];

/// The fixed payload served by [`SimulatedProvider::succeeding`].
pub fn sample_app_data() -> AppData {
    let labels = SAMPLE_LABELS.iter().map(|l| l.to_string()).collect();
    let performance = Series {
        label: "Performance".to_string(),
        data: SAMPLE_PERFORMANCE.to_vec(),
        border_color: "rgba(147, 51, 234, 0.8)".to_string(),
        background_color: "rgba(147, 51, 234, 0.1)".to_string(),
        border_width: 2,
        tension: 0.4,
    };

    AppData {
        metrics: Metrics {
            total: 1250,
            active: 892,
            growth: 23.5,
            efficiency: 94.2,
        },
        chart_data: ChartData::new(labels, vec![performance])
            .expect("sample series has one sample per label"),
    }
}

/// Resolves with a preset outcome after `delay`.
#[derive(Debug, Clone)]
pub struct SimulatedProvider {
    delay: Duration,
    outcome: Result<AppData, LoadError>,
}

impl SimulatedProvider {
    /// Serves [`sample_app_data`].
    pub fn succeeding(delay: Duration) -> Self {
        Self::with_outcome(delay, Ok(sample_app_data()))
    }

    /// Fails with `reason`.
    pub fn failing(delay: Duration, reason: impl Into<String>) -> Self {
        Self::with_outcome(delay, Err(LoadError::new(reason)))
    }

    pub fn with_outcome(delay: Duration, outcome: Result<AppData, LoadError>) -> Self {
        Self { delay, outcome }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl DataProvider for SimulatedProvider {
    async fn fetch(&self) -> Result<AppData, LoadError> {
        debug!("simulating {}ms of latency", self.delay.as_millis());
        tokio::time::sleep(self.delay).await;
        self.outcome.clone()
    }
}
