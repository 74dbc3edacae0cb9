//! Session setup and initialization

use super::Mount;
use crate::config::Config;
use crate::loader::{DataProvider, SimulatedProvider};
use crate::ui::UIConfig;
use log::info;
use std::sync::Arc;
use std::time::Duration;

/// Options resolved from the config file and the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    /// Simulated latency before the provider resolves.
    pub delay: Duration,
    /// When set, the load fails with this message instead of serving data.
    pub fail_with: Option<String>,
    pub with_background_color: bool,
}

impl SessionOptions {
    /// Command-line values take precedence over the config file.
    pub fn resolve(
        config: &Config,
        delay_ms: Option<u64>,
        fail_with: Option<String>,
        with_background: bool,
    ) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms.unwrap_or(config.load_delay_ms)),
            fail_with,
            with_background_color: with_background || config.with_background_color,
        }
    }
}

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    pub mount: Mount,
    pub ui_config: UIConfig,
    pub delay_ms: u64,
}

pub fn build_provider(options: &SessionOptions) -> Arc<dyn DataProvider> {
    match &options.fail_with {
        Some(reason) => Arc::new(SimulatedProvider::failing(options.delay, reason.clone())),
        None => Arc::new(SimulatedProvider::succeeding(options.delay)),
    }
}

/// Mounts the dashboard. Must be called from within a tokio runtime.
pub fn setup_session(options: &SessionOptions) -> SessionData {
    info!(
        "mounting dashboard (delay {:?}, failing: {})",
        options.delay,
        options.fail_with.is_some()
    );
    let mount = Mount::new(build_provider(options));

    SessionData {
        mount,
        ui_config: UIConfig::new(options.with_background_color),
        delay_ms: options.delay.as_millis() as u64,
    }
}
