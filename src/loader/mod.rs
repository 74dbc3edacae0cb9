//! Data loading
//!
//! A mount performs exactly one load attempt. The attempt runs as a tokio task
//! that owns the [`Store`] and writes its single terminal transition.

use crate::models::AppData;
use crate::store::{Store, ViewState};
use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

pub mod error;
pub mod simulated;

pub use error::LoadError;
pub use simulated::{SimulatedProvider, sample_app_data};

#[cfg(test)]
use mockall::automock;

/// Source of dashboard data.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DataProvider: Send + Sync {
    /// Produce the payload, or the reason it could not be produced.
    async fn fetch(&self) -> Result<AppData, LoadError>;
}

/// How a load attempt ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum LoadOutcome {
    /// The store moved to `Ready`.
    Ready,
    /// The store moved to `Error`.
    Failed,
    /// Shutdown arrived before the provider resolved.
    Cancelled,
    /// The provider resolved but the result was not written.
    Discarded,
}

/// Scoped handle on the running load attempt.
///
/// Dropping the handle cancels the attempt; [`LoadHandle::cancel`] does the
/// same and waits until the task has stopped.
#[derive(Debug)]
pub struct LoadHandle {
    shutdown_sender: broadcast::Sender<()>,
    task: Option<JoinHandle<LoadOutcome>>,
}

impl LoadHandle {
    /// Starts the load attempt. Must be called from within a tokio runtime.
    pub fn spawn(provider: Arc<dyn DataProvider>, store: Store) -> Self {
        let (shutdown_sender, shutdown) = broadcast::channel(1);
        let task = tokio::spawn(run_load(provider, store, shutdown));
        Self {
            shutdown_sender,
            task: Some(task),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(|task| task.is_finished())
    }

    /// Waits for the attempt to finish on its own.
    pub async fn join(mut self) -> LoadOutcome {
        match self.task.take() {
            Some(task) => task.await.unwrap_or(LoadOutcome::Cancelled),
            None => LoadOutcome::Cancelled,
        }
    }

    /// Signals shutdown and waits for the task. Once this returns the store
    /// will not be written again.
    pub async fn cancel(mut self) -> LoadOutcome {
        let _ = self.shutdown_sender.send(());
        match self.task.take() {
            Some(task) => task.await.unwrap_or(LoadOutcome::Cancelled),
            None => LoadOutcome::Cancelled,
        }
    }
}

impl Drop for LoadHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = self.shutdown_sender.send(());
            task.abort();
        }
    }
}

async fn run_load(
    provider: Arc<dyn DataProvider>,
    store: Store,
    mut shutdown: broadcast::Receiver<()>,
) -> LoadOutcome {
    debug!("load attempt started");

    let result = tokio::select! {
        biased;
        _ = shutdown.recv() => {
            debug!("load attempt cancelled before completion");
            return LoadOutcome::Cancelled;
        }
        result = provider.fetch() => result,
    };

    if store.is_detached() {
        debug!("view already torn down, dropping load result");
        return LoadOutcome::Discarded;
    }

    let (next, outcome) = match result {
        Ok(data) => {
            info!("dashboard data loaded");
            (ViewState::Ready(Arc::new(data)), LoadOutcome::Ready)
        }
        Err(e) => {
            warn!("dashboard data failed to load: {}", e);
            (ViewState::Error(e.to_string()), LoadOutcome::Failed)
        }
    };

    match store.set_state(next) {
        Ok(()) => outcome,
        Err(e) => {
            warn!("load result rejected by store: {}", e);
            LoadOutcome::Discarded
        }
    }
}
