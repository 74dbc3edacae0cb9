//! Dashboard mount
//!
//! A mount ties one store subscription to one load attempt. Unmounting
//! cancels the attempt before the subscription goes away, so nothing is
//! written to a view that no longer exists.

use crate::loader::{DataProvider, LoadHandle, LoadOutcome};
use crate::store::{StateSubscription, Store};
use log::debug;
use std::sync::Arc;

#[derive(Debug)]
pub struct Mount {
    subscription: StateSubscription,
    load: LoadHandle,
}

impl Mount {
    /// Creates a fresh store in `Loading` and starts its single load attempt.
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        let store = Store::new();
        // Subscribe first so the store is never observed as detached
        let subscription = store.subscribe();
        let load = LoadHandle::spawn(provider, store);
        debug!("dashboard mounted");
        Self { subscription, load }
    }

    pub fn subscription(&self) -> &StateSubscription {
        &self.subscription
    }

    pub fn subscription_mut(&mut self) -> &mut StateSubscription {
        &mut self.subscription
    }

    /// Cancels a pending load, waits for it to stop and then releases the
    /// subscription.
    pub async fn unmount(self) -> LoadOutcome {
        let Self { subscription, load } = self;
        let outcome = load.cancel().await;
        drop(subscription);
        debug!("dashboard unmounted, load {}", outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::SimulatedProvider;
    use crate::store::ViewState;
    use crate::ui::text::render_text;
    use crate::ui::view::build;
    use std::time::Duration;

    const DELAY: Duration = Duration::from_millis(1500);

    #[tokio::test(start_paused = true)]
    async fn test_successful_load_renders_dashboard() {
        let mut mount = Mount::new(Arc::new(SimulatedProvider::succeeding(DELAY)));

        let initial = render_text(&build(&mount.subscription().current()));
        assert_eq!(
            initial,
            "[loading] Loading AI-Powered Finance Management System...\n"
        );

        let next = mount.subscription_mut().changed().await.unwrap();
        let text = render_text(&build(&next));
        assert!(text.contains("Total Items: 1,250"));
        assert!(text.contains("Active Users: 892"));
        assert!(text.contains("Growth Rate: 23.5%"));
        assert!(text.contains("Efficiency: 94.2%"));
        assert!(text.contains("Monthly Performance Metrics"));
        assert!(!text.contains("[loading]"));

        assert_eq!(mount.unmount().await, LoadOutcome::Ready);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_load_renders_error_only() {
        let provider = SimulatedProvider::failing(DELAY, "network down");
        let mut mount = Mount::new(Arc::new(provider));

        let next = mount.subscription_mut().changed().await.unwrap();
        assert_eq!(next, ViewState::Error("network down".to_string()));

        let text = render_text(&build(&next));
        assert!(text.contains("network down"));
        assert!(!text.contains("Total Items"));

        assert_eq!(mount.unmount().await, LoadOutcome::Failed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_state_settles_once() {
        let mut mount = Mount::new(Arc::new(SimulatedProvider::succeeding(DELAY)));

        assert!(mount.subscription_mut().changed().await.is_some());
        // The load task has dropped the store, no further change can arrive
        assert_eq!(mount.subscription_mut().changed().await, None);
        assert!(matches!(mount.subscription().current(), ViewState::Ready(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_before_resolution_cancels() {
        let mount = Mount::new(Arc::new(SimulatedProvider::succeeding(DELAY)));
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert_eq!(mount.unmount().await, LoadOutcome::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_mount_loads_independently() {
        let first = Mount::new(Arc::new(SimulatedProvider::failing(DELAY, "boom")));
        let first_outcome = first.unmount().await;
        assert_eq!(first_outcome, LoadOutcome::Cancelled);

        // A new mount starts from Loading again
        let mut second = Mount::new(Arc::new(SimulatedProvider::succeeding(DELAY)));
        assert_eq!(second.subscription().current(), ViewState::Loading);
        let next = second.subscription_mut().changed().await.unwrap();
        assert!(matches!(next, ViewState::Ready(_)));
    }
}
