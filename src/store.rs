//! View state store
//!
//! Holds the single [`ViewState`] of a mounted dashboard and pushes every
//! accepted change to its subscribers.

use crate::models::AppData;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

/// What the dashboard currently shows.
#[derive(Debug, Clone, PartialEq, strum::Display)]
pub enum ViewState {
    /// The load attempt has not completed yet.
    Loading,
    /// The load attempt failed; the message is shown verbatim.
    Error(String),
    /// The load attempt produced data.
    Ready(Arc<AppData>),
}

impl ViewState {
    /// `Error` and `Ready` are final for a mount.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ViewState::Loading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("the view cannot return to Loading")]
    BackToLoading,
    #[error("the view already settled in {current}")]
    AlreadySettled { current: String },
}

/// Per-mount state holder. Starts in `Loading` and accepts exactly one
/// transition to a terminal state.
#[derive(Debug)]
pub struct Store {
    sender: watch::Sender<ViewState>,
}

impl Store {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(ViewState::Loading);
        Self { sender }
    }

    pub fn get_state(&self) -> ViewState {
        self.sender.borrow().clone()
    }

    /// Moves the store from `Loading` to `next`.
    ///
    /// The check and the write happen under the channel lock, so two racing
    /// callers can never both succeed.
    pub fn set_state(&self, next: ViewState) -> Result<(), TransitionError> {
        if !next.is_terminal() {
            return Err(TransitionError::BackToLoading);
        }

        let mut settled_in = None;
        self.sender.send_if_modified(|current| {
            if current.is_terminal() {
                settled_in = Some(current.to_string());
                return false;
            }
            *current = next;
            true
        });

        match settled_in {
            Some(current) => Err(TransitionError::AlreadySettled { current }),
            None => Ok(()),
        }
    }

    pub fn subscribe(&self) -> StateSubscription {
        StateSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// True when no view is subscribed any more.
    pub fn is_detached(&self) -> bool {
        self.sender.receiver_count() == 0
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only handle on a [`Store`], held by the renderer.
///
/// Keeps working after the store itself is dropped: the last accepted state
/// stays readable.
#[derive(Debug)]
pub struct StateSubscription {
    receiver: watch::Receiver<ViewState>,
}

impl StateSubscription {
    pub fn current(&self) -> ViewState {
        self.receiver.borrow().clone()
    }

    /// Returns the new state if it changed since the last call, without waiting.
    pub fn take_update(&mut self) -> Option<ViewState> {
        let state = self.receiver.borrow_and_update();
        state.has_changed().then(|| state.clone())
    }

    /// Waits for the next change. `None` once the store is gone and every
    /// change has been observed.
    pub async fn changed(&mut self) -> Option<ViewState> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::sample_app_data;

    fn ready() -> ViewState {
        ViewState::Ready(Arc::new(sample_app_data()))
    }

    #[test]
    fn test_new_store_starts_loading() {
        let store = Store::new();
        assert_eq!(store.get_state(), ViewState::Loading);
    }

    #[test]
    fn test_loading_to_ready() {
        let store = Store::new();
        store.set_state(ready()).unwrap();
        assert_eq!(store.get_state(), ready());
    }

    #[test]
    fn test_loading_to_error() {
        let store = Store::new();
        store
            .set_state(ViewState::Error("network down".to_string()))
            .unwrap();
        assert_eq!(
            store.get_state(),
            ViewState::Error("network down".to_string())
        );
    }

    #[test]
    fn test_second_transition_is_rejected() {
        let store = Store::new();
        store.set_state(ready()).unwrap();

        let err = store
            .set_state(ViewState::Error("late".to_string()))
            .unwrap_err();
        assert_eq!(
            err,
            TransitionError::AlreadySettled {
                current: "Ready".to_string()
            }
        );
        // The first transition wins
        assert_eq!(store.get_state(), ready());
    }

    #[test]
    fn test_loading_is_never_reentered() {
        let store = Store::new();
        assert_eq!(
            store.set_state(ViewState::Loading),
            Err(TransitionError::BackToLoading)
        );

        store.set_state(ViewState::Error("x".to_string())).unwrap();
        assert_eq!(
            store.set_state(ViewState::Loading),
            Err(TransitionError::BackToLoading)
        );
        assert_eq!(store.get_state(), ViewState::Error("x".to_string()));
    }

    #[test]
    fn test_subscription_sees_single_update() {
        let store = Store::new();
        let mut subscription = store.subscribe();

        assert_eq!(subscription.current(), ViewState::Loading);
        assert_eq!(subscription.take_update(), None);

        store.set_state(ready()).unwrap();
        assert_eq!(subscription.take_update(), Some(ready()));
        assert_eq!(subscription.take_update(), None);

        // Rejected transitions do not notify
        let _ = store.set_state(ViewState::Error("late".to_string()));
        assert_eq!(subscription.take_update(), None);
    }

    #[test]
    fn test_subscription_outlives_store() {
        let store = Store::new();
        let mut subscription = store.subscribe();
        store
            .set_state(ViewState::Error("network down".to_string()))
            .unwrap();
        drop(store);

        assert_eq!(
            subscription.take_update(),
            Some(ViewState::Error("network down".to_string()))
        );
        assert_eq!(
            subscription.current(),
            ViewState::Error("network down".to_string())
        );
    }

    #[tokio::test]
    async fn test_changed_returns_none_after_store_drops() {
        let store = Store::new();
        let mut subscription = store.subscribe();
        store.set_state(ready()).unwrap();
        drop(store);

        assert_eq!(subscription.changed().await, Some(ready()));
        assert_eq!(subscription.changed().await, None);
    }

    #[test]
    fn test_detached_when_no_subscribers() {
        let store = Store::new();
        assert!(store.is_detached());

        let subscription = store.subscribe();
        assert!(!store.is_detached());

        drop(subscription);
        assert!(store.is_detached());
    }
}
