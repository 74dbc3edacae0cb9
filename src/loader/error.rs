//! Error handling for the loader module

use crate::models::ShapeError;
use thiserror::Error;

/// A failed load attempt. The reason is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct LoadError {
    reason: String,
}

impl LoadError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<ShapeError> for LoadError {
    fn from(err: ShapeError) -> Self {
        Self::new(err.to_string())
    }
}
