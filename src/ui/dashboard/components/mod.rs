//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod demo;
pub mod features;
pub mod footer;
pub mod header;
pub mod metrics;
pub mod performance;
