// Module declarations
mod app;
pub mod chart;
pub mod dashboard;
pub mod error;
pub mod splash;
pub mod text;
pub mod view;
// Re-exports for external use
pub use app::{App, UIConfig, run};
