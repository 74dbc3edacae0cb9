//! Dashboard screen
//!
//! Split into one module per panel plus the layout that places them

pub mod components;
pub mod renderer;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::render_dashboard;
