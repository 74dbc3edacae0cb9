//! Session lifecycle messages

use crate::loader::LoadOutcome;
use crate::{print_cmd_info, print_cmd_success};

/// Print session startup message
pub fn print_session_starting(mode: &str, delay_ms: u64) {
    print_cmd_info!(
        "Starting",
        "{} mode, simulated load delay {}ms",
        mode,
        delay_ms
    );
}

/// Print session shutdown message
pub fn print_session_shutdown() {
    print_cmd_info!("Shutting down", "unmounting dashboard");
}

/// Print session exit message
pub fn print_session_exit_success(outcome: LoadOutcome) {
    print_cmd_success!("Dashboard unmounted", "load {}", outcome);
}
