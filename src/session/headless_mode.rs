//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::print_cmd_warn;
use crate::ui::text::render_text;
use crate::ui::view::build;
use std::error::Error;
use std::io::Write;

/// Runs the application in headless mode
///
/// Prints the text rendering of every state the view passes through. Returns
/// once the view has settled, or earlier on Ctrl+C.
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", session.delay_ms);

    let mut mount = session.mount;
    let mut stdout = std::io::stdout();

    let mut state = mount.subscription().current();
    write!(stdout, "{}", render_text(&build(&state)))?;
    stdout.flush()?;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    // Event loop: print each change until the view settles
    while !state.is_terminal() {
        tokio::select! {
            next = mount.subscription_mut().changed() => match next {
                Some(next) => {
                    state = next;
                    write!(stdout, "{}", render_text(&build(&state)))?;
                    stdout.flush()?;
                }
                None => break,
            },
            _ = &mut ctrl_c => {
                print_cmd_warn!("Interrupted", "leaving before the load resolved");
                break;
            }
        }
    }

    print_session_shutdown();
    let outcome = mount.unmount().await;
    print_session_exit_success(outcome);

    Ok(())
}
