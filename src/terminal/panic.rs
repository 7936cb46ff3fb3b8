//! Panic hook that gives the terminal back before the message is printed.

use super::setup::emergency_restore;
use std::panic;

/// Chain a terminal-restoring hook in front of the current panic hook.
///
/// Call before [`super::TerminalManager::new`] so a panic anywhere in the
/// session prints onto a usable terminal.
pub fn setup_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        emergency_restore();
        tracing::error!(%info, "Panic");
        previous(info);
    }));
}
