//! Quiet mode for the CLI.

use std::sync::atomic::{AtomicBool, Ordering};

/// Suppresses the meter, confirmations and warnings.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if stdin is a tty (interactive).
pub fn stdin_is_tty() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// True when prompts should not be shown: quiet mode or piped stdin.
pub fn skip_prompt() -> bool {
    enabled() || !stdin_is_tty()
}
