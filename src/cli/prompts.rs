//! Centralized warning and confirmation messages for CLI output.

use std::io::Write;
use std::path::Path;

use super::quiet;
use crate::settings::Theme;
use crate::terminal;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    terminal::print_error(msg);
}

/// Ask for the password to rate, on stderr so stdout stays clean.
pub fn password_prompt() {
    if quiet::skip_prompt() {
        return;
    }
    eprint!("Password: ");
    let _ = std::io::stderr().flush();
}

fn seeded_message(seed: u64) -> String {
    format!("Seed {seed} in use: output is reproducible, do not use it as a real credential")
}

/// Warn that a fixed seed makes the credential predictable.
pub fn seeded_output(seed: u64) {
    warn(&seeded_message(seed));
}

pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Clipboard failures are shown but never abort the run.
pub fn clipboard_error(err: &str) {
    eprintln!("{err}");
}

pub fn exported(path: &Path) {
    if !quiet::enabled() {
        println!("Exported \u{2192} {}", path.display());
    }
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        println!("Settings saved \u{2192} {path}");
    }
}

pub fn theme_set(theme: Theme) {
    if !quiet::enabled() {
        println!("Theme: {theme}");
    }
}

pub fn estimate_unavailable() {
    warn("Estimates are only available in password mode");
}
