//! Terminal output utilities.
//!
//! Box drawing, the strength meter, themed colours.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use crate::pass::{Rating, StrengthReport};
use crate::settings::Theme;

// ============================================================================
// Colours
// ============================================================================

const LIGHT_TEXT: Color = Color::Rgb { r: 0x22, g: 0x28, b: 0x31 };
const DARK_TEXT: Color = Color::Rgb { r: 0xEE, g: 0xEE, b: 0xEE };
const ERROR: Color = Color::Rgb { r: 0xEF, g: 0x44, b: 0x44 };

pub fn text_color(theme: Theme) -> Color {
    match theme {
        Theme::Light => LIGHT_TEXT,
        Theme::Dark => DARK_TEXT,
    }
}

pub fn rating_color(rating: Rating) -> Color {
    match rating {
        Rating::Weak => Color::Red,
        Rating::Medium => Color::Yellow,
        Rating::Strong => Color::Green,
    }
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Check if stdout is a tty; colours are skipped when piping.
pub fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(1) == 1 }
}

/// Print the credential in the theme's text colour.
pub fn print_credential(credential: &str, theme: Theme) {
    if stdout_is_tty() {
        println!("{}", credential.with(text_color(theme)));
    } else {
        println!("{credential}");
    }
    flush();
}

/// Print error message in red.
pub fn print_error(msg: &str) {
    eprintln!("{}", msg.with(ERROR));
}

// ============================================================================
// Strength Meter
// ============================================================================

pub const METER_WIDTH: usize = 28;

/// `[██████████░░░░░░░░░░] Strong`, uncoloured.
pub fn meter(report: &StrengthReport) -> String {
    let filled = ((report.fraction() * METER_WIDTH as f64).round() as usize).min(METER_WIDTH);
    format!(
        "[{}{}] {}",
        "█".repeat(filled),
        "░".repeat(METER_WIDTH - filled),
        report.rating()
    )
}

pub fn print_meter(report: &StrengthReport) {
    if stdout_is_tty() {
        println!("{}", meter(report).with(rating_color(report.rating())));
    } else {
        println!("{}", meter(report));
    }
}

// ============================================================================
// Box Drawing (60 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// Box top with optional title: ┌─ Title ─────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// Box content line: │ content          │
pub fn box_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        format!("│ {}{} │", content, " ".repeat(padding))
    } else {
        format!("│ {} │", content)
    }
}

/// Box bottom: └─────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Two-column row inside a box: label left, value right-aligned.
pub fn box_row(label: &str, value: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let used = console_width(label) + console_width(value);
    let gap = inner_width.saturating_sub(used).max(1);
    box_line(&format!("{}{}{}", label, " ".repeat(gap), value))
}

/// Strength details box lines.
pub fn details(report: &StrengthReport) -> Vec<String> {
    vec![
        box_top("Strength Details"),
        box_row("Length Score", &report.length_score_display()),
        box_row("Variety", &report.variety_display()),
        box_row("Entropy", &report.entropy_display()),
        box_row("Character Types", &report.character_types()),
        box_bottom(),
    ]
}

pub fn print_details(report: &StrengthReport) {
    for line in details(report) {
        println!("{line}");
    }
    flush();
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::strength::{score_from_config, score_from_password};
    use std::collections::BTreeSet;

    #[test]
    fn meter_fills_with_score() {
        let full = score_from_config(16, &BTreeSet::from(crate::pass::CharClass::ALL));
        assert_eq!(meter(&full), format!("[{}] Strong", "█".repeat(METER_WIDTH)));

        let empty = score_from_password("", None);
        assert_eq!(meter(&empty), format!("[{}] Weak", "░".repeat(METER_WIDTH)));
    }

    #[test]
    fn details_lines_share_width() {
        let report = score_from_password("Ab3!Ab3!Ab3!", None);
        let lines = details(&report);
        assert_eq!(lines.len(), 6);
        for line in &lines {
            assert_eq!(console_width(line), BOX_WIDTH, "{line}");
        }
        assert!(lines[3].contains("76.29 bits"));
    }

    #[test]
    fn console_width_skips_escapes() {
        assert_eq!(console_width("\x1b[31mred\x1b[0m"), 3);
    }
}
