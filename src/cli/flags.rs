use std::path::PathBuf;

use clap::Parser;

use crate::export::Format;
use crate::pass::Mode;
use crate::settings::Theme;

/// Generate a password or passphrase and rate its strength.
///
/// Unset options fall back to the saved defaults.
#[derive(Debug, Parser)]
#[command(name = "passgauge", version)]
pub struct CliFlags {
    /// Generation mode
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Password length
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// Include uppercase letters
    #[arg(long, overrides_with = "no_upper")]
    pub upper: bool,
    #[arg(long, overrides_with = "upper", hide = true)]
    pub no_upper: bool,

    /// Include lowercase letters
    #[arg(long, overrides_with = "no_lower")]
    pub lower: bool,
    #[arg(long, overrides_with = "lower", hide = true)]
    pub no_lower: bool,

    /// Include digits
    #[arg(long, overrides_with = "no_numbers")]
    pub numbers: bool,
    #[arg(long, overrides_with = "numbers", hide = true)]
    pub no_numbers: bool,

    /// Include symbols
    #[arg(long, overrides_with = "no_symbols")]
    pub symbols: bool,
    #[arg(long, overrides_with = "symbols", hide = true)]
    pub no_symbols: bool,

    /// Draw only from these characters (overrides the class options)
    #[arg(long, value_name = "CHARS")]
    pub charset: Option<String>,

    /// Passphrase word count
    #[arg(short, long, value_name = "N")]
    pub words: Option<usize>,

    /// Append a number (0-999) to passphrases
    #[arg(short, long, overrides_with = "no_append_number")]
    pub append_number: bool,
    #[arg(long, overrides_with = "append_number", hide = true)]
    pub no_append_number: bool,

    /// Show strength details
    #[arg(short, long, overrides_with = "no_details")]
    pub details: bool,
    #[arg(long, overrides_with = "details", hide = true)]
    pub no_details: bool,

    /// Estimate strength from the settings without generating
    #[arg(long, conflicts_with = "check")]
    pub estimate: bool,

    /// Rate a password read from stdin instead of generating
    #[arg(long)]
    pub check: bool,

    /// Copy the result to the clipboard
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Export the result (repeatable)
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub export: Vec<Format>,

    /// Export directory
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Set and save the display theme
    #[arg(long, value_enum, conflicts_with = "toggle_theme")]
    pub theme: Option<Theme>,

    /// Switch between light and dark theme and save it
    #[arg(long)]
    pub toggle_theme: bool,

    /// Save the effective options as new defaults
    #[arg(short, long)]
    pub save: bool,

    /// Seed for reproducible output (not for real credentials)
    #[arg(long, env = "PASSGAUGE_SEED", value_name = "N")]
    pub seed: Option<u64>,

    /// Print only the credential
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliFlags {
    pub fn upper(&self) -> Option<bool> {
        switch(self.upper, self.no_upper)
    }

    pub fn lower(&self) -> Option<bool> {
        switch(self.lower, self.no_lower)
    }

    pub fn numbers(&self) -> Option<bool> {
        switch(self.numbers, self.no_numbers)
    }

    pub fn symbols(&self) -> Option<bool> {
        switch(self.symbols, self.no_symbols)
    }

    pub fn details(&self) -> Option<bool> {
        switch(self.details, self.no_details)
    }

    pub fn append_number(&self) -> Option<bool> {
        switch(self.append_number, self.no_append_number)
    }

    /// New theme requested on the command line, relative to `current`.
    pub fn theme_change(&self, current: Theme) -> Option<Theme> {
        match (self.theme, self.toggle_theme) {
            (Some(theme), _) => Some(theme),
            (None, true) => Some(current.toggled()),
            (None, false) => None,
        }
    }
}

fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
