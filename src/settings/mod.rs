//! Saved defaults and display preferences.

mod file;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::pass::{CharClass, GenerationConfig, Mode};

pub use file::{load_from, save_to};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mode: Mode,
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub custom_charset: String,
    pub word_count: usize,
    pub append_number: bool,
    pub theme: Theme,
    pub show_details: bool,
}

impl Settings {
    pub fn load_from_file() -> std::io::Result<Self> {
        load_from(&file::default_path())
    }

    pub fn save_to_file(&self) -> std::io::Result<()> {
        save_to(self, &file::default_path())
    }

    pub fn path() -> String {
        file::default_path().display().to_string()
    }

    /// Selected classes in generation order.
    pub fn classes(&self) -> BTreeSet<CharClass> {
        [
            (CharClass::Upper, self.uppercase),
            (CharClass::Lower, self.lowercase),
            (CharClass::Digit, self.numbers),
            (CharClass::Symbol, self.symbols),
        ]
        .into_iter()
        .filter_map(|(class, on)| on.then_some(class))
        .collect()
    }

    pub fn config(&self) -> GenerationConfig {
        match self.mode {
            Mode::Password => GenerationConfig::Password {
                length: self.length,
                classes: self.classes(),
                custom_charset: (!self.custom_charset.trim().is_empty())
                    .then(|| self.custom_charset.clone()),
            },
            Mode::Passphrase => GenerationConfig::Passphrase {
                word_count: self.word_count,
                append_number: self.append_number,
            },
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::Password,
            length: 16,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
            custom_charset: String::new(),
            word_count: 4,
            append_number: false,
            theme: Theme::Light,
            show_details: false,
        }
    }
}
