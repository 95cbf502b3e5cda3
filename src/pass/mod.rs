//! Credential generation and strength scoring.

pub mod charset;
mod generate;
pub mod strength;
pub mod words;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;

pub use charset::CharClass;
pub use generate::{MAX_LENGTH, MAX_WORDS, generate, shuffle};
pub use strength::{Hints, Rating, StrengthReport, score};

/// What kind of credential to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Password,
    Passphrase,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Password => write!(f, "password"),
            Mode::Passphrase => write!(f, "passphrase"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "password" => Ok(Mode::Password),
            "passphrase" => Ok(Mode::Passphrase),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}

/// Input to [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationConfig {
    Password {
        length: usize,
        classes: BTreeSet<CharClass>,
        /// Overrides `classes` when non-empty after trimming.
        custom_charset: Option<String>,
    },
    Passphrase {
        word_count: usize,
        append_number: bool,
    },
}

impl GenerationConfig {
    pub fn mode(&self) -> Mode {
        match self {
            Self::Password { .. } => Mode::Password,
            Self::Passphrase { .. } => Mode::Passphrase,
        }
    }

    /// Size of the pool a password draws from; `None` for passphrases.
    pub fn charset_size(&self) -> Option<usize> {
        match self {
            Self::Password {
                classes,
                custom_charset,
                ..
            } => Some(charset::size(classes, custom_charset.as_deref())),
            Self::Passphrase { .. } => None,
        }
    }

    /// Scoring hints for this config, used before and after generation.
    pub fn hints(&self) -> Hints {
        match self {
            Self::Password {
                length, classes, ..
            } => Hints {
                length: *length,
                classes: classes.clone(),
                charset_size: self.charset_size(),
            },
            Self::Passphrase { .. } => Hints::default(),
        }
    }
}
