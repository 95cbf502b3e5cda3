//! Character classes and the character pool for password generation.

use std::collections::BTreeSet;

use serde::Serialize;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Pool size assumed for symbols when estimating entropy from content.
///
/// Kept fixed at 20 even though [`CharClass::Symbol`] draws from 26
/// characters; entropy estimates depend on this exact value.
pub const SYMBOL_POOL_ESTIMATE: usize = 20;

/// A character class. Variant order is the fixed generation and report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [Self::Upper, Self::Lower, Self::Digit, Self::Symbol];

    pub fn alphabet(self) -> &'static str {
        match self {
            Self::Upper => UPPERCASE,
            Self::Lower => LOWERCASE,
            Self::Digit => DIGITS,
            Self::Symbol => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Upper => "Uppercase",
            Self::Lower => "Lowercase",
            Self::Digit => "Numbers",
            Self::Symbol => "Symbols",
        }
    }

    /// Pool size used by entropy estimation when the real charset is unknown.
    pub fn pool_estimate(self) -> usize {
        match self {
            Self::Upper | Self::Lower => 26,
            Self::Digit => 10,
            Self::Symbol => SYMBOL_POOL_ESTIMATE,
        }
    }

    /// Content detection, mirroring `[A-Z]`, `[a-z]`, `[0-9]` and `[^A-Za-z0-9]`.
    pub fn matches(self, c: char) -> bool {
        match self {
            Self::Upper => c.is_ascii_uppercase(),
            Self::Lower => c.is_ascii_lowercase(),
            Self::Digit => c.is_ascii_digit(),
            Self::Symbol => !c.is_ascii_alphanumeric(),
        }
    }
}

/// Build the character pool for the selected classes, in class order.
pub fn build(classes: &BTreeSet<CharClass>) -> Vec<char> {
    classes.iter().flat_map(|class| class.alphabet().chars()).collect()
}

/// Characters of a custom charset after trimming, or `None` when nothing is left.
pub fn custom(charset: Option<&str>) -> Option<Vec<char>> {
    let chars: Vec<char> = charset.map(str::trim).unwrap_or_default().chars().collect();
    (!chars.is_empty()).then_some(chars)
}

/// Size of the pool a password config actually draws from.
pub fn size(classes: &BTreeSet<CharClass>, custom_charset: Option<&str>) -> usize {
    match custom(custom_charset) {
        Some(chars) => chars.len(),
        None => classes.iter().map(|class| class.alphabet().len()).sum(),
    }
}
