//! Password and passphrase generation.

use std::collections::BTreeSet;

use tracing::debug;

use super::{CharClass, GenerationConfig, charset, words::WORD_LIST};
use crate::rand::Source;
use crate::{Error, Result};

/// Longest password, in characters, that will be generated.
pub const MAX_LENGTH: usize = 4096;
/// Most words a passphrase may hold.
pub const MAX_WORDS: usize = 1024;

/// Generate a credential for `config`, drawing from `rng`.
///
/// Class-based passwords hold at least one character of every selected
/// class. When more classes are selected than `length` allows, the result
/// is one character per class and therefore longer than `length`.
pub fn generate<R: Source + ?Sized>(config: &GenerationConfig, rng: &mut R) -> Result<String> {
    let credential = match config {
        GenerationConfig::Password {
            length,
            classes,
            custom_charset,
        } => password(*length, classes, custom_charset.as_deref(), rng)?,
        GenerationConfig::Passphrase {
            word_count,
            append_number,
        } => passphrase(*word_count, *append_number, rng)?,
    };

    debug!(
        mode = %config.mode(),
        chars = credential.chars().count(),
        "generated credential"
    );
    Ok(credential)
}

fn password<R: Source + ?Sized>(
    length: usize,
    classes: &BTreeSet<CharClass>,
    custom_charset: Option<&str>,
    rng: &mut R,
) -> Result<String> {
    if let Some(chars) = charset::custom(custom_charset) {
        check_length(length)?;
        debug!(pool = chars.len(), "drawing from custom charset");
        return Ok((0..length).map(|_| random_char(&chars, rng)).collect());
    }

    let pool = charset::build(classes);
    if pool.is_empty() {
        return Err(Error::EmptyCharset);
    }
    check_length(length)?;
    debug!(pool = pool.len(), classes = classes.len(), "drawing from classes");

    let mut chars = Vec::with_capacity(length.max(classes.len()));
    for class in classes {
        let alphabet: Vec<char> = class.alphabet().chars().collect();
        chars.push(random_char(&alphabet, rng));
    }
    while chars.len() < length {
        chars.push(random_char(&pool, rng));
    }

    shuffle(&mut chars, rng);
    Ok(chars.into_iter().collect())
}

fn passphrase<R: Source + ?Sized>(
    word_count: usize,
    append_number: bool,
    rng: &mut R,
) -> Result<String> {
    if word_count == 0 {
        return Err(Error::InvalidConfig("word count must be at least 1".into()));
    }
    if word_count > MAX_WORDS {
        return Err(Error::InvalidConfig(format!(
            "word count must be at most {MAX_WORDS}"
        )));
    }

    let mut phrase = (0..word_count)
        .map(|_| WORD_LIST[rng.below(WORD_LIST.len())])
        .collect::<Vec<_>>()
        .join("-");

    if append_number {
        phrase.push_str(&rng.below(1000).to_string());
    }
    Ok(phrase)
}

fn check_length(length: usize) -> Result<()> {
    if length == 0 {
        return Err(Error::InvalidConfig("length must be at least 1".into()));
    }
    if length > MAX_LENGTH {
        return Err(Error::InvalidConfig(format!(
            "length must be at most {MAX_LENGTH}"
        )));
    }
    Ok(())
}

#[inline]
fn random_char<R: Source + ?Sized>(chars: &[char], rng: &mut R) -> char {
    chars[rng.below(chars.len())]
}

/// Fisher-Yates shuffle.
pub fn shuffle<T, R: Source + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}
