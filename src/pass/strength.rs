//! Strength scoring.
//!
//! A score is a length score (0 to 3) plus the number of character classes
//! present (0 to 4), capped at [`MAX_SCORE`]. Entropy is a display heuristic,
//! `length * log2(pool)`, never a security bound.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::CharClass;

pub const MAX_SCORE: f64 = 7.0;

/// Strength summary of a credential or of the settings that would produce one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    pub score: f64,
    pub length_score: f64,
    pub variety_count: usize,
    pub entropy_bits: f64,
    pub present_classes: Vec<CharClass>,
    /// Built from settings alone; no credential was inspected.
    pub estimated: bool,
}

/// What the host knows about a credential besides its content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hints {
    pub length: usize,
    pub classes: BTreeSet<CharClass>,
    /// Pool size used at generation time, when known.
    pub charset_size: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rating {
    Weak,
    Medium,
    Strong,
}

impl Rating {
    pub fn from_score(score: f64) -> Self {
        if score <= 2.5 {
            Rating::Weak
        } else if score <= 5.0 {
            Rating::Medium
        } else {
            Rating::Strong
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Weak => write!(f, "Weak"),
            Rating::Medium => write!(f, "Medium"),
            Rating::Strong => write!(f, "Strong"),
        }
    }
}

pub fn length_score(len: usize) -> f64 {
    match len {
        16.. => 3.0,
        12..=15 => 2.0,
        8..=11 => 1.0,
        6..=7 => 0.5,
        _ => 0.0,
    }
}

/// Score a credential, or the settings alone when there is none yet.
pub fn score(password: Option<&str>, hints: &Hints) -> StrengthReport {
    match password {
        Some(password) => score_from_password(password, hints.charset_size),
        None => score_from_config(hints.length, &hints.classes),
    }
}

/// Estimate from a length and selected classes. Entropy is always 0.
pub fn score_from_config(length: usize, classes: &BTreeSet<CharClass>) -> StrengthReport {
    let length_score = length_score(length);
    let variety_count = classes.len();

    StrengthReport {
        score: (length_score + variety_count as f64).min(MAX_SCORE),
        length_score,
        variety_count,
        entropy_bits: 0.0,
        present_classes: classes.iter().copied().collect(),
        estimated: true,
    }
}

/// Score actual content. `charset_size` is the generation pool when known;
/// otherwise the pool is estimated from the classes found.
pub fn score_from_password(password: &str, charset_size: Option<usize>) -> StrengthReport {
    let len = password.chars().count();
    let length_score = length_score(len);

    let present_classes: Vec<CharClass> = CharClass::ALL
        .into_iter()
        .filter(|class| password.chars().any(|c| class.matches(c)))
        .collect();
    let variety_count = present_classes.len();

    let pool = charset_size
        .filter(|&size| size > 0)
        .unwrap_or_else(|| present_classes.iter().map(|c| c.pool_estimate()).sum())
        .max(1);
    let entropy_bits = len as f64 * (pool as f64).log2();

    debug!(len, pool, variety_count, "scored credential");

    StrengthReport {
        score: (length_score + variety_count as f64).min(MAX_SCORE),
        length_score,
        variety_count,
        entropy_bits,
        present_classes,
        estimated: false,
    }
}

impl StrengthReport {
    pub fn rating(&self) -> Rating {
        Rating::from_score(self.score)
    }

    pub fn length_score_display(&self) -> String {
        format!("{:.1}", self.length_score)
    }

    pub fn variety_display(&self) -> String {
        format!("{}/4", self.variety_count)
    }

    pub fn entropy_display(&self) -> String {
        format!("{:.2} bits", self.entropy_bits)
    }

    pub fn character_types(&self) -> String {
        if self.present_classes.is_empty() {
            "None".to_string()
        } else if self.estimated {
            "Estimated".to_string()
        } else {
            self.present_classes
                .iter()
                .map(|c| c.label())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    /// Score as a fraction of [`MAX_SCORE`], for meters.
    pub fn fraction(&self) -> f64 {
        self.score / MAX_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_classes_twelve_chars() {
        let report = score_from_password("Ab3!Ab3!Ab3!", None);
        assert_eq!(report.length_score, 2.0);
        assert_eq!(report.variety_count, 4);
        assert_eq!(report.score, 6.0);
        assert_eq!(report.rating(), Rating::Strong);
        assert_eq!(report.character_types(), "Uppercase, Lowercase, Numbers, Symbols");
    }

    #[test]
    fn short_lowercase_is_weak() {
        let report = score_from_password("abcdef", None);
        assert_eq!(report.length_score, 0.5);
        assert_eq!(report.variety_count, 1);
        assert_eq!(report.score, 1.5);
        assert_eq!(report.rating(), Rating::Weak);
        assert_eq!(report.present_classes, vec![CharClass::Lower]);
    }

    #[test]
    fn length_thresholds() {
        assert_eq!(length_score(5), 0.0);
        assert_eq!(length_score(6), 0.5);
        assert_eq!(length_score(8), 1.0);
        assert_eq!(length_score(12), 2.0);
        assert_eq!(length_score(15), 2.0);
        assert_eq!(length_score(16), 3.0);
        assert_eq!(length_score(200), 3.0);
    }

    #[test]
    fn rating_boundaries() {
        assert_eq!(Rating::from_score(2.5), Rating::Weak);
        assert_eq!(Rating::from_score(3.0), Rating::Medium);
        assert_eq!(Rating::from_score(5.0), Rating::Medium);
        assert_eq!(Rating::from_score(5.5), Rating::Strong);
    }

    #[test]
    fn entropy_uses_known_charset() {
        let report = score_from_password("abcd", Some(16));
        assert_eq!(report.entropy_bits, 16.0);
        assert_eq!(report.entropy_display(), "16.00 bits");
    }

    #[test]
    fn entropy_estimates_pool_from_content() {
        // 26 + 10 + 20
        let report = score_from_password("a1!", None);
        assert!((report.entropy_bits - 3.0 * 56f64.log2()).abs() < 1e-9);

        let zero = score_from_password("a1!", Some(0));
        assert_eq!(zero.entropy_bits, report.entropy_bits);
    }

    #[test]
    fn empty_password_has_no_entropy() {
        let report = score_from_password("", None);
        assert_eq!(report.entropy_bits, 0.0);
        assert_eq!(report.score, 0.0);
        assert_eq!(report.character_types(), "None");
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        let report = score_from_password("é", None);
        assert_eq!(report.present_classes, vec![CharClass::Symbol]);
    }

    #[test]
    fn config_estimate() {
        let report = score_from_config(16, &BTreeSet::from(CharClass::ALL));
        assert_eq!(report.score, 7.0);
        assert_eq!(report.entropy_bits, 0.0);
        assert_eq!(report.character_types(), "Estimated");
        assert_eq!(report.length_score_display(), "3.0");
        assert_eq!(report.variety_display(), "4/4");

        let none = score_from_config(10, &BTreeSet::new());
        assert_eq!(none.score, 1.0);
        assert_eq!(none.character_types(), "None");
    }

    #[test]
    fn score_dispatches_on_password() {
        let hints = Hints {
            length: 6,
            classes: BTreeSet::from([CharClass::Lower]),
            charset_size: Some(26),
        };
        assert!(score(None, &hints).estimated);
        let measured = score(Some("abcdef"), &hints);
        assert!(!measured.estimated);
        assert_eq!(measured, score(Some("abcdef"), &hints));
    }
}
