use std::collections::BTreeSet;

use passgauge::Error;
use passgauge::pass::strength::{score_from_config, score_from_password};
use passgauge::pass::{
    CharClass, GenerationConfig, Hints, MAX_LENGTH, MAX_WORDS, Rating, generate, score, words,
};
use passgauge::rand::seeded;

fn every_subset() -> Vec<BTreeSet<CharClass>> {
    (1u8..16)
        .map(|mask| {
            CharClass::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, class)| class)
                .collect()
        })
        .collect()
}

#[test]
fn class_guarantee_holds_for_every_subset() {
    for classes in every_subset() {
        for length in classes.len()..classes.len() + 6 {
            let config = GenerationConfig::Password {
                length,
                classes: classes.clone(),
                custom_charset: None,
            };
            for seed in 0..20 {
                let pass = generate(&config, &mut seeded(seed)).unwrap();
                assert_eq!(pass.chars().count(), length);
                for class in &classes {
                    assert!(
                        pass.chars().any(|c| class.alphabet().contains(c)),
                        "{pass} lacks {class:?}"
                    );
                }
                for class in CharClass::ALL.iter().filter(|c| !classes.contains(*c)) {
                    assert!(!pass.chars().any(|c| class.alphabet().contains(c)));
                }
            }
        }
    }
}

#[test]
fn short_length_still_gets_every_class() {
    let config = GenerationConfig::Password {
        length: 1,
        classes: BTreeSet::from(CharClass::ALL),
        custom_charset: None,
    };
    let pass = generate(&config, &mut seeded(4)).unwrap();
    assert_eq!(pass.chars().count(), 4);
}

#[test]
fn nothing_to_draw_from() {
    let config = GenerationConfig::Password {
        length: 16,
        classes: BTreeSet::new(),
        custom_charset: None,
    };
    assert!(matches!(generate(&config, &mut seeded(1)), Err(Error::EmptyCharset)));
}

#[test]
fn passphrase_tokens_come_from_word_list() {
    for word_count in 1..8 {
        let config = GenerationConfig::Passphrase {
            word_count,
            append_number: false,
        };
        for seed in 0..20 {
            let phrase = generate(&config, &mut seeded(seed)).unwrap();
            let tokens: Vec<&str> = phrase.split('-').collect();
            assert_eq!(tokens.len(), word_count);
            assert!(tokens.iter().all(|t| words::contains(t)), "{phrase}");
        }
    }
}

#[test]
fn generated_password_scores_with_its_charset() {
    let config = GenerationConfig::Password {
        length: 16,
        classes: BTreeSet::from(CharClass::ALL),
        custom_charset: None,
    };
    let pass = generate(&config, &mut seeded(21)).unwrap();
    let report = score(Some(&pass), &config.hints());

    assert_eq!(report.length_score, 3.0);
    assert_eq!(report.variety_count, 4);
    assert_eq!(report.score, 7.0);
    assert_eq!(report.rating(), Rating::Strong);
    assert!((report.entropy_bits - 16.0 * 88f64.log2()).abs() < 1e-9);
}

#[test]
fn scoring_is_deterministic() {
    for password in ["", "abcdef", "Ab3!Ab3!Ab3!", "correct-horse-battery", "ÄÖÜ123"] {
        assert_eq!(score_from_password(password, Some(40)), score_from_password(password, Some(40)));
        assert_eq!(score_from_password(password, None), score_from_password(password, None));
    }
}

#[test]
fn estimate_before_generation() {
    let hints = Hints {
        length: 10,
        classes: BTreeSet::from([CharClass::Lower, CharClass::Digit]),
        charset_size: Some(36),
    };
    let estimate = score(None, &hints);
    assert_eq!(estimate, score_from_config(10, &hints.classes));
    assert_eq!(estimate.score, 3.0);
    assert_eq!(estimate.rating(), Rating::Medium);
    assert_eq!(estimate.entropy_bits, 0.0);
}

#[test]
fn oversized_requests_are_config_errors() {
    let password = GenerationConfig::Password {
        length: usize::MAX,
        classes: BTreeSet::from(CharClass::ALL),
        custom_charset: None,
    };
    let phrase = GenerationConfig::Passphrase {
        word_count: MAX_WORDS + 1,
        append_number: true,
    };
    for config in [password, phrase] {
        assert!(matches!(
            generate(&config, &mut seeded(1)),
            Err(Error::InvalidConfig(_))
        ));
    }

    let at_cap = GenerationConfig::Password {
        length: MAX_LENGTH,
        classes: BTreeSet::from(CharClass::ALL),
        custom_charset: None,
    };
    assert_eq!(generate(&at_cap, &mut seeded(1)).unwrap().chars().count(), MAX_LENGTH);
}
