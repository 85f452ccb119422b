// src/policy.rs
//! The strong password policy.
//!
//! A password is strong when it is at least [`MIN_LENGTH`] characters long,
//! mixes upper and lower case letters, contains a digit and a special
//! character, and does not contain any of the [`FORBIDDEN_WORDS`].
use serde::Serialize;
use std::fmt;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::models::StrengthReport;

/// Letters used by the generator. There is no `w` in this set.
pub static LETTERS: [char; 25] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'x', 'y', 'z',
];

/// Special characters used by the generator.
pub static SPECIAL_CHARACTERS: [char; 22] = [
    '@', '!', '#', '$', '%', '/', '&', '(', ')', '=', '?', '[', ']', '{', '}', '-', '_', '*',
    '^', '+', '<', '>',
];

/// Substrings that disqualify a password. Matching is case-sensitive.
pub static FORBIDDEN_WORDS: [&str; 7] = [
    "qwerty", "test", "123456", "hello", "world", "password", "admin",
];

/// Minimum number of UTF-16 code units in a strong password.
pub const MIN_LENGTH: usize = 10;

/// A single unmet strength criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    TooShort { length: usize, minimum: usize },
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecial,
    ForbiddenWord { word: &'static str },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::TooShort { length, minimum } => write!(
                f,
                "Password is {} characters long, at least {} are required",
                length, minimum
            ),
            Violation::MissingUppercase => write!(f, "Add at least one uppercase letter"),
            Violation::MissingLowercase => write!(f, "Add at least one lowercase letter"),
            Violation::MissingDigit => write!(f, "Add at least one digit"),
            Violation::MissingSpecial => write!(f, "Add at least one special character"),
            Violation::ForbiddenWord { word } => {
                write!(f, "Password must not contain '{}'", word)
            }
        }
    }
}

/// Returns true if the password satisfies every criterion of the policy.
pub fn is_strong(password: &str) -> bool {
    utf16_length(password) >= MIN_LENGTH
        && unit_categories(password).any(is_uppercase)
        && unit_categories(password).any(is_lowercase)
        && unit_categories(password).any(is_number)
        && unit_categories(password).any(is_special)
        && !contains_forbidden_word(password)
}

/// Length as UTF-16 code units, so a character outside the Basic
/// Multilingual Plane counts twice.
pub fn utf16_length(password: &str) -> usize {
    password.encode_utf16().count()
}

/// Lists every criterion the password fails, in policy order.
///
/// An empty list means the password is strong.
pub fn violations(password: &str) -> Vec<Violation> {
    let mut found = Vec::new();

    let length = utf16_length(password);
    if length < MIN_LENGTH {
        found.push(Violation::TooShort {
            length,
            minimum: MIN_LENGTH,
        });
    }
    if !unit_categories(password).any(is_uppercase) {
        found.push(Violation::MissingUppercase);
    }
    if !unit_categories(password).any(is_lowercase) {
        found.push(Violation::MissingLowercase);
    }
    if !unit_categories(password).any(is_number) {
        found.push(Violation::MissingDigit);
    }
    if !unit_categories(password).any(is_special) {
        found.push(Violation::MissingSpecial);
    }

    found.extend(
        FORBIDDEN_WORDS
            .iter()
            .filter(|word| password.contains(*word))
            .map(|word| Violation::ForbiddenWord { word: *word }),
    );

    found
}

/// Full analysis of a password against the policy.
pub fn analyze(password: &str) -> StrengthReport {
    let violations = violations(password);
    StrengthReport {
        strong: violations.is_empty(),
        length: utf16_length(password),
        violations,
    }
}

fn contains_forbidden_word(password: &str) -> bool {
    FORBIDDEN_WORDS.iter().any(|word| password.contains(word))
}

// General category of each UTF-16 code unit. `None` is half of a surrogate
// pair, which is neither a letter nor a number.
fn unit_categories(password: &str) -> impl Iterator<Item = Option<GeneralCategory>> + '_ {
    password
        .encode_utf16()
        .map(|unit| char::from_u32(u32::from(unit)).map(get_general_category))
}

fn is_uppercase(category: Option<GeneralCategory>) -> bool {
    matches!(category, Some(GeneralCategory::UppercaseLetter))
}

fn is_lowercase(category: Option<GeneralCategory>) -> bool {
    matches!(category, Some(GeneralCategory::LowercaseLetter))
}

fn is_number(category: Option<GeneralCategory>) -> bool {
    matches!(
        category,
        Some(
            GeneralCategory::DecimalNumber
                | GeneralCategory::LetterNumber
                | GeneralCategory::OtherNumber
        )
    )
}

// Anything that is neither a letter nor a decimal digit
fn is_special(category: Option<GeneralCategory>) -> bool {
    !matches!(
        category,
        Some(
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
                | GeneralCategory::DecimalNumber
        )
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_skip_w() {
        assert_eq!(LETTERS.len(), 25);
        assert!(!LETTERS.contains(&'w'));
        assert!(LETTERS.iter().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn special_characters_are_special() {
        assert!(SPECIAL_CHARACTERS
            .iter()
            .all(|c| is_special(Some(get_general_category(*c)))));
    }

    #[test]
    fn surrogate_halves_are_special_only() {
        let halves: Vec<_> = unit_categories("😀").collect();
        assert_eq!(halves, vec![None, None]);
        assert!(halves.iter().all(|c| is_special(*c)));
        assert!(!halves.iter().any(|c| is_uppercase(*c) || is_lowercase(*c) || is_number(*c)));
    }

    #[test]
    fn other_numbers_are_digits_and_special() {
        // Superscript two (No) and roman numeral twelve (Nl)
        for c in ['²', 'Ⅻ'] {
            let category = Some(get_general_category(c));
            assert!(is_number(category));
            assert!(is_special(category));
        }
        assert!(!is_special(Some(get_general_category('٣'))));
    }

    #[test]
    fn empty_password_fails_everything_but_forbidden_words() {
        assert_eq!(
            violations(""),
            vec![
                Violation::TooShort {
                    length: 0,
                    minimum: MIN_LENGTH
                },
                Violation::MissingUppercase,
                Violation::MissingLowercase,
                Violation::MissingDigit,
                Violation::MissingSpecial,
            ]
        );
        assert!(!is_strong(""));
    }

    #[test]
    fn every_forbidden_word_is_reported() {
        let found = violations("Xhello#1world");
        assert!(found.contains(&Violation::ForbiddenWord { word: "hello" }));
        assert!(found.contains(&Violation::ForbiddenWord { word: "world" }));
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn violation_messages() {
        assert_eq!(
            Violation::ForbiddenWord { word: "admin" }.to_string(),
            "Password must not contain 'admin'"
        );
        assert_eq!(
            Violation::TooShort {
                length: 4,
                minimum: 10
            }
            .to_string(),
            "Password is 4 characters long, at least 10 are required"
        );
    }

    #[test]
    fn analyze_counts_utf16_units() {
        let report = analyze("Äbc1#defgh");
        assert_eq!(report.length, 10);
        assert!(report.strong);

        // Seven code points, ten UTF-16 units
        let report = analyze("Aa1#😀😀😀");
        assert_eq!(report.length, 10);
        assert!(report.strong);
    }
}
