//! Ordered language rules.
//!
//! A descriptor is matched against the rules in priority order and the first
//! rule whose keyword occurs in it decides membership. A descriptor that
//! matches no rule names an unknown language, which rejects every word.
//!
//! | Priority | Keyword | Membership |
//! |----------|---------|------------|
//! | 1 | `even` | leading integer is even |
//! | 2 | `odd` | leading integer is odd |
//! | 3 | `length` | word has exactly N characters |
//! | 4 | `binary` | non-empty word over `{0, 1}` |

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::numeric::{first_number, leading_integer_parity, Parity};

lazy_static! {
    static ref BINARY_WORD: Regex = Regex::new(r"^[01]+$").unwrap();
}

/// The family of a rule, without its parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Even,
    Odd,
    Length,
    Binary,
}

impl RuleKind {
    /// Substring that selects this rule in a lower-cased descriptor.
    pub fn keyword(&self) -> &'static str {
        match self {
            RuleKind::Even => "even",
            RuleKind::Odd => "odd",
            RuleKind::Length => "length",
            RuleKind::Binary => "binary",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            RuleKind::Even => "decimal integers whose value is even",
            RuleKind::Odd => "decimal integers whose value is odd",
            RuleKind::Length => "words with exactly N characters (first number in the description)",
            RuleKind::Binary => "non-empty words over the alphabet {0, 1}",
        }
    }
}

/// A resolved language rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum LanguageRule {
    Even,
    Odd,
    /// `n` is `None` when the descriptor names no length; nothing matches then.
    Length { n: Option<usize> },
    Binary,
}

impl LanguageRule {
    /// Rule families in the order they are tried.
    pub const PRIORITY: [RuleKind; 4] = [
        RuleKind::Even,
        RuleKind::Odd,
        RuleKind::Length,
        RuleKind::Binary,
    ];

    /// Pick the rule for a descriptor, or `None` for an unknown language.
    pub fn resolve(descriptor: &str) -> Option<Self> {
        let descriptor = descriptor.to_lowercase();

        Self::PRIORITY
            .iter()
            .find(|kind| descriptor.contains(kind.keyword()))
            .map(|kind| Self::build(*kind, &descriptor))
    }

    fn build(kind: RuleKind, descriptor: &str) -> Self {
        match kind {
            RuleKind::Even => LanguageRule::Even,
            RuleKind::Odd => LanguageRule::Odd,
            RuleKind::Length => LanguageRule::Length {
                n: first_number(descriptor),
            },
            RuleKind::Binary => LanguageRule::Binary,
        }
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            LanguageRule::Even => RuleKind::Even,
            LanguageRule::Odd => RuleKind::Odd,
            LanguageRule::Length { .. } => RuleKind::Length,
            LanguageRule::Binary => RuleKind::Binary,
        }
    }

    /// Membership of `input` in the language this rule denotes.
    pub fn contains(&self, input: &str) -> bool {
        match self {
            LanguageRule::Even => leading_integer_parity(input) == Some(Parity::Even),
            LanguageRule::Odd => leading_integer_parity(input) == Some(Parity::Odd),
            LanguageRule::Length { n } => *n == Some(input.chars().count()),
            LanguageRule::Binary => BINARY_WORD.is_match(input),
        }
    }
}

/// Decide whether `input` belongs to the language named by `descriptor`.
///
/// Total over its inputs: malformed numbers and unknown descriptors are
/// ordinary rejections.
pub fn classify(descriptor: &str, input: &str) -> bool {
    let rule = LanguageRule::resolve(descriptor);
    let member = rule.map_or(false, |r| r.contains(input));

    tracing::trace!(descriptor, input, rule = ?rule, member, "Classified word");
    member
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_priority_order() {
        assert_eq!(LanguageRule::resolve("even numbers"), Some(LanguageRule::Even));
        assert_eq!(LanguageRule::resolve("odd numbers"), Some(LanguageRule::Odd));
        assert_eq!(
            LanguageRule::resolve("length 3"),
            Some(LanguageRule::Length { n: Some(3) })
        );
        assert_eq!(LanguageRule::resolve("binary"), Some(LanguageRule::Binary));

        // "even" outranks everything else
        assert_eq!(LanguageRule::resolve("odd or even"), Some(LanguageRule::Even));
        assert_eq!(LanguageRule::resolve("binary of even length 4"), Some(LanguageRule::Even));
        assert_eq!(
            LanguageRule::resolve("binary strings of length 4"),
            Some(LanguageRule::Length { n: Some(4) })
        );
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(LanguageRule::resolve("EVEN Numbers"), Some(LanguageRule::Even));
        assert_eq!(LanguageRule::resolve("Binary"), Some(LanguageRule::Binary));
    }

    #[test]
    fn test_resolve_matches_substrings() {
        // Keyword matching is by substring, so "seven" selects the even rule.
        assert_eq!(LanguageRule::resolve("multiples of seven"), Some(LanguageRule::Even));
    }

    #[test]
    fn test_unknown_language() {
        assert_eq!(LanguageRule::resolve("palindrome"), None);
        assert!(!classify("palindrome", "abc"));
        assert!(!classify("palindrome", "aba"));
        assert!(!classify("primes", "7"));
    }

    #[test]
    fn test_even_and_odd_for_integers() {
        for n in -200i64..=200 {
            let w = n.to_string();
            assert_eq!(classify("even numbers", &w), n % 2 == 0, "even on {}", n);
            assert_eq!(classify("odd numbers", &w), n % 2 != 0, "odd on {}", n);
        }
        assert!(classify("even numbers", &i64::MAX.to_string()) == (i64::MAX % 2 == 0));
        assert!(classify("odd numbers", &i64::MIN.to_string()) == (i64::MIN % 2 != 0));
    }

    #[test]
    fn test_even_and_odd_reject_non_numbers() {
        assert!(!classify("even numbers", "abc"));
        assert!(!classify("odd numbers", "abc"));
        assert!(!classify("even numbers", ""));
        assert!(!classify("odd numbers", " "));
    }

    #[test]
    fn test_length() {
        for w in ["", "a", "ab", "abc", "abcd", "0101", "   "] {
            assert_eq!(classify("length 3", w), w.chars().count() == 3, "length 3 on {:?}", w);
        }
        assert!(!classify("length 3", ""));
        assert!(classify("length 0", ""));
        assert!(classify("Length 10", "0123456789"));
        assert!(classify("length 3", "äöü"));
    }

    #[test]
    fn test_length_without_number_never_matches() {
        assert_eq!(
            LanguageRule::resolve("fixed length"),
            Some(LanguageRule::Length { n: None })
        );
        for w in ["", "a", "abc", "0000000000"] {
            assert!(!classify("fixed length", w));
        }
    }

    #[test]
    fn test_binary() {
        assert!(classify("binary", "0101"));
        assert!(classify("binary", "010101"));
        assert!(classify("binary", "0"));
        assert!(!classify("binary", "012"));
        assert!(!classify("binary", ""));
        assert!(!classify("binary", "01 01"));
        assert!(!classify("binary", "abc"));
    }

    #[test]
    fn test_rule_kind_roundtrip() {
        for kind in LanguageRule::PRIORITY {
            let rule = LanguageRule::resolve(kind.keyword()).unwrap();
            assert_eq!(rule.kind(), kind);
        }
    }
}
