//! Number handling for language rules.
//!
//! Inputs are read the way a permissive integer parser reads them: leading
//! whitespace is skipped, an optional sign is allowed, and the number ends at
//! the first non-digit. Only parity is ever needed, so the digit run is never
//! converted to a machine integer and cannot overflow.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Optional whitespace and sign, then the leading digit run.
    static ref LEADING_INTEGER: Regex = Regex::new(r"^\s*[+-]?([0-9]+)").unwrap();

    /// First run of ASCII digits anywhere in a descriptor.
    static ref FIRST_DIGIT_RUN: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// Parity of a parsed integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

/// Parse the leading integer of `input` and return its parity.
///
/// Returns `None` when no digit follows the optional sign. Trailing text
/// after the digit run is ignored, so `"4abc"` reads as 4.
pub fn leading_integer_parity(input: &str) -> Option<Parity> {
    let digits = LEADING_INTEGER.captures(input)?.get(1)?.as_str();
    let last = digits.as_bytes().last()?;

    // The sign does not affect parity.
    if (last - b'0') % 2 == 0 {
        Some(Parity::Even)
    } else {
        Some(Parity::Odd)
    }
}

/// Extract the first number in a descriptor (e.g. `3` from `"length 3"`).
///
/// A digit run too large for `usize` is treated as absent.
pub fn first_number(descriptor: &str) -> Option<usize> {
    FIRST_DIGIT_RUN
        .find(descriptor)
        .and_then(|m| m.as_str().parse::<usize>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_of_plain_integers() {
        assert_eq!(leading_integer_parity("4"), Some(Parity::Even));
        assert_eq!(leading_integer_parity("7"), Some(Parity::Odd));
        assert_eq!(leading_integer_parity("0"), Some(Parity::Even));
        assert_eq!(leading_integer_parity("-3"), Some(Parity::Odd));
        assert_eq!(leading_integer_parity("+10"), Some(Parity::Even));
    }

    #[test]
    fn test_parity_ignores_trailing_text() {
        assert_eq!(leading_integer_parity("4abc"), Some(Parity::Even));
        assert_eq!(leading_integer_parity("  15 apples"), Some(Parity::Odd));
        assert_eq!(leading_integer_parity("3.9"), Some(Parity::Odd));
    }

    #[test]
    fn test_parity_of_non_numbers() {
        assert_eq!(leading_integer_parity(""), None);
        assert_eq!(leading_integer_parity("abc"), None);
        assert_eq!(leading_integer_parity("-"), None);
        assert_eq!(leading_integer_parity("a4"), None);
        assert_eq!(leading_integer_parity("- 4"), None);
    }

    #[test]
    fn test_parity_of_huge_numbers() {
        let huge = "9".repeat(200);
        assert_eq!(leading_integer_parity(&huge), Some(Parity::Odd));

        let huge_even = format!("{}8", "1".repeat(200));
        assert_eq!(leading_integer_parity(&huge_even), Some(Parity::Even));
    }

    #[test]
    fn test_first_number() {
        assert_eq!(first_number("length 3"), Some(3));
        assert_eq!(first_number("strings of length 12"), Some(12));
        assert_eq!(first_number("length 2 or 5"), Some(2));
        assert_eq!(first_number("length"), None);
        assert_eq!(first_number(&format!("length {}", "9".repeat(40))), None);
    }
}
