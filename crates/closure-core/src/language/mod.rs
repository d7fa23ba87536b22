//! Language descriptors and membership.
//!
//! A language is named by free text ("even numbers", "length 3", "binary").
//! This module turns that text into a membership predicate.

mod numeric;
mod rules;

pub use numeric::{first_number, leading_integer_parity, Parity};
pub use rules::{classify, LanguageRule, RuleKind};
