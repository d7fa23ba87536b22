//! # closure-core
//!
//! Deterministic simulation of closure under complement.
//!
//! Given an informal description of a language L and a word w, this crate
//! reports what machines for L and for its complement would do:
//! - **Recursive**: two deciders, both halt, with opposite verdicts.
//! - **RecognitionOnly**: two recognizers, at most one of which halts.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same output
//! 2. **Total**: Every (L, w) pair classifies; only empty inputs are refused
//! 3. **No waiting**: Non-halting runs are reported as `Pending`, never awaited
//!
//! ## Example
//!
//! ```rust
//! use closure_core::{evaluate, EvaluationMode};
//!
//! let report = evaluate("even numbers", "4", EvaluationMode::Recursive).unwrap();
//! assert!(report.closure_holds());
//! println!("{}", report.narrative);
//! ```

pub mod language;
pub mod machines;
pub mod narrator;
pub mod types;

// Re-export main types at crate root
pub use language::{classify, LanguageRule, RuleKind};
pub use machines::{machines_for, Decider, Machine, Recognizer};
pub use narrator::{Narrator, HALTING_PROBLEM};
pub use types::{
    EvaluationMode, EvaluationRequest, MachineKind, MachineRun, Outcome, ParseModeError, Report,
    RunOutcome, Target,
};

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Warning shown when either half of the input is missing.
pub const MISSING_INPUT_WARNING: &str = "Please provide both L (language) and w (string).";

/// Errors that can occur during evaluation.
///
/// Both variants render the same user-facing warning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("{}", MISSING_INPUT_WARNING)]
    MissingLanguage,

    #[error("{}", MISSING_INPUT_WARNING)]
    MissingInput,
}

/// Check that both the language description and the word are present.
///
/// Only the empty string counts as missing; whitespace is a valid word.
pub fn validate(request: &EvaluationRequest) -> Result<(), EvaluationError> {
    if request.language.is_empty() {
        return Err(EvaluationError::MissingLanguage);
    }
    if request.input.is_empty() {
        return Err(EvaluationError::MissingInput);
    }
    Ok(())
}

/// Evaluate a word against a language description.
///
/// This is the main entry point. It uses the current system time for
/// `evaluated_at`; use [`evaluate_at`] for reproducible reports.
pub fn evaluate(
    language: &str,
    input: &str,
    mode: EvaluationMode,
) -> Result<Report, EvaluationError> {
    evaluate_at(language, input, mode, Utc::now())
}

/// Evaluate with an explicit timestamp.
///
/// Fully deterministic: same inputs always produce the same report.
pub fn evaluate_at(
    language: &str,
    input: &str,
    mode: EvaluationMode,
    evaluated_at: DateTime<Utc>,
) -> Result<Report, EvaluationError> {
    let request = EvaluationRequest::new(language, input, mode);
    evaluate_request_at(&request, evaluated_at)
}

/// Evaluate a prepared request with an explicit timestamp.
///
/// In recognition mode the trace records an announcement and a result line
/// for each recognizer, L first, then its complement.
pub fn evaluate_request_at(
    request: &EvaluationRequest,
    evaluated_at: DateTime<Utc>,
) -> Result<Report, EvaluationError> {
    validate(request)?;

    let narrator = Narrator::new();
    let [language_machine, complement_machine] = machines_for(request.mode);
    let mut trace = Vec::new();

    let recognition = request.mode == EvaluationMode::RecognitionOnly;

    if recognition {
        trace.push(language_machine.target().announcement().to_string());
    }
    let language_run = language_machine.run(request);
    if recognition {
        trace.push(narrator.trace_result(&language_run));
        trace.push(complement_machine.target().announcement().to_string());
    }
    let complement_run = complement_machine.run(request);
    if recognition {
        trace.push(narrator.trace_result(&complement_run));
    }

    Ok(assemble_report(request, language_run, complement_run, trace, evaluated_at))
}

/// Assemble a report from finished runs.
///
/// Used by the runtime, which performs the runs itself with delays in between.
pub fn assemble_report(
    request: &EvaluationRequest,
    language_run: MachineRun,
    complement_run: MachineRun,
    trace: Vec<String>,
    evaluated_at: DateTime<Utc>,
) -> Report {
    let narrative = Narrator::new().narrate(request, &language_run, &complement_run);
    let verdict = classify(&request.language, &request.input);

    tracing::debug!(
        mode = ?request.mode,
        verdict,
        language_run = ?language_run.outcome,
        complement_run = ?complement_run.outcome,
        "Evaluation complete"
    );

    Report {
        mode: request.mode,
        language: request.language.clone(),
        input: request.input.clone(),
        verdict,
        language_run,
        complement_run,
        trace,
        narrative,
        evaluated_at,
    }
}
