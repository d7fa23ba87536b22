//! Core types for closure evaluation.
//!
//! These types are the data structures shared by the classifier, the
//! machines, the narrator, and the runtime.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which report an evaluation produces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    /// A total decider: both machines always halt.
    Recursive,

    /// A semi-decider: a machine halts only when it accepts.
    #[default]
    RecognitionOnly,
}

impl EvaluationMode {
    /// Heading used at the top of the narrative.
    pub fn heading(&self) -> &'static str {
        match self {
            EvaluationMode::Recursive => "Recursive Mode",
            EvaluationMode::RecognitionOnly => "RE Mode",
        }
    }

    /// Short label as accepted on the command line.
    pub fn label(&self) -> &'static str {
        match self {
            EvaluationMode::Recursive => "recursive",
            EvaluationMode::RecognitionOnly => "re",
        }
    }
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown evaluation mode '{0}' (expected 'recursive' or 're')")]
pub struct ParseModeError(pub String);

impl FromStr for EvaluationMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "recursive" | "decider" => Ok(EvaluationMode::Recursive),
            "re" | "recognition-only" | "recognition_only" | "recognizer" => {
                Ok(EvaluationMode::RecognitionOnly)
            }
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Request for evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationRequest {
    /// Free-text description of L
    pub language: String,

    /// The candidate word w
    pub input: String,

    /// Which report to produce
    pub mode: EvaluationMode,
}

impl EvaluationRequest {
    pub fn new(
        language: impl Into<String>,
        input: impl Into<String>,
        mode: EvaluationMode,
    ) -> Self {
        Self {
            language: language.into(),
            input: input.into(),
            mode,
        }
    }
}

/// Which language a machine answers for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// L itself
    Language,

    /// The complement of L
    Complement,
}

impl Target {
    /// Machine name as printed in reports.
    pub fn machine_name(&self) -> &'static str {
        match self {
            Target::Language => "M_L",
            Target::Complement => "M_L\u{304}",
        }
    }

    /// Trace line announcing a recognizer run for this target.
    pub fn announcement(&self) -> &'static str {
        match self {
            Target::Language => "Running recognizer for L...",
            Target::Complement => "Running recognizer for complement(L)...",
        }
    }

    /// Whether a word with the given membership in L belongs to this target.
    pub fn admits(&self, in_language: bool) -> bool {
        match self {
            Target::Language => in_language,
            Target::Complement => !in_language,
        }
    }
}

/// The kind of simulated machine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MachineKind {
    /// Halts on every input
    Decider,

    /// Halts only on accepted inputs
    Recognizer,
}

/// A terminal verdict.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Accept,
    Reject,
}

impl Outcome {
    pub fn from_membership(member: bool) -> Self {
        if member {
            Outcome::Accept
        } else {
            Outcome::Reject
        }
    }

    /// The opposite verdict, as produced by swapping accept and reject states.
    pub fn flipped(self) -> Self {
        match self {
            Outcome::Accept => Outcome::Reject,
            Outcome::Reject => Outcome::Accept,
        }
    }
}

/// Result of one simulated run.
///
/// `Pending` stands for a machine that never halts on this input. The
/// presentation layer decides how long to keep showing it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "status", content = "outcome", rename_all = "snake_case")]
pub enum RunOutcome {
    Resolved(Outcome),
    Pending,
}

impl RunOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, RunOutcome::Resolved(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RunOutcome::Pending)
    }

    pub fn is_accept(&self) -> bool {
        matches!(self, RunOutcome::Resolved(Outcome::Accept))
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Resolved(Outcome::Accept) => f.write_str("ACCEPT (halts)"),
            RunOutcome::Resolved(Outcome::Reject) => f.write_str("REJECT (halts)"),
            RunOutcome::Pending => f.write_str("...running (no halt)"),
        }
    }
}

/// One machine run on w.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MachineRun {
    pub machine: MachineKind,
    pub target: Target,
    pub outcome: RunOutcome,
}

impl fmt::Display for MachineRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(w): {}", self.target.machine_name(), self.outcome)
    }
}

/// Result of evaluating w against L in one mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub mode: EvaluationMode,

    /// Free-text description of L, as given
    pub language: String,

    /// The candidate word w
    pub input: String,

    /// Membership of w in L
    pub verdict: bool,

    /// The run of the machine for L
    pub language_run: MachineRun,

    /// The run of the machine for the complement of L
    pub complement_run: MachineRun,

    /// Simulated execution trace (empty in recursive mode)
    #[serde(default)]
    pub trace: Vec<String>,

    /// Human-readable narrative
    pub narrative: String,

    /// When the evaluation occurred
    pub evaluated_at: DateTime<Utc>,
}

impl Report {
    /// Whether the two runs behave like a decider for L and a decider for
    /// its complement: both halt and they disagree.
    pub fn closure_holds(&self) -> bool {
        match (self.language_run.outcome, self.complement_run.outcome) {
            (RunOutcome::Resolved(l), RunOutcome::Resolved(c)) => l.flipped() == c,
            _ => false,
        }
    }
}
