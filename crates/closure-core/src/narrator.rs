//! Narrator: turns two machine runs into a report narrative.
//!
//! The conclusion depends only on the mode:
//! 1. Recursive: both deciders halt and disagree, so closure holds.
//! 2. RecognitionOnly: at most one recognizer halts, so closure fails and the
//!    Halting Problem is cited as the standard counterexample.

use crate::types::{EvaluationMode, EvaluationRequest, MachineRun};

/// The canonical recognizable language whose complement is not recognizable.
pub const HALTING_PROBLEM: &str = "L_H = {\u{27e8}M, w\u{27e9} | M halts on w}";

/// Builds narratives and trace lines.
pub struct Narrator;

impl Narrator {
    pub fn new() -> Self {
        Self
    }

    /// Build the narrative for a finished evaluation.
    pub fn narrate(
        &self,
        request: &EvaluationRequest,
        language_run: &MachineRun,
        complement_run: &MachineRun,
    ) -> String {
        let mut lines = vec![
            format!("{}:", request.mode.heading()),
            format!("Input: w = {}", request.input),
            format!("Language: L = {{ {} }}", request.language),
            String::new(),
            language_run.to_string(),
            complement_run.to_string(),
            String::new(),
        ];
        lines.extend(self.conclusion(request.mode));
        lines.join("\n")
    }

    /// Closing statement about closure under complement.
    pub fn conclusion(&self, mode: EvaluationMode) -> Vec<String> {
        match mode {
            EvaluationMode::Recursive => vec![
                "Closure confirmed: Recursive languages are closed under complement.".to_string(),
                "Swapping the accept and reject states of a decider for L yields a decider \
                 for its complement; both machines always halt."
                    .to_string(),
            ],
            EvaluationMode::RecognitionOnly => vec![
                "Not closed under complement.".to_string(),
                format!("Counterexample: Halting Problem {}.", HALTING_PROBLEM),
                "L_H is recognizable, but its complement is not.".to_string(),
            ],
        }
    }

    /// Trace line recorded once a run resolves.
    pub fn trace_result(&self, run: &MachineRun) -> String {
        run.to_string()
    }
}

impl Default for Narrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MachineKind, Outcome, RunOutcome, Target};

    fn run(machine: MachineKind, target: Target, outcome: RunOutcome) -> MachineRun {
        MachineRun { machine, target, outcome }
    }

    #[test]
    fn test_recursive_narrative() {
        let request = EvaluationRequest::new("even numbers", "4", EvaluationMode::Recursive);
        let text = Narrator::new().narrate(
            &request,
            &run(MachineKind::Decider, Target::Language, RunOutcome::Resolved(Outcome::Accept)),
            &run(MachineKind::Decider, Target::Complement, RunOutcome::Resolved(Outcome::Reject)),
        );

        assert!(text.starts_with("Recursive Mode:"));
        assert!(text.contains("Input: w = 4"));
        assert!(text.contains("Language: L = { even numbers }"));
        assert!(text.contains("M_L(w): ACCEPT (halts)"));
        assert!(text.contains("(w): REJECT (halts)"));
        assert!(text.contains("closed under complement"));
        assert!(!text.contains("Halting Problem"));
    }

    #[test]
    fn test_recognition_narrative_cites_halting_problem() {
        let request = EvaluationRequest::new("binary", "010101", EvaluationMode::RecognitionOnly);
        let text = Narrator::new().narrate(
            &request,
            &run(MachineKind::Recognizer, Target::Language, RunOutcome::Resolved(Outcome::Accept)),
            &run(MachineKind::Recognizer, Target::Complement, RunOutcome::Pending),
        );

        assert!(text.starts_with("RE Mode:"));
        assert!(text.contains("...running (no halt)"));
        assert!(text.contains("Not closed under complement."));
        assert!(text.contains(HALTING_PROBLEM));
    }
}
