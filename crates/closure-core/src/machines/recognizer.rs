//! Recognizer: a machine that halts only when it accepts.

use super::Machine;
use crate::language::classify;
use crate::types::{EvaluationRequest, MachineKind, MachineRun, Outcome, RunOutcome, Target};

/// A semi-decider for L or its complement.
///
/// On a word outside its target language the run never settles and is
/// reported as [`RunOutcome::Pending`], never as a rejection.
#[derive(Debug, Clone, Copy)]
pub struct Recognizer {
    target: Target,
}

impl Recognizer {
    pub fn new(target: Target) -> Self {
        Self { target }
    }
}

impl Machine for Recognizer {
    fn kind(&self) -> MachineKind {
        MachineKind::Recognizer
    }

    fn target(&self) -> Target {
        self.target
    }

    fn run(&self, request: &EvaluationRequest) -> MachineRun {
        let in_language = classify(&request.language, &request.input);

        let outcome = if self.target.admits(in_language) {
            RunOutcome::Resolved(Outcome::Accept)
        } else {
            RunOutcome::Pending
        };

        MachineRun {
            machine: MachineKind::Recognizer,
            target: self.target,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EvaluationMode;

    fn request(language: &str, input: &str) -> EvaluationRequest {
        EvaluationRequest::new(language, input, EvaluationMode::RecognitionOnly)
    }

    #[test]
    fn test_recognizer_halts_on_member() {
        let req = request("binary", "010101");
        assert!(Recognizer::new(Target::Language).run(&req).outcome.is_accept());
        assert!(Recognizer::new(Target::Complement).run(&req).outcome.is_pending());
    }

    #[test]
    fn test_recognizer_runs_forever_on_non_member() {
        let req = request("length 3", "ab");
        assert!(Recognizer::new(Target::Language).run(&req).outcome.is_pending());
        assert!(Recognizer::new(Target::Complement).run(&req).outcome.is_accept());
    }

    #[test]
    fn test_recognizer_never_rejects() {
        for (language, input) in [("even numbers", "3"), ("binary", "2"), ("palindrome", "x")] {
            let req = request(language, input);
            for target in [Target::Language, Target::Complement] {
                let run = Recognizer::new(target).run(&req);
                assert_ne!(run.outcome, RunOutcome::Resolved(Outcome::Reject));
            }
        }
    }
}
