//! Decider: a machine that halts on every input.
//!
//! The decider for the complement of L is the decider for L with its accept
//! and reject states swapped.

use super::Machine;
use crate::language::classify;
use crate::types::{EvaluationRequest, MachineKind, MachineRun, Outcome, RunOutcome, Target};

/// A total decider for L or its complement.
#[derive(Debug, Clone, Copy)]
pub struct Decider {
    target: Target,
}

impl Decider {
    pub fn new(target: Target) -> Self {
        Self { target }
    }
}

impl Machine for Decider {
    fn kind(&self) -> MachineKind {
        MachineKind::Decider
    }

    fn target(&self) -> Target {
        self.target
    }

    fn run(&self, request: &EvaluationRequest) -> MachineRun {
        let for_language = Outcome::from_membership(classify(&request.language, &request.input));

        let outcome = match self.target {
            Target::Language => for_language,
            Target::Complement => for_language.flipped(),
        };

        MachineRun {
            machine: MachineKind::Decider,
            target: self.target,
            outcome: RunOutcome::Resolved(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EvaluationMode;

    fn request(language: &str, input: &str) -> EvaluationRequest {
        EvaluationRequest::new(language, input, EvaluationMode::Recursive)
    }

    #[test]
    fn test_decider_accepts_member() {
        let run = Decider::new(Target::Language).run(&request("even numbers", "4"));
        assert_eq!(run.outcome, RunOutcome::Resolved(Outcome::Accept));
    }

    #[test]
    fn test_decider_rejects_non_member() {
        let run = Decider::new(Target::Language).run(&request("even numbers", "7"));
        assert_eq!(run.outcome, RunOutcome::Resolved(Outcome::Reject));
    }

    #[test]
    fn test_complement_decider_is_flipped() {
        let cases = [
            ("even numbers", "4"),
            ("odd numbers", "4"),
            ("length 3", "abc"),
            ("binary", "012"),
            ("palindrome", "aba"),
        ];

        for (language, input) in cases {
            let req = request(language, input);
            let l = Decider::new(Target::Language).run(&req);
            let c = Decider::new(Target::Complement).run(&req);

            match (l.outcome, c.outcome) {
                (RunOutcome::Resolved(a), RunOutcome::Resolved(b)) => assert_eq!(a.flipped(), b),
                other => panic!("decider did not halt: {:?}", other),
            }
        }
    }
}
