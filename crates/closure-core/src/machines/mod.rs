//! Simulated machines for L and its complement.
//!
//! Each machine answers for one target language and runs independently of
//! the others. A decider always halts; a recognizer halts only when it
//! accepts, which is reported as [`RunOutcome::Pending`].

mod decider;
mod recognizer;

pub use decider::Decider;
pub use recognizer::Recognizer;

use crate::types::{EvaluationMode, EvaluationRequest, MachineKind, MachineRun, Target};
pub use crate::types::RunOutcome;

/// Trait implemented by all machines.
pub trait Machine {
    /// The kind of this machine.
    fn kind(&self) -> MachineKind;

    /// The language this machine answers for.
    fn target(&self) -> Target;

    /// Run the machine on the request's word.
    ///
    /// Runs are pure: the same request always yields the same run.
    fn run(&self, request: &EvaluationRequest) -> MachineRun;
}

/// The machine pair used by a mode: one for L, one for its complement.
pub fn machines_for(mode: EvaluationMode) -> [Box<dyn Machine + Send + Sync>; 2] {
    match mode {
        EvaluationMode::Recursive => [
            Box::new(Decider::new(Target::Language)),
            Box::new(Decider::new(Target::Complement)),
        ],
        EvaluationMode::RecognitionOnly => [
            Box::new(Recognizer::new(Target::Language)),
            Box::new(Recognizer::new(Target::Complement)),
        ],
    }
}
