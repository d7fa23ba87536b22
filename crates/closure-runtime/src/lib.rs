//! # closure-runtime
//!
//! Async session layer on top of `closure-core`.
//!
//! The core reports a non-halting recognizer as `Pending` and never waits.
//! This crate adds what an interactive front end needs:
//! - A fixed delay before each recognizer run settles
//! - Trace lines streamed over a channel as each run settles
//! - An Idle/Running guard that refuses re-entry and mode changes mid-run
//!
//! ## Example
//!
//! ```rust,ignore
//! use closure_runtime::{RuntimeConfig, SimulationRunner, TraceEvent};
//!
//! let runner = SimulationRunner::new(RuntimeConfig::default());
//! let (tx, mut rx) = runner.trace_channel();
//! let run = runner.run_streaming("binary", "010101", tx);
//! ```

pub mod config;
pub mod session;

pub use config::{ConfigError, DeterminismConfig, RecognitionConfig, RuntimeConfig, TraceConfig};
pub use session::{RuntimeError, SessionState, SimulationRunner, TraceEvent};
