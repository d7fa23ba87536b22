//! Session runner for interactive evaluation.
//!
//! The runner owns the UI-facing state machine:
//! - Idle → Running when an evaluation starts
//! - Running → Idle when it completes, whatever the outcome
//!
//! While Running, mode changes and new evaluations are refused with
//! [`RuntimeError::Busy`]. An evaluation that has started always runs to
//! completion; there is no cancellation and no timeout.

use chrono::Utc;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tokio::sync::mpsc;

use closure_core::{
    assemble_report, machines_for, validate, EvaluationError, EvaluationMode, EvaluationRequest,
    MachineRun, Narrator, Report,
};

use crate::config::RuntimeConfig;

/// Errors from the session runner.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("An evaluation is already running")]
    Busy,

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

impl RuntimeError {
    /// Whether this is the user-facing missing-input warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, RuntimeError::Evaluation(_))
    }
}

/// Observable state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
}

/// Event delivered to the presentation layer while an evaluation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// A trace line, sent as soon as it is produced
    Line(String),

    /// The evaluation has completed
    Finished,
}

/// Runs evaluations one at a time with the configured recognizer delay.
pub struct SimulationRunner {
    config: RuntimeConfig,

    /// Selected mode; also serializes mode changes against run starts
    mode: Mutex<EvaluationMode>,

    running: AtomicBool,

    narrator: Narrator,
}

/// Returns the session to Idle when dropped.
struct RunGuard<'a> {
    running: &'a AtomicBool,
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

impl SimulationRunner {
    /// Create a runner in the Idle state with the default mode.
    pub fn new(config: RuntimeConfig) -> Self {
        Self::with_mode(config, EvaluationMode::default())
    }

    /// Create a runner in the Idle state with a preselected mode.
    pub fn with_mode(config: RuntimeConfig, mode: EvaluationMode) -> Self {
        Self {
            config,
            mode: Mutex::new(mode),
            running: AtomicBool::new(false),
            narrator: Narrator::new(),
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        if self.running.load(Ordering::SeqCst) {
            SessionState::Running
        } else {
            SessionState::Idle
        }
    }

    /// The currently selected mode.
    pub fn mode(&self) -> EvaluationMode {
        *self.mode.lock()
    }

    /// Select the mode for the next evaluation.
    pub fn select_mode(&self, mode: EvaluationMode) -> Result<(), RuntimeError> {
        let mut selected = self.mode.lock();
        if self.running.load(Ordering::SeqCst) {
            tracing::debug!(mode = ?mode, "Mode change refused while running");
            return Err(RuntimeError::Busy);
        }
        *selected = mode;
        Ok(())
    }

    /// Create a trace channel sized by the configuration.
    pub fn trace_channel(&self) -> (mpsc::Sender<TraceEvent>, mpsc::Receiver<TraceEvent>) {
        mpsc::channel(self.config.trace.channel_capacity)
    }

    /// Evaluate `input` against `language` in the selected mode.
    pub async fn run(&self, language: &str, input: &str) -> Result<Report, RuntimeError> {
        self.execute(language, input, None).await
    }

    /// Evaluate and send trace lines to `trace` as each run resolves.
    ///
    /// A refused or invalid evaluation sends no events.
    pub async fn run_streaming(
        &self,
        language: &str,
        input: &str,
        trace: mpsc::Sender<TraceEvent>,
    ) -> Result<Report, RuntimeError> {
        self.execute(language, input, Some(&trace)).await
    }

    fn begin(&self) -> Result<(RunGuard<'_>, EvaluationMode), RuntimeError> {
        let mode = self.mode.lock();
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::warn!("Evaluation refused: session is busy");
            return Err(RuntimeError::Busy);
        }
        Ok((RunGuard { running: &self.running }, *mode))
    }

    async fn execute(
        &self,
        language: &str,
        input: &str,
        sink: Option<&mpsc::Sender<TraceEvent>>,
    ) -> Result<Report, RuntimeError> {
        let (_guard, mode) = self.begin()?;
        let request = EvaluationRequest::new(language, input, mode);

        if let Err(e) = validate(&request) {
            tracing::info!(error = %e, "Evaluation skipped");
            return Err(e.into());
        }

        tracing::info!(mode = ?mode, "Evaluation started");

        let [language_machine, complement_machine] = machines_for(mode);
        let mut trace = Vec::new();

        let (language_run, complement_run) = match mode {
            EvaluationMode::Recursive => (
                language_machine.run(&request),
                complement_machine.run(&request),
            ),
            EvaluationMode::RecognitionOnly => {
                let mut runs: Vec<MachineRun> = Vec::with_capacity(2);
                for machine in [&language_machine, &complement_machine] {
                    let target = machine.target();
                    self.emit(&mut trace, sink, target.announcement().to_string())
                        .await;

                    tokio::time::sleep(self.config.recognition.delay).await;

                    let run = machine.run(&request);
                    tracing::debug!(machine_target = ?target, outcome = ?run.outcome, "Recognizer settled");
                    self.emit(&mut trace, sink, self.narrator.trace_result(&run))
                        .await;
                    runs.push(run);
                }
                (runs[0], runs[1])
            }
        };

        let evaluated_at = self
            .config
            .determinism
            .evaluated_at
            .unwrap_or_else(Utc::now);
        let report = assemble_report(&request, language_run, complement_run, trace, evaluated_at);

        if let Some(sink) = sink {
            if sink.send(TraceEvent::Finished).await.is_err() {
                tracing::debug!("Trace receiver dropped before completion");
            }
        }

        tracing::info!(mode = ?mode, verdict = report.verdict, "Evaluation finished");
        Ok(report)
    }

    /// Record a trace line and forward it to the presentation layer.
    ///
    /// A dropped receiver does not stop the evaluation.
    async fn emit(
        &self,
        trace: &mut Vec<String>,
        sink: Option<&mpsc::Sender<TraceEvent>>,
        line: String,
    ) {
        if let Some(sink) = sink {
            if sink.send(TraceEvent::Line(line.clone())).await.is_err() {
                tracing::debug!("Trace receiver dropped, continuing without streaming");
            }
        }
        trace.push(line);
    }
}
