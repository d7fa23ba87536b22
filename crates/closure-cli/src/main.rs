//! Closure CLI
//!
//! Command-line front end for the closure-under-complement demonstration.
//!
//! ## Usage
//!
//! ```bash
//! # Recognizers for L and its complement (trace printed as each run settles)
//! closure run --language binary --input 010101
//!
//! # Deciders for L and its complement
//! closure run --language "even numbers" --input 4 --mode recursive
//!
//! # JSON report
//! closure run -l "length 3" -w ab --format json
//!
//! # Membership only
//! closure classify -l "odd numbers" -w 7
//!
//! # Heuristics in priority order
//! closure rules
//! ```
//!
//! ## Exit Codes
//!
//! - 0: Success (`classify`: ACCEPT)
//! - 1: `classify`: REJECT
//! - 2: Missing language or word
//! - 3: Error

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use closure_core::{classify, EvaluationMode, LanguageRule, Report};
use closure_runtime::{RuntimeConfig, SimulationRunner, TraceEvent};

/// Closure: recursive vs recursively enumerable languages under complement
#[derive(Parser)]
#[command(name = "closure")]
#[command(version)]
#[command(about = "Simulate deciders and recognizers for a language and its complement", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the machines for L and its complement on a word
    Run {
        /// Informal language description (e.g. "even numbers", "length 3", "binary")
        #[arg(short, long)]
        language: String,

        /// The word w
        #[arg(short = 'w', long)]
        input: String,

        /// Evaluation mode: "recursive" (deciders) or "re" (recognizers)
        #[arg(short, long, default_value = "re", value_parser = parse_mode)]
        mode: EvaluationMode,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Runtime configuration file (YAML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Delay before each recognizer run settles (e.g. "800ms", "2s")
        #[arg(long, value_parser = parse_duration)]
        delay: Option<Duration>,

        /// Explicit timestamp for deterministic reports (ISO 8601 / RFC 3339).
        /// Example: --evaluated-at 2025-12-20T00:00:00Z
        #[arg(long, value_parser = parse_datetime)]
        evaluated_at: Option<DateTime<Utc>>,
    },

    /// Decide membership of a word in a language
    Classify {
        /// Informal language description
        #[arg(short, long)]
        language: String,

        /// The word w
        #[arg(short = 'w', long)]
        input: String,
    },

    /// List the language heuristics in priority order
    Rules,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_mode(s: &str) -> Result<EvaluationMode, String> {
    s.parse::<EvaluationMode>().map_err(|e| e.to_string())
}

fn parse_duration(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s)
        .map_err(|e| format!("Invalid duration: {}. Expected e.g. 800ms or 2s", e))
}

/// Parse ISO 8601 / RFC 3339 datetime string to DateTime<Utc>.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("Invalid datetime format: {}. Expected ISO 8601/RFC 3339 (e.g., 2025-12-20T00:00:00Z)", e))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match run(cli.command) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(3)
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Run {
            language,
            input,
            mode,
            format,
            config,
            delay,
            evaluated_at,
        } => {
            let config = load_config(config, delay, evaluated_at)?;
            run_command(config, &language, &input, mode, format)
        }
        Commands::Classify { language, input } => Ok(classify_command(&language, &input)),
        Commands::Rules => Ok(rules_command()),
    }
}

fn load_config(
    path: Option<PathBuf>,
    delay: Option<Duration>,
    evaluated_at: Option<DateTime<Utc>>,
) -> Result<RuntimeConfig> {
    let mut config = match path {
        Some(path) => RuntimeConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => RuntimeConfig::default(),
    };

    if let Some(delay) = delay {
        config.recognition.delay = delay;
    }
    if evaluated_at.is_some() {
        config.determinism.evaluated_at = evaluated_at;
    }

    Ok(config)
}

fn run_command(
    config: RuntimeConfig,
    language: &str,
    input: &str,
    mode: EvaluationMode,
    format: OutputFormat,
) -> Result<ExitCode> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;

    let runner = SimulationRunner::with_mode(config, mode);
    let (tx, mut rx) = runner.trace_channel();

    let printer = async move {
        let mut header_printed = false;
        while let Some(event) = rx.recv().await {
            if format != OutputFormat::Text {
                continue;
            }
            match event {
                TraceEvent::Line(line) => {
                    if !header_printed {
                        println!("Execution Log:");
                        header_printed = true;
                    }
                    println!("  \u{2022} {}", line);
                }
                TraceEvent::Finished => {
                    if header_printed {
                        println!();
                    }
                }
            }
        }
    };

    let (result, ()) =
        runtime.block_on(async { tokio::join!(runner.run_streaming(language, input, tx), printer) });

    match result {
        Ok(report) => {
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&report)?;
                    println!("{}", json);
                }
                OutputFormat::Text => print_text_report(&report),
            }
            Ok(ExitCode::from(0))
        }
        Err(e) if e.is_warning() => {
            println!("WARNING: {}", e);
            Ok(ExitCode::from(2))
        }
        Err(e) => Err(e).context("Evaluation failed"),
    }
}

fn print_text_report(report: &Report) {
    println!("{}", report.narrative);
}

fn classify_command(language: &str, input: &str) -> ExitCode {
    let member = classify(language, input);

    println!("{}", if member { "ACCEPT" } else { "REJECT" });
    match LanguageRule::resolve(language) {
        Some(rule) => println!("Rule: {} ({})", rule.kind().keyword(), rule.kind().describe()),
        None => println!("Rule: none (unknown language, every word is rejected)"),
    }

    if member {
        ExitCode::from(0)
    } else {
        ExitCode::from(1)
    }
}

fn rules_command() -> ExitCode {
    println!("Language heuristics (first match wins, case-insensitive):");
    println!();
    for (i, kind) in LanguageRule::PRIORITY.iter().enumerate() {
        println!("  {}. \"{}\": {}", i + 1, kind.keyword(), kind.describe());
    }
    println!("  *. anything else: unknown language, every word is rejected");

    ExitCode::from(0)
}
