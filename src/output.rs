// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet, JSON, and GitHub Actions workflow-command modes.

use serde::Serialize;
use std::time::Instant;

use crate::config::Secret;

/// Receives user-facing progress from a run.
pub trait Reporter: Send + Sync {
    fn progress(&self, message: &str);
}

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputMode {
    /// Human-friendly output with progress messages
    Normal,
    /// Minimal output (only final result)
    Quiet,
    /// JSON lines for scripting
    Json,
    /// GitHub Actions workflow commands
    Actions,
}

impl OutputMode {
    /// `Actions` inside a GitHub Actions runner, `Normal` elsewhere.
    pub fn detect() -> Self {
        match std::env::var("GITHUB_ACTIONS").as_deref() {
            Ok("true") => OutputMode::Actions,
            _ => OutputMode::Normal,
        }
    }
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    /// Ask the Actions runner to scrub `secret` from every later log line.
    pub fn mask(&self, secret: &Secret) {
        if let Some(line) = self.format_mask(secret) {
            println!("{line}");
        }
    }

    /// Print a success message with optional timing.
    pub fn success(&self, message: &str) {
        if let Some(line) = self.format_success(message) {
            println!("{line}");
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        let line = self.format_error(message);
        match self.mode {
            // The runner only picks up workflow commands from stdout.
            OutputMode::Actions => println!("{line}"),
            _ => eprintln!("{line}"),
        }
    }

    fn format_mask(&self, secret: &Secret) -> Option<String> {
        (self.mode == OutputMode::Actions && !secret.is_empty())
            .then(|| format!("::add-mask::{}", escape_data(secret.expose())))
    }

    fn format_progress(&self, message: &str) -> Option<String> {
        match self.mode {
            OutputMode::Normal | OutputMode::Actions => Some(message.to_string()),
            OutputMode::Quiet => None,
            OutputMode::Json => self.json("progress", message),
        }
    }

    fn format_success(&self, message: &str) -> Option<String> {
        match self.mode {
            OutputMode::Normal => {
                let elapsed = self.elapsed_secs();
                if elapsed > 0.0 {
                    Some(format!("{message} ({elapsed:.1}s)"))
                } else {
                    Some(message.to_string())
                }
            }
            OutputMode::Quiet | OutputMode::Actions => Some(message.to_string()),
            OutputMode::Json => self.json("success", message),
        }
    }

    fn format_error(&self, message: &str) -> String {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => format!("Error: {message}"),
            OutputMode::Actions => format!("::error::{}", escape_data(message)),
            OutputMode::Json => self
                .json("error", message)
                .unwrap_or_else(|| format!("Error: {message}")),
        }
    }

    fn json(&self, event: &str, message: &str) -> Option<String> {
        let event = JsonEvent {
            event,
            message,
            duration_secs: self.start_time.map(|_| self.elapsed_secs()),
        };
        serde_json::to_string(&event).ok()
    }
}

impl Reporter for Output {
    fn progress(&self, message: &str) {
        if let Some(line) = self.format_progress(message) {
            println!("{line}");
        }
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}

/// Escape a workflow command payload the way the Actions toolkit does.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
