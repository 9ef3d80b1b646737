//! Code challenge data structures and the evaluation capability.

use serde::{Deserialize, Serialize};

/// Level payload for a code challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeContent {
    pub prompt: String,
    /// Program shown to the player at level start (broken, for the fix games)
    #[serde(default)]
    pub starter: String,
    pub expected_output: String,
    /// Player-facing hints, revealed one at a time
    #[serde(default)]
    pub hints: Vec<String>,
}

/// Captured result of running a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub stdout: String,
    /// Runtime or compile fault, if the program did not finish cleanly
    pub error: Option<String>,
}

impl Evaluation {
    pub fn output(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            error: None,
        }
    }

    pub fn fault(message: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            error: Some(message.into()),
        }
    }
}

/// Sandboxed runner for player submissions.
///
/// The engine never interprets code itself; hosts inject an evaluator and tests use stubs.
pub trait Evaluator {
    fn evaluate(&self, source: &str) -> Evaluation;
}

impl<F> Evaluator for F
where
    F: Fn(&str) -> Evaluation,
{
    fn evaluate(&self, source: &str) -> Evaluation {
        self(source)
    }
}

/// In-progress code challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeState {
    /// Last accepted submission (starts as the starter program)
    pub source: String,
    /// Submissions that ran to completion
    pub attempts: u32,
    /// Trimmed stdout of the last accepted submission
    pub last_output: Option<String>,
    /// Fault raised by the most recent submission, cleared by the next clean run
    pub last_fault: Option<String>,
    /// Number of `CodeContent::hints` shown so far
    pub revealed_hints: usize,
}

impl CodeState {
    pub fn new(content: &CodeContent) -> Self {
        Self {
            source: content.starter.clone(),
            attempts: 0,
            last_output: None,
            last_fault: None,
            revealed_hints: 0,
        }
    }
}
