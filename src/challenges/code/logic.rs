//! Code challenge logic: sandboxed submission, output comparison, and hint reveals.

use super::{CodeContent, CodeState, Evaluator};
use crate::challenges::Verdict;
use std::panic::{self, AssertUnwindSafe};

/// Run `source` through the evaluator, containing any fault it raises.
///
/// A reported error and a panic inside the evaluator both come back as `Err`
/// with a player-facing message.
pub fn run_sandboxed(evaluator: &dyn Evaluator, source: &str) -> Result<String, String> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| evaluator.evaluate(source)));
    match outcome {
        Ok(evaluation) => match evaluation.error {
            Some(error) => Err(error),
            None => Ok(evaluation.stdout),
        },
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "evaluation aborted".to_string());
            Err(message)
        }
    }
}

/// Run a submission. A faulting run only records `last_fault`; the accepted
/// source, attempts and output stay as they were.
pub fn submit(state: &mut CodeState, evaluator: &dyn Evaluator, source: &str) {
    match run_sandboxed(evaluator, source) {
        Ok(stdout) => {
            state.source = source.to_string();
            state.attempts += 1;
            state.last_output = Some(stdout.trim().to_string());
            state.last_fault = None;
        }
        Err(fault) => state.last_fault = Some(format!("Your code failed: {}", fault)),
    }
}

/// `Invalid` after a faulting run. Otherwise solved iff the last accepted output
/// equals the expected output, both trimmed.
pub fn validate(state: &CodeState, content: &CodeContent) -> Verdict {
    if let Some(fault) = &state.last_fault {
        return Verdict::Invalid(fault.clone());
    }
    match &state.last_output {
        Some(out) if out == content.expected_output.trim() => Verdict::solved(),
        _ => Verdict::InProgress,
    }
}

/// Show the next hint. Returns false when every hint is already visible.
pub fn reveal_hint(state: &mut CodeState, content: &CodeContent) -> bool {
    if state.revealed_hints >= content.hints.len() {
        return false;
    }
    state.revealed_hints += 1;
    true
}

/// Hints the player has unlocked so far.
pub fn visible_hints<'a>(state: &CodeState, content: &'a CodeContent) -> &'a [String] {
    &content.hints[..state.revealed_hints.min(content.hints.len())]
}

#[cfg(test)]
mod tests {
    use super::super::Evaluation;
    use super::*;

    fn content() -> CodeContent {
        CodeContent {
            prompt: "Print the sum of 2 and 3".into(),
            starter: "print(2 - 3)".into(),
            expected_output: "5\n".into(),
            hints: vec!["Check the operator".into(), "Use +".into()],
        }
    }

    fn echo(source: &str) -> Evaluation {
        match source {
            "print(2 + 3)" => Evaluation::output("5\n\n"),
            "print(2 - 3)" => Evaluation::output("-1\n"),
            "boom" => panic!("stack overflow in sandbox"),
            _ => Evaluation::fault("SyntaxError: unexpected EOF"),
        }
    }

    #[test]
    fn test_correct_output_solves_after_trim() {
        let content = content();
        let mut state = CodeState::new(&content);
        submit(&mut state, &echo, "print(2 + 3)");
        assert_eq!(state.attempts, 1);
        assert_eq!(validate(&state, &content), Verdict::solved());
    }

    #[test]
    fn test_wrong_output_stays_in_progress() {
        let content = content();
        let mut state = CodeState::new(&content);
        submit(&mut state, &echo, "print(2 - 3)");
        assert_eq!(state.last_output.as_deref(), Some("-1"));
        assert_eq!(validate(&state, &content), Verdict::InProgress);
    }

    #[test]
    fn test_fault_is_invalid_and_keeps_accepted_source() {
        let content = content();
        let mut state = CodeState::new(&content);
        submit(&mut state, &echo, "print(");
        assert_eq!(state.source, "print(2 - 3)");
        assert_eq!(state.attempts, 0);
        assert!(state.last_output.is_none());
        match validate(&state, &content) {
            Verdict::Invalid(message) => assert!(message.contains("SyntaxError")),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_panicking_evaluator_is_contained() {
        let content = content();
        let mut state = CodeState::new(&content);
        submit(&mut state, &echo, "boom");
        assert_eq!(state.attempts, 0);
        assert!(matches!(
            validate(&state, &content),
            Verdict::Invalid(message) if message.contains("stack overflow")
        ));
    }

    #[test]
    fn test_clean_run_clears_previous_fault() {
        let content = content();
        let mut state = CodeState::new(&content);
        submit(&mut state, &echo, "print(");
        submit(&mut state, &echo, "print(2 + 3)");
        assert!(state.last_fault.is_none());
        assert_eq!(validate(&state, &content), Verdict::solved());
    }

    #[test]
    fn test_reveal_hints_in_order() {
        let content = content();
        let mut state = CodeState::new(&content);
        assert!(visible_hints(&state, &content).is_empty());
        assert!(reveal_hint(&mut state, &content));
        assert_eq!(visible_hints(&state, &content), &["Check the operator".to_string()]);
        assert!(reveal_hint(&mut state, &content));
        assert!(!reveal_hint(&mut state, &content));
        assert_eq!(state.revealed_hints, 2);
    }
}
