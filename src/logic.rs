//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! This includes:
//!   - Running a challenge submission through the verifier
//!   - Revealing reference solutions
//!   - The editor continuation decision
//!   - Grading unit tests (multiple-choice + coding questions)

use std::collections::HashMap;

use tracing::{debug, info, instrument};

use crate::domain::{Question, QuestionResult, TestReport, UnitTest, VerificationResult};
use crate::editor::{self, ContinuationDecision};
use crate::state::AppState;
use crate::verifier;

/// Percentage needed to pass a unit test.
pub const PASS_PERCENTAGE: u32 = 70;

/// Run a submission against the challenge at (unit, lesson).
/// `None` means the slot does not exist; the transport layer turns that into
/// its own not-found shape.
#[instrument(level = "info", skip(state, code), fields(%unit, %lesson, code_len = code.len()))]
pub fn run_challenge(state: &AppState, unit: u32, lesson: u32, code: &str) -> Option<VerificationResult> {
  let ch = state.get_challenge(unit, lesson)?;
  let result = verifier::verify(code, &ch);
  info!(target: "challenge", %unit, %lesson, passed = result.passed, "Submission verified");
  Some(result)
}

/// The reference solution for (unit, lesson), for the "Show Solution" action.
#[instrument(level = "info", skip(state), fields(%unit, %lesson))]
pub fn solution_for(state: &AppState, unit: u32, lesson: u32) -> Option<String> {
  state.get_challenge(unit, lesson).map(|ch| ch.solution)
}

/// Continuation decision for the line just completed in the editor.
#[instrument(level = "debug", skip(previous_line), fields(line_len = previous_line.len()))]
pub fn continuation(previous_line: &str) -> Option<ContinuationDecision> {
  let decision = editor::on_newline(previous_line);
  debug!(target: "editor", matched = decision.is_some(), "Continuation decision");
  decision
}

/// Grade one unit-test submission.
///
/// Multiple-choice questions are exact option matches. Coding questions go
/// through the same substring checklist as lesson challenges; their test
/// cases all share the single check's outcome. Unanswered questions count as
/// wrong. Percentage is rounded to the nearest integer and the test passes
/// at `PASS_PERCENTAGE` or above.
#[instrument(level = "info", skip_all, fields(unit = test.unit, questions = test.questions.len()))]
pub fn grade_unit_test(
  test: &UnitTest,
  choices: &HashMap<u32, String>,
  code_answers: &HashMap<u32, String>,
) -> TestReport {
  let mut results = Vec::with_capacity(test.questions.len());
  let mut score = 0u32;

  for q in &test.questions {
    let (correct, case_results) = match q {
      Question::MultipleChoice { id, correct_answer, .. } => {
        let picked = choices.get(id).map(String::as_str);
        (picked == Some(correct_answer.as_str()), Vec::new())
      }
      Question::Coding { id, required_snippets, test_cases, .. } => {
        let submitted = code_answers.get(id).map(String::as_str).unwrap_or("");
        let ok = verifier::contains_all(submitted, required_snippets);
        (ok, vec![ok; test_cases.len()])
      }
    };
    if correct {
      score += 1;
    }
    results.push(QuestionResult { question_id: q.id(), correct, case_results });
  }

  let total = test.questions.len() as u32;
  let percentage = if total == 0 { 0 } else { (score * 100 + total / 2) / total };
  let passed = percentage >= PASS_PERCENTAGE;
  info!(target: "challenge", unit = test.unit, score, total, percentage, passed, "Unit test graded");

  TestReport { results, score, total, percentage, passed }
}
