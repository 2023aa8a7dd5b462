//! Domain models used by the backend: challenges, unit tests, and results.

use serde::{Deserialize, Serialize};

/// Where did we get a challenge from?
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeSource {
  ContentBank, // from user-provided TOML bank
  Builtin,     // compiled-in lesson content
}

/// A display-only test case attached to a coding exercise.
///
/// Cases are never executed: the verifier applies one substring check to the
/// whole submission and every case shares that outcome.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestCase {
  pub input: serde_json::Value,
  pub expected: String,
}

/// A lesson's coding challenge, held in the content repository.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Challenge {
  pub unit: u32,
  pub lesson: u32,
  pub source: ChallengeSource,

  pub title: String,
  #[serde(default)] pub description: String,
  #[serde(default)] pub instructions: Vec<String>,

  pub starter_code: String,
  pub solution: String,

  /// Substrings a submission must contain, all of them, case-sensitive.
  pub required_snippets: Vec<String>,
  /// Lines displayed as the simulated program output on success.
  pub expected_output: Vec<String>,
  #[serde(default)] pub test_cases: Vec<TestCase>,
}

/// Outcome of one verification attempt. Recomputed on every run, never stored.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
  pub passed: bool,
  pub output: Vec<String>,
  /// One flag per test case; empty when the challenge has none.
  pub case_results: Vec<bool>,
}

/// A unit's quiz: multiple-choice and coding questions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnitTest {
  pub unit: u32,
  pub unit_title: String,
  pub questions: Vec<Question>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
  MultipleChoice {
    id: u32,
    question: String,
    options: Vec<String>,
    correct_answer: String,
  },
  Coding {
    id: u32,
    question: String,
    starter_code: String,
    solution: String,
    required_snippets: Vec<String>,
    test_cases: Vec<TestCase>,
  },
}

impl Question {
  pub fn id(&self) -> u32 {
    match self {
      Question::MultipleChoice { id, .. } | Question::Coding { id, .. } => *id,
    }
  }
}

/// Graded outcome of one unit-test submission.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TestReport {
  pub results: Vec<QuestionResult>,
  pub score: u32,
  pub total: u32,
  pub percentage: u32,
  pub passed: bool,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
  pub question_id: u32,
  pub correct: bool,
  /// Per-case flags for coding questions; empty for multiple choice.
  pub case_results: Vec<bool>,
}
