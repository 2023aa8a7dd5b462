//! Simulated answer verification: a required-substring checklist.
//!
//! There is no interpreter behind "Run Code". A submission passes when it
//! contains every required snippet of its challenge, and the displayed output
//! is the challenge's pre-authored expected output rather than anything
//! derived from the submission. Known consequences of that policy:
//!   - pasting the snippets inside a comment or a string literal passes;
//!   - a correct solution worded differently from the snippet list fails.
//! Both are the shipped behavior and are covered by tests below.
//!
//! Challenges with test cases get one flag per case, but all flags share the
//! outcome of the single check. A real per-case runner (an embedded
//! interpreter or a sandboxed execution service) would replace this module
//! wholesale; nothing else inspects submissions.

use crate::domain::{Challenge, VerificationResult};

/// The single line shown when the checklist is not satisfied.
pub const FAILURE_LINE: &str = "Output doesn't match expected results. Try again!";

/// True iff `submitted` contains every snippet. Plain case-sensitive
/// containment: no tokenization, no parsing.
pub fn contains_all(submitted: &str, snippets: &[String]) -> bool {
  snippets.iter().all(|s| submitted.contains(s.as_str()))
}

/// Verify a submission against a challenge.
///
/// Pure function of its inputs: same submission and challenge always produce
/// the same result, and nothing is mutated or retained.
pub fn verify(submitted: &str, challenge: &Challenge) -> VerificationResult {
  let passed = contains_all(submitted, &challenge.required_snippets);
  let output = if passed {
    challenge.expected_output.clone()
  } else {
    vec![FAILURE_LINE.to_string()]
  };
  let case_results = vec![passed; challenge.test_cases.len()];
  VerificationResult { passed, output, case_results }
}
