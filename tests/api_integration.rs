use std::collections::HashMap;
use std::sync::Arc;

use lualearn_backend::config::ContentConfig;
use lualearn_backend::domain::{ChallengeSource, Question, UnitTest};
use lualearn_backend::logic::{self, grade_unit_test};
use lualearn_backend::protocol::{test_to_out, to_out};
use lualearn_backend::state::{AppState, ContentRepository, InMemoryContent};
use lualearn_backend::verifier;

/// Fresh state backed by the builtin content only.
fn builtin_state() -> AppState {
    AppState { content: Arc::new(InMemoryContent::with_bank(None)) }
}

// ========== Challenge verification ==========

#[test]
fn every_builtin_solution_passes_its_own_challenge() {
    let state = builtin_state();
    for (unit, lesson) in state.content.challenge_slots() {
        let ch = state.get_challenge(unit, lesson).unwrap();
        let result = verifier::verify(&ch.solution, &ch);
        assert!(result.passed, "solution failed for unit {} lesson {}", unit, lesson);
        assert_eq!(result.output, ch.expected_output);
    }
}

#[test]
fn empty_submission_fails_every_challenge() {
    let state = builtin_state();
    for (unit, lesson) in state.content.challenge_slots() {
        let result = logic::run_challenge(&state, unit, lesson, "").unwrap();
        assert!(!result.passed);
        assert_eq!(result.output, vec![verifier::FAILURE_LINE.to_string()]);
    }
}

#[test]
fn run_is_idempotent() {
    let state = builtin_state();
    let a = logic::run_challenge(&state, 6, 1, "some attempt").unwrap();
    let b = logic::run_challenge(&state, 6, 1, "some attempt").unwrap();
    assert_eq!(a, b);
}

#[test]
fn comment_only_submission_passes_the_health_challenge() {
    // The checklist is blind to comments: all required snippets appear in a
    // single comment line, so this passes despite having no logic.
    let state = builtin_state();
    let submission = "-- if health >= 100 then \"Full Health\" \"Moderate Health\" \
                      \"Low Health\" \"Critical Health\" health >= 50 health >= 25";
    let result = logic::run_challenge(&state, 6, 1, submission).unwrap();
    assert!(result.passed);
}

#[test]
fn unknown_slot_yields_none() {
    let state = builtin_state();
    assert!(logic::run_challenge(&state, 99, 1, "code").is_none());
    assert!(logic::solution_for(&state, 99, 1).is_none());
    assert!(state.get_unit_test(99).is_none());
}

#[test]
fn solution_reveal_matches_stored_solution() {
    let state = builtin_state();
    let ch = state.get_challenge(3, 1).unwrap();
    assert_eq!(logic::solution_for(&state, 3, 1).unwrap(), ch.solution);
}

// ========== Unit-test grading ==========

#[test]
fn coding_question_solutions_pass_their_own_checklists() {
    let state = builtin_state();
    let test = state.get_unit_test(6).unwrap();
    for q in &test.questions {
        if let Question::Coding { solution, required_snippets, .. } = q {
            assert!(verifier::contains_all(solution, required_snippets));
        }
    }
}

#[test]
fn all_correct_submission_scores_100_and_passes() {
    let state = builtin_state();
    let test = state.get_unit_test(6).unwrap();

    let mut choices = HashMap::new();
    let mut code_answers = HashMap::new();
    for q in &test.questions {
        match q {
            Question::MultipleChoice { id, correct_answer, .. } => {
                choices.insert(*id, correct_answer.clone());
            }
            Question::Coding { id, solution, .. } => {
                code_answers.insert(*id, solution.clone());
            }
        }
    }

    let report = grade_unit_test(&test, &choices, &code_answers);
    assert_eq!(report.score, report.total);
    assert_eq!(report.percentage, 100);
    assert!(report.passed);
    assert!(report.results.iter().all(|r| r.correct));
}

#[test]
fn empty_submission_scores_0_and_fails() {
    let state = builtin_state();
    let test = state.get_unit_test(6).unwrap();
    let report = grade_unit_test(&test, &HashMap::new(), &HashMap::new());
    assert_eq!(report.score, 0);
    assert_eq!(report.percentage, 0);
    assert!(!report.passed);
}

#[test]
fn coding_question_case_flags_share_one_outcome() {
    let state = builtin_state();
    let test = state.get_unit_test(6).unwrap();
    let report = grade_unit_test(&test, &HashMap::new(), &HashMap::new());
    let coding = report
        .results
        .iter()
        .find(|r| !r.case_results.is_empty())
        .expect("unit 6 has a coding question");
    assert_eq!(coding.case_results, vec![false, false, false]);
}

fn choice_only_test(questions: u32) -> UnitTest {
    UnitTest {
        unit: 1,
        unit_title: "Synthetic".into(),
        questions: (1..=questions)
            .map(|id| Question::MultipleChoice {
                id,
                question: format!("q{}", id),
                options: vec!["a".into(), "b".into()],
                correct_answer: "a".into(),
            })
            .collect(),
    }
}

#[test]
fn pass_threshold_is_70_percent() {
    let test = choice_only_test(10);
    let answer = |n: u32| -> HashMap<u32, String> {
        (1..=n).map(|id| (id, "a".to_string())).collect()
    };

    let passing = grade_unit_test(&test, &answer(7), &HashMap::new());
    assert_eq!(passing.percentage, 70);
    assert!(passing.passed);

    let failing = grade_unit_test(&test, &answer(6), &HashMap::new());
    assert_eq!(failing.percentage, 60);
    assert!(!failing.passed);
}

// ========== Public DTOs ==========

#[test]
fn challenge_dto_never_leaks_solution_or_snippets() {
    let state = builtin_state();
    let ch = state.get_challenge(6, 1).unwrap();
    let value = serde_json::to_value(to_out(&ch)).unwrap();
    let obj = value.as_object().unwrap();
    assert!(!obj.contains_key("solution"));
    assert!(!obj.contains_key("requiredSnippets"));
    assert!(!obj.contains_key("expectedOutput"));
}

#[test]
fn unit_test_dto_never_leaks_answers() {
    let state = builtin_state();
    let test = state.get_unit_test(6).unwrap();
    let serialized = serde_json::to_string(&test_to_out(&test)).unwrap();
    assert!(!serialized.contains("correctAnswer"));
    assert!(!serialized.contains("correct_answer"));
    assert!(!serialized.contains("solution"));
    assert!(!serialized.contains("requiredSnippets"));
}

// ========== Content bank ==========

#[test]
fn bank_entries_shadow_builtins_for_the_same_slot() {
    let cfg: ContentConfig = toml::from_str(
        r#"
        [[challenges]]
        unit = 6
        lesson = 1
        title = "Replacement Health Challenge"
        solution = "print(\"ok\")"
        required_snippets = ["print"]
        expected_output = ["ok"]
        "#,
    )
    .unwrap();

    let state = AppState { content: Arc::new(InMemoryContent::with_bank(Some(cfg))) };
    let ch = state.get_challenge(6, 1).unwrap();
    assert_eq!(ch.title, "Replacement Health Challenge");
    assert_eq!(ch.source, ChallengeSource::ContentBank);

    // Builtins elsewhere are untouched.
    let other = state.get_challenge(3, 1).unwrap();
    assert_eq!(other.source, ChallengeSource::Builtin);
}

#[test]
fn bank_entries_without_snippets_are_skipped() {
    let cfg: ContentConfig = toml::from_str(
        r#"
        [[challenges]]
        unit = 6
        lesson = 1
        title = "Broken entry"
        "#,
    )
    .unwrap();

    let state = AppState { content: Arc::new(InMemoryContent::with_bank(Some(cfg))) };
    // The builtin keeps the slot.
    assert_eq!(state.get_challenge(6, 1).unwrap().source, ChallengeSource::Builtin);
}

// ========== Editor continuation through the logic layer ==========

#[test]
fn continuation_matches_the_editor_heuristic() {
    let through_logic = logic::continuation("  while x do").unwrap();
    assert_eq!(through_logic.insert, "    \n  end");
    assert_eq!(through_logic.cursor_col, 5);
    assert!(logic::continuation("return 1").is_none());
}
