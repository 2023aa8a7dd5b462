//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.
//!
//! Public DTOs never carry solutions, correct answers, or the required
//! snippet lists; `to_out`/`test_to_out` are the only conversions handlers
//! use.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Challenge, ChallengeSource, Question, TestCase, TestReport, UnitTest};
use crate::editor::ContinuationDecision;

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    GetChallenge {
        unit: u32,
        lesson: u32,
    },
    RunCode {
        unit: u32,
        lesson: u32,
        code: String,
    },
    GetSolution {
        unit: u32,
        lesson: u32,
    },
    Continuation {
        #[serde(rename = "previousLine")]
        previous_line: String,
    },
    GetUnitTest {
        unit: u32,
    },
    SubmitUnitTest {
        unit: u32,
        #[serde(default)]
        choices: HashMap<u32, String>,
        #[serde(default, rename = "codeAnswers")]
        code_answers: HashMap<u32, String>,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Challenge {
        challenge: ChallengeOut,
    },
    RunResult {
        passed: bool,
        output: Vec<String>,
        #[serde(rename = "caseResults")]
        case_results: Vec<bool>,
    },
    Solution {
        code: String,
    },
    Continuation {
        insert: bool,
        text: Option<String>,
        #[serde(rename = "cursorCol")]
        cursor_col: Option<usize>,
    },
    UnitTest {
        test: UnitTestOut,
    },
    TestReport {
        report: TestReport,
    },
    Error {
        message: String,
    },
}

impl ServerWsMessage {
    pub fn continuation(decision: Option<ContinuationDecision>) -> Self {
        match decision {
            Some(d) => ServerWsMessage::Continuation {
                insert: true,
                text: Some(d.insert),
                cursor_col: Some(d.cursor_col),
            },
            None => ServerWsMessage::Continuation { insert: false, text: None, cursor_col: None },
        }
    }
}

/// DTO used by both WS and HTTP for challenge delivery. Carries everything
/// the learner may see before solving: no solution, no snippet list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeOut {
    pub unit: u32,
    pub lesson: u32,
    pub source: ChallengeSource,
    pub title: String,
    pub description: String,
    pub instructions: Vec<String>,
    pub starter_code: String,
}

/// Convert full `Challenge` (internal) to the public DTO.
pub fn to_out(c: &Challenge) -> ChallengeOut {
    ChallengeOut {
        unit: c.unit,
        lesson: c.lesson,
        source: c.source.clone(),
        title: c.title.clone(),
        description: c.description.clone(),
        instructions: c.instructions.clone(),
        starter_code: c.starter_code.clone(),
    }
}

/// Public view of a quiz question: prompts and options only.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionOut {
    MultipleChoice {
        id: u32,
        question: String,
        options: Vec<String>,
    },
    Coding {
        id: u32,
        question: String,
        #[serde(rename = "starterCode")]
        starter_code: String,
        #[serde(rename = "testCases")]
        test_cases: Vec<TestCase>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitTestOut {
    pub unit: u32,
    pub unit_title: String,
    pub questions: Vec<QuestionOut>,
}

/// Convert full `UnitTest` (internal) to the public DTO.
pub fn test_to_out(t: &UnitTest) -> UnitTestOut {
    let questions = t
        .questions
        .iter()
        .map(|q| match q {
            Question::MultipleChoice { id, question, options, .. } => QuestionOut::MultipleChoice {
                id: *id,
                question: question.clone(),
                options: options.clone(),
            },
            Question::Coding { id, question, starter_code, test_cases, .. } => QuestionOut::Coding {
                id: *id,
                question: question.clone(),
                starter_code: starter_code.clone(),
                test_cases: test_cases.clone(),
            },
        })
        .collect();
    UnitTestOut { unit: t.unit, unit_title: t.unit_title.clone(), questions }
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
pub struct ChallengeQuery {
    pub unit: u32,
    pub lesson: u32,
}

#[derive(Debug, Deserialize)]
pub struct UnitQuery {
    pub unit: u32,
}

#[derive(Deserialize)]
pub struct RunIn {
    pub unit: u32,
    pub lesson: u32,
    pub code: String,
}
#[derive(Serialize)]
pub struct RunOut {
    pub passed: bool,
    pub output: Vec<String>,
    #[serde(rename = "caseResults")]
    pub case_results: Vec<bool>,
}

#[derive(Serialize)]
pub struct SolutionOut {
    pub code: String,
}

#[derive(Deserialize)]
pub struct ContinuationIn {
    #[serde(rename = "previousLine")]
    pub previous_line: String,
}
#[derive(Serialize)]
pub struct ContinuationOut {
    pub insert: bool,
    pub text: Option<String>,
    #[serde(rename = "cursorCol")]
    pub cursor_col: Option<usize>,
}

impl From<Option<ContinuationDecision>> for ContinuationOut {
    fn from(decision: Option<ContinuationDecision>) -> Self {
        match decision {
            Some(d) => {
                ContinuationOut { insert: true, text: Some(d.insert), cursor_col: Some(d.cursor_col) }
            }
            None => ContinuationOut { insert: false, text: None, cursor_col: None },
        }
    }
}

#[derive(Deserialize)]
pub struct SubmitTestIn {
    pub unit: u32,
    #[serde(default)]
    pub choices: HashMap<u32, String>,
    #[serde(default, rename = "codeAnswers")]
    pub code_answers: HashMap<u32, String>,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
