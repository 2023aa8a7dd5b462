//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented; unknown content becomes 404 + JSON body.

use std::sync::Arc;

use axum::{
  extract::{Query, State},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use tracing::{info, instrument};

use crate::logic::*;
use crate::protocol::*;
use crate::state::AppState;

fn not_found(message: String) -> Response {
  (StatusCode::NOT_FOUND, Json(ErrorOut { message })).into_response()
}

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
  Json(HealthOut { ok: true })
}

#[instrument(level = "info", skip(state), fields(%q.unit, %q.lesson))]
pub async fn http_get_challenge(
  State(state): State<Arc<AppState>>,
  Query(q): Query<ChallengeQuery>,
) -> Response {
  match state.get_challenge(q.unit, q.lesson) {
    Some(ch) => {
      info!(target: "challenge", unit = q.unit, lesson = q.lesson, "HTTP challenge served");
      Json(to_out(&ch)).into_response()
    }
    None => not_found(format!("Unknown challenge: unit {} lesson {}", q.unit, q.lesson)),
  }
}

#[instrument(level = "info", skip(state), fields(%q.unit, %q.lesson))]
pub async fn http_get_solution(
  State(state): State<Arc<AppState>>,
  Query(q): Query<ChallengeQuery>,
) -> Response {
  match solution_for(&state, q.unit, q.lesson) {
    Some(code) => {
      info!(target: "challenge", unit = q.unit, lesson = q.lesson, "HTTP solution revealed");
      Json(SolutionOut { code }).into_response()
    }
    None => not_found(format!("Unknown challenge: unit {} lesson {}", q.unit, q.lesson)),
  }
}

#[instrument(level = "info", skip(state, body), fields(%body.unit, %body.lesson, code_len = body.code.len()))]
pub async fn http_post_run(
  State(state): State<Arc<AppState>>,
  Json(body): Json<RunIn>,
) -> Response {
  match run_challenge(&state, body.unit, body.lesson, &body.code) {
    Some(r) => {
      info!(target: "challenge", unit = body.unit, lesson = body.lesson, passed = r.passed, "HTTP run evaluated");
      Json(RunOut { passed: r.passed, output: r.output, case_results: r.case_results })
        .into_response()
    }
    None => not_found(format!("Unknown challenge: unit {} lesson {}", body.unit, body.lesson)),
  }
}

#[instrument(level = "debug", skip(body), fields(line_len = body.previous_line.len()))]
pub async fn http_post_continuation(Json(body): Json<ContinuationIn>) -> impl IntoResponse {
  let decision = continuation(&body.previous_line);
  Json(ContinuationOut::from(decision))
}

#[instrument(level = "info", skip(state), fields(%q.unit))]
pub async fn http_get_unit_test(
  State(state): State<Arc<AppState>>,
  Query(q): Query<UnitQuery>,
) -> Response {
  match state.get_unit_test(q.unit) {
    Some(t) => {
      info!(target: "challenge", unit = q.unit, "HTTP unit test served");
      Json(test_to_out(&t)).into_response()
    }
    None => not_found(format!("No unit test for unit {}", q.unit)),
  }
}

#[instrument(level = "info", skip(state, body), fields(%body.unit))]
pub async fn http_post_submit_unit_test(
  State(state): State<Arc<AppState>>,
  Json(body): Json<SubmitTestIn>,
) -> Response {
  match state.get_unit_test(body.unit) {
    Some(t) => {
      let report = grade_unit_test(&t, &body.choices, &body.code_answers);
      Json(report).into_response()
    }
    None => not_found(format!("No unit test for unit {}", body.unit)),
  }
}
