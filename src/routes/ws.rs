//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to core logic. We reply with a single JSON message per request.

use std::sync::Arc;

use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{debug, error, info, instrument};

use crate::logic::*;
use crate::protocol::{test_to_out, to_out, ClientWsMessage, ServerWsMessage};
use crate::state::AppState;
use crate::util::trunc_for_log;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "lualearn_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "lualearn_backend", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        // Parse, dispatch, serialize response.
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target: "lualearn_backend", msg = %trunc_for_log(&txt, 200), "WS received");
            handle_client_ws(incoming, &state)
          }
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        };

        let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "lualearn_backend", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "lualearn_backend", "WebSocket disconnected");
}

#[instrument(level = "info", skip(state))]
fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::GetChallenge { unit, lesson } => match state.get_challenge(unit, lesson) {
      Some(ch) => {
        tracing::info!(target: "challenge", %unit, %lesson, "WS challenge served");
        ServerWsMessage::Challenge { challenge: to_out(&ch) }
      }
      None => ServerWsMessage::Error {
        message: format!("Unknown challenge: unit {} lesson {}", unit, lesson),
      },
    },

    ClientWsMessage::RunCode { unit, lesson, code } => {
      match run_challenge(state, unit, lesson, &code) {
        Some(r) => {
          tracing::info!(target: "challenge", %unit, %lesson, passed = r.passed, "WS run evaluated");
          ServerWsMessage::RunResult { passed: r.passed, output: r.output, case_results: r.case_results }
        }
        None => ServerWsMessage::Error {
          message: format!("Unknown challenge: unit {} lesson {}", unit, lesson),
        },
      }
    }

    ClientWsMessage::GetSolution { unit, lesson } => match solution_for(state, unit, lesson) {
      Some(code) => {
        tracing::info!(target: "challenge", %unit, %lesson, "WS solution revealed");
        ServerWsMessage::Solution { code }
      }
      None => ServerWsMessage::Error {
        message: format!("Unknown challenge: unit {} lesson {}", unit, lesson),
      },
    },

    ClientWsMessage::Continuation { previous_line } => {
      ServerWsMessage::continuation(continuation(&previous_line))
    }

    ClientWsMessage::GetUnitTest { unit } => match state.get_unit_test(unit) {
      Some(t) => {
        tracing::info!(target: "challenge", %unit, "WS unit test served");
        ServerWsMessage::UnitTest { test: test_to_out(&t) }
      }
      None => ServerWsMessage::Error { message: format!("No unit test for unit {}", unit) },
    },

    ClientWsMessage::SubmitUnitTest { unit, choices, code_answers } => {
      match state.get_unit_test(unit) {
        Some(t) => ServerWsMessage::TestReport { report: grade_unit_test(&t, &choices, &code_answers) },
        None => ServerWsMessage::Error { message: format!("No unit test for unit {}", unit) },
      }
    }
  }
}
