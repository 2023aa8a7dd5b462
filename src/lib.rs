//! Backend library for the LuaLearn trainer: the content repository, the
//! substring answer verifier, the editor block-continuation heuristic, and
//! the HTTP/WebSocket transport around them.

pub mod config;
pub mod content;
pub mod domain;
pub mod editor;
pub mod logic;
pub mod protocol;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod util;
pub mod verifier;
