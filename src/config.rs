//! Loading the optional content bank (extra challenges) from TOML.
//!
//! See `ContentConfig` and `ChallengeCfg` for the expected schema.

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::{Challenge, ChallengeSource, TestCase};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct ContentConfig {
  #[serde(default)]
  pub challenges: Vec<ChallengeCfg>,
}

/// Challenge entry accepted in TOML configuration. Bank entries occupy a
/// (unit, lesson) slot before builtins do, so a bank can replace shipped
/// content without code changes.
#[derive(Clone, Debug, Deserialize)]
pub struct ChallengeCfg {
  pub unit: u32,
  pub lesson: u32,
  pub title: String,
  #[serde(default)] pub description: String,
  #[serde(default)] pub instructions: Vec<String>,
  #[serde(default)] pub starter_code: String,
  #[serde(default)] pub solution: String,
  #[serde(default)] pub required_snippets: Vec<String>,
  #[serde(default)] pub expected_output: Vec<String>,
  #[serde(default)] pub test_cases: Vec<TestCase>,
}

impl ChallengeCfg {
  pub fn into_challenge(self) -> Challenge {
    Challenge {
      unit: self.unit,
      lesson: self.lesson,
      source: ChallengeSource::ContentBank,
      title: self.title,
      description: self.description,
      instructions: self.instructions,
      starter_code: self.starter_code,
      solution: self.solution,
      required_snippets: self.required_snippets,
      expected_output: self.expected_output,
      test_cases: self.test_cases,
    }
  }
}

/// Attempt to load `ContentConfig` from CONTENT_CONFIG_PATH. On any
/// parsing/IO error, returns None; the builtins alone are served then.
pub fn load_content_config_from_env() -> Option<ContentConfig> {
  let path = std::env::var("CONTENT_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<ContentConfig>(&s) {
      Ok(cfg) => {
        info!(target: "lualearn_backend", %path, "Loaded content bank (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "lualearn_backend", %path, error = %e, "Failed to parse TOML content bank");
        None
      }
    },
    Err(e) => {
      error!(target: "lualearn_backend", %path, error = %e, "Failed to read TOML content bank file");
      None
    }
  }
}
