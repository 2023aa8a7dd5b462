//! Application state: the content repository and its in-memory backing.
//!
//! This module owns:
//!   - the `ContentRepository` lookup contract
//!   - the in-memory table built from the optional TOML bank plus builtins
//!   - the shared `AppState` handed to every handler
//!
//! Challenge definitions are immutable after startup; every accessor hands
//! out clones and nothing here is mutated at request time.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::config::{load_content_config_from_env, ContentConfig};
use crate::content::{builtin_challenges, builtin_unit_tests};
use crate::domain::{Challenge, ChallengeSource, UnitTest};

/// Lookup contract for lesson content. The in-memory table implements it
/// today; a file-based or networked store can implement the same contract
/// without touching the verifier or the editor heuristic.
pub trait ContentRepository: Send + Sync {
    fn challenge(&self, unit: u32, lesson: u32) -> Option<&Challenge>;
    fn unit_test(&self, unit: u32) -> Option<&UnitTest>;
    /// All (unit, lesson) slots currently present, in unspecified order.
    fn challenge_slots(&self) -> Vec<(u32, u32)>;
}

pub struct InMemoryContent {
    by_slot: HashMap<(u32, u32), Challenge>,
    tests_by_unit: HashMap<u32, UnitTest>,
}

impl InMemoryContent {
    /// Build the table from an optional bank plus builtins. Bank entries are
    /// inserted first; builtins never overwrite an occupied slot.
    #[instrument(level = "info", skip_all)]
    pub fn with_bank(bank: Option<ContentConfig>) -> Self {
        let mut by_slot = HashMap::<(u32, u32), Challenge>::new();

        if let Some(cfg) = bank {
            for cc in cfg.challenges {
                if cc.required_snippets.is_empty() {
                    // A challenge nothing can pass (or fail) is a data error.
                    error!(target: "challenge", unit = cc.unit, lesson = cc.lesson, "Skipping bank item: missing required_snippets.");
                    continue;
                }
                let ch = cc.into_challenge();
                by_slot.insert((ch.unit, ch.lesson), ch);
            }
        }

        for ch in builtin_challenges() {
            by_slot.entry((ch.unit, ch.lesson)).or_insert(ch);
        }

        let mut tests_by_unit = HashMap::<u32, UnitTest>::new();
        for t in builtin_unit_tests() {
            tests_by_unit.insert(t.unit, t);
        }

        // Inventory summary by unit/source.
        let mut count_by_unit: HashMap<u32, (usize, usize)> = HashMap::new();
        for ch in by_slot.values() {
            let entry = count_by_unit.entry(ch.unit).or_insert((0, 0));
            match ch.source {
                ChallengeSource::ContentBank => entry.0 += 1,
                ChallengeSource::Builtin => entry.1 += 1,
            }
        }
        for (unit, (bank, builtin)) in count_by_unit {
            info!(target: "challenge", %unit, content_bank = bank, builtin = builtin, "Startup challenge inventory");
        }
        info!(target: "challenge", unit_tests = tests_by_unit.len(), "Startup unit-test inventory");

        Self { by_slot, tests_by_unit }
    }

    /// Build from the environment (CONTENT_CONFIG_PATH, if set).
    pub fn from_env() -> Self {
        Self::with_bank(load_content_config_from_env())
    }
}

impl ContentRepository for InMemoryContent {
    fn challenge(&self, unit: u32, lesson: u32) -> Option<&Challenge> {
        self.by_slot.get(&(unit, lesson))
    }

    fn unit_test(&self, unit: u32) -> Option<&UnitTest> {
        self.tests_by_unit.get(&unit)
    }

    fn challenge_slots(&self) -> Vec<(u32, u32)> {
        self.by_slot.keys().copied().collect()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentRepository>,
}

impl AppState {
    /// Build shared application state from env (content bank + builtins).
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        Self { content: Arc::new(InMemoryContent::from_env()) }
    }

    /// Read-only access to a challenge by (unit, lesson).
    #[instrument(level = "debug", skip(self), fields(%unit, %lesson))]
    pub fn get_challenge(&self, unit: u32, lesson: u32) -> Option<Challenge> {
        self.content.challenge(unit, lesson).cloned()
    }

    /// Read-only access to a unit's quiz.
    #[instrument(level = "debug", skip(self), fields(%unit))]
    pub fn get_unit_test(&self, unit: u32) -> Option<UnitTest> {
        self.content.unit_test(unit).cloned()
    }
}
