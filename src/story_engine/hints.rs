//! Bounded-use clinical-pearl dispenser.
//!
//! At most `max` hints per session, preferring pearls the player has not
//! seen yet. Once every pearl in the pool has been shown, repeats are
//! allowed silently; an empty pool falls back to a generic pearl. The
//! budget is consumed on every successful dispense, repeats included.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Dispensed when the pool for the active case is empty.
pub const FALLBACK_HINT: &str =
    "Focus on the pattern of symptoms and their timing. Consider the patient demographics.";

/// Result of one hint request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintOutcome {
    /// A pearl was dispensed; `remaining` is the budget left afterwards.
    Pearl { text: String, remaining: u32 },
    /// Budget exhausted. No state was consumed.
    Exhausted,
}

/// Session-wide hint budget. Initialised at session start, never reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintState {
    used: u32,
    max: u32,
}

impl HintState {
    pub fn new(max: u32) -> Self {
        HintState { used: 0, max }
    }

    pub fn used(&self) -> u32 {
        self.used
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn remaining(&self) -> u32 {
        self.max - self.used
    }

    /// Dispense one hint from `pool`. `seen` is the player's record of
    /// already-shown pearls; unseen pearls are preferred and recorded,
    /// repeats are drawn from the full pool without recording.
    pub fn dispense<R: Rng>(
        &mut self,
        pool: &[String],
        seen: &mut Vec<String>,
        rng: &mut R,
    ) -> HintOutcome {
        if self.used >= self.max {
            return HintOutcome::Exhausted;
        }
        self.used += 1;
        let remaining = self.max - self.used;

        let unseen: Vec<&String> = pool.iter().filter(|h| !seen.contains(h)).collect();
        let text = if !unseen.is_empty() {
            let pick = unseen[rng.gen_range(0..unseen.len())].clone();
            seen.push(pick.clone());
            pick
        } else if !pool.is_empty() {
            pool[rng.gen_range(0..pool.len())].clone()
        } else {
            FALLBACK_HINT.to_string()
        };

        log::debug!("hint dispensed ({} remaining): {text}", remaining);
        HintOutcome::Pearl { text, remaining }
    }
}
