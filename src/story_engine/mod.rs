//! Core story engine — scene graph, player state, hints, and scoring.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: lines, findings, scenes, stories |
//! | `state`     | The player's mutable chart for one session |
//! | `hints`     | Bounded, anti-repeating clinical-pearl dispenser |
//! | `narration` | Findings-driven recap text and the list-join rule |
//! | `score`     | Final score formula and ending-tier thresholds |
//! | `engine`    | The session state machine driving both ports |
//! | `stories`   | One data table per clinical case |

pub mod engine;
pub mod hints;
pub mod models;
pub mod narration;
pub mod score;
pub mod state;
pub mod stories;

use thiserror::Error;

/// Failures the engine can surface to its host. Everything else (invalid
/// menu input, exhausted hints) is recovered in-character and never becomes
/// an error.
#[derive(Debug, Error)]
pub enum StoryError {
    #[error("failed to read player input: {0}")]
    Io(#[from] std::io::Error),
    /// The input stream ended (EOF). Hosts treat this like an interrupt.
    #[error("input stream closed")]
    InputClosed,
}

// Re-export the public API surface so callers can use
// `story_engine::Session` without reaching into sub-modules.
pub use engine::{Session, SessionConfig, SessionReport, HINT_KEYWORD};
pub use hints::{HintOutcome, HintState, FALLBACK_HINT};
pub use models::{
    ChoiceEffect, ChoiceOption, EndingSet, Finding, FindingKind, Line, Scene, SceneSetup, Story,
    StoryId, Tone, Transition,
};
pub use narration::{join_with_and, workup_recap};
pub use score::{compute_score, EndingTier};
pub use state::PlayerState;
