//! # ddx_adventure
//!
//! A terminal choose-your-own-adventure that teaches differential diagnosis.
//!
//! Each story is a short on-call shift: the player fields a page, works a
//! pediatric case scene by scene (history, exam, workup, diagnosis), and is
//! graded on clinical judgment. Wrong-but-safe answers loop back with
//! feedback; a handful of genuinely dangerous answers end the shift early.
//!
//! ## How it works
//!
//! 1. Pick a [`Story`] — each is a fixed data table under
//!    [`story_engine::stories`] (scene graph, hint pool, ending text).
//! 2. Build a [`Session`] with a [`SessionConfig`] and two ports: a
//!    [`Presenter`](console::Presenter) for output and an
//!    [`InputSource`](console::InputSource) for input.
//! 3. Call [`Session::run`] — it drives the scene loop (stats panel, setup
//!    narration, numbered menu, feedback, transition), serves hints on the
//!    `hint` keyword, and closes with a score, tier-matched ending, and case
//!    summary. The returned [`SessionReport`] carries the final chart.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   hint draws of a previous session — useful for tests.
//! - **Port-based I/O**: the binary wires up the real console with paced,
//!   colored output; tests run the same engine against scripted input and an
//!   in-memory transcript.
//! - **Findings-driven narration**: the workup scene recaps what the player
//!   actually discovered, so skipping the exam changes the attending's recap.
//!
//! ## Quick start
//!
//! ```rust
//! use ddx_adventure::console::{ScriptedInput, TranscriptPresenter};
//! use ddx_adventure::{stories, Session, SessionConfig};
//!
//! let story = stories::kawasaki::story();
//! let inputs = ["Casey", "", "1", "", "1", "", "1", "", "1", "", "1", ""];
//! let mut session = Session::new(
//!     SessionConfig { max_hints: 3, rng_seed: Some(7) },
//!     TranscriptPresenter::new(),
//!     ScriptedInput::new(inputs),
//! );
//!
//! let report = session.run(&story).expect("scripted run");
//! assert!(report.won);
//! println!("score: {}, tier: {:?}", report.score, report.tier);
//! ```

pub mod console;
pub mod story_engine;

// Convenience re-exports so callers can use `ddx_adventure::Session`
// directly without reaching into `story_engine::`.
pub use story_engine::{
    compute_score, stories, ChoiceEffect, ChoiceOption, EndingSet, EndingTier, Finding,
    FindingKind, HintOutcome, HintState, Line, PlayerState, Scene, SceneSetup, Session,
    SessionConfig, SessionReport, Story, StoryError, StoryId, Tone, Transition, HINT_KEYWORD,
};

#[cfg(test)]
mod tests;
