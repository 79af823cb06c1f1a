//! Story variants: one data table per clinical case.
//!
//! Every module exposes `pub fn story() -> Story`. The engine is identical
//! across variants; only these tables differ. Each scene carries exactly
//! four options with at least one advancing (or terminal) path, so the
//! player can loop but never get stuck off a winnable route.

pub mod kawasaki;
pub mod pheochromocytoma;

use crate::story_engine::models::{ChoiceEffect, ChoiceOption, Line, Story, Transition};

/// All built-in cases, menu order.
pub fn all() -> Vec<Story> {
    vec![kawasaki::story(), pheochromocytoma::story()]
}

// ---------------------------------------------------------------------------
// Table-building helpers
// ---------------------------------------------------------------------------

pub(crate) fn advance(
    label: impl Into<String>,
    feedback: Vec<Line>,
    effect: ChoiceEffect,
) -> ChoiceOption {
    ChoiceOption {
        label: label.into(),
        feedback,
        effect,
        transition: Transition::Advance,
    }
}

pub(crate) fn stay(
    label: impl Into<String>,
    feedback: Vec<Line>,
    effect: ChoiceEffect,
) -> ChoiceOption {
    ChoiceOption {
        label: label.into(),
        feedback,
        effect,
        transition: Transition::Stay,
    }
}

pub(crate) fn end(
    label: impl Into<String>,
    feedback: Vec<Line>,
    effect: ChoiceEffect,
    win: bool,
) -> ChoiceOption {
    ChoiceOption {
        label: label.into(),
        feedback,
        effect,
        transition: Transition::End { win },
    }
}
