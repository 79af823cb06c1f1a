//! Final score and ending-tier selection.
//!
//! The score convention is anxiety-subtractive: ten points per correct
//! clinical decision, plus reputation, minus anxiety. Tier thresholds are
//! strict, so a score of exactly 100 lands in the middle tier.

use serde::{Deserialize, Serialize};

use crate::story_engine::state::PlayerState;

/// `correct_choices * 10 + reputation - anxiety`. Pure function of the
/// final chart; no randomness, no side effects.
pub fn compute_score(state: &PlayerState) -> i32 {
    state.correct_choices as i32 * 10 + state.reputation - state.anxiety
}

/// Which closing narration a winning session earns. Every integer score
/// maps to exactly one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndingTier {
    /// score > 100
    Top,
    /// 50 < score <= 100
    Solid,
    /// score <= 50
    Rough,
}

impl EndingTier {
    pub fn select(score: i32) -> Self {
        if score > 100 {
            EndingTier::Top
        } else if score > 50 {
            EndingTier::Solid
        } else {
            EndingTier::Rough
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(correct: u32, reputation: i32, anxiety: i32) -> PlayerState {
        PlayerState {
            correct_choices: correct,
            reputation,
            anxiety,
            ..PlayerState::default()
        }
    }

    #[test]
    fn score_formula_matches_worked_example() {
        // 5*10 + 70 - 15 = 105
        assert_eq!(compute_score(&chart(5, 70, 15)), 105);
    }

    #[test]
    fn score_can_go_negative() {
        assert_eq!(compute_score(&chart(0, -10, 30)), -40);
    }

    #[test]
    fn tier_boundaries_are_strict() {
        assert_eq!(EndingTier::select(101), EndingTier::Top);
        assert_eq!(EndingTier::select(100), EndingTier::Solid);
        assert_eq!(EndingTier::select(51), EndingTier::Solid);
        assert_eq!(EndingTier::select(50), EndingTier::Rough);
        assert_eq!(EndingTier::select(0), EndingTier::Rough);
        assert_eq!(EndingTier::select(-40), EndingTier::Rough);
    }

    #[test]
    fn every_score_maps_to_exactly_one_tier() {
        for score in -200..=300 {
            let tier = EndingTier::select(score);
            let hits = [
                score > 100,
                (51..=100).contains(&score),
                score <= 50,
            ]
            .iter()
            .filter(|&&b| b)
            .count();
            assert_eq!(hits, 1, "score {score} should hit one tier, got {tier:?}");
        }
    }
}
