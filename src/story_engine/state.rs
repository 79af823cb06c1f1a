use serde::{Deserialize, Serialize};

use crate::story_engine::models::{ChoiceEffect, Finding};

/// The learner's progress through one session — the patient chart, if you
/// will. Created at session start, mutated only by scene outcomes, and
/// discarded at process exit.
///
/// `anxiety` is deliberately unclamped: it can go negative or past any
/// display range, and the score formula uses the raw value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub anxiety: i32,
    pub correct_choices: u32,
    pub reputation: i32,
    /// "Diagnosis Clues" shown in the stats panel, discovery order.
    pub clues: Vec<String>,
    /// What the student is carrying: the starting kit plus anything picked
    /// up along the way (photos for the chart, lab slips).
    pub inventory: Vec<String>,
    /// Everything the player actually discovered; drives the workup recap.
    pub findings: Vec<Finding>,
    /// Hints already dispensed to this player, for anti-repetition.
    pub hints_seen: Vec<String>,
}

impl PlayerState {
    /// Fresh chart at the start of a session. Reputation starts at 50.
    pub fn new() -> Self {
        PlayerState {
            reputation: 50,
            ..PlayerState::default()
        }
    }

    /// Fold one option's fixed deltas into the chart.
    pub fn apply(&mut self, effect: &ChoiceEffect) {
        self.correct_choices += effect.correct;
        self.reputation += effect.reputation;
        self.anxiety += effect.anxiety;
        self.clues.extend(effect.clues.iter().cloned());
        self.findings.extend(effect.findings.iter().cloned());
        self.inventory.extend(effect.items.iter().cloned());
    }

    pub fn record_finding(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn record_item(&mut self, item: String) {
        self.inventory.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story_engine::models::FindingKind;

    #[test]
    fn new_state_starts_with_neutral_reputation() {
        let state = PlayerState::new();
        assert_eq!(state.reputation, 50);
        assert_eq!(state.anxiety, 0);
        assert_eq!(state.correct_choices, 0);
        assert!(state.clues.is_empty());
        assert!(state.findings.is_empty());
        assert!(state.inventory.is_empty());
    }

    #[test]
    fn apply_accumulates_all_deltas() {
        let mut state = PlayerState::new();
        let effect = ChoiceEffect::new()
            .correct(2)
            .reputation(10)
            .anxiety(-5)
            .clue("Persistent high fever >5 days")
            .finding(FindingKind::Exam, "polymorphous rash")
            .item("Photo of polymorphic rash (Added to patient chart)");

        state.apply(&effect);
        state.apply(&effect);

        assert_eq!(state.correct_choices, 4);
        assert_eq!(state.reputation, 70);
        assert_eq!(state.anxiety, -10);
        assert_eq!(state.clues.len(), 2);
        assert_eq!(state.findings.len(), 2);
        assert_eq!(state.inventory.len(), 2);
    }

    #[test]
    fn findings_preserve_discovery_order() {
        let mut state = PlayerState::new();
        state.record_finding(Finding::new(FindingKind::Vitals, "Temp 39.8°C"));
        state.record_finding(Finding::new(FindingKind::Exam, "strawberry tongue"));
        let texts: Vec<&str> = state.findings.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, ["Temp 39.8°C", "strawberry tongue"]);
    }
}
