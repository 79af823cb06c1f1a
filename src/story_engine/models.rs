use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Narration primitives
// ---------------------------------------------------------------------------

/// Who (or what) a narration line belongs to. The console maps each tone to
/// one terminal colour; the engine itself never touches colour codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    /// The attending physician's dialogue.
    Attending,
    /// Scenario description and patient/family dialogue.
    Scenario,
    /// The player's internal monologue.
    Inner,
    /// Positive feedback.
    Success,
    /// Negative feedback.
    Failure,
    /// Interface chrome: headers, summaries, instructions.
    Ui,
}

/// One line of paced narration. `{name}` in the text is replaced with the
/// player's name at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
}

impl Line {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Line { text: text.into(), tone }
    }

    pub fn attending(text: impl Into<String>) -> Self { Line::new(Tone::Attending, text) }
    pub fn scenario(text: impl Into<String>) -> Self { Line::new(Tone::Scenario, text) }
    pub fn inner(text: impl Into<String>) -> Self { Line::new(Tone::Inner, text) }
    pub fn success(text: impl Into<String>) -> Self { Line::new(Tone::Success, text) }
    pub fn failure(text: impl Into<String>) -> Self { Line::new(Tone::Failure, text) }
    pub fn ui(text: impl Into<String>) -> Self { Line::new(Tone::Ui, text) }
}

// ---------------------------------------------------------------------------
// Findings
// ---------------------------------------------------------------------------

/// Where a finding came from. The workup recap only reads `Exam` entries,
/// so vitals, history, and lab orders never leak into the exam clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingKind {
    Vitals,
    History,
    Exam,
    Workup,
    Diagnosis,
}

/// A discrete fact the player has uncovered, in discovery order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub text: String,
    pub kind: FindingKind,
}

impl Finding {
    pub fn new(kind: FindingKind, text: impl Into<String>) -> Self {
        Finding { text: text.into(), kind }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

// ---------------------------------------------------------------------------
// Scene graph
// ---------------------------------------------------------------------------

/// Where the engine goes after an option is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Move on to the next scene in the story's order.
    Advance,
    /// Re-prompt the same scene (incorrect or merely informational choices).
    Stay,
    /// Terminate the session and hand off to the ending resolver.
    End { win: bool },
}

/// State mutation attached to one menu option. All deltas are fixed at
/// design time; an option either is or is not on the correct path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceEffect {
    pub correct: u32,
    pub reputation: i32,
    pub anxiety: i32,
    pub clues: Vec<String>,
    pub findings: Vec<Finding>,
    /// Inventory items granted by this option (photos, lab slips).
    pub items: Vec<String>,
}

impl ChoiceEffect {
    pub fn new() -> Self {
        ChoiceEffect::default()
    }

    pub fn correct(mut self, n: u32) -> Self {
        self.correct = n;
        self
    }

    pub fn reputation(mut self, delta: i32) -> Self {
        self.reputation = delta;
        self
    }

    pub fn anxiety(mut self, delta: i32) -> Self {
        self.anxiety = delta;
        self
    }

    pub fn clue(mut self, text: impl Into<String>) -> Self {
        self.clues.push(text.into());
        self
    }

    pub fn finding(mut self, kind: FindingKind, text: impl Into<String>) -> Self {
        self.findings.push(Finding::new(kind, text));
        self
    }

    pub fn item(mut self, text: impl Into<String>) -> Self {
        self.items.push(text.into());
        self
    }
}

/// One entry in a scene's fixed menu.
#[derive(Debug, Clone)]
pub struct ChoiceOption {
    pub label: String,
    pub feedback: Vec<Line>,
    pub effect: ChoiceEffect,
    pub transition: Transition,
}

/// How a scene's setup narration is produced.
#[derive(Debug, Clone)]
pub enum SceneSetup {
    /// Fixed lines, rendered as written.
    Static(Vec<Line>),
    /// Setup assembled from the player's recorded findings: `lead_in`, then
    /// clauses built from `fever_template` (`{finding}`) and `exam_template`
    /// (`{findings}`), then `epilogue`. With zero findings the `fallback`
    /// lines are used instead of the lead-in and clauses.
    WorkupRecap {
        lead_in: Vec<Line>,
        fever_template: String,
        exam_template: String,
        fallback: Vec<Line>,
        epilogue: Vec<Line>,
    },
}

/// One decision point: setup narration, a fixed menu of options, and an
/// in-character rejection line for unrecognised input.
#[derive(Debug, Clone)]
pub struct Scene {
    pub name: String,
    pub setup: SceneSetup,
    /// Findings recorded when the scene opens, before any choice (e.g. lab
    /// results revealed by the setup narration itself).
    pub setup_findings: Vec<Finding>,
    /// Inventory items granted when the scene opens (e.g. the printed lab
    /// report handed over with the setup narration).
    pub setup_items: Vec<String>,
    pub prompt: String,
    pub options: Vec<ChoiceOption>,
    pub invalid: Line,
}

// ---------------------------------------------------------------------------
// Stories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoryId {
    Kawasaki,
    Pheochromocytoma,
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoryId::Kawasaki         => write!(f, "Kawasaki Disease"),
            StoryId::Pheochromocytoma => write!(f, "Pheochromocytoma"),
        }
    }
}

/// Closing narration per outcome. The win lead plays first, then exactly one
/// tier block selected by score; a non-win terminal plays `loss` instead.
#[derive(Debug, Clone)]
pub struct EndingSet {
    pub win_lead: Vec<Line>,
    pub top: Vec<Line>,
    pub solid: Vec<Line>,
    pub rough: Vec<Line>,
    pub loss: Vec<Line>,
    pub signoff: Vec<Line>,
}

/// A complete story variant: fixed scene graph plus all flavour data. One
/// engine drives every story; variants differ only in their tables.
#[derive(Debug, Clone)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    /// Attending's display name, e.g. "Dr. Crook".
    pub attending: String,
    pub banner: &'static str,
    /// Lines shown before the player is asked for a name.
    pub intro: Vec<Line>,
    pub name_prompt: String,
    /// Lines shown after the name is collected; may use `{name}`.
    pub opening: Vec<Line>,
    pub scenes: Vec<Scene>,
    /// What the student carries onto the ward before the first scene.
    pub starting_inventory: Vec<String>,
    /// Clinical-pearl pool for the hint subsystem. Non-empty by contract.
    pub hint_pool: Vec<String>,
    pub endings: EndingSet,
}
