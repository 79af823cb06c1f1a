//! The session driver: one state machine over a story's scene table.
//!
//! The engine owns the player chart and the hint budget, and drives the
//! presentation and input ports. It never routes dynamically on
//! accumulated state — transitions are fixed per option at design time;
//! only the narration text reacts to what the player discovered.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::console::{InputSource, Presenter};
use crate::story_engine::hints::{HintOutcome, HintState};
use crate::story_engine::models::{Line, Scene, SceneSetup, Story, StoryId, Transition};
use crate::story_engine::narration::workup_recap;
use crate::story_engine::score::{compute_score, EndingTier};
use crate::story_engine::state::PlayerState;
use crate::story_engine::StoryError;

/// Reserved keyword that routes to the hint subsystem instead of the menu.
pub const HINT_KEYWORD: &str = "hint";

// ---------------------------------------------------------------------------
// Configuration / report
// ---------------------------------------------------------------------------

/// Session knobs. `rng_seed` reproduces the exact hint draws of a previous
/// session — useful for tests; `None` uses entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub max_hints: u32,
    pub rng_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            max_hints: 3,
            rng_seed: None,
        }
    }
}

/// Everything a host needs to know about a finished session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub story: StoryId,
    pub player: PlayerState,
    pub won: bool,
    pub score: i32,
    /// `None` on a non-win terminal.
    pub tier: Option<EndingTier>,
    pub hints_used: u32,
    pub max_hints: u32,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

enum SceneFlow {
    Advance,
    End { win: bool },
}

/// One interactive playthrough. Generic over the two ports so the binary
/// runs it against the real console and tests run it fully scripted.
pub struct Session<P: Presenter, I: InputSource> {
    presenter: P,
    input: I,
    rng: StdRng,
    state: PlayerState,
    hints: HintState,
}

impl<P: Presenter, I: InputSource> Session<P, I> {
    pub fn new(config: SessionConfig, presenter: P, input: I) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Session {
            presenter,
            input,
            rng,
            state: PlayerState::new(),
            hints: HintState::new(config.max_hints),
        }
    }

    /// Read access for hosts that want the transcript after `run`.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Play `story` from the title banner to the ending summary.
    pub fn run(&mut self, story: &Story) -> Result<SessionReport, StoryError> {
        self.state
            .inventory
            .extend(story.starting_inventory.iter().cloned());
        self.introduce(story)?;

        let mut idx = 0;
        let won = loop {
            let scene = story.scenes[idx].clone();
            log::debug!("entering scene {:?} ({idx})", scene.name);
            match self.play_scene(story, &scene)? {
                SceneFlow::Advance => {
                    idx += 1;
                    if idx >= story.scenes.len() {
                        break true;
                    }
                    self.pause_for_enter()?;
                }
                SceneFlow::End { win } => {
                    self.pause_for_enter()?;
                    break win;
                }
            }
        };

        log::info!("story {:?} finished, won={won}", story.id);
        Ok(self.finish(story, won))
    }

    // -- introduction -------------------------------------------------------

    fn introduce(&mut self, story: &Story) -> Result<(), StoryError> {
        self.presenter.banner(story.banner);
        self.presenter.divider();
        for line in story.intro.clone() {
            self.render(&line);
        }
        self.state.name = self.input.read_line(&story.name_prompt)?;
        for line in story.opening.clone() {
            self.render(&line);
        }
        self.pause_for_enter()
    }

    // -- scene protocol -----------------------------------------------------

    fn play_scene(&mut self, story: &Story, scene: &Scene) -> Result<SceneFlow, StoryError> {
        self.stats_panel(story);
        self.render_setup(scene);
        for finding in scene.setup_findings.clone() {
            self.state.record_finding(finding);
        }
        for item in scene.setup_items.clone() {
            self.state.record_item(item);
        }

        loop {
            self.presenter.instant(&format!("\n{}", scene.prompt));
            for (i, option) in scene.options.iter().enumerate() {
                self.presenter.instant(&format!("\n{}. {}", i + 1, option.label));
            }
            let prompt = format!(
                "\nYour choice (1-{} or '{HINT_KEYWORD}'): ",
                scene.options.len()
            );
            let raw = self.input.read_line(&prompt)?;
            let choice = raw.to_lowercase();

            if choice == HINT_KEYWORD {
                self.dispense_hint(story);
                continue;
            }

            let picked = choice
                .parse::<usize>()
                .ok()
                .filter(|&n| n >= 1 && n <= scene.options.len());
            let Some(n) = picked else {
                self.render(&scene.invalid.clone());
                continue;
            };

            let option = &scene.options[n - 1];
            log::debug!("scene {:?}: option {n} chosen", scene.name);
            self.state.apply(&option.effect);
            for line in option.feedback.clone() {
                self.render(&line);
            }
            match option.transition {
                Transition::Stay        => continue,
                Transition::Advance     => return Ok(SceneFlow::Advance),
                Transition::End { win } => return Ok(SceneFlow::End { win }),
            }
        }
    }

    fn render_setup(&mut self, scene: &Scene) {
        match scene.setup.clone() {
            SceneSetup::Static(lines) => {
                for line in lines {
                    self.render(&line);
                }
            }
            SceneSetup::WorkupRecap {
                lead_in,
                fever_template,
                exam_template,
                fallback,
                epilogue,
            } => {
                if self.state.findings.is_empty() {
                    for line in fallback {
                        self.render(&line);
                    }
                } else {
                    for line in lead_in {
                        self.render(&line);
                    }
                    let clauses =
                        workup_recap(&self.state.findings, &fever_template, &exam_template);
                    for clause in clauses {
                        self.render(&Line::attending(clause));
                    }
                }
                for line in epilogue {
                    self.render(&line);
                }
            }
        }
    }

    // -- hint subsystem -----------------------------------------------------

    fn dispense_hint(&mut self, story: &Story) {
        let outcome =
            self.hints
                .dispense(&story.hint_pool, &mut self.state.hints_seen, &mut self.rng);
        match outcome {
            HintOutcome::Pearl { text, remaining } => {
                self.presenter.divider();
                self.render(&Line::success(format!(
                    "💡 CLINICAL PEARL ({remaining} hints remaining)"
                )));
                self.render(&Line::success(text));
                self.presenter.divider();
            }
            HintOutcome::Exhausted => {
                self.render(&Line::failure("⚠️ NO MORE HINTS!"));
            }
        }
    }

    // -- panels and pacing --------------------------------------------------

    fn stats_panel(&mut self, story: &Story) {
        let meter = |value: i32| "▰".repeat((value.max(0) / 10) as usize);

        self.presenter.divider();
        self.presenter
            .instant(&format!("Dr. {}'s Status:", self.state.name));
        self.presenter
            .instant(&format!("Anxiety Level: {}", meter(self.state.anxiety)));
        self.presenter.instant(&format!(
            "Reputation with {}: {}",
            story.attending,
            meter(self.state.reputation)
        ));
        self.presenter.instant(&format!(
            "Correct Clinical Decisions: {}",
            self.state.correct_choices
        ));

        if !self.state.clues.is_empty() {
            self.presenter.instant("\nDiagnosis Clues: 🔍");
            for clue in &self.state.clues {
                self.presenter.instant(&format!("  • {clue}"));
            }
        }

        if !self.state.inventory.is_empty() {
            self.presenter.instant("\n🎒 Inventory:");
            for item in &self.state.inventory {
                self.presenter.instant(&format!("  • {item}"));
            }
        }

        self.presenter.instant("\nAvailable Actions:");
        self.presenter.instant("  • Type your choice number as usual");
        self.presenter.instant(&format!(
            "  • Type '{HINT_KEYWORD}' to get a clinical pearl ({} remaining)",
            self.hints.remaining()
        ));
        self.presenter.divider();
    }

    fn pause_for_enter(&mut self) -> Result<(), StoryError> {
        self.input.read_line("\n[Press Enter to continue...]\n")?;
        Ok(())
    }

    /// Render a line, filling in the player's name where the table left a
    /// placeholder.
    fn render(&mut self, line: &Line) {
        if line.text.contains("{name}") {
            let filled = Line::new(line.tone, line.text.replace("{name}", &self.state.name));
            self.presenter.paced(&filled);
        } else {
            self.presenter.paced(line);
        }
    }

    // -- ending -------------------------------------------------------------

    fn finish(&mut self, story: &Story, won: bool) -> SessionReport {
        self.presenter.divider();

        let score = compute_score(&self.state);
        let tier = if won {
            for line in story.endings.win_lead.clone() {
                self.render(&line);
            }
            let tier = EndingTier::select(score);
            let lines = match tier {
                EndingTier::Top   => story.endings.top.clone(),
                EndingTier::Solid => story.endings.solid.clone(),
                EndingTier::Rough => story.endings.rough.clone(),
            };
            for line in lines {
                self.render(&line);
            }
            Some(tier)
        } else {
            for line in story.endings.loss.clone() {
                self.render(&line);
            }
            None
        };

        if !self.state.findings.is_empty() {
            self.presenter.instant("\n📋 CASE SUMMARY:");
            for finding in &self.state.findings {
                self.presenter.instant(&format!("• {finding}"));
            }
        }

        self.presenter.divider();
        self.presenter.instant(&format!("🏆 FINAL SCORE: {score}"));
        self.presenter.instant(&format!(
            "Correct Decisions: {}",
            self.state.correct_choices
        ));
        self.presenter.instant(&format!(
            "Reputation with {}: {}",
            story.attending, self.state.reputation
        ));
        self.presenter
            .instant(&format!("Anxiety Level: {}", self.state.anxiety));
        self.presenter.instant(&format!(
            "Clinical Pearls Used: {}/{}",
            self.hints.used(),
            self.hints.max()
        ));
        self.presenter.divider();

        if won {
            // Educational recap: the full pool, seen or not.
            self.presenter
                .instant(&format!("\n📚 CLINICAL PEARLS FOR {}:", story.id));
            for (i, pearl) in story.hint_pool.iter().enumerate() {
                self.presenter.instant(&format!("{}. {pearl}", i + 1));
            }
            self.presenter.instant("");
        }

        for line in story.endings.signoff.clone() {
            self.render(&line);
        }

        SessionReport {
            story: story.id,
            player: self.state.clone(),
            won,
            score,
            tier,
            hints_used: self.hints.used(),
            max_hints: self.hints.max(),
        }
    }
}
