//! End-to-end tests for the `ddx_adventure` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Win paths | Exact final chart for both cases on the all-correct route |
//! | Loss path | Beta-first management ends the session as a non-win |
//! | Recovery | Invalid menu input loops without touching the chart |
//! | Hints | Budget enforcement, exhaustion message, no repeats while unseen remain |
//! | Inventory | Starting kit plus per-choice grants, shown in the stats panel |
//! | Narration | Findings-driven workup recap and its zero-findings fallback, name substitution |
//! | Determinism | Same seed and script → identical transcript |
//! | Report | `SessionReport` survives a serde round trip |

use crate::console::{ScriptedInput, TranscriptPresenter};
use crate::story_engine::{
    stories, ChoiceEffect, ChoiceOption, EndingSet, Line, Scene, SceneSetup, Session,
    SessionConfig, SessionReport, Story, StoryId, Transition,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Run `story` to completion against a scripted input stream, returning the
/// report and the full transcript.
fn run_story(story: &Story, inputs: &[&str], seed: u64) -> (SessionReport, Vec<String>) {
    run_story_with(story, inputs, seed, 3)
}

fn run_story_with(
    story: &Story,
    inputs: &[&str],
    seed: u64,
    max_hints: u32,
) -> (SessionReport, Vec<String>) {
    let mut session = Session::new(
        SessionConfig {
            max_hints,
            rng_seed: Some(seed),
        },
        TranscriptPresenter::new(),
        ScriptedInput::new(inputs.iter().copied()),
    );
    let report = session.run(story).expect("scripted session completes");
    let transcript = session.presenter().lines.clone();
    (report, transcript)
}

fn contains(transcript: &[String], needle: &str) -> bool {
    transcript.iter().any(|l| l.contains(needle))
}

/// The all-correct route shared by both cases: name, pause after the opening,
/// then one choice and one pause per scene. The final choice differs per case.
fn win_script(last_choice: &'static str) -> Vec<&'static str> {
    vec![
        "Casey", "", // name, opening pause
        "1", "", // first call
        "1", "", // history
        "1", "", // exam / workup
        "1", "", // workup / diagnosis
        last_choice, "", // diagnosis / management
    ]
}

// ── win paths ────────────────────────────────────────────────────────────────

#[test]
fn kawasaki_clean_run_reaches_top_tier() {
    let story = stories::kawasaki::story();
    let (report, transcript) = run_story(&story, &win_script("1"), 7);

    assert!(report.won);
    assert_eq!(report.player.correct_choices, 8);
    assert_eq!(report.player.reputation, 100);
    assert_eq!(report.player.anxiety, 0);
    assert_eq!(report.score, 180);
    assert_eq!(report.tier, Some(crate::EndingTier::Top));
    assert_eq!(report.hints_used, 0);
    assert_eq!(report.player.findings.len(), 11);

    assert!(contains(
        &transcript,
        "CONGRATULATIONS! You correctly diagnosed Kawasaki Disease!"
    ));
    assert!(contains(&transcript, "🏆 FINAL SCORE: 180"));
}

#[test]
fn pheochromocytoma_clean_run_reaches_top_tier() {
    let story = stories::pheochromocytoma::story();
    // Management is the one scene where option 1 is the trap; alpha-first is 2.
    let (report, transcript) = run_story(&story, &win_script("2"), 7);

    assert!(report.won);
    assert_eq!(report.player.correct_choices, 8);
    assert_eq!(report.player.reputation, 105);
    assert_eq!(report.player.anxiety, 0);
    assert_eq!(report.score, 185);
    assert_eq!(report.tier, Some(crate::EndingTier::Top));

    assert!(contains(&transcript, "correctly diagnosed and managed"));
    assert!(contains(&transcript, "alpha blockade, then beta blockade"));
}

#[test]
fn winning_run_prints_full_pearl_recap() {
    let story = stories::kawasaki::story();
    let (_, transcript) = run_story(&story, &win_script("1"), 7);

    assert!(contains(&transcript, "📚 CLINICAL PEARLS FOR"));
    // Every pool entry appears in the educational recap, seen or not.
    for pearl in &story.hint_pool {
        assert!(contains(&transcript, pearl), "missing pearl: {pearl}");
    }
}

// ── loss path ────────────────────────────────────────────────────────────────

#[test]
fn beta_blockers_first_lose_the_case() {
    let story = stories::pheochromocytoma::story();
    let (report, transcript) = run_story(&story, &win_script("1"), 7);

    assert!(!report.won);
    assert_eq!(report.tier, None);
    // Correct work up to the trap still counts on the chart.
    assert_eq!(report.player.correct_choices, 6);
    assert_eq!(report.player.reputation, 80);
    assert_eq!(report.player.anxiety, 15);
    assert_eq!(report.score, 125);

    assert!(contains(
        &transcript,
        "The patient was transferred to the ICU after a hypertensive crisis."
    ));
    assert!(!contains(&transcript, "📚 CLINICAL PEARLS FOR"));
}

// ── invalid input recovery ───────────────────────────────────────────────────

#[test]
fn invalid_menu_input_loops_without_touching_the_chart() {
    let story = stories::kawasaki::story();
    let (clean, _) = run_story(&story, &win_script("1"), 7);

    // Same route with garbage injected at the first decision point.
    let noisy: Vec<&str> = ["Casey", "", "9", "banana", "0", "", "1", ""]
        .into_iter()
        .chain(win_script("1").into_iter().skip(4))
        .collect();
    let (report, transcript) = run_story(&story, &noisy, 7);

    assert_eq!(report, clean);
    assert!(contains(&transcript, "That wasn't one of the options"));
}

// ── hint subsystem ───────────────────────────────────────────────────────────

#[test]
fn fourth_hint_request_is_refused() {
    let story = stories::kawasaki::story();
    let noisy: Vec<&str> = ["Casey", "", "hint", "hint", "hint", "hint", "1", ""]
        .into_iter()
        .chain(win_script("1").into_iter().skip(4))
        .collect();
    let (report, transcript) = run_story(&story, &noisy, 7);

    assert!(report.won);
    assert_eq!(report.hints_used, 3);
    assert_eq!(report.max_hints, 3);
    assert!(contains(&transcript, "NO MORE HINTS"));
    assert!(contains(&transcript, "💡 CLINICAL PEARL (2 hints remaining)"));
}

#[test]
fn hints_do_not_repeat_while_unseen_pearls_remain() {
    let story = stories::kawasaki::story();
    // Budget raised to the pool size so every request must land a new pearl.
    let noisy: Vec<&str> = ["Casey", "", "hint", "hint", "hint", "hint", "hint", "1", ""]
        .into_iter()
        .chain(win_script("1").into_iter().skip(4))
        .collect();
    let (report, _) = run_story_with(&story, &noisy, 3, 5);

    assert_eq!(report.hints_used, 5);
    let mut seen = report.player.hints_seen.clone();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 5, "a pearl repeated while unseen ones remained");
}

#[test]
fn hint_keyword_is_case_insensitive() {
    let story = stories::kawasaki::story();
    let noisy: Vec<&str> = ["Casey", "", "HINT", "1", ""]
        .into_iter()
        .chain(win_script("1").into_iter().skip(4))
        .collect();
    let (report, _) = run_story(&story, &noisy, 7);

    assert_eq!(report.hints_used, 1);
}

// ── inventory ────────────────────────────────────────────────────────────────

#[test]
fn inventory_grows_from_starting_kit_through_the_case() {
    let story = stories::pheochromocytoma::story();
    let (report, transcript) = run_story(&story, &win_script("2"), 7);

    // Three-item starting kit, plus the lab order and the printed report.
    assert_eq!(report.player.inventory.len(), 5);
    assert!(contains(&transcript, "🎒 Inventory:"));
    assert!(contains(&transcript, "Pocket medicine handbook"));
    assert!(contains(&transcript, "Lab order for plasma metanephrines (smart move!)"));
    assert!(contains(&transcript, "Lab report with elevated metanephrines (Jackpot!)"));
}

#[test]
fn systematic_exam_adds_chart_photos_to_inventory() {
    let story = stories::kawasaki::story();
    let (report, transcript) = run_story(&story, &win_script("1"), 7);

    assert_eq!(report.player.inventory.len(), 5);
    assert!(contains(&transcript, "Photo of polymorphic rash (Added to patient chart)"));
    assert!(contains(&transcript, "Photo of hands/feet and oral findings (Added to patient chart)"));
}

// ── narration ────────────────────────────────────────────────────────────────

#[test]
fn workup_recap_recites_what_was_actually_found() {
    let story = stories::kawasaki::story();
    let (_, transcript) = run_story(&story, &win_script("1"), 7);

    assert!(contains(
        &transcript,
        "'We have a 5-year-old with 5 days of persistent fever >39°C, \
         poorly responsive to antipyretics,'"
    ));
    assert!(contains(
        &transcript,
        "'Plus physical findings of bilateral conjunctival injection, \
         erythema of lips and strawberry tongue, polymorphous rash, \
         erythema and edema of hands and feet, and unilateral cervical lymphadenopathy.'"
    ));
}

/// One-scene story whose recap scene is reached with an empty chart, so the
/// recap has nothing to recite.
fn recap_fallback_story() -> Story {
    Story {
        id: StoryId::Kawasaki,
        title: "Recap drill".to_string(),
        attending: "Dr. Crook".to_string(),
        banner: "",
        intro: vec![Line::ui("A very short shift.")],
        name_prompt: "Name: ".to_string(),
        opening: vec![],
        scenes: vec![Scene {
            name: "workup".to_string(),
            setup: SceneSetup::WorkupRecap {
                lead_in: vec![Line::attending("Here's what we found:")],
                fever_template: "'We have a patient with {finding},'".to_string(),
                exam_template: "'Plus {findings}.'".to_string(),
                fallback: vec![Line::attending(
                    "Let's consider what we know about this patient.",
                )],
                epilogue: vec![Line::inner("(Your differentials are spinning.)")],
            },
            setup_findings: vec![],
            setup_items: vec![],
            prompt: "What next?".to_string(),
            options: vec![ChoiceOption {
                label: "Call it a day".to_string(),
                feedback: vec![Line::success("Shift over.")],
                effect: ChoiceEffect::new(),
                transition: Transition::End { win: true },
            }],
            invalid: Line::failure("Not an option."),
        }],
        starting_inventory: vec![],
        hint_pool: vec!["A pearl.".to_string()],
        endings: EndingSet {
            win_lead: vec![],
            top: vec![],
            solid: vec![],
            rough: vec![],
            loss: vec![],
            signoff: vec![],
        },
    }
}

#[test]
fn recap_with_no_findings_renders_the_fallback_lines() {
    let story = recap_fallback_story();
    let (report, transcript) = run_story(&story, &["Casey", "", "1", ""], 7);

    assert!(report.won);
    assert!(contains(
        &transcript,
        "Let's consider what we know about this patient."
    ));
    // The epilogue still plays; the lead-in never does.
    assert!(contains(&transcript, "(Your differentials are spinning.)"));
    assert!(!contains(&transcript, "Here's what we found:"));
}

#[test]
fn player_name_is_substituted_into_narration() {
    let story = stories::kawasaki::story();
    let (report, transcript) = run_story(&story, &win_script("1"), 7);

    assert_eq!(report.player.name, "Casey");
    assert!(contains(
        &transcript,
        "You, Dr. Casey, are nervously reviewing your patient list when..."
    ));
    assert!(!contains(&transcript, "{name}"));
}

#[test]
fn case_summary_lists_recorded_findings() {
    let story = stories::kawasaki::story();
    let (_, transcript) = run_story(&story, &win_script("1"), 7);

    assert!(contains(&transcript, "📋 CASE SUMMARY:"));
    assert!(contains(&transcript, "Final diagnosis: Kawasaki Disease"));
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_and_script_replay_identically() {
    let story = stories::kawasaki::story();
    let noisy: Vec<&str> = ["Casey", "", "hint", "hint", "1", ""]
        .into_iter()
        .chain(win_script("1").into_iter().skip(4))
        .collect();

    let (report_a, transcript_a) = run_story(&story, &noisy, 42);
    let (report_b, transcript_b) = run_story(&story, &noisy, 42);

    assert_eq!(report_a, report_b);
    assert_eq!(transcript_a, transcript_b);
}

// ── report ───────────────────────────────────────────────────────────────────

#[test]
fn session_report_round_trips_through_serde() {
    let story = stories::pheochromocytoma::story();
    let (report, _) = run_story(&story, &win_script("2"), 7);

    let json = serde_json::to_string(&report).expect("serialize");
    let back: SessionReport = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, report);
}
