//! Terminal adapters: the presentation and input ports plus their
//! deterministic doubles.
//!
//! | Type | Purpose |
//! |------|---------|
//! | `Presenter` / `InputSource` | The two seams the engine drives |
//! | `Pacing` | Injected typewriter timing; `Pacing::none()` for tests |
//! | `ConsolePresenter` | Colour + per-character reveal on stdout |
//! | `StdinInput` | Blocking line reads from stdin |
//! | `TranscriptPresenter` / `ScriptedInput` | Doubles for tests and embedding |
//!
//! Paced text is flattened before reveal: internal newlines and runs of
//! whitespace collapse to single spaces, so multi-line literals become one
//! paced line. Banners are exempt.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::time::Duration;

use colored::{Color, Colorize};

use crate::story_engine::{Line, StoryError, Tone};

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Side-effect sink for everything the player sees. No return value ever
/// affects control flow.
pub trait Presenter {
    /// Reveal a narration line with pacing, colour chosen by tone.
    fn paced(&mut self, line: &Line);
    /// Print without pacing (menus, stat panels, summaries).
    fn instant(&mut self, text: &str);
    /// Fixed visual separator between sections.
    fn divider(&mut self);
    /// Multi-line title art, printed verbatim.
    fn banner(&mut self, art: &str);
}

/// Source of player input. Returns the line trimmed; no validation happens
/// here — that belongs to the engine.
pub trait InputSource {
    fn read_line(&mut self, prompt: &str) -> Result<String, StoryError>;
}

/// Collapse internal newlines and repeated whitespace to single spaces.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ---------------------------------------------------------------------------
// Pacing
// ---------------------------------------------------------------------------

/// Typewriter timing, injected into the console presenter so tests (or an
/// impatient host) can swap in a no-delay strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Delay after each revealed character.
    pub char_delay: Duration,
    /// Pause after the full line is shown.
    pub line_pause: Duration,
}

impl Pacing {
    /// The classic RPG feel: 20ms per character, half a second per line.
    pub fn classic() -> Self {
        Pacing {
            char_delay: Duration::from_millis(20),
            line_pause: Duration::from_millis(500),
        }
    }

    /// No delays at all.
    pub fn none() -> Self {
        Pacing {
            char_delay: Duration::ZERO,
            line_pause: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing::classic()
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Attending => Color::Yellow,
        Tone::Scenario  => Color::Blue,
        Tone::Inner     => Color::Magenta,
        Tone::Success   => Color::Green,
        Tone::Failure   => Color::Red,
        Tone::Ui        => Color::Cyan,
    }
}

// ---------------------------------------------------------------------------
// Live console
// ---------------------------------------------------------------------------

/// Stdout presenter with colour and character-by-character reveal.
#[derive(Debug, Clone)]
pub struct ConsolePresenter {
    pacing: Pacing,
}

impl ConsolePresenter {
    pub fn new(pacing: Pacing) -> Self {
        ConsolePresenter { pacing }
    }
}

impl Presenter for ConsolePresenter {
    fn paced(&mut self, line: &Line) {
        let text = normalize_whitespace(&line.text);
        let color = tone_color(line.tone);
        for ch in text.chars() {
            print!("{}", ch.to_string().color(color));
            let _ = io::stdout().flush();
            if !self.pacing.char_delay.is_zero() {
                std::thread::sleep(self.pacing.char_delay);
            }
        }
        println!("\n");
        if !self.pacing.line_pause.is_zero() {
            std::thread::sleep(self.pacing.line_pause);
        }
    }

    fn instant(&mut self, text: &str) {
        println!("{text}");
    }

    fn divider(&mut self) {
        println!("\n{}\n", format!("✨{}✨", "=".repeat(48)).cyan());
    }

    fn banner(&mut self, art: &str) {
        println!("{}", art.cyan());
    }
}

/// Blocking stdin reader. EOF maps to `StoryError::InputClosed` so the top
/// level can say goodbye instead of crashing.
#[derive(Debug, Default, Clone)]
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self, prompt: &str) -> Result<String, StoryError> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut buf = String::new();
        let n = io::stdin().read_line(&mut buf)?;
        if n == 0 {
            return Err(StoryError::InputClosed);
        }
        Ok(buf.trim().to_string())
    }
}

// ---------------------------------------------------------------------------
// Deterministic doubles
// ---------------------------------------------------------------------------

/// Records every rendered line as plain text. Paced lines go through the
/// same whitespace flattening as the live console so assertions see what a
/// player would.
#[derive(Debug, Default, Clone)]
pub struct TranscriptPresenter {
    pub lines: Vec<String>,
}

impl TranscriptPresenter {
    pub fn new() -> Self {
        TranscriptPresenter::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl Presenter for TranscriptPresenter {
    fn paced(&mut self, line: &Line) {
        self.lines.push(normalize_whitespace(&line.text));
    }

    fn instant(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn divider(&mut self) {
        self.lines.push("---".to_string());
    }

    fn banner(&mut self, art: &str) {
        self.lines.push(art.to_string());
    }
}

/// Feeds a fixed sequence of input lines; a read past the end behaves like
/// a closed stream.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    queue: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            queue: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<String, StoryError> {
        self.queue
            .pop_front()
            .map(|l| l.trim().to_string())
            .ok_or(StoryError::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_flattens_to_single_spaces() {
        assert_eq!(
            normalize_whitespace("  Dr. Crook\nappears   suddenly\n\n behind you! "),
            "Dr. Crook appears suddenly behind you!"
        );
    }

    #[test]
    fn transcript_records_flattened_paced_lines() {
        let mut t = TranscriptPresenter::default();
        t.paced(&Line::attending("one\ntwo   three"));
        assert_eq!(t.lines, ["one two three"]);
    }

    #[test]
    fn scripted_input_trims_and_then_closes() {
        let mut input = ScriptedInput::new(["  1  ", "hint"]);
        assert_eq!(input.read_line("> ").unwrap(), "1");
        assert_eq!(input.read_line("> ").unwrap(), "hint");
        assert!(matches!(input.read_line("> "), Err(StoryError::InputClosed)));
    }
}
