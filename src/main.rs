//! Terminal front end: story picker, live console wiring, graceful exits.

use anyhow::Result;

use ddx_adventure::console::{ConsolePresenter, InputSource, Pacing, StdinInput};
use ddx_adventure::{stories, Session, SessionConfig, StoryError};

fn main() {
    env_logger::init();

    ctrlc::set_handler(|| {
        println!("\n\nGame interrupted. Thanks for playing!");
        std::process::exit(0);
    })
    .ok();

    if let Err(err) = run() {
        match err.downcast_ref::<StoryError>() {
            Some(StoryError::InputClosed) => {
                println!("\n\nGame interrupted. Thanks for playing!");
            }
            _ => {
                log::error!("session failed: {err:#}");
                println!("\nSorry about that! Please report this bug.");
                std::process::exit(1);
            }
        }
    }
}

fn run() -> Result<()> {
    let catalogue = stories::all();
    let mut input = StdinInput;

    println!("🏥 ON-CALL: DIFFERENTIAL DIAGNOSIS ADVENTURES\n");
    println!("Pick tonight's case:\n");
    for (i, story) in catalogue.iter().enumerate() {
        println!("{}. {}", i + 1, story.title);
    }

    let story = loop {
        let raw = input.read_line(&format!("\nYour choice (1-{}): ", catalogue.len()))?;
        match raw.parse::<usize>() {
            Ok(n) if n >= 1 && n <= catalogue.len() => break &catalogue[n - 1],
            _ => println!("That's not on tonight's board. Try again."),
        }
    };
    log::info!("starting story {:?}", story.id);

    let mut session = Session::new(
        SessionConfig::default(),
        ConsolePresenter::new(Pacing::classic()),
        input,
    );
    session.run(story)?;
    Ok(())
}
