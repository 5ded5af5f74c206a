//! School-day branch: shower, getting dressed, and the ride to school.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, instrument};

use crate::core::ending::{Arrival, classify, describe_time_taken, late_ending};
use crate::core::shower::{Feedback, Shower};
use crate::core::types::{Answer, Ending, Tone};
use crate::core::wardrobe::{Garment, WearingState};
use crate::core::weekday::Weekday;
use crate::io::clock::Clock;
use crate::io::line::{CONTINUE_PROMPT, pause_enter, read_line};
use crate::io::prompt::{prompt_int, prompt_yes_no};
use crate::io::terminal::{Control, Terminal, TerminalError};

const BEAT: Duration = Duration::from_secs(3);
const NOTICE: Duration = Duration::from_secs(1);

pub const NOT_A_NUMBER: &str = "Must input a number";
pub const NOT_CLOTHING: &str = "That is not something you can wear";
const CHECK_IN_QUESTION: &str = "Do you want to check in with Ms.Minchin? ";

/// Intro screens, then the shower game with a freshly drawn target.
///
/// Returns the number of in-range guesses it took.
pub fn shower_minigame<T: Terminal + ?Sized, R: Rng>(
    term: &mut T,
    rng: &mut R,
) -> Result<u32, TerminalError> {
    term.clear()?;
    term.say(
        "Before you can take a shower, you must get it at the right temperature",
        NOTICE,
    )?;
    pause_enter(term, CONTINUE_PROMPT)?;
    term.say("The correct temperature is between 1 and 100 degrees", NOTICE)?;
    pause_enter(term, CONTINUE_PROMPT)?;

    play_shower(term, Shower::random(rng))
}

/// Guess loop until the temperature is exactly right.
pub fn play_shower<T: Terminal + ?Sized>(
    term: &mut T,
    shower: Shower,
) -> Result<u32, TerminalError> {
    let mut guesses = 0;
    loop {
        term.clear()?;
        term.control(Control::ShowCursor)?;
        let Some(guess) = prompt_int(term, "Set the shower to a temperature (1 - 100): ")? else {
            term.say(NOT_A_NUMBER, NOTICE)?;
            continue;
        };
        let feedback = match shower.check(guess) {
            Ok(feedback) => feedback,
            Err(err) => {
                term.say(&err.to_string(), NOTICE)?;
                continue;
            }
        };
        guesses += 1;
        debug!(guess, ?feedback, "shower guess");

        term.control(Control::HideCursor)?;
        term.clear()?;
        term.println_toned(feedback.message(), feedback.tone())?;
        if feedback == Feedback::Perfect {
            return Ok(guesses);
        }
        term.pause(NOTICE)?;
    }
}

/// Intro screens, then the clothing game from an undressed start.
pub fn clothing_minigame<T: Terminal + ?Sized>(term: &mut T) -> Result<(), TerminalError> {
    term.clear()?;
    term.say(
        "You have to get dressed, but it only works if it is in the right order",
        NOTICE,
    )?;
    pause_enter(term, CONTINUE_PROMPT)?;
    term.say("Type in the clothing item to put it on", NOTICE)?;
    pause_enter(term, CONTINUE_PROMPT)?;

    play_clothing(term, WearingState::new()).map(|_| ())
}

/// Read garment names until everything is worn; returns the final state.
pub fn play_clothing<T: Terminal + ?Sized>(
    term: &mut T,
    mut state: WearingState,
) -> Result<WearingState, TerminalError> {
    while !state.is_complete() {
        term.clear()?;
        for (garment, worn) in state.items() {
            let tone = if worn { Tone::Green } else { Tone::Red };
            term.println_toned(garment.name(), tone)?;
        }
        term.control(Control::ShowCursor)?;
        let line = read_line(term, "\n> ")?;
        term.control(Control::HideCursor)?;
        term.clear()?;

        let Some(garment) = Garment::parse(&line) else {
            term.say(NOT_CLOTHING, NOTICE)?;
            continue;
        };
        if let Err(err) = state.wear(garment) {
            debug!(%garment, %err, "garment rejected");
            term.say(&err.to_string(), BEAT)?;
        }
    }
    Ok(state)
}

/// Run both minigames and the ending. `prompt_time` is the time already
/// spent answering the weekday prompt.
#[instrument(skip_all, fields(day = %day))]
pub fn schoolday_events<T: Terminal + ?Sized, R: Rng, C: Clock>(
    term: &mut T,
    rng: &mut R,
    clock: &C,
    day: Weekday,
    prompt_time: Duration,
) -> Result<Ending, TerminalError> {
    term.say("Today is a school day", BEAT)?;
    term.clear()?;
    term.say("You have to go take a shower", BEAT)?;

    let shower_start = clock.now();
    let guesses = shower_minigame(term, rng)?;
    let shower_time = clock.since(shower_start);
    info!(guesses, secs = shower_time.as_secs(), "shower done");

    term.pause(NOTICE)?;
    term.clear()?;
    term.say("You take a nice shower and wash yourself", BEAT)?;

    let clothing_start = clock.now();
    clothing_minigame(term)?;
    let clothing_time = clock.since(clothing_start);
    info!(secs = clothing_time.as_secs(), "dressed");

    term.say("You are fully dressed", BEAT)?;

    // One real second counts as one game minute.
    let elapsed = (prompt_time + shower_time + clothing_time).as_secs();
    announce_ending(term, elapsed, day)
}

/// Narrate the arrival for `elapsed_minutes` of preparation and print the
/// ending title.
pub fn announce_ending<T: Terminal + ?Sized>(
    term: &mut T,
    elapsed_minutes: u64,
    day: Weekday,
) -> Result<Ending, TerminalError> {
    term.clear()?;
    term.say(&describe_time_taken(elapsed_minutes), BEAT)?;
    term.clear()?;

    let arrival = classify(elapsed_minutes, day);
    info!(elapsed_minutes, ?arrival, "arrival classified");

    let ending = match arrival {
        Arrival::OnTime { at } => {
            narrate(term, &format!("You drive to school and arrive at {at}"))?;
            narrate(
                term,
                "You made it to school on time and you are ready to start your day!",
            )?;
            Ending::Good
        }
        Arrival::Late { at } => {
            narrate(term, &format!("You drive to school and arrive at {at}"))?;
            term.println("You are late for school")?;
            term.control(Control::ShowCursor)?;
            let checked_in = ask_check_in(term)?;
            term.clear()?;
            if checked_in {
                narrate(
                    term,
                    "You did the right thing after being late, but you still missed things",
                )?;
            } else {
                narrate(
                    term,
                    "You choose not to check in with Ms.Minchin after arriving late",
                )?;
                narrate(term, "Because you did not check in, you are suspended")?;
            }
            late_ending(checked_in)
        }
        Arrival::Absent { at, absence } => {
            let lead = if absence.in_class() {
                "You arrive at school, and everyone is already in class"
            } else {
                "You arrive at school, but all the lights are off..."
            };
            narrate(term, lead)?;
            narrate(
                term,
                &format!("You check the time on your phone, and you see that it is {at}"),
            )?;
            narrate(term, absence.message())?;
            Ending::Absent
        }
    };

    term.println_toned(ending.title(), ending.tone())?;
    info!(%ending, "school day finished");
    Ok(ending)
}

fn narrate<T: Terminal + ?Sized>(term: &mut T, text: &str) -> Result<(), TerminalError> {
    term.say(text, BEAT)?;
    pause_enter(term, CONTINUE_PROMPT)
}

fn ask_check_in<T: Terminal + ?Sized>(term: &mut T) -> Result<bool, TerminalError> {
    loop {
        match prompt_yes_no(term, CHECK_IN_QUESTION)? {
            Answer::Yes => return Ok(true),
            Answer::No => return Ok(false),
            Answer::Invalid => {}
        }
    }
}
