//! Full playthroughs driven by scripted keystrokes.
//!
//! Each test types a complete session into a byte terminal and checks the
//! outcome plus what reached the screen. The stepping clock makes every timed
//! segment last a fixed number of game minutes.

use morning::core::shower::Shower;
use morning::core::types::Ending;
use morning::exit_codes;
use morning::io::interrupt::InterruptFlag;
use morning::playthrough::{PlaythroughOutcome, run_playthrough};
use morning::test_support::{StepClock, scripted, transcript};
use morning::weekend::WeekendOutcome;
use rand::SeedableRng;
use rand::rngs::StdRng;

const SEED: u64 = 7;
const DRESS_IN_ORDER: &str = "underwear\rpants\rsocks\rshoes\rshirt\r";
const LEAVE_ALT_SCREEN: &str = "\x1b[?1049l";

/// Keystrokes for a school day up to the end of the clothing game.
fn school_morning(weekday: u8) -> String {
    let target = Shower::random(&mut StdRng::seed_from_u64(SEED)).target();
    format!("{weekday}\r\r\r{target}\r\r\r{DRESS_IN_ORDER}")
}

fn play(script: &str, minutes_per_segment: u64) -> (PlaythroughOutcome, String) {
    let mut term = scripted(script);
    let mut rng = StdRng::seed_from_u64(SEED);
    let clock = StepClock::minutes_per_segment(minutes_per_segment);
    let outcome = run_playthrough(&mut term, &mut rng, &clock).expect("playthrough");
    assert!(term.mode().is_balanced());
    (outcome, transcript(&term))
}

#[test]
fn sunday_without_snoozing_is_a_nice_day() {
    let (outcome, out) = play("1\rno\r\r", 1);
    assert_eq!(outcome, PlaythroughOutcome::Weekend(WeekendOutcome::Rested));
    assert_eq!(out.matches("Ring!").count(), 3);
    assert!(out.contains("You just woke up and it is 7 AM"));
    assert!(out.contains("Today is a weekend"));
    assert!(out.contains("Have a nice day!"));
    assert!(out.contains("Press enter to exit..."));
    assert!(out.ends_with(&format!("{LEAVE_ALT_SCREEN}\x1b[?25h")));
}

#[test]
fn invalid_weekday_is_asked_again() {
    let (outcome, out) = play("9\rseven\r7\rno\r\r", 1);
    assert_eq!(outcome, PlaythroughOutcome::Weekend(WeekendOutcome::Rested));
    assert!(out.contains("Input must be 1-7"));
    assert!(out.contains("Input must be a number"));
}

#[test]
fn quick_school_morning_is_the_good_ending() {
    // Three segments of 20 minutes: arrive at 8:15am.
    let script = format!("{}\r\r\r", school_morning(3));
    let (outcome, out) = play(&script, 20);
    assert_eq!(outcome, PlaythroughOutcome::School(Ending::Good));
    assert!(out.contains("Today is a school day"));
    assert!(out.contains("Perfect!"));
    assert!(out.contains("You are fully dressed"));
    assert!(out.contains("It took you 1 hours and 0 minutes to get ready for school"));
    assert!(out.contains("arrive at 8:15am"));
    assert!(out.contains("Good Ending"));
}

#[test]
fn slow_morning_with_check_in_is_the_late_ending() {
    // 300 minutes: arrive at 12:15pm.
    let script = format!("{}\ryes\r\r\r", school_morning(4));
    let (outcome, out) = play(&script, 100);
    assert_eq!(outcome, PlaythroughOutcome::School(Ending::Late));
    assert!(out.contains("arrive at 12:15pm"));
    assert!(out.contains("You are late for school"));
    assert!(out.contains("Late Ending"));
}

#[test]
fn skipping_the_check_in_is_the_suspended_ending() {
    let script = format!("{}\rno\r\r\r\r", school_morning(5));
    let (outcome, out) = play(&script, 100);
    assert_eq!(outcome, PlaythroughOutcome::School(Ending::Suspended));
    assert!(out.contains("Because you did not check in, you are suspended"));
    assert!(out.contains("Suspended Ending"));
}

#[test]
fn monday_taking_all_day_is_absent_the_next_morning() {
    // 1545 minutes from Monday 7:00am plus the commute: Tuesday 9:00am.
    let script = format!("{}\r\r\r\r", school_morning(2));
    let (outcome, out) = play(&script, 515);
    assert_eq!(outcome, PlaythroughOutcome::School(Ending::Absent));
    assert!(out.contains("It took you 1 days, 1 hours, and 45 minutes"));
    assert!(out.contains("everyone is already in class"));
    assert!(out.contains("it is 9:00am"));
    assert!(out.contains("Absent Ending"));
}

#[test]
fn interrupt_restores_the_terminal() {
    let mut term = scripted("3\r\r\x03");
    let mut rng = StdRng::seed_from_u64(SEED);
    let clock = StepClock::minutes_per_segment(1);

    let err = run_playthrough(&mut term, &mut rng, &clock).expect_err("interrupted");

    assert_eq!(exit_codes::for_error(&err), exit_codes::INTERRUPTED);
    assert!(term.mode().is_balanced());
    let out = transcript(&term);
    assert!(out.contains("\x1b[?1049h"));
    assert!(out.ends_with(&format!("{LEAVE_ALT_SCREEN}\x1b[?25h")));
}

#[test]
fn interrupt_between_keys_restores_the_terminal() {
    // Ctrl-C outside raw mode lands on the flag during the alarm.
    let interrupt = InterruptFlag::default();
    interrupt.raise();
    let mut term = scripted("1\rno\r\r").with_interrupt(interrupt);
    let mut rng = StdRng::seed_from_u64(SEED);
    let clock = StepClock::minutes_per_segment(1);

    let err = run_playthrough(&mut term, &mut rng, &clock).expect_err("interrupted");

    assert_eq!(exit_codes::for_error(&err), exit_codes::INTERRUPTED);
    assert_eq!(term.mode().enabled(), 0);
    let out = transcript(&term);
    assert_eq!(out.matches("Ring!").count(), 1);
    assert!(out.ends_with(&format!("{LEAVE_ALT_SCREEN}\x1b[?25h")));
}

#[test]
fn closed_input_is_a_failure() {
    let mut term = scripted("3\r");
    let mut rng = StdRng::seed_from_u64(SEED);
    let clock = StepClock::minutes_per_segment(1);

    let err = run_playthrough(&mut term, &mut rng, &clock).expect_err("closed");

    assert_eq!(exit_codes::for_error(&err), exit_codes::FAILURE);
    assert!(transcript(&term).ends_with(&format!("{LEAVE_ALT_SCREEN}\x1b[?25h")));
}
