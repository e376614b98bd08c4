//! Full-device scenarios driven through mock peripherals.

use blindclock_core::cues::{ESCALATION_SCALE, NOTE_AFFIRM_HI, NOTE_AFFIRM_LO};
use blindclock_core::mock::{AudioOp, ManualClock, MockAudio, MockDisplay, MockPower, MockRotary};
use blindclock_core::{Config, Controller, Mode, Widget};

type TestController = Controller<MockDisplay, MockAudio, MockRotary, ManualClock, MockPower>;

fn fresh_device() -> TestController {
    let mut c = Controller::new(
        Config::default(),
        MockDisplay::new(),
        MockAudio::new(),
        MockRotary::new(),
        ManualClock::new(0),
        MockPower::new(),
    );
    c.power_on();
    c
}

fn confirm(c: &mut TestController) {
    c.notify_confirm();
    c.poll();
}

fn run_seconds(c: &mut TestController, secs: u32) {
    for _ in 0..secs {
        c.clock().advance(1000);
        c.poll();
    }
}

#[test]
fn operator_walkthrough_to_first_escalation() {
    let mut c = fresh_device();
    assert_eq!(c.mode(), Mode::Setup);

    // Confirm past the splash into the small blind prompt.
    confirm(&mut c);
    assert_eq!(c.mode(), Mode::EditSmallBlind);
    assert_eq!(c.display().text(Widget::BigNumber), Some("25"));

    // One click up: 25 -> 50.
    c.rotary_mut().turn(1);
    c.poll();
    assert_eq!(c.display().text(Widget::BigNumber), Some("50"));

    // Accept, keep the default 10 minute interval, start the game.
    confirm(&mut c);
    assert_eq!(c.mode(), Mode::EditInterval);
    assert_eq!(c.display().text(Widget::BigNumber), Some("10"));
    confirm(&mut c);

    assert_eq!(c.mode(), Mode::RoundTimer);
    assert_eq!(c.session().current_round, 1);
    assert_eq!(c.session().seconds_remaining, 600);
    assert_eq!(c.session().small_blind, 50);
    assert_eq!(c.session().big_blind(), 100);
    assert_eq!(c.display().text(Widget::SmallBlind), Some("50"));
    assert_eq!(c.display().text(Widget::BigBlind), Some("100"));

    // Play out round one.
    run_seconds(&mut c, 600);
    assert_eq!(c.session().current_round, 2);
    assert_eq!(c.session().small_blind, 100);
    assert_eq!(c.session().big_blind(), 200);
    assert_eq!(c.session().seconds_remaining, 600);
    assert_eq!(c.display().text(Widget::PageTitle), Some("Round 2"));

    // The fanfare for chime stage 1 is the bottom four scale notes.
    let freqs = c.audio().tone_freqs();
    let fanfare = &freqs[freqs.len() - 4..];
    assert_eq!(
        fanfare,
        &[
            ESCALATION_SCALE[0],
            ESCALATION_SCALE[1],
            ESCALATION_SCALE[2],
            ESCALATION_SCALE[3],
        ]
    );
}

#[test]
fn forward_transitions_play_the_affirm_chirp() {
    let mut c = fresh_device();
    confirm(&mut c); // Setup -> EditSmallBlind, silent
    let before = c.audio().ops.len();
    confirm(&mut c); // EditSmallBlind -> EditInterval, affirm
    let ops = &c.audio().ops[before..];
    assert_eq!(
        ops,
        &[
            AudioOp::Tone(NOTE_AFFIRM_LO, 150),
            AudioOp::Rest(150),
            AudioOp::Tone(NOTE_AFFIRM_HI, 150),
        ]
    );
}

#[test]
fn chime_stage_saturates_while_rounds_keep_counting() {
    let mut c = fresh_device();
    confirm(&mut c);
    confirm(&mut c);
    // Shorten the interval to 5 minutes to keep the run small.
    c.rotary_mut().turn(-1);
    c.poll();
    confirm(&mut c);
    assert_eq!(c.session().interval_minutes, 5);

    for _ in 0..15 {
        run_seconds(&mut c, 300);
    }
    assert_eq!(c.session().current_round, 16);
    assert_eq!(c.session().chime_stage, 10);
    assert_eq!(c.log().rounds_advanced(), 15);
}

#[test]
fn blinds_pin_at_the_display_cap() {
    let mut c = fresh_device();
    confirm(&mut c);
    // Max out the starting blind: 25 -> 200.
    for _ in 0..7 {
        c.rotary_mut().turn(1);
        c.poll();
    }
    confirm(&mut c);
    c.rotary_mut().turn(-1);
    c.poll();
    confirm(&mut c);

    // 200 -> 400 -> 800 -> 1600 -> 3200 -> 6400 -> 9999 -> 9999.
    for _ in 0..7 {
        run_seconds(&mut c, 300);
    }
    assert_eq!(c.session().small_blind, 9999);
    assert_eq!(c.session().big_blind(), 19998);
}

#[test]
fn slow_polls_cost_one_second_each_by_default() {
    let mut c = fresh_device();
    confirm(&mut c);
    confirm(&mut c);
    confirm(&mut c);
    let start = c.session().seconds_remaining;

    // Three polls, each after a gap well over a second.
    for gap in [2400u64, 3100, 1900] {
        c.clock().advance(gap);
        c.poll();
    }
    assert_eq!(c.session().seconds_remaining, start - 3);
}

#[test]
fn catch_up_policy_recovers_blocked_time() {
    let mut config = Config::default();
    config.timing.catch_up_ticks = true;
    let mut c = Controller::new(
        config,
        MockDisplay::new(),
        MockAudio::new(),
        MockRotary::new(),
        ManualClock::new(0),
        MockPower::new(),
    );
    c.power_on();
    confirm(&mut c);
    confirm(&mut c);
    confirm(&mut c);
    let start = c.session().seconds_remaining;

    c.clock().advance(2400);
    c.poll();
    assert_eq!(c.session().seconds_remaining, start - 2);
}

#[test]
fn shutdown_request_releases_the_hold_line() {
    let mut c = fresh_device();
    confirm(&mut c);
    confirm(&mut c);
    confirm(&mut c);
    assert!(c.power().line_is_held());

    confirm(&mut c);
    assert_eq!(c.mode(), Mode::RoundTimer);
    assert!(!c.power().line_is_held());
    assert_eq!(c.power().watch_armed, 1);
}
