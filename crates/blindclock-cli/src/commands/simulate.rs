//! Headless accelerated session.
//!
//! Drives the controller with mock peripherals and a hand-cranked clock,
//! then prints the session event log as JSON. Useful for eyeballing a
//! tournament structure without sitting through it.

use blindclock_core::mock::{ManualClock, MockAudio, MockDisplay, MockPower, MockRotary};
use blindclock_core::{Config, Controller, INTERVAL_EDITOR, SMALL_BLIND_EDITOR};
use clap::Args;

#[derive(Args)]
pub struct SimulateArgs {
    /// Starting small blind (multiple of 25, 25..=200)
    #[arg(long, default_value_t = 25)]
    small_blind: u32,
    /// Minutes per round (multiple of 5, 5..=45)
    #[arg(long, default_value_t = 10)]
    interval: u32,
    /// Number of round boundaries to play through
    #[arg(long, default_value_t = 3)]
    rounds: u32,
}

pub fn run(args: SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let sb = SMALL_BLIND_EDITOR;
    if args.small_blind < sb.min || args.small_blind > sb.max || args.small_blind % sb.step != 0 {
        return Err(format!(
            "--small-blind must be a multiple of {} in {}..={}",
            sb.step, sb.min, sb.max
        )
        .into());
    }
    let iv = INTERVAL_EDITOR;
    if args.interval < iv.min || args.interval > iv.max || args.interval % iv.step != 0 {
        return Err(format!(
            "--interval must be a multiple of {} in {}..={}",
            iv.step, iv.min, iv.max
        )
        .into());
    }

    // Feed the requested values in as the power-on defaults so the three
    // confirms walk straight through setup.
    let mut config = Config::default();
    config.defaults.small_blind = args.small_blind;
    config.defaults.interval_minutes = args.interval;
    config.audio.startup_chime = false;

    let mut controller = Controller::new(
        config,
        MockDisplay::new(),
        MockAudio::new(),
        MockRotary::new(),
        ManualClock::new(0),
        MockPower::new(),
    );
    controller.power_on();
    for _ in 0..3 {
        controller.notify_confirm();
        controller.poll();
    }

    let total_seconds = args.rounds * args.interval * 60;
    for _ in 0..total_seconds {
        controller.clock().advance(1000);
        controller.poll();
    }

    println!("{}", controller.log().to_json_pretty()?);
    Ok(())
}
