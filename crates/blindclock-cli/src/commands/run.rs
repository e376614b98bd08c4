//! Interactive appliance simulation.
//!
//! Maps the terminal onto the device: arrow keys (or `+`/`-`) turn the
//! rotary encoder, Enter or Space pushes the confirm button, `q` powers
//! off. The speaker is the terminal bell; tone durations still block the
//! loop exactly like the hardware speaker does.

use std::collections::HashMap;
use std::io::{stdout, Write};
use std::path::PathBuf;
use std::time::Duration;

use blindclock_core::{
    AudioDevice, Config, Controller, DisplayAdapter, Mode, PowerControl, RotaryInput, SystemClock,
    Widget,
};
use clap::Args;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};

#[derive(Args)]
pub struct RunArgs {
    /// Path to a config file (defaults to ~/.config/blindclock/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Widget store that renders the device face as a single status line.
#[derive(Default)]
struct TermDisplay {
    texts: HashMap<Widget, String>,
    visible: HashMap<Widget, bool>,
}

impl TermDisplay {
    fn text(&self, widget: Widget) -> &str {
        self.texts.get(&widget).map(String::as_str).unwrap_or("")
    }

    fn line(&self, mode: Mode) -> String {
        match mode {
            Mode::Setup => "blindclock  --  push (Enter) to begin".to_string(),
            Mode::EditSmallBlind | Mode::EditInterval => format!(
                "{}: {}  (turn with arrows, push Enter)",
                self.text(Widget::PageTitle),
                self.text(Widget::BigNumber),
            ),
            Mode::RoundTimer => format!(
                "{}  SB {} / BB {}  {:>2}:{:0>2}  (push Enter to power off)",
                self.text(Widget::PageTitle),
                self.text(Widget::SmallBlind),
                self.text(Widget::BigBlind),
                self.text(Widget::MinutesRemaining),
                self.text(Widget::SecondsRemaining),
            ),
        }
    }
}

impl DisplayAdapter for TermDisplay {
    fn set_text(&mut self, widget: Widget, text: &str) {
        self.texts.insert(widget, text.to_string());
    }

    fn set_visible(&mut self, widget: Widget, visible: bool) {
        self.visible.insert(widget, visible);
    }

    fn fill_screen(&mut self, _rgb: u32) {
        self.texts.clear();
    }
}

/// Terminal-bell speaker. Blocks for the full note duration, matching the
/// hardware tone generator's contract.
struct BellAudio {
    volume: f32,
}

impl BellAudio {
    fn new() -> Self {
        Self { volume: 1.0 }
    }
}

impl AudioDevice for BellAudio {
    fn tone(&mut self, _freq_hz: u16, duration_ms: u32) {
        if self.volume > 0.0 {
            let mut out = stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
        std::thread::sleep(Duration::from_millis(u64::from(duration_ms)));
    }

    fn rest(&mut self, duration_ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(duration_ms)));
    }

    fn set_volume(&mut self, fraction: f32) {
        self.volume = fraction.clamp(0.0, 1.0);
    }
}

/// Accumulates key-driven encoder turns until the controller consumes them.
#[derive(Default)]
struct KeyRotary {
    pending: i32,
}

impl KeyRotary {
    fn turn(&mut self, delta: i32) {
        self.pending += delta;
    }
}

impl RotaryInput for KeyRotary {
    fn has_pending_delta(&self) -> bool {
        self.pending != 0
    }

    fn take_delta(&mut self) -> i32 {
        std::mem::take(&mut self.pending)
    }
}

/// Stands in for the power-hold circuit; releasing the line ends the run.
#[derive(Default)]
struct SimPower {
    held: bool,
}

impl PowerControl for SimPower {
    fn hold_line(&mut self, active: bool) {
        self.held = active;
    }

    fn arm_shutdown_watch(&mut self) {}
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = match args.config {
        Some(path) => Config::load_from(&path)?,
        None => Config::load_or_default(),
    };

    let mut controller = Controller::new(
        config,
        TermDisplay::default(),
        BellAudio::new(),
        KeyRotary::default(),
        SystemClock::new(),
        SimPower::default(),
    );
    controller.power_on();

    terminal::enable_raw_mode()?;
    let outcome = event_loop(&mut controller);
    terminal::disable_raw_mode()?;
    println!();
    outcome
}

fn event_loop(
    controller: &mut Controller<TermDisplay, BellAudio, KeyRotary, SystemClock, SimPower>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut last_line = String::new();
    loop {
        if event::poll(Duration::from_millis(25))? {
            if let TermEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            break
                        }
                        KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => {
                            controller.rotary_mut().turn(-1)
                        }
                        KeyCode::Right | KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => {
                            controller.rotary_mut().turn(1)
                        }
                        KeyCode::Enter | KeyCode::Char(' ') => controller.notify_confirm(),
                        _ => {}
                    }
                }
            }
        }

        controller.poll();

        let line = controller.display().line(controller.mode());
        if line != last_line {
            execute!(
                stdout(),
                cursor::MoveToColumn(0),
                terminal::Clear(terminal::ClearType::CurrentLine),
            )?;
            print!("{line}");
            stdout().flush()?;
            last_line = line;
        }

        if !controller.power().held {
            break;
        }
    }
    Ok(())
}
