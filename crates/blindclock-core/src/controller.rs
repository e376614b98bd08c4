//! Screen state machine and polling loop core.
//!
//! The controller owns the one live [`SessionState`] plus the peripheral
//! handles, and is the only place modes change. The host calls
//! [`Controller::poll`] as fast as it likes; button clicks arrive via
//! [`Controller::notify_confirm`] and are queued, then drained at the top
//! of the next poll so everything runs on one logical thread.

use chrono::Utc;

use crate::config::Config;
use crate::cues;
use crate::editor::{EditorParams, INTERVAL_EDITOR, SMALL_BLIND_EDITOR};
use crate::engine::{RoundEngine, TickPolicy};
use crate::events::{Event, Setting};
use crate::hal::{AudioDevice, Clock, DisplayAdapter, PowerControl, RotaryInput, Widget};
use crate::log::SessionLog;
use crate::session::{Mode, SessionState};

const SCREEN_BG: u32 = 0x000000;
const SMALL_BLIND_PROMPT: &str = "Starting small blinds";
const INTERVAL_PROMPT: &str = "Mins between rounds";

/// Owns the session, the mode, and the peripherals.
pub struct Controller<D, A, R, C, P> {
    mode: Mode,
    session: SessionState,
    engine: RoundEngine,
    log: SessionLog,
    config: Config,
    /// Confirm clicks delivered by the host input layer, drained at the
    /// top of each poll.
    pending_confirms: u32,
    display: D,
    audio: A,
    rotary: R,
    clock: C,
    power: P,
}

impl<D, A, R, C, P> Controller<D, A, R, C, P>
where
    D: DisplayAdapter,
    A: AudioDevice,
    R: RotaryInput,
    C: Clock,
    P: PowerControl,
{
    pub fn new(config: Config, display: D, audio: A, rotary: R, clock: C, power: P) -> Self {
        let engine = RoundEngine::new(TickPolicy {
            catch_up: config.timing.catch_up_ticks,
        });
        let session = SessionState::new(config.defaults.small_blind, config.defaults.interval_minutes);
        Self {
            mode: Mode::Setup,
            session,
            engine,
            log: SessionLog::new(),
            config,
            pending_confirms: 0,
            display,
            audio,
            rotary,
            clock,
            power,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn rotary_mut(&mut self) -> &mut R {
        &mut self.rotary
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn power(&self) -> &P {
        &self.power
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Power-on sequence: latch the hold line so the device stays up, set
    /// the speaker volume once, show the splash and chirp.
    pub fn power_on(&mut self) {
        self.power.hold_line(true);
        self.audio.set_volume(self.config.audio.volume);
        self.display.fill_screen(SCREEN_BG);
        self.display.set_visible(Widget::Logo, true);
        if self.config.audio.startup_chime {
            cues::startup(&mut self.audio);
        }
        self.log.push(Event::PoweredOn { at: Utc::now() });
    }

    /// Queue one confirm-button click. Safe to call from the host's event
    /// delivery between polls; the click takes effect on the next poll.
    pub fn notify_confirm(&mut self) {
        self.pending_confirms = self.pending_confirms.saturating_add(1);
    }

    /// One iteration of the cooperative loop: drain queued clicks, then
    /// service whatever the current mode needs.
    pub fn poll(&mut self) {
        while self.pending_confirms > 0 {
            self.pending_confirms -= 1;
            self.handle_confirm();
        }
        match self.mode {
            Mode::Setup => {}
            Mode::EditSmallBlind => self.poll_editor(Setting::SmallBlind),
            Mode::EditInterval => self.poll_editor(Setting::IntervalMinutes),
            Mode::RoundTimer => self.poll_round(),
        }
    }

    // ── Mode transitions ─────────────────────────────────────────────

    fn handle_confirm(&mut self) {
        match self.mode {
            Mode::Setup => {
                self.session.small_blind = self.config.defaults.small_blind;
                self.enter_prompt(Mode::EditSmallBlind, SMALL_BLIND_PROMPT, self.session.small_blind);
            }
            Mode::EditSmallBlind => {
                self.session.interval_minutes = self.config.defaults.interval_minutes;
                self.enter_prompt(Mode::EditInterval, INTERVAL_PROMPT, self.session.interval_minutes);
                cues::affirm(&mut self.audio);
            }
            Mode::EditInterval => {
                self.enter_round_timer();
                cues::affirm(&mut self.audio);
            }
            Mode::RoundTimer => {
                // Terminal mode: the button now requests power-down.
                self.power.hold_line(false);
                self.power.arm_shutdown_watch();
                self.log.push(Event::ShutdownRequested { at: Utc::now() });
            }
        }
    }

    fn enter_prompt(&mut self, mode: Mode, title: &str, value: u32) {
        self.mode = mode;
        self.display.fill_screen(SCREEN_BG);
        self.display.set_visible(Widget::Logo, false);
        self.display.set_text(Widget::PageTitle, title);
        self.display.set_visible(Widget::PageTitle, true);
        self.display.set_text(Widget::BigNumber, &value.to_string());
        self.display.set_visible(Widget::BigNumber, true);
        self.display.set_visible(Widget::PushPrompt, true);
        self.display.set_visible(Widget::DownArrow, true);
        self.log.push(Event::ModeEntered {
            mode,
            at: Utc::now(),
        });
    }

    fn enter_round_timer(&mut self) {
        self.mode = Mode::RoundTimer;
        self.session.begin_first_round(self.clock.now_ms());
        self.display.fill_screen(SCREEN_BG);
        self.display.set_visible(Widget::BigNumber, false);
        self.display.set_visible(Widget::PushPrompt, false);
        self.display.set_visible(Widget::DownArrow, false);
        self.render_round_header();
        for widget in [
            Widget::SmallBlindCaption,
            Widget::BigBlindCaption,
            Widget::MinutesCaption,
            Widget::SecondsCaption,
        ] {
            self.display.set_visible(widget, true);
        }
        self.log.push(Event::ModeEntered {
            mode: Mode::RoundTimer,
            at: Utc::now(),
        });
    }

    fn render_round_header(&mut self) {
        self.display
            .set_text(Widget::PageTitle, &format!("Round {}", self.session.current_round));
        self.display.set_visible(Widget::PageTitle, true);
        self.display
            .set_text(Widget::SmallBlind, &self.session.small_blind.to_string());
        self.display
            .set_text(Widget::BigBlind, &self.session.big_blind().to_string());
        self.display.set_visible(Widget::SmallBlind, true);
        self.display.set_visible(Widget::BigBlind, true);
    }

    // ── Per-mode polling ─────────────────────────────────────────────

    fn editor_for(setting: Setting) -> EditorParams {
        match setting {
            Setting::SmallBlind => SMALL_BLIND_EDITOR,
            Setting::IntervalMinutes => INTERVAL_EDITOR,
        }
    }

    fn poll_editor(&mut self, setting: Setting) {
        if !self.rotary.has_pending_delta() {
            return;
        }
        // The driver resets its counter on read, so read once and keep
        // the value; a second read this tick would yield zero.
        let delta = self.rotary.take_delta();
        if delta == 0 {
            return;
        }
        let current = match setting {
            Setting::SmallBlind => self.session.small_blind,
            Setting::IntervalMinutes => self.session.interval_minutes,
        };
        let adj = Self::editor_for(setting).apply(current, delta);
        match setting {
            Setting::SmallBlind => self.session.small_blind = adj.value,
            Setting::IntervalMinutes => self.session.interval_minutes = adj.value,
        }
        self.display
            .set_text(Widget::BigNumber, &adj.value.to_string());
        match adj.clamped {
            Some(limit) => {
                cues::boundary(&mut self.audio);
                self.log.push(Event::ValueClamped {
                    setting,
                    value: adj.value,
                    limit,
                    at: Utc::now(),
                });
            }
            None => {
                cues::directional(&mut self.audio, delta);
                self.log.push(Event::ValueAdjusted {
                    setting,
                    value: adj.value,
                    at: Utc::now(),
                });
            }
        }
    }

    fn poll_round(&mut self) {
        let secs = self.session.seconds_remaining;
        self.display
            .set_text(Widget::MinutesRemaining, &(secs / 60).to_string());
        self.display
            .set_text(Widget::SecondsRemaining, &(secs % 60).to_string());

        let Some(due) = self.engine.due(&self.clock, &self.session) else {
            return;
        };
        self.session.last_tick_ms = due.last_tick_ms;
        if self.session.decrement_seconds(due.seconds) > 0 {
            return;
        }

        // Round boundary. Escalate and let the fanfare finish before the
        // countdown refills, so it sounds exactly once per boundary even
        // if the loop was delayed.
        let adv = self.session.advance_round();
        self.render_round_header();
        cues::escalation(&mut self.audio, adv.chime_stage);
        self.session.reset_countdown();
        self.log.push(Event::RoundAdvanced {
            round: adv.round,
            small_blind: adv.small_blind,
            big_blind: adv.big_blind,
            chime_stage: adv.chime_stage,
            at: Utc::now(),
        });
    }
}
