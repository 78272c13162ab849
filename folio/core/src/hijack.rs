//! Terminal Hijack
//!
//! The hero's rotating typer can be taken over: focusing the terminal
//! freezes it and routes keystrokes into a buffer that slowly eats itself.
//! Once the visitor goes quiet and the buffer is empty, the typer takes
//! control again from its first phrase.
//!
//! ```text
//!   Automatic ──focus──▶ UserFocused
//!       ▲                   │  key: append / backspace / enter=clear
//!       │                   │  decay: pop one char every tick
//!       │                   │  watchdog: typing flag off after short idle
//!       └──blur / long idle + empty buffer
//! ```

use std::time::Duration;

use crate::config::{HeroConfig, TimingConfig};
use crate::random::RandomSource;
use crate::timer::TimerQueue;
use crate::typing::RotatingTyper;

/// Who is driving the terminal line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HijackMode {
    Automatic,
    UserFocused,
}

/// Keyboard input while focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keystroke {
    Char(char),
    Backspace,
    Enter,
}

/// What the visitor typed, alive only while focused
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserInputBuffer {
    content: String,
    last_keystroke: Option<Duration>,
    is_active: bool,
}

impl UserInputBuffer {
    fn activate(&mut self) {
        self.content.clear();
        self.last_keystroke = None;
        self.is_active = true;
    }

    fn deactivate(&mut self) {
        self.content.clear();
        self.last_keystroke = None;
        self.is_active = false;
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn last_keystroke(&self) -> Option<Duration> {
        self.last_keystroke
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HijackTimer {
    Decay,
    Watchdog,
}

/// Rotating typer plus the interaction detector that can override it
#[derive(Debug)]
pub struct TerminalHijack {
    typer: RotatingTyper,
    mode: HijackMode,
    buffer: UserInputBuffer,
    is_user_typing: bool,
    warning: Option<String>,
    warnings: Vec<String>,
    focused_at: Duration,
    decay: Duration,
    watchdog: Duration,
    typing_idle: Duration,
    release_idle: Duration,
    timers: TimerQueue<HijackTimer>,
}

impl TerminalHijack {
    pub fn new(hero: &HeroConfig, timing: &TimingConfig) -> Self {
        Self {
            typer: RotatingTyper::new(hero.phrases.clone(), timing),
            mode: HijackMode::Automatic,
            buffer: UserInputBuffer::default(),
            is_user_typing: false,
            warning: None,
            warnings: hero.warnings.clone(),
            focused_at: Duration::ZERO,
            decay: timing.hijack_decay,
            watchdog: timing.hijack_watchdog,
            typing_idle: timing.hijack_typing_idle,
            release_idle: timing.hijack_release_idle,
            timers: TimerQueue::new(),
        }
    }

    /// Start the automatic typer
    pub fn start(&mut self, now: Duration) {
        self.typer.start(now);
    }

    /// Visitor clicked into the terminal
    pub fn focus(&mut self, now: Duration) {
        self.advance(now);
        if self.mode == HijackMode::UserFocused {
            return;
        }

        self.mode = HijackMode::UserFocused;
        self.typer.freeze();
        self.buffer.activate();
        self.is_user_typing = false;
        self.warning = None;
        self.focused_at = now;
        self.timers.schedule(now, self.decay, HijackTimer::Decay);
        self.timers.schedule(now, self.watchdog, HijackTimer::Watchdog);
        tracing::debug!("terminal hijacked");
    }

    /// Visitor clicked somewhere else
    pub fn blur(&mut self, now: Duration) {
        self.advance(now);
        if self.mode == HijackMode::UserFocused {
            self.release(now);
        }
    }

    /// Route a keystroke. Ignored unless focused.
    pub fn key(&mut self, now: Duration, key: Keystroke, rng: &mut dyn RandomSource) {
        self.advance(now);
        if self.mode != HijackMode::UserFocused {
            return;
        }

        if !self.is_user_typing && !self.warnings.is_empty() {
            let idx = rng.index(self.warnings.len());
            self.warning = Some(self.warnings[idx].clone());
        }
        self.is_user_typing = true;
        self.buffer.last_keystroke = Some(now);

        match key {
            Keystroke::Char(c) if !c.is_control() => self.buffer.content.push(c),
            Keystroke::Char(_) => {}
            Keystroke::Backspace => {
                self.buffer.content.pop();
            }
            Keystroke::Enter => self.buffer.content.clear(),
        }
    }

    /// Run every timer due at or before `now`
    pub fn advance(&mut self, now: Duration) {
        while let Some((at, timer)) = self.timers.pop_due(now) {
            self.fire(at, timer);
        }
        self.typer.advance(now);
    }

    fn fire(&mut self, at: Duration, timer: HijackTimer) {
        match timer {
            HijackTimer::Decay => {
                self.buffer.content.pop();
                self.timers.schedule(at, self.decay, HijackTimer::Decay);
            }
            HijackTimer::Watchdog => {
                let since = self.buffer.last_keystroke.unwrap_or(self.focused_at);
                let idle = at.saturating_sub(since);

                if idle >= self.typing_idle {
                    self.is_user_typing = false;
                }

                if idle >= self.release_idle && self.buffer.is_empty() {
                    self.release(at);
                } else {
                    self.timers.schedule(at, self.watchdog, HijackTimer::Watchdog);
                }
            }
        }
    }

    fn release(&mut self, at: Duration) {
        self.timers.clear();
        self.mode = HijackMode::Automatic;
        self.buffer.deactivate();
        self.is_user_typing = false;
        self.warning = None;
        self.typer.reset(at);
        tracing::debug!("terminal released back to the typer");
    }

    pub fn mode(&self) -> HijackMode {
        self.mode
    }

    pub fn is_focused(&self) -> bool {
        self.mode == HijackMode::UserFocused
    }

    pub fn buffer(&self) -> &UserInputBuffer {
        &self.buffer
    }

    /// True shortly after a keystroke; drives the warning emphasis
    pub fn is_user_typing(&self) -> bool {
        self.is_user_typing
    }

    /// Warning picked on the first keystroke of a burst
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn typer(&self) -> &RotatingTyper {
        &self.typer
    }

    /// Text for the terminal line: the visitor's buffer while focused
    pub fn display_text(&self) -> String {
        match self.mode {
            HijackMode::UserFocused => self.buffer.content.clone(),
            HijackMode::Automatic => self.typer.visible_text(),
        }
    }
}
