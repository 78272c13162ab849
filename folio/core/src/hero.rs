//! Hero Section
//!
//! Boot script first, then the hijackable rotating typer. The switch from
//! [`AnimationPhase::Booting`] to [`AnimationPhase::Idle`] happens once.

use std::time::Duration;

use crate::boot::{BootSequence, BootSignal};
use crate::config::{HeroConfig, TimingConfig};
use crate::hijack::{Keystroke, TerminalHijack};
use crate::random::RandomSource;

/// Which half of the hero is on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationPhase {
    Booting,
    Idle,
}

/// Boot sequence and steady-state terminal, composed
#[derive(Debug)]
pub struct Hero {
    phase: AnimationPhase,
    boot: BootSequence,
    terminal: TerminalHijack,
}

impl Hero {
    pub fn new(hero: &HeroConfig, timing: &TimingConfig, skip_boot: bool) -> Self {
        Self {
            phase: if skip_boot {
                AnimationPhase::Idle
            } else {
                AnimationPhase::Booting
            },
            boot: BootSequence::new(hero.boot_lines.clone(), timing),
            terminal: TerminalHijack::new(hero, timing),
        }
    }

    pub fn start(&mut self, now: Duration) {
        match self.phase {
            AnimationPhase::Booting => self.boot.start(now),
            AnimationPhase::Idle => self.terminal.start(now),
        }
    }

    /// Run every timer due at or before `now`. Returns true on the boot → idle switch.
    pub fn advance(&mut self, now: Duration) -> bool {
        match self.phase {
            AnimationPhase::Booting => {
                if self.boot.advance(now) != Some(BootSignal::Finished) {
                    return false;
                }
                let at = self.boot.finished_at().unwrap_or(now);
                self.phase = AnimationPhase::Idle;
                tracing::info!("hero entered idle phase");
                self.terminal.start(at);
                self.terminal.advance(now);
                true
            }
            AnimationPhase::Idle => {
                self.terminal.advance(now);
                false
            }
        }
    }

    /// Focus the terminal line; ignored while booting
    pub fn focus(&mut self, now: Duration) {
        self.advance(now);
        if self.phase == AnimationPhase::Idle {
            self.terminal.focus(now);
        }
    }

    pub fn blur(&mut self, now: Duration) {
        self.advance(now);
        if self.phase == AnimationPhase::Idle {
            self.terminal.blur(now);
        }
    }

    pub fn key(&mut self, now: Duration, key: Keystroke, rng: &mut dyn RandomSource) {
        self.advance(now);
        if self.phase == AnimationPhase::Idle {
            self.terminal.key(now, key, rng);
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn boot(&self) -> &BootSequence {
        &self.boot
    }

    pub fn terminal(&self) -> &TerminalHijack {
        &self.terminal
    }
}
