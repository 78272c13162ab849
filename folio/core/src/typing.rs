//! Rotating Phrase Typer
//!
//! Types a phrase, holds it, deletes it, moves to the next one, forever.
//! Modelled as a four-phase state machine driven by one self-re-arming
//! deadline, so freezing or resetting is a single assignment.

use std::time::Duration;

use crate::config::TimingConfig;

/// Current step of the typing cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    /// Revealing one more character per tick
    Growing,
    /// Full phrase on screen
    Holding,
    /// Removing one character per tick
    Shrinking,
    /// Empty, about to switch phrase
    Advancing,
}

/// Infinite typing/deleting cycle over a phrase list
#[derive(Debug, Clone)]
pub struct RotatingTyper {
    phrases: Vec<String>,
    index: usize,
    visible: usize,
    phase: TypingPhase,
    deadline: Option<Duration>,
    type_char: Duration,
    hold: Duration,
    delete_char: Duration,
}

impl RotatingTyper {
    pub fn new(phrases: Vec<String>, timing: &TimingConfig) -> Self {
        Self {
            phrases,
            index: 0,
            visible: 0,
            phase: TypingPhase::Growing,
            deadline: None,
            type_char: timing.type_char,
            hold: timing.type_hold,
            delete_char: timing.delete_char,
        }
    }

    /// Arm the cycle from its current position. No-op without phrases.
    pub fn start(&mut self, now: Duration) {
        if self.phrases.is_empty() {
            return;
        }
        self.deadline = Some(now + self.delay());
    }

    /// Stop ticking, keeping the visible text
    pub fn freeze(&mut self) {
        self.deadline = None;
    }

    /// Back to the first phrase, empty, and running again
    pub fn reset(&mut self, now: Duration) {
        self.index = 0;
        self.visible = 0;
        self.phase = TypingPhase::Growing;
        self.start(now);
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Process every tick due at or before `now`
    pub fn advance(&mut self, now: Duration) {
        while let Some(due) = self.deadline {
            if due > now {
                break;
            }
            self.tick();
            self.deadline = Some(due + self.delay());
        }
    }

    fn delay(&self) -> Duration {
        match self.phase {
            TypingPhase::Growing => self.type_char,
            TypingPhase::Holding => self.hold,
            TypingPhase::Shrinking | TypingPhase::Advancing => self.delete_char,
        }
    }

    fn tick(&mut self) {
        let len = self.phrase_len();
        match self.phase {
            TypingPhase::Growing => {
                if self.visible < len {
                    self.visible += 1;
                }
                if self.visible >= len {
                    self.phase = TypingPhase::Holding;
                }
            }
            TypingPhase::Holding => {
                self.phase = TypingPhase::Shrinking;
            }
            TypingPhase::Shrinking => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.phase = TypingPhase::Advancing;
                }
            }
            TypingPhase::Advancing => {
                self.index = (self.index + 1) % self.phrases.len();
                self.visible = 0;
                self.phase = TypingPhase::Growing;
            }
        }
    }

    fn phrase_len(&self) -> usize {
        self.phrases
            .get(self.index)
            .map_or(0, |p| p.chars().count())
    }

    /// The revealed prefix of the current phrase
    pub fn visible_text(&self) -> String {
        self.phrases
            .get(self.index)
            .map(|p| p.chars().take(self.visible).collect())
            .unwrap_or_default()
    }

    /// The full current phrase
    pub fn current_phrase(&self) -> &str {
        self.phrases.get(self.index).map_or("", String::as_str)
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn visible_len(&self) -> usize {
        self.visible
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }
}
