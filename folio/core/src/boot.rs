//! Boot Sequence
//!
//! Types a short script line by line before the hero settles into its
//! steady state. A line of `L` characters is committed on the `L + 1`-th
//! character tick; the first tick shows the empty prefix.

use std::time::Duration;

use crate::config::TimingConfig;
use crate::timer::TimerQueue;

/// Prompt shown on the typing line between two lines
pub const PROMPT: &str = "> ";

/// Emitted by [`BootSequence::advance`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootSignal {
    /// The script is done; emitted exactly once
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BootTimer {
    Char,
    NextLine,
    Finish,
}

/// Line-by-line typing animation with a one-shot completion signal
#[derive(Debug)]
pub struct BootSequence {
    lines: Vec<String>,
    line_index: usize,
    /// Characters to reveal on the next tick
    char_index: usize,
    current: String,
    done_lines: Vec<String>,
    started: bool,
    finished_at: Option<Duration>,
    char_interval: Duration,
    line_pause: Duration,
    finish_delay: Duration,
    timers: TimerQueue<BootTimer>,
}

impl BootSequence {
    pub fn new(lines: Vec<String>, timing: &TimingConfig) -> Self {
        Self {
            lines,
            line_index: 0,
            char_index: 0,
            current: String::new(),
            done_lines: Vec::new(),
            started: false,
            finished_at: None,
            char_interval: timing.boot_char,
            line_pause: timing.boot_line_pause,
            finish_delay: timing.boot_finish_delay,
            timers: TimerQueue::new(),
        }
    }

    /// Begin typing at `now`. Calling again is a no-op.
    pub fn start(&mut self, now: Duration) {
        if self.started {
            return;
        }
        self.started = true;
        self.begin_line(now);
    }

    /// Run every timer due at or before `now`
    pub fn advance(&mut self, now: Duration) -> Option<BootSignal> {
        let mut signal = None;
        while let Some((at, timer)) = self.timers.pop_due(now) {
            if let Some(s) = self.fire(at, timer) {
                signal = Some(s);
            }
        }
        signal
    }

    /// Drop all pending timers; the sequence stays where it is
    pub fn cancel(&mut self) {
        self.timers.clear();
    }

    fn begin_line(&mut self, at: Duration) {
        if self.line_index >= self.lines.len() {
            self.timers.schedule(at, self.finish_delay, BootTimer::Finish);
            return;
        }
        self.char_index = 0;
        self.timers.schedule(at, self.char_interval, BootTimer::Char);
    }

    fn fire(&mut self, at: Duration, timer: BootTimer) -> Option<BootSignal> {
        match timer {
            BootTimer::Char => {
                let line = &self.lines[self.line_index];
                let len = line.chars().count();

                self.current = line.chars().take(self.char_index).collect();
                self.char_index += 1;

                if self.char_index > len {
                    self.current = PROMPT.to_string();
                    self.done_lines.push(line.clone());
                    self.timers.schedule(at, self.line_pause, BootTimer::NextLine);
                } else {
                    self.timers.schedule(at, self.char_interval, BootTimer::Char);
                }
                None
            }
            BootTimer::NextLine => {
                self.line_index += 1;
                self.begin_line(at);
                None
            }
            BootTimer::Finish => {
                if self.finished_at.is_some() {
                    return None;
                }
                self.finished_at = Some(at);
                tracing::debug!(lines = self.done_lines.len(), "boot sequence finished");
                Some(BootSignal::Finished)
            }
        }
    }

    /// Lines already typed out
    pub fn done_lines(&self) -> &[String] {
        &self.done_lines
    }

    /// The line being typed, or None once every line is committed
    pub fn current_line(&self) -> Option<&str> {
        (self.line_index < self.lines.len()).then_some(self.current.as_str())
    }

    pub fn line_index(&self) -> usize {
        self.line_index
    }

    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    /// When the completion signal fired
    pub fn finished_at(&self) -> Option<Duration> {
        self.finished_at
    }

    pub fn is_started(&self) -> bool {
        self.started
    }
}
