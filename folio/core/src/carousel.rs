//! Image Carousel
//!
//! Cycles an index over a fixed image list. Manual navigation pauses
//! auto-rotation; it comes back on its own once the visitor has left the
//! carousel alone for the resume window. Every index change cross-fades.

use std::time::Duration;

use crate::config::TimingConfig;
use crate::timer::TimerQueue;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CarouselTimer {
    AutoAdvance,
    FadeEnd,
    Resume,
}

/// Carousel state over opaque image URIs
#[derive(Debug)]
pub struct Carousel {
    images: Vec<String>,
    current: usize,
    previous: usize,
    auto_rotate: bool,
    last_manual: Option<Duration>,
    fading: bool,
    fade_started: Duration,
    interval: Duration,
    fade: Duration,
    resume: Duration,
    timers: TimerQueue<CarouselTimer>,
}

impl Carousel {
    /// Build over `images`, falling back to `fallback` when the list is empty
    ///
    /// With neither, the carousel is empty and every operation is a no-op.
    pub fn new(images: Vec<String>, fallback: Option<String>, timing: &TimingConfig) -> Self {
        let images = if images.is_empty() {
            fallback.into_iter().collect()
        } else {
            images
        };

        Self {
            images,
            current: 0,
            previous: 0,
            auto_rotate: true,
            last_manual: None,
            fading: false,
            fade_started: Duration::ZERO,
            interval: timing.carousel_interval,
            fade: timing.carousel_fade,
            resume: timing.carousel_resume,
            timers: TimerQueue::new(),
        }
    }

    /// Arm auto-rotation
    pub fn start(&mut self, now: Duration) {
        self.arm_auto_advance(now);
    }

    fn arm_auto_advance(&mut self, from: Duration) {
        self.timers
            .cancel_where(|t| *t == CarouselTimer::AutoAdvance);
        if self.auto_rotate && self.images.len() > 1 {
            self.timers
                .schedule(from, self.interval, CarouselTimer::AutoAdvance);
        }
    }

    /// Step forward (manual)
    pub fn next(&mut self, now: Duration) {
        if self.images.is_empty() {
            return;
        }
        let idx = (self.current + 1) % self.images.len();
        self.manual(now, idx);
    }

    /// Step backward (manual)
    pub fn prev(&mut self, now: Duration) {
        if self.images.is_empty() {
            return;
        }
        let len = self.images.len();
        let idx = (self.current + len - 1) % len;
        self.manual(now, idx);
    }

    /// Jump to an index (manual); out-of-range indices wrap
    pub fn select(&mut self, now: Duration, index: usize) {
        if self.images.is_empty() {
            return;
        }
        let idx = index % self.images.len();
        self.manual(now, idx);
    }

    fn manual(&mut self, now: Duration, idx: usize) {
        self.advance(now);

        if self.auto_rotate {
            tracing::debug!("carousel auto-rotate paused");
        }
        self.auto_rotate = false;
        self.last_manual = Some(now);
        self.timers.cancel_where(|t| {
            matches!(t, CarouselTimer::AutoAdvance | CarouselTimer::Resume)
        });
        self.timers.schedule(now, self.resume, CarouselTimer::Resume);

        self.show(now, idx);
    }

    fn show(&mut self, at: Duration, idx: usize) {
        self.previous = self.current;
        self.current = idx;
        self.fading = true;
        self.fade_started = at;
        self.timers.cancel_where(|t| *t == CarouselTimer::FadeEnd);
        self.timers.schedule(at, self.fade, CarouselTimer::FadeEnd);
    }

    /// Run every timer due at or before `now`
    pub fn advance(&mut self, now: Duration) {
        while let Some((at, timer)) = self.timers.pop_due(now) {
            match timer {
                CarouselTimer::AutoAdvance => {
                    if self.auto_rotate && self.images.len() > 1 {
                        let idx = (self.current + 1) % self.images.len();
                        self.show(at, idx);
                        self.timers
                            .schedule(at, self.interval, CarouselTimer::AutoAdvance);
                    }
                }
                CarouselTimer::FadeEnd => {
                    self.fading = false;
                }
                CarouselTimer::Resume => {
                    self.auto_rotate = true;
                    tracing::debug!("carousel auto-rotate resumed");
                    self.arm_auto_advance(at);
                }
            }
        }
    }

    /// Opacity of the (previous, current) image layers at `now`
    ///
    /// A linear cross-fade over the fade window; outside it the current
    /// image is fully opaque and the previous one hidden.
    pub fn layer_opacities(&self, now: Duration) -> (f32, f32) {
        if !self.fading || self.previous == self.current || self.fade.is_zero() {
            return (0.0, 1.0);
        }
        let elapsed = now.saturating_sub(self.fade_started);
        let t = (elapsed.as_secs_f32() / self.fade.as_secs_f32()).clamp(0.0, 1.0);
        (1.0 - t, t)
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn previous_index(&self) -> usize {
        self.previous
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    pub fn previous_image(&self) -> Option<&str> {
        self.images.get(self.previous).map(String::as_str)
    }

    pub fn is_auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    pub fn last_manual_interaction(&self) -> Option<Duration> {
        self.last_manual
    }

    pub fn is_fading(&self) -> bool {
        self.fading
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
