//! Scenario tests across components
//!
//! These drive the public API the way the surface does: one `ManualClock`,
//! one scripted random source, `advance(now)` every frame.
//! Tests cover:
//! - Boot script completion and hand-off to the rotating typer
//! - Terminal hijack idle release
//! - Carousel pause / resume window
//! - Shooting star bounds over a long session
//! - TOML configuration affecting components

use std::io::Write;
use std::time::Duration;

use tempfile::NamedTempFile;

use folio_core::clock::ms;
use folio_core::{
    AnimationPhase, BootSequence, BootSignal, Carousel, Clock, FolioConfig, HeroConfig,
    HijackMode, Keystroke, ManualClock, Portfolio, PortfolioView, ScriptedRandom, SeededRandom,
    ShootingStars, TerminalHijack, TimingConfig,
};

/// Frame period the surface runs at
const FRAME: Duration = Duration::from_millis(16);

// =============================================================================
// Boot sequence
// =============================================================================

#[test]
fn test_boot_scenario_fires_completion_once() {
    let clock = ManualClock::new();
    let mut boot = BootSequence::new(
        vec!["> a".to_string(), "> bb".to_string()],
        &TimingConfig::default(),
    );
    boot.start(clock.now());

    let mut completions = Vec::new();
    while clock.now() < ms(5_000) {
        clock.advance(FRAME);
        if let Some(BootSignal::Finished) = boot.advance(clock.now()) {
            completions.push(clock.now());
        }
    }

    assert_eq!(completions.len(), 1);
    assert_eq!(boot.done_lines(), &["> a".to_string(), "> bb".to_string()]);
    // observed on the first frame at or after the exact completion time
    assert!(completions[0] >= ms(1_860) && completions[0] < ms(1_860) + FRAME);
    assert_eq!(boot.finished_at(), Some(ms(1_860)));
}

// =============================================================================
// Terminal hijack
// =============================================================================

#[test]
fn test_hijack_scenario_frame_by_frame() {
    let clock = ManualClock::new();
    let mut rng = ScriptedRandom::constant(0.2);
    let mut hijack = TerminalHijack::new(&HeroConfig::default(), &TimingConfig::default());
    hijack.start(clock.now());

    clock.set(ms(5_000));
    hijack.advance(clock.now());
    hijack.focus(clock.now());
    hijack.key(clock.now(), Keystroke::Char('x'), &mut rng);

    let typed_at = clock.now();
    let mut typing_cleared = None;
    let mut released = None;

    while clock.now() < typed_at + ms(4_000) {
        clock.advance(FRAME);
        hijack.advance(clock.now());

        if typing_cleared.is_none() && !hijack.is_user_typing() {
            typing_cleared = Some(clock.now() - typed_at);
        }
        if released.is_none() && hijack.mode() == HijackMode::Automatic {
            released = Some(clock.now() - typed_at);
        }
    }

    let typing_cleared = typing_cleared.unwrap();
    let released = released.unwrap();
    assert!(typing_cleared >= ms(1_200) && typing_cleared < ms(1_200) + FRAME);
    assert!(released >= ms(3_000) && released < ms(3_000) + FRAME);
    assert_eq!(hijack.typer().phrase_index(), 0);
}

#[test]
fn test_typer_bounded_while_hijacked_repeatedly() {
    let clock = ManualClock::new();
    let mut rng = SeededRandom::new(5);
    let mut hijack = TerminalHijack::new(&HeroConfig::default(), &TimingConfig::default());
    hijack.start(clock.now());

    for round in 0..2_000u64 {
        clock.advance(ms(23));
        let now = clock.now();
        match round % 97 {
            0 => hijack.focus(now),
            13 => hijack.key(now, Keystroke::Char('a'), &mut rng),
            14 => hijack.key(now, Keystroke::Backspace, &mut rng),
            50 => hijack.blur(now),
            _ => hijack.advance(now),
        }
        let typer = hijack.typer();
        assert!(typer.visible_len() <= typer.current_phrase().chars().count());
    }
}

// =============================================================================
// Carousel
// =============================================================================

#[test]
fn test_carousel_scenario() {
    let clock = ManualClock::new();
    let images = vec!["a.png".into(), "b.png".into(), "c.png".into()];
    let mut carousel = Carousel::new(images, None, &TimingConfig::default());
    carousel.start(clock.now());

    carousel.next(clock.now());
    clock.set(ms(1_000));
    carousel.next(clock.now());

    clock.advance(ms(1));
    carousel.advance(clock.now());
    assert!(!carousel.is_auto_rotate());

    while clock.now() < ms(40_999) {
        clock.advance(FRAME);
        carousel.advance(clock.now().min(ms(40_999)));
        assert!(!carousel.is_auto_rotate());
    }

    clock.set(ms(41_000));
    carousel.advance(clock.now());
    assert!(carousel.is_auto_rotate());
    assert!(carousel.current_index() < carousel.len());
}

// =============================================================================
// Shooting stars
// =============================================================================

#[test]
fn test_particles_over_long_session() {
    let timing = TimingConfig::default();
    let clock = ManualClock::new();
    let mut rng = SeededRandom::new(2024);
    let mut stars = ShootingStars::new(&timing);
    stars.start(clock.now(), &mut rng);

    let mut max_seen = 0;
    while clock.now() < ms(600_000) {
        clock.advance(FRAME);
        stars.advance(clock.now(), &mut rng);
        max_seen = max_seen.max(stars.len());
        for p in stars.particles() {
            assert!(clock.now() - p.spawned_at < timing.star_lifetime);
        }
    }

    assert!(max_seen >= 1);
    assert!(max_seen <= timing.star_max_live);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_toml_config_drives_view() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[timing]
boot_char_ms = 10
boot_line_pause_ms = 10
boot_finish_delay_ms = 10
type_char_ms = 10

[hero]
boot_lines = ["> hi"]
phrases = ["ok"]
"#
    )
    .unwrap();

    let config = FolioConfig::load_from(file.path()).unwrap();
    let mut view = PortfolioView::new(
        Portfolio::default(),
        config,
        Box::new(ScriptedRandom::constant(0.5)),
    );
    view.start(ms(0));

    // "> hi": commit at 50, next line at 60, finish at 70, "o" at 80, "ok" at 90
    view.advance(ms(69));
    assert_eq!(view.hero().phase(), AnimationPhase::Booting);
    view.advance(ms(90));
    assert_eq!(view.hero().phase(), AnimationPhase::Idle);
    assert_eq!(view.hero().terminal().display_text(), "ok");
}
