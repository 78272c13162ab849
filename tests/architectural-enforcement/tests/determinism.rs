//! Integration Test: Deterministic Core
//!
//! **Policy**: `folio-core` state machines MUST NOT read the wall clock or
//! ambient randomness. Time comes in through `advance(now)` and randomness
//! through an injected `RandomSource`.
//! **Exceptions**: `clock.rs` (the `SystemClock` seam) and `random.rs`
//! (the `ThreadRandom` seam), test modules.

use architectural_enforcement::{scan_dir, workspace_root};

const WALL_CLOCK: &[&str] = &["Instant::now", "SystemTime::now"];
const AMBIENT_RANDOM: &[&str] = &["thread_rng", "rand::random", "OsRng"];

fn report(kind: &str, violations: &[architectural_enforcement::Violation]) {
    if violations.is_empty() {
        return;
    }
    eprintln!("\n❌ {kind} found in folio-core state machines:\n");
    for violation in violations {
        eprintln!("  ❌ {}", violation);
    }
    eprintln!("\n✅ Take `now: Duration` as a parameter, or a `&mut dyn RandomSource`.");
    panic!("\nFound {} {kind} violation(s).", violations.len());
}

#[test]
fn test_core_sources_exist() {
    let core = workspace_root().join("folio/core/src");
    assert!(core.join("lib.rs").exists(), "scan root moved: {}", core.display());
}

#[test]
fn test_no_wall_clock_in_core() {
    let core = workspace_root().join("folio/core/src");
    let violations = scan_dir(&core, WALL_CLOCK, &["clock.rs"]);
    report("wall-clock read", &violations);
}

#[test]
fn test_no_ambient_randomness_in_core() {
    let core = workspace_root().join("folio/core/src");
    let violations = scan_dir(&core, AMBIENT_RANDOM, &["random.rs"]);
    report("ambient randomness", &violations);
}
