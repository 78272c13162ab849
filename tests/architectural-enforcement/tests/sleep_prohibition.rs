//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code MUST NOT call sleep methods. Timers are
//! data in a `TimerQueue`, not blocked threads.
//! **Exceptions**: Frame rate limiting in the TUI event loop (`app.rs`), test code.

use std::fs;

use architectural_enforcement::{
    is_frame_limiting_context, production_lines, scan_dir, workspace_root, Violation,
};

const SLEEP: &[&str] = &["::sleep(", ".sleep("];

#[test]
fn test_no_sleep_in_core() {
    let core = workspace_root().join("folio/core/src");
    let violations = scan_dir(&core, SLEEP, &[]);

    for violation in &violations {
        eprintln!("  ❌ {}", violation);
    }
    assert!(
        violations.is_empty(),
        "Found {} sleep call(s) in folio-core",
        violations.len()
    );
}

#[test]
fn test_tui_sleeps_only_for_frame_limiting() {
    let tui = workspace_root().join("tui/src");
    let mut violations: Vec<Violation> = scan_dir(&tui, SLEEP, &[]);

    // Keep only the ones that are not frame limiting in the event loop
    violations.retain(|v| {
        if !v.path.ends_with("app.rs") {
            return true;
        }
        let Ok(source) = fs::read_to_string(&v.path) else {
            return true;
        };
        let lines = production_lines(&source);
        !is_frame_limiting_context(&lines, v.line - 1)
    });

    for violation in &violations {
        eprintln!("  ❌ {}", violation);
    }
    assert!(
        violations.is_empty(),
        "Found {} sleep call(s) outside frame limiting",
        violations.len()
    );
}
