//! Architectural Enforcement
//!
//! Source scans backing the integration tests in `tests/`:
//! - Core state machines never read wall-clock time or ambient randomness;
//!   time arrives through `advance(now)` and randomness through
//!   `RandomSource`, so every animation replays exactly under test.
//! - No sleep() calls in production code, except TUI frame limiting.
//!
//! Test modules (`#[cfg(test)]` to end of file) and comments are ignored.

use std::fs;
use std::path::{Path, PathBuf};

/// One forbidden pattern found in a source file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub path: PathBuf,
    pub line: usize,
    pub pattern: &'static str,
    pub text: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} [{}] {}",
            self.path.display(),
            self.line,
            self.pattern,
            self.text
        )
    }
}

/// Workspace root, two levels above this package
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

/// Code part of a line, without a trailing `//` comment
pub fn code_part(line: &str) -> &str {
    line.split("//").next().unwrap_or(line)
}

/// Lines before the first `#[cfg(test)]`
pub fn production_lines(source: &str) -> Vec<&str> {
    source
        .lines()
        .take_while(|line| !line.trim_start().starts_with("#[cfg(test)]"))
        .collect()
}

/// Scan one source text for any of `patterns`
pub fn scan_source(path: &Path, source: &str, patterns: &[&'static str]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (idx, line) in production_lines(source).iter().enumerate() {
        let code = code_part(line);
        for pattern in patterns {
            if code.contains(pattern) {
                violations.push(Violation {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    pattern,
                    text: line.trim().to_string(),
                });
            }
        }
    }
    violations
}

/// Scan every `.rs` file under `dir`, skipping files whose name is in `exempt`
pub fn scan_dir(dir: &Path, patterns: &[&'static str], exempt: &[&str]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for entry in walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
        if exempt.contains(&name) {
            continue;
        }
        let Ok(source) = fs::read_to_string(path) else {
            continue;
        };
        violations.extend(scan_source(path, &source, patterns));
    }

    violations
}

/// Check if a sleep at `current_idx` is frame rate limiting
pub fn is_frame_limiting_context(lines: &[&str], current_idx: usize) -> bool {
    let context_range = current_idx.saturating_sub(10)..std::cmp::min(current_idx + 5, lines.len());

    lines[context_range].iter().any(|line| {
        let line = line.to_lowercase();
        line.contains("frame") || line.contains("fps")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_ignored() {
        let found = scan_source(
            Path::new("x.rs"),
            "// Instant::now() is not allowed\nlet a = 1; // thread_rng\n",
            &["Instant::now", "thread_rng"],
        );
        assert!(found.is_empty());
    }

    #[test]
    fn test_test_module_ignored() {
        let source = "fn f() {}\n#[cfg(test)]\nmod tests {\n    let t = Instant::now();\n}\n";
        assert!(scan_source(Path::new("x.rs"), source, &["Instant::now"]).is_empty());
    }

    #[test]
    fn test_violation_reported_with_line() {
        let source = "fn f() {\n    let t = std::time::Instant::now();\n}\n";
        let found = scan_source(Path::new("x.rs"), source, &["Instant::now"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line, 2);
        assert_eq!(found[0].text, "let t = std::time::Instant::now();");
    }

    #[test]
    fn test_frame_limiting_detection() {
        let code = [
            "let frame_duration = Duration::from_millis(33);",
            "loop {",
            "    render();",
            "    tokio::time::sleep(frame_duration).await;",
            "}",
        ];
        assert!(is_frame_limiting_context(&code, 3));
        assert!(!is_frame_limiting_context(&["tokio::time::sleep(d).await;"], 0));
    }
}
