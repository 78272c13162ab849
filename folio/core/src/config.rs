//! TOML Configuration File Support
//!
//! Timing constants, hero scripts and the content file location, loaded from
//! `$XDG_CONFIG_HOME/folio/folio.toml` (typically `~/.config/folio/folio.toml`).
//!
//! # Configuration Priority
//!
//! Values are resolved with the following priority (highest first):
//! 1. CLI arguments (applied by the surface)
//! 2. Environment variables (`FOLIO_CONTENT`, `FOLIO_SEED`, `FOLIO_SKIP_BOOT`)
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [timing]
//! boot_char_ms = 40
//! type_char_ms = 90
//! carousel_resume_ms = 40000
//! star_max_live = 6
//!
//! [hero]
//! boot_lines = ["> Initializing portfolio...", "> whoami"]
//! phrases = ["Shipping AI-powered golf tools"]
//!
//! [content]
//! path = "~/portfolio.toml"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration or content
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("Failed to read {path}: {source}")]
    Read {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    Cli,
    Env,
    File,
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Structures
// =============================================================================

/// `[timing]` section, all values in milliseconds
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingToml {
    pub boot_char_ms: Option<u64>,
    pub boot_line_pause_ms: Option<u64>,
    pub boot_finish_delay_ms: Option<u64>,
    pub type_char_ms: Option<u64>,
    pub type_hold_ms: Option<u64>,
    pub delete_char_ms: Option<u64>,
    pub hijack_decay_ms: Option<u64>,
    pub hijack_watchdog_ms: Option<u64>,
    pub hijack_typing_idle_ms: Option<u64>,
    pub hijack_release_idle_ms: Option<u64>,
    pub carousel_interval_ms: Option<u64>,
    pub carousel_fade_ms: Option<u64>,
    pub carousel_resume_ms: Option<u64>,
    pub star_spawn_min_ms: Option<u64>,
    pub star_spawn_max_ms: Option<u64>,
    pub star_lifetime_ms: Option<u64>,
    pub star_max_live: Option<usize>,
}

/// `[hero]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroToml {
    pub boot_lines: Option<Vec<String>>,
    pub phrases: Option<Vec<String>>,
    pub warnings: Option<Vec<String>>,
}

/// `[content]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentToml {
    pub path: Option<String>,
}

/// Root of `folio.toml`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioToml {
    pub timing: TimingToml,
    pub hero: HeroToml,
    pub content: ContentToml,
}

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Cadences and lifetimes for every animated component
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimingConfig {
    /// Boot sequence: per character
    pub boot_char: Duration,
    /// Boot sequence: pause after each committed line
    pub boot_line_pause: Duration,
    /// Boot sequence: delay between the last line and completion
    pub boot_finish_delay: Duration,
    /// Rotating typer: per character while growing
    pub type_char: Duration,
    /// Rotating typer: hold at full length
    pub type_hold: Duration,
    /// Rotating typer: per character while shrinking
    pub delete_char: Duration,
    /// Hijack: buffer decay cadence
    pub hijack_decay: Duration,
    /// Hijack: idle watchdog poll cadence
    pub hijack_watchdog: Duration,
    /// Hijack: idle time before the typing emphasis clears
    pub hijack_typing_idle: Duration,
    /// Hijack: idle time before control returns to the typer
    pub hijack_release_idle: Duration,
    /// Carousel: auto-advance period
    pub carousel_interval: Duration,
    /// Carousel: cross-fade length
    pub carousel_fade: Duration,
    /// Carousel: quiet period after manual navigation before auto-rotate resumes
    pub carousel_resume: Duration,
    /// Shooting stars: shortest spawn gap
    pub star_spawn_min: Duration,
    /// Shooting stars: longest spawn gap
    pub star_spawn_max: Duration,
    /// Shooting stars: lifetime of one particle
    pub star_lifetime: Duration,
    /// Shooting stars: live-set bound
    pub star_max_live: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            boot_char: Duration::from_millis(40),
            boot_line_pause: Duration::from_millis(350),
            boot_finish_delay: Duration::from_millis(800),
            type_char: Duration::from_millis(90),
            type_hold: Duration::from_millis(900),
            delete_char: Duration::from_millis(50),
            hijack_decay: Duration::from_millis(80),
            hijack_watchdog: Duration::from_millis(300),
            hijack_typing_idle: Duration::from_millis(1_200),
            hijack_release_idle: Duration::from_millis(3_000),
            carousel_interval: Duration::from_millis(4_000),
            carousel_fade: Duration::from_millis(500),
            carousel_resume: Duration::from_millis(40_000),
            star_spawn_min: Duration::from_millis(2_000),
            star_spawn_max: Duration::from_millis(3_200),
            star_lifetime: Duration::from_millis(1_400),
            star_max_live: 6,
        }
    }
}

impl TimingConfig {
    fn apply_toml(&mut self, toml: &TimingToml) {
        fn set(slot: &mut Duration, value: Option<u64>) {
            if let Some(ms) = value {
                *slot = Duration::from_millis(ms);
            }
        }

        set(&mut self.boot_char, toml.boot_char_ms);
        set(&mut self.boot_line_pause, toml.boot_line_pause_ms);
        set(&mut self.boot_finish_delay, toml.boot_finish_delay_ms);
        set(&mut self.type_char, toml.type_char_ms);
        set(&mut self.type_hold, toml.type_hold_ms);
        set(&mut self.delete_char, toml.delete_char_ms);
        set(&mut self.hijack_decay, toml.hijack_decay_ms);
        set(&mut self.hijack_watchdog, toml.hijack_watchdog_ms);
        set(&mut self.hijack_typing_idle, toml.hijack_typing_idle_ms);
        set(&mut self.hijack_release_idle, toml.hijack_release_idle_ms);
        set(&mut self.carousel_interval, toml.carousel_interval_ms);
        set(&mut self.carousel_fade, toml.carousel_fade_ms);
        set(&mut self.carousel_resume, toml.carousel_resume_ms);
        set(&mut self.star_spawn_min, toml.star_spawn_min_ms);
        set(&mut self.star_spawn_max, toml.star_spawn_max_ms);
        set(&mut self.star_lifetime, toml.star_lifetime_ms);
        if let Some(max) = toml.star_max_live {
            self.star_max_live = max;
        }
    }

    /// Reject values that would stall or spin a timer
    pub fn validate(&self) -> Result<(), ConfigError> {
        let periodic = [
            ("boot_char_ms", self.boot_char),
            ("type_char_ms", self.type_char),
            ("delete_char_ms", self.delete_char),
            ("hijack_decay_ms", self.hijack_decay),
            ("hijack_watchdog_ms", self.hijack_watchdog),
            ("carousel_interval_ms", self.carousel_interval),
            ("star_spawn_min_ms", self.star_spawn_min),
        ];
        for (name, value) in periodic {
            if value.is_zero() {
                return Err(ConfigError::Validation(format!("{name} must be > 0")));
            }
        }

        if self.star_spawn_max < self.star_spawn_min {
            return Err(ConfigError::Validation(format!(
                "star_spawn_max_ms ({}) is below star_spawn_min_ms ({})",
                self.star_spawn_max.as_millis(),
                self.star_spawn_min.as_millis()
            )));
        }

        if self.star_max_live == 0 {
            return Err(ConfigError::Validation(
                "star_max_live must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Scripts shown by the hero section
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroConfig {
    /// Lines typed by the boot sequence
    pub boot_lines: Vec<String>,
    /// Phrases cycled by the rotating typer
    pub phrases: Vec<String>,
    /// Annotations shown when a visitor hijacks the terminal
    pub warnings: Vec<String>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            boot_lines: vec![
                "> Initializing portfolio...".to_string(),
                "> whoami".to_string(),
            ],
            phrases: vec![
                "Shipping AI-powered golf tools".to_string(),
                "Building Mycel OS – OppFest Winner".to_string(),
                "Designing brokerless logistics systems".to_string(),
                "Creating ML pipelines for sports".to_string(),
                "Crafting clean & premium UX/UI".to_string(),
            ],
            warnings: vec![
                "warning: unauthorized input detected".to_string(),
                "nice try. this terminal types itself".to_string(),
                "access denied: read-only portfolio".to_string(),
                "the terminal is fighting back".to_string(),
                "keystrokes will be deleted. have a nice day".to_string(),
            ],
        }
    }
}

impl HeroConfig {
    fn apply_toml(&mut self, toml: &HeroToml) {
        if let Some(lines) = &toml.boot_lines {
            self.boot_lines = lines.clone();
        }
        if let Some(phrases) = &toml.phrases {
            self.phrases = phrases.clone();
        }
        if let Some(warnings) = &toml.warnings {
            self.warnings = warnings.clone();
        }
    }
}

/// Fully resolved configuration
#[derive(Clone, Debug)]
pub struct FolioConfig {
    pub timing: TimingConfig,
    pub hero: HeroConfig,
    /// External content file (None = embedded content)
    pub content_path: Option<PathBuf>,
    /// Where `content_path` came from
    pub content_source: ConfigSource,
    /// Seed for reproducible randomness (None = thread RNG)
    pub seed: Option<u64>,
    /// Start directly in the idle hero phase
    pub skip_boot: bool,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            hero: HeroConfig::default(),
            content_path: None,
            content_source: ConfigSource::Default,
            seed: None,
            skip_boot: false,
        }
    }
}

impl FolioConfig {
    /// Default location of the config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("folio.toml"))
    }

    /// Load from the default path and the process environment
    ///
    /// A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_env_from(|key| std::env::var(key).ok());
        config.timing.validate()?;
        Ok(config)
    }

    /// Load from an explicit file (no environment overrides)
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let toml: FolioToml = toml::from_str(text)?;
        let mut config = Self::default();
        config.timing.apply_toml(&toml.timing);
        config.hero.apply_toml(&toml.hero);
        if let Some(path) = toml.content.path {
            config.content_path = Some(expand_home(&path));
            config.content_source = ConfigSource::File;
        }
        config.timing.validate()?;
        Ok(config)
    }

    /// Apply environment overrides through a lookup function
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("FOLIO_CONTENT").filter(|p| !p.is_empty()) {
            self.content_path = Some(expand_home(&path));
            self.content_source = ConfigSource::Env;
        }
        if let Some(seed) = lookup("FOLIO_SEED") {
            match seed.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => tracing::warn!(value = %seed, "ignoring non-numeric FOLIO_SEED"),
            }
        }
        if let Some(flag) = lookup("FOLIO_SKIP_BOOT") {
            self.skip_boot = matches!(flag.trim(), "1" | "true" | "yes");
        }
    }

    /// Content file given on the command line
    pub fn set_content_path_from_cli(&mut self, path: PathBuf) {
        self.content_path = Some(path);
        self.content_source = ConfigSource::Cli;
    }
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults_match_documented_cadences() {
        let t = TimingConfig::default();
        assert_eq!(t.boot_char, Duration::from_millis(40));
        assert_eq!(t.type_hold, Duration::from_millis(900));
        assert_eq!(t.hijack_release_idle, Duration::from_millis(3_000));
        assert_eq!(t.carousel_resume, Duration::from_millis(40_000));
        assert_eq!(t.star_lifetime, Duration::from_millis(1_400));
        assert_eq!(t.star_max_live, 6);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = FolioConfig::from_toml_str("").unwrap();
        assert_eq!(config.timing, TimingConfig::default());
        assert_eq!(config.hero, HeroConfig::default());
        assert_eq!(config.content_source, ConfigSource::Default);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = FolioConfig::from_toml_str(
            r#"
            [timing]
            type_char_ms = 120
            star_max_live = 3

            [hero]
            phrases = ["one", "two"]

            [content]
            path = "/tmp/content.toml"
            "#,
        )
        .unwrap();

        assert_eq!(config.timing.type_char, Duration::from_millis(120));
        assert_eq!(config.timing.delete_char, Duration::from_millis(50));
        assert_eq!(config.timing.star_max_live, 3);
        assert_eq!(config.hero.phrases, vec!["one", "two"]);
        assert_eq!(config.hero.boot_lines, HeroConfig::default().boot_lines);
        assert_eq!(config.content_path, Some(PathBuf::from("/tmp/content.toml")));
        assert_eq!(config.content_source, ConfigSource::File);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = FolioConfig::from_toml_str("[timing]\nhijack_decay_ms = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("hijack_decay_ms"));
    }

    #[test]
    fn test_inverted_spawn_window_rejected() {
        let err = FolioConfig::from_toml_str(
            "[timing]\nstar_spawn_min_ms = 3000\nstar_spawn_max_ms = 1000\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = FolioConfig::from_toml_str("[timing\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[timing]\ncarousel_interval_ms = 2500").unwrap();

        let config = FolioConfig::load_from(file.path()).unwrap();
        assert_eq!(config.timing.carousel_interval, Duration::from_millis(2_500));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FolioConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("FOLIO_CONTENT", "/srv/me.toml"),
            ("FOLIO_SEED", "42"),
            ("FOLIO_SKIP_BOOT", "true"),
        ]
        .into_iter()
        .collect();

        let mut config = FolioConfig::default();
        config.apply_env_from(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.content_path, Some(PathBuf::from("/srv/me.toml")));
        assert_eq!(config.content_source, ConfigSource::Env);
        assert_eq!(config.seed, Some(42));
        assert!(config.skip_boot);
    }

    #[test]
    fn test_bad_seed_ignored() {
        let mut config = FolioConfig::default();
        config.apply_env_from(|k| (k == "FOLIO_SEED").then(|| "abc".to_string()));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_cli_content_path() {
        let mut config = FolioConfig::default();
        config.set_content_path_from_cli(PathBuf::from("cli.toml"));
        assert_eq!(config.content_source, ConfigSource::Cli);
        assert_eq!(config.content_source.to_string(), "CLI");
    }
}
