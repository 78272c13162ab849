//! Command Line
//!
//! Parses the binary's flags and layers them over the file and environment
//! configuration resolved by `folio-core`.

use std::path::PathBuf;

use clap::Parser;

use folio_core::{
    ConfigError, FolioConfig, Portfolio, RandomSource, SeededRandom, ThreadRandom,
};

/// Terminal portfolio with a boot sequence, a hijackable terminal and a night sky
#[derive(Debug, Default, Parser)]
#[command(name = "folio", version, about)]
pub struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/folio/folio.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Portfolio content file, replaces the embedded content
    #[arg(long, value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Seed for reproducible stars and warnings
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Start with the hero already booted
    #[arg(long)]
    pub skip_boot: bool,

    /// Write logs here (filtered by FOLIO_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// File, then environment, then these flags
    pub fn resolve_config(&self) -> Result<FolioConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => {
                let mut config = FolioConfig::load_from(path)?;
                config.apply_env_from(|key| std::env::var(key).ok());
                config
            }
            None => FolioConfig::load()?,
        };
        self.apply_to(&mut config);
        Ok(config)
    }

    /// Apply flags over an already resolved configuration
    pub fn apply_to(&self, config: &mut FolioConfig) {
        if let Some(path) = &self.content {
            config.set_content_path_from_cli(path.clone());
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.skip_boot {
            config.skip_boot = true;
        }
    }
}

/// Content from the configured file, or the embedded defaults
pub fn load_content(config: &FolioConfig) -> Result<Portfolio, ConfigError> {
    match &config.content_path {
        Some(path) => {
            tracing::info!(
                path = %path.display(),
                source = %config.content_source,
                "using content file"
            );
            Portfolio::load_from(path)
        }
        None => Ok(Portfolio::default()),
    }
}

/// Seeded when asked, thread RNG otherwise
pub fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom::default()),
    }
}
