//! Folio Entry Point
//!
//! Launches the terminal portfolio.
//!
//! Usage:
//!   folio [OPTIONS]
//!
//! Options:
//!   --config <PATH>    Config file (default: ~/.config/folio/folio.toml)
//!   --content <PATH>   Portfolio content file
//!   --seed <N>         Reproducible randomness
//!   --skip-boot        Start with the hero already booted
//!   --log-file <PATH>  Write logs to a file (level from FOLIO_LOG)

use std::fs::File;
use std::io;
use std::panic;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_core::{PortfolioView, SystemClock};
use folio_tui::cli::{load_content, random_source};
use folio_tui::{App, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Stdout belongs to the alternate screen, so logs only go to a file
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.resolve_config().context("failed to load configuration")?;
    let content = load_content(&config).context("failed to load portfolio content")?;
    tracing::info!(
        seed = ?config.seed,
        skip_boot = config.skip_boot,
        projects = content.projects.len(),
        "starting folio"
    );

    // Check if we have a TTY before attempting initialization
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: folio requires a terminal (TTY)");
        eprintln!();
        eprintln!("This usually means:");
        eprintln!("  • Piped stdin/stdout");
        eprintln!("  • SSH without -t flag");
        eprintln!();
        eprintln!("Try: script -c 'folio' /dev/null");
        std::process::exit(1);
    }

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let size = crossterm::terminal::size()?;
    let rng = random_source(config.seed);
    let view = PortfolioView::new(content, config, rng);
    let mut app = App::new(
        view,
        Box::new(SystemClock::new()),
        Rect::new(0, 0, size.0, size.1),
    );

    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result?;

    if let Some(goodbye) = app.goodbye() {
        println!("\n\x1b[38;2;78;170;255mfolio:\x1b[0m {}\n", goodbye);
    }

    Ok(())
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .with(filter)
        .init();

    Ok(())
}
