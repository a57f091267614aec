use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::ai::MinimaxAgent;
use connect_four::config::AppConfig;
use connect_four::controller::TurnController;
use connect_four::game::{GameState, Side};
use connect_four::ui::{App, ConsoleRenderer, LineInput};

/// Play Connect Four against a minimax opponent.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Override number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of columns
    #[arg(long)]
    cols: Option<usize>,

    /// Let the computer make the first move
    #[arg(long)]
    ai_first: bool,

    /// Play on stdin/stdout instead of the terminal UI
    #[arg(long)]
    headless: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging to stderr would garble the TUI, so it is off there unless asked for.
    let default_filter = if cli.headless { "info" } else { "off" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.engine.search_depth = depth;
    }
    if let Some(rows) = cli.rows {
        config.engine.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.engine.cols = cols;
    }
    if cli.ai_first {
        config.game.human_starts = false;
    }
    config.validate().context("invalid command-line overrides")?;

    log::info!(
        "{}x{} board, search depth {}",
        config.engine.rows,
        config.engine.cols,
        config.engine.search_depth
    );

    if cli.headless {
        run_headless(&config)
    } else {
        // Build the app before touching the terminal so a bad config is
        // reported on a normal screen.
        let app = App::new(config)?;
        run_tui(app).context("terminal UI failed")
    }
}

fn run_headless(config: &AppConfig) -> Result<()> {
    let first = if config.game.human_starts {
        Side::Human
    } else {
        Side::Automated
    };
    let state = GameState::from_config(&config.engine, first)?;
    let engine = MinimaxAgent::from_config(&config.engine)?;

    let mut renderer = ConsoleRenderer::new(io::stdout());
    if first == Side::Human {
        print!("\n{}\n", state.board());
    }

    let input = LineInput::new(io::stdin().lock(), io::stdout());
    let mut controller = TurnController::new(state, input, engine);
    controller.play(&mut renderer).context("game aborted")?;
    Ok(())
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
