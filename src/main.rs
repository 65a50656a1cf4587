use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use four_square::config::AppConfig;
use four_square::console;
use four_square::game::GameState;
use four_square::ui::App;

/// Play Four Square: place four pieces each, then move them, four in a row wins.
#[derive(Parser)]
#[command(name = "four-square", about = "Two-player place-then-move four-in-a-row")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "four-square.toml")]
    config: PathBuf,

    /// Read coordinates from stdin instead of running the terminal UI
    #[arg(long)]
    plain: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if cli.plain {
        let mut game = GameState::with_rules(config.rules);
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        console::run(&mut game, &config.display, stdin.lock(), &mut stdout)
            .context("console game aborted")?;
        return Ok(());
    }

    run_tui(config).context("terminal UI failed")
}

fn run_tui(config: AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
