// algotrace: step-by-step algorithm traces with a terminal replay viewer

mod cli;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use algotrace::catalog::Replay;
use algotrace::config::Config;
use algotrace::ui::App;
use cli::{Cli, FormatArg};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the screen, so only warnings get through unless asked
    let default_level = if cli.verbose {
        "algotrace=debug"
    } else if cli.format == FormatArg::Tui {
        "algotrace=warn"
    } else {
        "algotrace=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                default_level
                    .parse()
                    .context("invalid default log directive")?,
            ),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = Config::load_or_default(cli.config.as_deref()).context("loading configuration")?;
    debug!(?config, "configuration loaded");

    let request = cli
        .command
        .to_request(&config.limits)
        .context("invalid input")?;
    config
        .limits
        .check(&request)
        .context("input rejected by limits")?;

    let replay = request
        .run()
        .with_context(|| format!("tracing {}", request.title()))?;
    info!(title = %replay.title, steps = replay.len(), "trace recorded");

    match cli.format {
        FormatArg::Json => {
            let json = serde_json::to_string_pretty(&replay).context("serializing trace")?;
            println!("{}", json);
        }
        FormatArg::Text => {
            println!("{}", replay.title);
            for frame in &replay.frames {
                println!("{}", frame.summary());
            }
        }
        FormatArg::Tui => run_tui(replay, &config)?,
    }

    Ok(())
}

fn run_tui(replay: Replay, config: &Config) -> Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(replay, config.playback.interval());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal UI failed")
}
