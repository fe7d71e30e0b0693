//! Folio CLI - binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`folio_engine`] (page state) and [`folio_tui`] (rendering),
//! providing RAII-based terminal management with guaranteed cleanup. Listing
//! subcommands never touch the terminal and exit after printing.
//!
//! ```text
//! main() -> Cli::parse() -> hero:    TerminalSession::new() -> run_page() -> App + TUI
//!                        -> listing: commands::run_listing() -> stdout
//! ```
//!
//! # Event Loop
//!
//! The page uses a fixed 8ms (~120 FPS) render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`folio_tui::InputPump`])
//! 3. Advance page state by the measured frame delta (`app.tick()`)
//! 4. Render frame

mod commands;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        size as terminal_size,
    },
};
use ratatui::prelude::*;
use std::{
    fs::{self, OpenOptions},
    io::{self, Stdout, Write, stdout},
    path::PathBuf,
    process::ExitCode,
    sync::Mutex,
    time::{Duration, Instant},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use folio_config::FolioConfig;
use folio_engine::{App, load_content};
use folio_tui::{CHROME_ROWS, Clipboards, InputPump, draw, handle_events};

use crate::commands::{Cli, Command};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_folio_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_folio_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in folio_log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn folio_log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.folio/logs/folio.log
    if let Some(config_path) = FolioConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("folio.log"));
    }

    // Fallback: ./.folio/logs/folio.log
    candidates.push(PathBuf::from(".folio").join("logs").join("folio.log"));

    candidates
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode and the alternate screen are entered on construction and
/// restored on drop, so the terminal stays usable after panics or early
/// returns. Alternate scroll mode (1007) maps the wheel to arrow keys
/// without capturing mouse clicks.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        // Enable alternate scroll mode: CSI ? 1007 h
        let _ = out.write_all(b"\x1b[?1007h");
        let _ = out.flush();

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                let _ = out.write_all(b"\x1b[?1007l");
                let _ = out.flush();
                let _ = execute!(out, LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        // Disable alternate scroll mode: CSI ? 1007 l
        let _ = self.terminal.backend_mut().write_all(b"\x1b[?1007l");
        let _ = Write::flush(self.terminal.backend_mut());
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            let _ = writeln!(io::stderr(), "Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve_config()?;

    match cli.command.as_ref().unwrap_or(&Command::Hero) {
        Command::Hero => {
            let (width, height) = terminal_size()?;
            let mut app = App::from_config(&config, width, height.saturating_sub(CHROME_ROWS))?;
            let mut session = TerminalSession::new()?;
            run_page(&mut session.terminal, &mut app).await
        }
        Command::CopyEmail => commands::copy_email(&load_content(&config)?),
        listing => {
            let store = load_content(&config)?;
            let mut out = stdout().lock();
            commands::run_listing(&store, listing, &mut out)?;
            out.flush()?;
            Ok(())
        }
    }
}

const FRAME_DURATION: Duration = Duration::from_millis(8);

async fn run_page<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend + Write,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut clipboards = Clipboards::system();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut last_frame = Instant::now();

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let quit_now = match handle_events(app, &mut input, &mut clipboards) {
            Ok(q) => q,
            Err(e) => break Err(e),
        };
        if quit_now {
            break Ok(());
        }

        let now = Instant::now();
        let update = app.tick(now.duration_since(last_frame));
        last_frame = now;
        if let Some(active) = &update.active_section {
            tracing::debug!(section = %active, "Active section changed");
        }

        if let Err(e) = terminal.draw(|frame| draw(frame, app)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}
