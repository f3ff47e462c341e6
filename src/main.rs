//! essential-feed — browse a remote image feed in the terminal.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────────────┐ LoadMsg  ┌──────────┐  draw()  ┌──────────┐
//! │ RemoteFeedLoader │ ───────► │  app.rs  │ ───────► │  ui.rs   │
//! │  (tokio task)    │(channel) │ (state)  │          │ (render) │
//! └──────────────────┘          └──────────┘          └──────────┘
//!          ▲                         ▲
//!          │ load::request()         │ handle_key_event()
//!          └──────── main ◄──── ┌──────────┐
//!                               │ input.rs │
//!                               └──────────┘
//! ```
//!
//! * **`config`** — resolves the feed URL, timeout and log file.
//! * **`load`** — issues one load and forwards its result to the UI thread.
//! * **`app`** — owns all application state (items, selection, status).
//! * **`ui`** — pure rendering: reads `App` state and draws widgets.
//! * **`input`** — maps key events to `App` mutations.
//! * **`main`** — wires everything together: configuration, logging, the
//!   tokio runtime, the terminal, and the event loop.

mod app;
mod config;
mod input;
mod load;
mod ui;

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use app::App;
use config::Config;
use essential_feed::{RemoteFeedLoader, ReqwestHttpClient};

// ---------------------------------------------------------------------------
// RAII terminal guard — idiomatic cleanup even on panic
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Install a panic hook that restores the terminal before printing the
/// panic message.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

/// Send `tracing` output to `path`.  Stdout belongs to the TUI, so without
/// a log file no subscriber is installed.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let config = Config::from_env()?;
    if let Some(path) = &config.log_file {
        init_logging(path)?;
    }
    tracing::info!(url = %config.url, "starting");

    install_panic_hook();

    // -- transport and loader ------------------------------------------------
    let runtime = tokio::runtime::Runtime::new().context("cannot start tokio runtime")?;
    let client = ReqwestHttpClient::with_timeout(runtime.handle().clone(), config.timeout)
        .context("cannot build HTTP client")?;
    let loader = RemoteFeedLoader::new(config.url.clone(), Arc::new(client));

    let (tx, rx) = mpsc::channel();

    // -- terminal setup (RAII — Drop restores on exit or panic) --------------
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new();

    app.begin_load();
    load::request(&loader, tx.clone());

    // -- main event loop -----------------------------------------------------
    // Runs at ~10 fps (100 ms tick).  Each iteration:
    //   1. Apply any finished load.
    //   2. Dispatch a reload if one was requested.
    //   3. Render the UI.
    //   4. Poll for keyboard input (non-blocking, up to tick_rate).
    let tick_rate = Duration::from_millis(100);

    loop {
        while let Ok(msg) = rx.try_recv() {
            app.apply(msg, chrono::Local::now());
        }

        if app.reload_requested {
            app.begin_load();
            load::request(&loader, tx.clone());
        }

        guard.terminal.draw(|f| ui::draw(&mut app, f))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key_event(&mut app, key);
            }
        }

        if app.quit {
            break;
        }
    }

    // Dropping the loader first means a load still in flight reports nothing.
    drop(loader);
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(200));
    tracing::info!("exiting");
    Ok(())
}
