//! wealthwise-tui - WealthWise login client for the terminal
//!
//! Two screens: a login form that authenticates against the WealthWise
//! backend, and a welcome screen shown once the backend accepts the
//! credentials. Uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::services::{AuthClient, AuthRunner};
use crate::tui::Tui;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::Event;
use std::time::Duration;
use tracing::{error, info};

/// WealthWise terminal login
#[derive(Parser, Debug)]
#[command(name = "wealthwise-tui")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Backend base URL (overrides ~/.wealthwise/config.json)
    #[arg(long)]
    base_url: Option<String>,

    /// Give up on a login request after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug")
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load()
        .unwrap_or_default()
        .with_overrides(args.base_url, args.timeout_secs, args.log_level);

    // Logging is optional; the app still works without a writable home
    let log_guard = match Config::log_dir().map(|dir| logging::init(&dir, &config.log_level)) {
        Some(Ok(guard)) => Some(guard),
        Some(Err(e)) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            None
        }
        None => None,
    };
    info!(?config, "Loaded configuration");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let client = AuthClient::from_config(&config)?;
    let mut app = App::new(AuthRunner::new(client, runtime.handle().clone()));
    app.init()?;

    // Setup terminal; a short tick keeps the shake animation smooth
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(50));
    tui.enter()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // A hung login request must not keep the process alive
    runtime.shutdown_background();

    if let Err(err) = result {
        error!(error = ?err, "Application error");
        // exit() skips destructors; flush the log writer first
        drop(log_guard);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("Exiting");
    drop(log_guard);
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            let area = frame.area();
            if let Err(e) = app.draw(frame, area) {
                error!(error = ?e, "Draw error");
            }
        })?;

        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            if let Some(action) = action {
                app.dispatch(action)?;
            }
        }

        // Tick on every pass so finished logins are picked up even while typing
        app.dispatch(Action::Tick)?;
    }

    Ok(())
}
