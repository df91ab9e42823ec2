//! recipe-tui - A terminal UI for searching TheMealDB
//!
//! This is the main entry point for the recipe-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod model;
mod pipeline;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::services::{FetchClient, FetchRunner, HttpTransport};
use crate::tui::{Tui, DEFAULT_TICK_RATE};
use anyhow::Result;
use crossterm::event::Event;
use std::fs::{self, OpenOptions};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const ENV_LOG: &str = "RECIPE_TUI_LOG";

fn main() -> Result<()> {
    init_logging();

    let (config, notice) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(error = %err, "using default config");
            (Config::default(), Some(format!("Config ignored: {}", err)))
        }
    };
    if std::env::args().any(|arg| arg == "--init-config") {
        config.save()?;
        println!("Config written to {}", Config::config_dir().unwrap_or_default().display());
        return Ok(());
    }

    let config = config.with_env();
    tracing::info!(base_url = %config.api_base_url, "starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    let transport = HttpTransport::new(config.request_timeout())?;
    let client = FetchClient::new(
        Arc::new(transport),
        config.api_base_url.clone(),
        config.api_key.clone(),
    );
    let runner = FetchRunner::new(runtime.handle().clone(), client);

    let mut app = App::new(runner).with_notice(notice);
    app.init()?;

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(DEFAULT_TICK_RATE);
    tui.enter()?;

    let result = run_app(&mut tui, &mut app);

    tui.exit()?;
    // Requests still in flight are abandoned
    runtime.shutdown_background();

    if let Err(err) = result {
        tracing::error!(error = ?err, "exiting with error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file under the config dir; the terminal belongs to the UI
fn init_logging() {
    let Some(dir) = Config::config_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("recipe-tui.log"))
    else {
        return;
    };

    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            let area = frame.area();
            if let Err(err) = app.draw(frame, area) {
                tracing::error!(error = %err, "draw failed");
            }
        })?;

        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick to pick up finished requests
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
