//! algocode-tui - Browse algorithm implementations in the terminal
//!
//! This is the main entry point for the algocode-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod logging;
mod model;
mod services;
mod tui;

use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::services::{create_clipboard, load_catalog};
use crate::tui::Tui;
use anyhow::{Context, Result};
use std::time::Instant;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Config problems are reported in the UI, not fatal
    let startup = Config::startup(Config::config_path());
    let config = startup.config;
    let config_error = startup.error;

    let log_path = Config::config_dir()
        .map(|dir| logging::init(&dir, &config.log_level))
        .transpose();
    match log_path {
        Ok(Some(path)) => info!(path = %path.display(), "logging started"),
        Ok(None) => {}
        Err(e) => eprintln!("Logging disabled: {}", e),
    }
    if let Some(ref e) = config_error {
        warn!(error = %e, "using default config; UI changes will not be saved");
    }

    let load = load_catalog(&config.catalog_paths, config.default_language)
        .context("Failed to load the built-in catalog")?;
    let catalog_errors: Vec<String> = load.errors.iter().map(|e| e.to_string()).collect();

    let clipboard = create_clipboard(config.clipboard);
    let tick_rate = config.tick_rate();

    // Create app state
    let mut app = App::new(config, load.catalog, clipboard).with_save_path(startup.save_path);
    app.error = config_error.or_else(|| catalog_errors.first().cloned());
    if catalog_errors.len() > 1 {
        app.status_message = Some(format!("{} more catalog errors in the log", catalog_errors.len() - 1));
    }
    app.init()?;

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(tick_rate);
    tui.enter()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                warn!(error = %e, "draw failed");
            }
        })?;

        let event = tui.next_event()?;
        app.step(event, Instant::now())?;
    }

    info!("exiting");
    Ok(())
}
