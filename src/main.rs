//! Folio TUI - a personal portfolio page for the terminal
//!
//! A Ratatui-based single page with a hero, about, projects and a
//! validated contact form.

mod app;
mod config;
mod contact;
mod content;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::FolioConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = FolioConfig::load().unwrap_or_else(|e| {
        tracing::warn!("failed to load config, using defaults: {e}");
        FolioConfig::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let result = match App::new(&config) {
        Ok(mut app) => run_app(&mut terminal, &mut app).await,
        Err(e) => Err(e),
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let size = terminal.size()?;
    app.terminal_size = Some((size.height, size.width));

    loop {
        let now = Instant::now();
        app.tick(now);

        // Lay out the page, keep its geometry for mouse and scroll handling, then draw
        let width = terminal.size()?.width;
        let ui::Page { lines, layout } = ui::build_page(app, width, now);
        app.state.layout = layout;
        terminal.draw(|frame| ui::draw(frame, app, &lines))?;

        // Faster polling while something is animating (16ms = ~60fps)
        let poll_duration = if app.is_animating(now) {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            let handled = match event::read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    app.handle_key(key).await
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse).await,
                Event::Resize(width, height) => {
                    app.on_resize(width, height, Instant::now());
                    Ok(())
                }
                _ => Ok(()),
            };

            // A failing handler is reported in the status bar; the page keeps running
            if let Err(e) = handled {
                tracing::error!("event handler failed: {e:#}");
                app.push_error(format!("{e}"));
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
