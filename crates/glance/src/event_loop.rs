//! Main TUI entry point and event loop
//!
//! Terminal setup/teardown with cleanup on every exit path, a 100 ms poll
//! loop for key events, and an mpsc channel draining async events (the
//! assistant's delayed reply).

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use glance_common::{AnalysisReport, Config};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::app::App;
use crate::ui;

/// Run the dashboard until the user quits
pub async fn run(config: Config) -> Result<()> {
    enable_raw_mode().map_err(|e| {
        anyhow::anyhow!("failed to enable raw mode: {e}. Run glance in a real terminal (TTY).")
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        let _ = disable_raw_mode();
        anyhow::anyhow!("failed to enter alternate screen: {e}")
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(AnalysisReport::sample(), config, tx);
    tracing::info!("dashboard started");

    let result = run_event_loop(&mut terminal, &mut app, &mut rx).await;

    let cleanup = restore_terminal(&mut terminal);
    result.and(cleanup)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<crate::app::AppEvent>,
) -> Result<()> {
    loop {
        // Drain async events first so replies show up in the same frame
        while let Ok(event) = rx.try_recv() {
            app.apply_event(event);
        }

        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!("dashboard exited");
    Ok(())
}
