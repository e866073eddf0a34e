//! Terminal UI for ecogom that shows village collection schedules and drop-off points.

mod app;
mod input;
mod ui;

use std::{io, sync::Arc, time::Duration as StdDuration};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ecogom_core::service::EcogomService;
use ecogom_provider_rest as rest;
use ratatui::{Terminal, backend::CrosstermBackend};
use reqwest::Client;

use crate::app::App;
use crate::input::Action;

#[tokio::main]
async fn main() -> Result<()> {
    // HTTP + service setup
    let client = Client::builder().user_agent("ecogom/0.1").build()?;
    let service = Arc::new(EcogomService::new(rest::ports(client)));

    // App state
    let app = App::new(service);

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    // Initial load goes through the same path as a manual refresh
    refresh(terminal, &mut app).await?;

    loop {
        // Draw current UI
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            let action = input::handle_key_event(key, &mut app);

            match action {
                Action::Quit => break,
                Action::None => {}
                Action::Refresh => {
                    refresh(terminal, &mut app).await?;
                }
                Action::SearchWastes => {
                    let keyword = app.waste_input.trim().to_owned();
                    if keyword.is_empty() {
                        app.error_message =
                            Some("Type a keyword first, then press Enter".into());
                        continue;
                    }

                    app.is_loading = true;
                    app.error_message = None;
                    terminal.draw(|frame| ui::draw(frame, &app))?;

                    let res = app.service.search_wastes(&keyword, 50).await;

                    app.is_loading = false;
                    match res {
                        Ok(wastes) => {
                            app.waste_results = wastes;
                            app.waste_list_index = 0;
                        }
                        Err(err) => {
                            app.error_message = Some(format!("Search failed: {err}"));
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

/// Re-fetch schedules and drop-off points, rebuilding the region index.
async fn refresh(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    app.is_loading = true;
    app.error_message = None;
    terminal.draw(|frame| ui::draw(frame, app))?;

    match app.service.schedules().await {
        Ok(schedules) => app.set_schedules(schedules),
        Err(err) => {
            app.error_message = Some(format!("Failed to load schedules: {err}"));
        }
    }

    match app.service.locations().await {
        Ok(locations) => {
            app.locations = locations;
            app.location_list_index = 0;
        }
        Err(err) => {
            if app.error_message.is_none() {
                app.error_message = Some(format!("Failed to load drop-off points: {err}"));
            }
        }
    }

    app.is_loading = false;
    Ok(())
}
