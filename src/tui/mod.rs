//! Terminal User Interface (TUI) for focusflow.
//!
//! A task list with filter tabs and a focus timer, built with ratatui and
//! crossterm. Task loads run in the background through [`loader::Loader`].

mod app;
mod event;
pub mod loader;
mod ui;

pub use app::{App, FocusScreen, Screen};

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::api::{ApiClient, Transport};
use crate::error::FlowError;
use crate::features::focus::{FocusController, FocusTimer, SessionBoundaryNotifier};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const TICK: Duration = Duration::from_secs(1);

/// Run the TUI application.
///
/// Returns the focus timer as it was when the app closed.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run<T: Transport + Send + Sync + 'static>(
    client: Arc<ApiClient<T>>,
    timer: FocusTimer,
) -> Result<FocusTimer, FlowError> {
    let mut terminal = setup()?;
    let mut app = App::new(client, timer);
    let result = run_app(&mut terminal, &mut app);
    restore(&mut terminal);
    result?;

    Ok(app.shutdown())
}

/// Run only the focus timer. Any open session is closed on exit.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run_focus<N: SessionBoundaryNotifier + Send + Sync + 'static>(
    controller: FocusController<N>,
) -> Result<FocusTimer, FlowError> {
    let mut terminal = setup()?;
    let mut screen = FocusScreen::new(controller);
    let result = run_focus_loop(&mut terminal, &mut screen);
    restore(&mut terminal);
    result?;

    Ok(screen.shutdown())
}

fn setup() -> Result<Terminal<CrosstermBackend<io::Stdout>>, FlowError> {
    enable_raw_mode().map_err(|e| FlowError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| FlowError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| FlowError::Config(format!("Failed to create terminal: {e}")))
}

fn restore<B: Backend + io::Write>(terminal: &mut Terminal<B>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Run the main application loop.
fn run_app<B: Backend, T: Transport + Send + Sync + 'static>(
    terminal: &mut Terminal<B>,
    app: &mut App<T>,
) -> Result<(), FlowError> {
    let mut last_tick = Instant::now();

    while !app.should_quit {
        app.poll();
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| FlowError::Config(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::next_action(app.screen, POLL_INTERVAL)? {
            app.apply(action);
        }

        while last_tick.elapsed() >= TICK {
            last_tick += TICK;
            app.tick();
        }
    }

    Ok(())
}

fn run_focus_loop<B: Backend, N: SessionBoundaryNotifier + Send + Sync + 'static>(
    terminal: &mut Terminal<B>,
    screen: &mut FocusScreen<N>,
) -> Result<(), FlowError> {
    let mut last_tick = Instant::now();

    loop {
        screen.poll();
        terminal
            .draw(|frame| ui::render_focus(frame, screen))
            .map_err(|e| FlowError::Config(format!("Failed to draw: {e}")))?;

        match event::next_action(Screen::Focus, POLL_INTERVAL)? {
            Some(event::Action::Quit) => break,
            Some(action) => {
                screen.apply(action);
            }
            None => {},
        }

        while last_tick.elapsed() >= TICK {
            last_tick += TICK;
            screen.tick();
        }
    }

    Ok(())
}
