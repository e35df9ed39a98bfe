//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

use crate::api::Transport;
use crate::features::focus::SessionBoundaryNotifier;
use crate::features::tasks::TaskFilter;
use crate::models::{Priority, Task, TaskStatus};
use crate::tui::app::{App, FocusScreen, Screen};

/// Render the application UI.
pub fn render<T: Transport + Send + Sync + 'static>(frame: &mut Frame<'_>, app: &App<T>) {
    // Create layout: header, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    match app.screen {
        Screen::Tasks => {
            render_tabs(frame, app, chunks[0]);
            render_list(frame, app, chunks[1]);
        }
        Screen::Focus => {
            render_title(frame, " Focus ", chunks[0]);
            render_timer(frame, &app.focus, chunks[1]);
        }
    }

    let status = match app.screen {
        Screen::Tasks if app.is_loading() => Some("Loading..."),
        Screen::Tasks => app.status.as_deref(),
        Screen::Focus => app.focus.status.as_deref(),
    };
    render_status_bar(frame, status.unwrap_or_else(|| app.help()), chunks[2]);
}

/// Render a standalone focus timer, as used by `focus run`.
pub fn render_focus<N: SessionBoundaryNotifier + Send + Sync + 'static>(
    frame: &mut Frame<'_>,
    screen: &FocusScreen<N>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title(frame, " Focus ", chunks[0]);
    render_timer(frame, screen, chunks[1]);
    render_status_bar(
        frame,
        screen
            .status
            .as_deref()
            .unwrap_or("space:start/pause | r:reset | n:notifications | q:quit"),
        chunks[2],
    );
}

fn render_title(frame: &mut Frame<'_>, title: &str, area: Rect) {
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the filter tabs with their counts.
fn render_tabs<T: Transport + Send + Sync + 'static>(frame: &mut Frame<'_>, app: &App<T>, area: Rect) {
    let titles: Vec<Line<'_>> = TaskFilter::counts(&app.tasks)
        .iter()
        .map(|(tab, count)| Line::from(format!(" {} ({count}) ", tab.label())))
        .collect();
    let selected = TaskFilter::ALL
        .iter()
        .position(|tab| *tab == app.tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Tasks ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(tabs, area);
}

fn task_line(task: &Task, is_selected: bool) -> Line<'_> {
    let (icon, color) = match task.status {
        TaskStatus::Todo => ("[ ]", Color::White),
        TaskStatus::InProgress => ("[~]", Color::Yellow),
        TaskStatus::Completed => ("[x]", Color::Green),
    };

    let mut title_style = Style::default();
    if is_selected {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }
    if task.is_completed() {
        title_style = title_style.add_modifier(Modifier::CROSSED_OUT).fg(Color::DarkGray);
    }

    let priority_color = match task.priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::DarkGray,
    };

    let mut spans = vec![
        Span::styled(format!("{icon} "), Style::default().fg(color)),
        Span::styled(task.title.as_str(), title_style),
        Span::styled(format!("  [{}]", task.category), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("  {}", task.priority), Style::default().fg(priority_color)),
    ];

    if let Some(due) = &task.due_date {
        spans.push(Span::styled(format!("  {due}"), Style::default().fg(Color::Yellow)));
    }
    if task.status == TaskStatus::InProgress {
        spans.push(Span::styled(
            format!("  {}%", task.progress),
            Style::default().fg(Color::Blue),
        ));
    }

    Line::from(spans)
}

/// Render the task list for the current tab.
fn render_list<T: Transport + Send + Sync + 'static>(frame: &mut Frame<'_>, app: &App<T>, area: Rect) {
    let visible = app.visible_tasks();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if visible.is_empty() {
        let empty = Paragraph::new("No tasks")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem<'_>> = visible
        .iter()
        .enumerate()
        .map(|(i, task)| ListItem::new(task_line(task, i == app.selected)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));

    // Create list state for scrolling
    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the countdown, progress gauge and notification state.
fn render_timer<N: SessionBoundaryNotifier + Send + Sync + 'static>(
    frame: &mut Frame<'_>,
    screen: &FocusScreen<N>,
    area: Rect,
) {
    let timer = screen.timer();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3), // Countdown
            Constraint::Length(3), // Gauge
            Constraint::Length(1), // Notifications
            Constraint::Min(1),
        ])
        .split(area);

    let (state, color) = if timer.is_finished() {
        ("done", Color::Green)
    } else if timer.is_active() {
        ("running", Color::Cyan)
    } else {
        ("paused", Color::Yellow)
    };

    let countdown = Paragraph::new(vec![
        Line::from(Span::styled(
            timer.format_remaining(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(state, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(countdown, chunks[1]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(timer.progress().clamp(0.0, 1.0));
    frame.render_widget(gauge, chunks[2]);

    let notifications = if timer.notifications_blocked() {
        Span::styled("Notifications blocked", Style::default().fg(Color::Red))
    } else {
        Span::styled("Notifications allowed", Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(
        Paragraph::new(Line::from(notifications)).alignment(Alignment::Center),
        chunks[3],
    );
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, text: &str, area: Rect) {
    let status = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::features::focus::{FocusController, FocusTimer, MockSessionBoundaryNotifier};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_render_focus_shows_countdown() {
        let notifier = MockSessionBoundaryNotifier::new();
        let screen = FocusScreen::new(FocusController::new(FocusTimer::new(1500), notifier));

        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|frame| render_focus(frame, &screen)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("25:00"));
        assert!(text.contains("paused"));
        assert!(text.contains("Notifications allowed"));
    }

    #[test]
    fn test_render_tasks_empty_list() {
        let client = Arc::new(crate::api::ApiClient::new(
            crate::api::MockTransport::new(),
            Arc::new(crate::api::StaticToken::anonymous()),
        ));
        let app = App::new(client, FocusTimer::default());

        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("All (0)"));
        assert!(text.contains("No tasks"));
    }
}
