/*
[INPUT]:  AuthManager, log buffer and crossterm input
[OUTPUT]: Ratatui-based TUI run loop, rendering, and log buffer utilities
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
[UPDATE]: Categories table with pagination replaces the dashboard
[UPDATE]: Toast overlay drawn after modals
*/

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::fmt::MakeWriter;

use cmg_admin_adapter::AuthManager;

use super::app::{ActiveModal, AppState, Screen, Tab};
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::modal::draw_modal;
use super::ui::*;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub const LOG_BUFFER_CAPACITY: usize = 2000;

pub type LogBufferHandle = Arc<StdMutex<LogBuffer>>;

#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Last `count` lines, oldest first
    pub fn tail(&self, count: usize) -> Vec<String> {
        let skip = self.lines.len().saturating_sub(count);
        self.lines.iter().skip(skip).cloned().collect()
    }
}

#[derive(Clone)]
pub struct LogWriterFactory {
    buffer: LogBufferHandle,
}

impl LogWriterFactory {
    pub fn new(buffer: LogBufferHandle) -> Self {
        Self { buffer }
    }
}

pub struct LogWriter {
    buffer: LogBufferHandle,
    partial: String,
}

impl LogWriter {
    fn push(&self, line: String) {
        let mut guard = self
            .buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.push_line(line);
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let chunk = String::from_utf8_lossy(buf);
        self.partial.push_str(&chunk);
        while let Some(pos) = self.partial.find('\n') {
            let line = self.partial[..pos].trim_end_matches('\r').to_string();
            self.partial = self.partial[pos + 1..].to_string();
            self.push(line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.partial.is_empty() {
            let line = std::mem::take(&mut self.partial);
            self.push(line);
        }
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            partial: String::new(),
        }
    }
}

enum UiEvent {
    Input(CrosstermEvent),
}

pub(super) fn draw_footer(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key = |label: &'static str| Span::styled(label, key_style);

    let lines = if app.screen == Screen::Login {
        vec![
            Line::from(vec![
                key("[Tab]"),
                Span::raw(" Next field  "),
                key("[Enter]"),
                Span::raw(" Log in  "),
                key("[Esc]"),
                Span::raw(" Quit"),
            ]),
            Line::from(format!("Status: {}", app.status_message)),
        ]
    } else {
        vec![
            Line::from(vec![
                key("[Arrows]"),
                Span::raw(" Row/Column  "),
                key("[[/]]"),
                Span::raw(" Page  "),
                key("[-/+]"),
                Span::raw(" Page size  "),
                key("[a/z]"),
                Span::raw(" Sort  "),
                key("[/]"),
                Span::raw(" Filter  "),
                key("[R]"),
                Span::raw(" Reset  "),
                key("[r]"),
                Span::raw(" Reload"),
            ]),
            Line::from(vec![
                key("[n]"),
                Span::raw(" New  "),
                key("[e]"),
                Span::raw(" Edit  "),
                key("[d]"),
                Span::raw(" Delete  "),
                key("[Tab]"),
                Span::raw(" Tabs  "),
                key("[L]"),
                Span::raw(" Logout  "),
                key("[q]"),
                Span::raw(" Quit  "),
                Span::raw(format!("Status: {}", app.status_message)),
            ]),
        ]
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let widget = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub async fn run_tui(auth: AuthManager, log_buffer: LogBufferHandle, page_size: u32) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    let _ = event_tx.send(UiEvent::Input(event));
                }
            }
        }
    });

    let mut app = AppState::new(auth, log_buffer, page_size);
    if app.screen == Screen::Categories {
        app.load_categories().await;
    }
    terminal.draw(|frame| draw_ui(frame, &mut app))?;

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => app.tick(),
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(UiEvent::Input(CrosstermEvent::Key(key)))
                        if key.kind == KeyEventKind::Press =>
                    {
                        should_quit = handle_key_event(&mut app, key.code).await;
                    }
                    Some(_) => {}
                    None => should_quit = true,
                }
            }
        }

        terminal.draw(|frame| draw_ui(frame, &mut app))?;
    }

    input_shutdown.cancel();
    tracing::info!("tui closed");
    Ok(())
}

pub(super) fn draw_ui(frame: &mut ratatui::Frame, app: &mut AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(4),
        ])
        .split(area);

    draw_tabs(frame, layout[0], app.current_tab);

    match (app.screen, app.current_tab) {
        (_, Tab::Logs) => draw_logs(frame, layout[1], &app.log_buffer),
        (Screen::Login, Tab::Categories) => {
            let modal = app.login_form.to_modal();
            draw_modal(frame, centered_rect(layout[1], 50, 60), &modal);
        }
        (Screen::Categories, Tab::Categories) => {
            let content = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(5),
                    Constraint::Length(3),
                ])
                .split(layout[1]);
            draw_session_status(frame, content[0], app);
            draw_category_table(frame, content[1], app);
            draw_pagination(frame, content[2], &app.browser);
        }
    }

    draw_footer(frame, layout[2], app);

    if let Some(active_modal) = app.active_modal.as_ref() {
        let modal = match active_modal {
            ActiveModal::CategoryForm(modal) => modal.to_modal(),
            ActiveModal::ConfirmDelete(modal) => modal.to_modal(),
            ActiveModal::Filter(modal) => modal.to_modal(),
        };
        let modal_area = centered_rect(area, 60, 60);
        draw_modal(frame, modal_area, &modal);
    }

    draw_toasts(frame, area, &app.toasts);
}

pub(super) fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
