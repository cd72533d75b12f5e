/*
[INPUT]:  Stored session claims
[OUTPUT]: Signed-in operator and session expiry line
[POS]:    TUI UI session status bar
[UPDATE]: When session details shown to the operator change
*/

use chrono::Local;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::AppState;

pub(in crate::tui) fn draw_session_status(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &AppState,
) {
    let session = app.auth.session();
    let subject = session
        .as_ref()
        .and_then(|session| session.subject())
        .unwrap_or_else(|| "unknown".to_string());
    let expiry = session
        .as_ref()
        .and_then(|session| session.access_expires_at())
        .map(|at| at.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    let line = Line::from(vec![
        Span::raw("Signed in as "),
        Span::styled(subject, Style::default().fg(Color::Cyan)),
        Span::raw("  |  access token expires "),
        Span::styled(expiry, Style::default().fg(Color::Yellow)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
