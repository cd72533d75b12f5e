/*
[INPUT]:  Visible toasts
[OUTPUT]: Stacked notifications in the top-right corner
[POS]:    TUI UI toast overlay
[UPDATE]: When toast presentation changes
*/

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::toast::{ToastKind, ToastQueue};

const TOAST_MAX_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

pub(in crate::tui) fn draw_toasts(frame: &mut ratatui::Frame, area: Rect, toasts: &ToastQueue) {
    let mut y = area.y + 1;
    for toast in toasts.visible() {
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let text_width = UnicodeWidthStr::width(toast.text.as_str()) as u16 + 4;
        let width = text_width.clamp(20, TOAST_MAX_WIDTH).min(area.width);
        let rect = Rect::new(area.x + area.width - width, y, width, TOAST_HEIGHT);

        let color = match toast.kind {
            ToastKind::Success => Color::LightGreen,
            ToastKind::Error => Color::LightRed,
        };
        let widget = Paragraph::new(toast.text.as_str())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(toast.title.as_str()),
            );
        frame.render_widget(Clear, rect);
        frame.render_widget(widget, rect);
        y += TOAST_HEIGHT;
    }
}
