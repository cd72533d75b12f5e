/*
[INPUT]:  CategoryBrowser page window and totals
[OUTPUT]: Pagination line rendered into Ratatui frame
[POS]:    TUI UI pagination
[UPDATE]: When pagination presentation changes
*/

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::browser::CategoryBrowser;
use crate::tui::runtime::{border_style, header_style};

pub(in crate::tui) fn draw_pagination(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    browser: &CategoryBrowser,
) {
    let window = browser.page_window();
    let dim = Style::default().add_modifier(Modifier::DIM);

    let mut spans = vec![Span::styled("« ", dim)];
    if window.show_first {
        spans.push(Span::raw("1 "));
    }
    if window.gap_before {
        spans.push(Span::styled("… ", dim));
    }
    for page in &window.pages {
        if *page == window.current {
            spans.push(Span::styled(format!("[{page}]"), header_style()));
            spans.push(Span::raw(" "));
        } else {
            spans.push(Span::raw(format!("{page} ")));
        }
    }
    if window.gap_after {
        spans.push(Span::styled("… ", dim));
    }
    if window.show_last {
        spans.push(Span::raw(format!("{} ", window.total_pages)));
    }
    spans.push(Span::styled("»", dim));
    spans.push(Span::raw(format!(
        "   Items per page: {}   Total: {}",
        browser.page_size(),
        browser.total()
    )));

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style()),
    );
    frame.render_widget(widget, area);
}
