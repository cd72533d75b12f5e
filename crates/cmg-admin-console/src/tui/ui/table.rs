/*
[INPUT]:  CategoryBrowser rows, selected row and column
[OUTPUT]: Category table rendered into Ratatui frame
[POS]:    TUI UI categories table
[UPDATE]: When table columns or highlighting change
*/

use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use cmg_admin_adapter::{Category, SortOrder};

use crate::browser::{COLUMNS, column_field};
use crate::tui::app::AppState;
use crate::tui::runtime::{border_style, header_style};

fn cell_values(category: &Category) -> [String; 5] {
    [
        category.value_definition.clone(),
        category.label.clone(),
        category.description.clone(),
        category.category_type.label().to_string(),
        category.priority.to_string(),
    ]
}

pub(in crate::tui) fn draw_category_table(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &mut AppState,
) {
    let query = app.browser.query();
    let header_cells = COLUMNS.iter().enumerate().map(|(index, title)| {
        let field = column_field(index);
        let mut text = title.to_string();
        if field.is_some() && field == query.sort_by {
            text.push_str(match query.sort_order {
                SortOrder::Asc => " ^",
                SortOrder::Desc => " v",
            });
        }
        if field.is_some() && query.active_filter().map(|(active, _)| active) == field {
            text.push_str(" *");
        }
        let style = if index == app.selected_column {
            header_style()
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        Cell::from(text).style(style)
    });
    let header = Row::new(header_cells);

    let rows = app.browser.rows().iter().map(|category| {
        let cells = cell_values(category)
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                let cell = Cell::from(value);
                if index == app.selected_column {
                    cell.style(Style::default().fg(Color::Cyan))
                } else {
                    cell
                }
            });
        Row::new(cells)
    });

    let title = if app.browser.loading {
        "Categories (loading...)".to_string()
    } else {
        "Categories".to_string()
    };

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(22),
            Constraint::Percentage(22),
            Constraint::Percentage(30),
            Constraint::Percentage(16),
            Constraint::Percentage(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(title),
    )
    .row_highlight_style(
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, &mut app.table_state);
}
