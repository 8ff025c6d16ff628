use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Row, Table, TableState},
    Frame,
};

use crate::model::Model;

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let filtered = model.filters.apply(&model.stream.records);

    let header = Row::new([
        "domain", "title", "type", "comment", "user", "bot", "minor", "ns",
    ])
    .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows = filtered.iter().map(|record| {
        let style = if record.seen {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        Row::new(vec![
            record.domain.clone(),
            record.title.clone(),
            record.kind.clone(),
            record.comment.clone(),
            record.user.clone(),
            yes_no(record.bot).to_string(),
            yes_no(record.minor).to_string(),
            record
                .namespace
                .map(|namespace| namespace.to_string())
                .unwrap_or_default(),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(24),
        Constraint::Min(20),
        Constraint::Length(10),
        Constraint::Min(24),
        Constraint::Length(18),
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Length(4),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let selected = if filtered.is_empty() {
        None
    } else {
        Some(model.selected)
    };

    let mut state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, rect, &mut state);
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
