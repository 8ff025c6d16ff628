use ratatui::{
    layout::Rect,
    prelude::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::model::Model;

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let url = Line::from(Span::styled(
        model.stream.url.as_str(),
        Style::default().fg(Color::Gray),
    ));

    let toast = match &model.toast {
        Some(toast) => Line::from(Span::styled(
            toast.message.clone(),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::default(),
    };

    let counts = get_counts_content(model);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(url.width() as u16),
            Constraint::Length(3),
            Constraint::Min(toast.width() as u16),
            Constraint::Length(counts.width() as u16),
        ])
        .split(rect);

    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        rect,
    );

    frame.render_widget(Paragraph::new(url), layout[0]);
    frame.render_widget(Paragraph::new(toast), layout[2]);
    frame.render_widget(Paragraph::new(counts), layout[3]);
}

fn get_counts_content(model: &Model) -> Line<'_> {
    let shown = model.filters.apply(&model.stream.records).len();
    let total = model.stream.records.len();

    Line::from(Span::styled(
        format!("{}/{} · {} domains", shown, total, model.domains.len()),
        Style::default().fg(Color::Gray),
    ))
}
