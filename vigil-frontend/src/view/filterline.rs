use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{FilterField, Mode, Model};

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let filters = &model.filters;

    let namespace = filters
        .namespace
        .map(|namespace| namespace.to_string())
        .unwrap_or_default();

    let mut content = Vec::new();
    content.push(text_field(model, FilterField::Search, "search", &filters.search_text));
    content.push(separator());
    content.push(text_field(model, FilterField::Domain, "domain", &filters.domain));
    content.push(separator());
    content.push(text_field(model, FilterField::Title, "title", &filters.title));
    content.push(separator());
    content.push(text_field(model, FilterField::User, "user", &filters.user));
    content.push(separator());
    content.push(text_field(model, FilterField::Namespace, "ns", &namespace));
    content.push(separator());
    content.push(flag_field("bot", filters.bot.is_some()));
    content.push(separator());
    content.push(flag_field("minor", filters.minor.is_some()));
    content.push(separator());
    content.push(flag_field("edits only", filters.edits_only));

    frame.render_widget(Paragraph::new(Line::from(content)), rect);
}

fn text_field<'a>(model: &Model, field: FilterField, label: &'a str, value: &'a str) -> Span<'a> {
    let style = if model.mode == Mode::Input(field) {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    Span::styled(format!("{}: {}", label, value), style)
}

fn flag_field(label: &str, active: bool) -> Span<'_> {
    let marker = if active { "x" } else { " " };

    Span::styled(
        format!("[{}] {}", marker, label),
        Style::default().fg(Color::Gray),
    )
}

fn separator() -> Span<'static> {
    Span::styled(" │ ", Style::default().fg(Color::DarkGray))
}
