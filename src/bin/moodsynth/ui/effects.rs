//! Effect picker

use moodsynth::effects::find_spec;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn render_effects(frame: &mut Frame, area: Rect, names: &[&'static str], selected: usize) {
    let block = Block::default()
        .title(format!(" Effects ({}) ", names.len()))
        .borders(Borders::ALL);

    let items: Vec<ListItem> = names.iter().map(|name| ListItem::new(item_line(name))).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !names.is_empty() {
        state.select(Some(selected.min(names.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// `name  category · 240ms`
fn item_line(name: &'static str) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("{name:<18}"))];
    if let Some(spec) = find_spec(name) {
        spans.push(Span::styled(
            format!("{} · {}ms", spec.category, spec.duration_ms),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}
