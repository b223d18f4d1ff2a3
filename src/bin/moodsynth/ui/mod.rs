//! TUI layout for moodsynth.

mod effects;
mod spectrum;
mod transport;
mod waveform;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub use spectrum::SpectrumAnalyzer;
pub use transport::TransportInfo;

use effects::render_effects;
use spectrum::render_spectrum;
use transport::render_transport;
use waveform::render_waveform;

/// Everything one frame needs, borrowed from the app.
pub struct View<'a> {
    pub transport: TransportInfo<'a>,
    pub scope: &'a [f32],
    pub spectrum: &'a [(f64, f64)],
    pub effects: &'a [&'static str],
    pub selected: usize,
    pub status: &'a str,
}

pub fn draw(frame: &mut Frame, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Transport bar
            Constraint::Min(8),    // Scope
            Constraint::Length(10), // Spectrum + effects
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_transport(frame, chunks[0], &view.transport, view.scope);
    render_waveform(frame, chunks[1], view.scope);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[2]);
    render_spectrum(frame, bottom[0], view.spectrum);
    render_effects(frame, bottom[1], view.effects, view.selected);

    let help = if view.status.is_empty() {
        " [Q] Quit  [Space] Start/Stop  [+/-] Volume  [←/→] Effect  [Enter] Play  [R] Reroll"
            .to_string()
    } else {
        format!(" {}", view.status)
    };
    let help = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}
