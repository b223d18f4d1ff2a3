//! Transport bar: style, engine state, volume and output level

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use moodsynth::{ControllerState, MusicStyle, PlaybackState};

pub struct TransportInfo<'a> {
    pub style: &'a MusicStyle,
    pub state: ControllerState,
    pub playback: PlaybackState,
    pub unlocked: bool,
    pub sample_rate: Option<u32>,
    pub voices: usize,
}

/// Level of the visible window
struct AudioStats {
    peak: f32,
    rms: f32,
}

impl AudioStats {
    fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

fn state_label(info: &TransportInfo) -> (&'static str, Color) {
    match info.state {
        ControllerState::Disabled => ("✕ No audio", Color::Red),
        ControllerState::Uninitialized => ("… Starting", Color::DarkGray),
        _ if info.playback.is_playing && !info.unlocked => ("⏸ Locked", Color::Yellow),
        ControllerState::AmbientPlaying => ("▶ Playing", Color::Green),
        ControllerState::Ready | ControllerState::AmbientStopped => ("■ Stopped", Color::Yellow),
    }
}

pub fn render_transport(frame: &mut Frame, area: Rect, info: &TransportInfo, scope: &[f32]) {
    let block = Block::default().title(" moodsynth ").borders(Borders::ALL);

    let style = info.style;
    let (state, state_color) = state_label(info);
    let stats = AudioStats::from_buffer(scope);
    let rate = info
        .sample_rate
        .map_or_else(|| "--".to_string(), |sr| format!("{:.1}kHz", sr as f32 / 1000.0));

    let line = Line::from(vec![
        Span::styled(
            format!(" {}  ", style.name),
            Style::default().fg(if style.festive {
                Color::LightRed
            } else {
                Color::Cyan
            }),
        ),
        Span::styled(
            format!("{} {:.0} BPM {:.0}%  ", style.mood, style.bpm_base, style.intensity * 100.0),
            Style::default().fg(Color::White),
        ),
        Span::styled(format!("{state}  "), Style::default().fg(state_color)),
        Span::styled(
            format!("Vol {:.0}%  ", info.playback.volume * 100.0),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("Voices {}  {}  ", info.voices, rate),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}", stats.peak, stats.rms),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
