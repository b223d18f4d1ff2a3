//! Terminal front end: owns the controller and turns key presses into
//! control calls.

use std::time::{Duration, Instant};

use chrono::Local;
use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand_pcg::Pcg32;
use ratatui::DefaultTerminal;

use moodsynth::mood::style_for_now;
use moodsynth::{PlaybackController, VoiceHandle};

use crate::ui::{self, SpectrumAnalyzer, TransportInfo, View};

/// Samples shown by the scope and fed to the FFT
const VIS_WINDOW: usize = 1024;

const VOLUME_STEP: f32 = 0.05;

/// How often the style is re-checked against the clock
const CLOCK_REFRESH: Duration = Duration::from_secs(60);

pub struct App {
    controller: PlaybackController,
    follow_clock: bool,
    rng: Pcg32,
    effects: Vec<&'static str>,
    selected: usize,
    spectrum: SpectrumAnalyzer,
    scope: Vec<f32>,
    /// Voice the playhead estimate belongs to, and when it started
    playhead: Option<(VoiceHandle, Instant)>,
    last_refresh: Instant,
    status: String,
    should_quit: bool,
}

impl App {
    pub fn new(controller: PlaybackController, follow_clock: bool, rng: Pcg32) -> Self {
        let effects: Vec<_> = controller.catalog().names().collect();
        let sample_rate = controller
            .output_format()
            .map_or(44_100, |format| format.sample_rate);

        let status = if controller.is_unlocked() {
            String::new()
        } else {
            "press any key to enable audio".into()
        };

        Self {
            controller,
            follow_clock,
            rng,
            effects,
            selected: 0,
            spectrum: SpectrumAnalyzer::new(VIS_WINDOW, sample_rate as f32),
            scope: vec![0.0; VIS_WINDOW],
            playhead: None,
            last_refresh: Instant::now(),
            status,
            should_quit: false,
        }
    }

    pub fn run(mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.follow_time();
            self.update_scope();
            self.spectrum.update(&self.scope);

            terminal.draw(|frame| ui::draw(frame, &self.view()))?;

            // ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        self.controller.destroy();
        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        if !self.controller.is_unlocked() {
            self.controller.unlock();
            self.status.clear();
        }

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => self.controller.toggle(),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let volume = self.controller.volume() + VOLUME_STEP;
                self.controller.set_volume(volume);
            }
            KeyCode::Char('-') => {
                let volume = self.controller.volume() - VOLUME_STEP;
                self.controller.set_volume(volume);
            }
            KeyCode::Left if !self.effects.is_empty() => {
                self.selected = (self.selected + self.effects.len() - 1) % self.effects.len();
            }
            KeyCode::Right if !self.effects.is_empty() => {
                self.selected = (self.selected + 1) % self.effects.len();
            }
            KeyCode::Enter => {
                if let Some(name) = self.effects.get(self.selected) {
                    self.controller.play(name);
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.reroll(),
            _ => {}
        }
    }

    fn reroll(&mut self) {
        let style = style_for_now(&mut self.rng);
        let name = style.name.clone();
        self.status = match self.controller.set_style(style) {
            Ok(()) => format!("style: {name}"),
            Err(err) => format!("reroll failed: {err}"),
        };
    }

    fn follow_time(&mut self) {
        if !self.follow_clock || self.last_refresh.elapsed() < CLOCK_REFRESH {
            return;
        }
        self.last_refresh = Instant::now();

        match self.controller.refresh_for_time(&Local::now()) {
            Ok(true) => self.status = format!("style: {}", self.controller.style().name),
            Ok(false) => {}
            Err(err) => self.status = format!("style refresh failed: {err}"),
        }
    }

    /// Copy the loop window under the estimated playhead into the scope.
    fn update_scope(&mut self) {
        let handle = self.controller.playback_state().ambient_voice;
        self.playhead = match (handle, self.playhead) {
            (Some(h), Some((current, started))) if h == current => Some((current, started)),
            (Some(h), _) => Some((h, Instant::now())),
            (None, _) => None,
        };

        let Some(buffer) = self.controller.ambient_buffer() else {
            self.scope.fill(0.0);
            return;
        };
        let Some(samples) = buffer.channel(0).filter(|s| !s.is_empty()) else {
            self.scope.fill(0.0);
            return;
        };

        let start = match self.playhead {
            Some((_, started)) => {
                let elapsed = started.elapsed().as_secs_f64();
                (elapsed * buffer.sample_rate() as f64) as usize % samples.len()
            }
            None => {
                // Stopped: flat line
                self.scope.fill(0.0);
                return;
            }
        };

        for (i, out) in self.scope.iter_mut().enumerate() {
            *out = samples[(start + i) % samples.len()] * self.controller.volume();
        }
    }

    fn view(&self) -> View<'_> {
        View {
            transport: TransportInfo {
                style: self.controller.style(),
                state: self.controller.state(),
                playback: self.controller.playback_state(),
                unlocked: self.controller.is_unlocked(),
                sample_rate: self.controller.output_format().map(|f| f.sample_rate),
                voices: self.controller.ambient_voice_count(),
            },
            scope: &self.scope,
            spectrum: self.spectrum.data(),
            effects: &self.effects,
            selected: self.selected,
            status: &self.status,
        }
    }
}
