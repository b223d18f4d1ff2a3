//! Lead layer: a running arpeggio.
//!
//! # How It Works
//!
//! 1. Walks the mood's scale one note per quarter beat (half beat when the
//!    style is below half intensity, so calm hours arpeggiate slower)
//! 2. Amplitude follows `sin(beat_phase·π)`: swells into the middle of each
//!    beat and fades out at the edges
//! 3. Voicing per mood: synthwave adds a 1.01x detuned chorus, combat adds
//!    a parallel fifth at 1.5x

use crate::dsp::oscillator::Waveform;
use crate::mood::LeadVoicing;

use super::Clock;

pub(crate) struct Lead {
    scale: &'static [f32],
    note_seconds: f32,
    voicing: LeadVoicing,
    level: f32,
}

impl Lead {
    pub(crate) fn new(
        scale: &'static [f32],
        beat_seconds: f32,
        intensity: f32,
        voicing: LeadVoicing,
    ) -> Self {
        let division = if intensity < 0.5 { 2.0 } else { 4.0 };
        Self {
            scale,
            note_seconds: beat_seconds / division,
            voicing,
            level: 0.12 * intensity,
        }
    }

    pub(crate) fn note_at(&self, t: f32) -> f32 {
        let index = (t / self.note_seconds) as usize;
        self.scale[index % self.scale.len()]
    }

    pub(crate) fn sample(&self, clock: &Clock) -> f32 {
        let freq = self.note_at(clock.t);
        let shape = (clock.beat_phase * std::f32::consts::PI).sin();

        let mut voice = Waveform::Triangle.sample(freq * clock.t);
        voice += match self.voicing {
            LeadVoicing::Plain => 0.0,
            LeadVoicing::Chorus => 0.6 * Waveform::Triangle.sample(freq * 1.01 * clock.t),
            LeadVoicing::Fifth => 0.4 * Waveform::Triangle.sample(freq * 1.5 * clock.t),
        };

        voice * shape * self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALE: &[f32] = &[440.0, 550.0];

    #[test]
    fn calm_styles_arpeggiate_at_half_speed() {
        let busy = Lead::new(SCALE, 0.5, 0.9, LeadVoicing::Plain);
        let calm = Lead::new(SCALE, 0.5, 0.3, LeadVoicing::Plain);
        assert_eq!(busy.note_seconds, 0.125);
        assert_eq!(calm.note_seconds, 0.25);
        assert_eq!(busy.note_at(0.13), 550.0);
        assert_eq!(calm.note_at(0.13), 440.0);
    }

    #[test]
    fn silent_on_the_beat_edge() {
        let lead = Lead::new(SCALE, 0.5, 1.0, LeadVoicing::Fifth);
        let clock = Clock::at(0.0, 0.5, 16.0);
        assert!(lead.sample(&clock).abs() < 1e-6);
    }
}
