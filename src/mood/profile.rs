//! Per-mood musical material.
//!
//! The synthesizer never hardcodes notes. Each mood carries a bass line, a
//! lead scale, pad partials and rhythm settings, and the layers read from
//! here. Frequencies are in Hz.

use super::Mood;

/// How the lead arpeggio is doubled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadVoicing {
    Plain,
    /// Second voice at 1.01x for a detuned chorus.
    Chorus,
    /// Second voice at 1.5x, a parallel fifth.
    Fifth,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoodProfile {
    /// Bass notes, one per step of the loop.
    pub bass_notes: &'static [f32],
    /// Notes the lead arpeggio walks through.
    pub lead_scale: &'static [f32],
    /// Base frequencies of the two pad partials.
    pub pad_partials: [f32; 2],
    pub pad_level: f32,
    /// Hi-hat hits per beat; 0 disables the hats.
    pub hat_division: u32,
    /// Average glitch bursts per second.
    pub glitch_rate: f32,
    pub lead_voicing: LeadVoicing,
}

const AWAKENING: MoodProfile = MoodProfile {
    bass_notes: &[65.41, 65.41, 98.0, 87.31, 65.41, 73.42, 98.0, 87.31],
    lead_scale: &[261.63, 293.66, 329.63, 392.0, 440.0, 523.25],
    pad_partials: [130.81, 196.0],
    pad_level: 0.10,
    hat_division: 1,
    glitch_rate: 0.05,
    lead_voicing: LeadVoicing::Plain,
};

const ENERGETIC: MoodProfile = MoodProfile {
    bass_notes: &[82.41, 82.41, 98.0, 110.0, 82.41, 123.47, 110.0, 98.0],
    lead_scale: &[440.0, 523.25, 587.33, 659.25, 783.99, 880.0],
    pad_partials: [164.81, 246.94],
    pad_level: 0.06,
    hat_division: 4,
    glitch_rate: 0.15,
    lead_voicing: LeadVoicing::Plain,
};

const FOCUSED: MoodProfile = MoodProfile {
    bass_notes: &[73.42, 73.42, 87.31, 73.42, 65.41, 65.41, 87.31, 98.0],
    lead_scale: &[293.66, 329.63, 349.23, 392.0, 440.0, 493.88, 523.25],
    pad_partials: [146.83, 220.0],
    pad_level: 0.08,
    hat_division: 2,
    glitch_rate: 0.1,
    lead_voicing: LeadVoicing::Plain,
};

const REBELLIOUS: MoodProfile = MoodProfile {
    bass_notes: &[82.41, 87.31, 82.41, 98.0, 82.41, 87.31, 110.0, 98.0],
    lead_scale: &[329.63, 349.23, 392.0, 440.0, 493.88, 523.25],
    pad_partials: [164.81, 174.61],
    pad_level: 0.05,
    hat_division: 4,
    glitch_rate: 0.8,
    lead_voicing: LeadVoicing::Plain,
};

const COMBAT: MoodProfile = MoodProfile {
    bass_notes: &[73.42, 73.42, 73.42, 87.31, 73.42, 73.42, 116.54, 110.0],
    lead_scale: &[293.66, 329.63, 349.23, 392.0, 440.0, 466.16, 554.37, 587.33],
    pad_partials: [146.83, 220.0],
    pad_level: 0.04,
    hat_division: 4,
    glitch_rate: 1.2,
    lead_voicing: LeadVoicing::Fifth,
};

const GROOVY: MoodProfile = MoodProfile {
    bass_notes: &[98.0, 98.0, 116.54, 130.81, 98.0, 87.31, 98.0, 146.83],
    lead_scale: &[392.0, 440.0, 466.16, 523.25, 587.33, 659.25, 698.46],
    pad_partials: [196.0, 293.66],
    pad_level: 0.06,
    hat_division: 3,
    glitch_rate: 0.15,
    lead_voicing: LeadVoicing::Plain,
};

const TENSION: MoodProfile = MoodProfile {
    bass_notes: &[55.0, 58.27, 55.0, 61.74, 55.0, 58.27, 65.41, 61.74],
    lead_scale: &[220.0, 261.63, 311.13, 369.99, 440.0, 523.25],
    pad_partials: [110.0, 116.54],
    pad_level: 0.07,
    hat_division: 2,
    glitch_rate: 0.5,
    lead_voicing: LeadVoicing::Plain,
};

const STEALTH: MoodProfile = MoodProfile {
    bass_notes: &[55.0, 55.0, 65.41, 55.0, 49.0, 49.0, 55.0, 61.74],
    lead_scale: &[220.0, 246.94, 261.63, 293.66, 329.63],
    pad_partials: [110.0, 164.81],
    pad_level: 0.08,
    hat_division: 1,
    glitch_rate: 0.25,
    lead_voicing: LeadVoicing::Plain,
};

const SYNTHWAVE: MoodProfile = MoodProfile {
    bass_notes: &[55.0, 55.0, 87.31, 87.31, 65.41, 65.41, 98.0, 98.0],
    lead_scale: &[440.0, 493.88, 523.25, 587.33, 659.25, 698.46, 783.99, 880.0],
    pad_partials: [220.0, 329.63],
    pad_level: 0.09,
    hat_division: 2,
    glitch_rate: 0.2,
    lead_voicing: LeadVoicing::Chorus,
};

const UNDERGROUND: MoodProfile = MoodProfile {
    bass_notes: &[41.2, 41.2, 49.0, 41.2, 55.0, 41.2, 49.0, 46.25],
    lead_scale: &[164.81, 196.0, 220.0, 246.94, 293.66],
    pad_partials: [82.41, 123.47],
    pad_level: 0.07,
    hat_division: 4,
    glitch_rate: 0.6,
    lead_voicing: LeadVoicing::Plain,
};

const MYSTERIOUS: MoodProfile = MoodProfile {
    bass_notes: &[55.0, 65.41, 61.74, 55.0, 51.91, 55.0, 65.41, 73.42],
    lead_scale: &[261.63, 293.66, 329.63, 369.99, 415.30, 466.16],
    pad_partials: [130.81, 185.0],
    pad_level: 0.10,
    hat_division: 1,
    glitch_rate: 0.4,
    lead_voicing: LeadVoicing::Plain,
};

const AMBIENT: MoodProfile = MoodProfile {
    bass_notes: &[55.0, 55.0, 65.41, 65.41, 73.42, 73.42, 65.41, 65.41],
    lead_scale: &[523.25, 587.33, 659.25, 783.99, 880.0],
    pad_partials: [110.0, 164.81],
    pad_level: 0.12,
    hat_division: 0,
    glitch_rate: 0.05,
    lead_voicing: LeadVoicing::Plain,
};

impl Mood {
    pub fn profile(self) -> &'static MoodProfile {
        match self {
            Mood::Awakening => &AWAKENING,
            Mood::Energetic => &ENERGETIC,
            Mood::Focused => &FOCUSED,
            Mood::Rebellious => &REBELLIOUS,
            Mood::Combat => &COMBAT,
            Mood::Groovy => &GROOVY,
            Mood::Tension => &TENSION,
            Mood::Stealth => &STEALTH,
            Mood::Synthwave => &SYNTHWAVE,
            Mood::Underground => &UNDERGROUND,
            Mood::Mysterious => &MYSTERIOUS,
            Mood::Ambient => &AMBIENT,
        }
    }
}
