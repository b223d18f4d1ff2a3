//! Time-of-day style selection.
//!
//! `style_for_hour` maps an hour (plus weekend and holiday modifiers) to a
//! `MusicStyle`. The lookup is pure except for the weekend tempo jitter,
//! which draws from a caller-supplied RNG so tests can pin it with a seed.
//!
//! # Example
//!
//! ```
//! use moodsynth::mood::{style_for_hour, Mood};
//! use rand::SeedableRng;
//!
//! let mut rng = rand_pcg::Pcg32::seed_from_u64(1);
//! let noon = style_for_hour(12, false, None, &mut rng);
//! assert_eq!(noon.mood, Mood::Combat);
//! assert_eq!(noon.bpm_base, 140.0);
//! ```

mod calendar;
mod profile;
mod table;

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Timelike, Weekday};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};

pub use calendar::SpecialDate;
pub use profile::{LeadVoicing, MoodProfile};

/// Largest tempo nudge applied on weekends, in BPM.
pub const WEEKEND_JITTER_BPM: i32 = 5;
/// Intensity added on weekends before clamping.
pub const WEEKEND_INTENSITY_BOOST: f32 = 0.1;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Awakening,
    Energetic,
    Focused,
    Rebellious,
    Combat,
    Groovy,
    Tension,
    Stealth,
    Synthwave,
    Underground,
    Mysterious,
    Ambient,
}

impl Mood {
    pub const ALL: [Mood; 12] = [
        Mood::Awakening,
        Mood::Energetic,
        Mood::Focused,
        Mood::Rebellious,
        Mood::Combat,
        Mood::Groovy,
        Mood::Tension,
        Mood::Stealth,
        Mood::Synthwave,
        Mood::Underground,
        Mood::Mysterious,
        Mood::Ambient,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mood::Awakening => "awakening",
            Mood::Energetic => "energetic",
            Mood::Focused => "focused",
            Mood::Rebellious => "rebellious",
            Mood::Combat => "combat",
            Mood::Groovy => "groovy",
            Mood::Tension => "tension",
            Mood::Stealth => "stealth",
            Mood::Synthwave => "synthwave",
            Mood::Underground => "underground",
            Mood::Mysterious => "mysterious",
            Mood::Ambient => "ambient",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown mood '{s}'"))
    }
}

/// Tempo, energy and mood for one ambient loop.
///
/// Produced fresh by every lookup; callers own their copy.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MusicStyle {
    pub name: String,
    pub bpm_base: f32,
    /// 0.0 (sparse) to 1.0 (full).
    pub intensity: f32,
    pub mood: Mood,
    /// Holiday variant: adds a bell layer to the mood effects.
    pub festive: bool,
}

impl MusicStyle {
    pub fn new(name: impl Into<String>, bpm_base: f32, intensity: f32, mood: Mood) -> Self {
        Self {
            name: name.into(),
            bpm_base,
            intensity,
            mood,
            festive: false,
        }
    }

    /// The fixed style used when the loop should not follow the clock.
    pub fn reference() -> Self {
        Self::new("Reference Ambient", 120.0, 0.7, Mood::Synthwave)
    }

    /// A style for `mood` at its typical table tempo.
    pub fn for_mood(mood: Mood) -> Self {
        table::HOURLY
            .iter()
            .find(|(_, _, _, m)| *m == mood)
            .map(|&(name, bpm, intensity, mood)| Self::new(name, bpm, intensity, mood))
            .unwrap_or_else(|| Self::new(mood.name(), 100.0, 0.5, mood))
    }

    pub fn validate(&self) -> SynthResult<()> {
        if !self.bpm_base.is_finite() || !(20.0..=300.0).contains(&self.bpm_base) {
            return Err(SynthError::invalid_style(
                &self.name,
                format!("bpm {} outside 20..=300", self.bpm_base),
            ));
        }
        if !self.intensity.is_finite() || !(0.0..=1.0).contains(&self.intensity) {
            return Err(SynthError::invalid_style(
                &self.name,
                format!("intensity {} outside 0..=1", self.intensity),
            ));
        }
        Ok(())
    }

    /// Seconds per beat.
    pub fn beat_seconds(&self) -> f32 {
        60.0 / self.bpm_base
    }

    pub fn profile(&self) -> &'static MoodProfile {
        self.mood.profile()
    }
}

/// The weekday style for `hour` (taken modulo 24), with no modifiers.
pub fn base_style(hour: u8) -> MusicStyle {
    let (name, bpm, intensity, mood) = table::HOURLY[usize::from(hour % 24)];
    MusicStyle::new(name, bpm, intensity, mood)
}

/// Style for an hour of the day.
///
/// Weekends prefix the name with "Weekend ", nudge the tempo by up to
/// ±`WEEKEND_JITTER_BPM` drawn from `rng`, and raise intensity by
/// `WEEKEND_INTENSITY_BOOST` (capped at 1.0). A special date prefixes
/// "Festive " and sets the festive flag.
pub fn style_for_hour<R: Rng + ?Sized>(
    hour: u8,
    is_weekend: bool,
    special: Option<SpecialDate>,
    rng: &mut R,
) -> MusicStyle {
    let mut style = base_style(hour);

    if is_weekend {
        style.name = format!("Weekend {}", style.name);
        let jitter = rng.gen_range(-WEEKEND_JITTER_BPM..=WEEKEND_JITTER_BPM);
        style.bpm_base += jitter as f32;
        style.intensity = (style.intensity + WEEKEND_INTENSITY_BOOST).min(1.0);
    }

    if special.is_some() {
        style.name = format!("Festive {}", style.name);
        style.festive = true;
    }

    style
}

/// Style for a calendar moment: hour, Saturday/Sunday and special dates.
pub fn style_for_datetime<T, R>(when: &T, rng: &mut R) -> MusicStyle
where
    T: Datelike + Timelike,
    R: Rng + ?Sized,
{
    let is_weekend = matches!(when.weekday(), Weekday::Sat | Weekday::Sun);
    // hour() is always < 24
    let hour = when.hour() as u8;
    style_for_hour(hour, is_weekend, SpecialDate::for_date(when), rng)
}

/// Style for the local wall clock.
pub fn style_for_now<R: Rng + ?Sized>(rng: &mut R) -> MusicStyle {
    style_for_datetime(&chrono::Local::now(), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::noise::create_rng;
    use chrono::NaiveDate;

    #[test]
    fn noon_is_combat() {
        let style = style_for_hour(12, false, None, &mut create_rng(0));
        assert_eq!(style.mood, Mood::Combat);
        assert_eq!(style.bpm_base, 140.0);
        assert_eq!(style.intensity, 1.0);
    }

    #[test]
    fn two_am_is_ambient() {
        let style = style_for_hour(2, false, None, &mut create_rng(0));
        assert_eq!(style.mood, Mood::Ambient);
        assert_eq!(style.bpm_base, 70.0);
    }

    #[test]
    fn weekend_modifier_applies_to_every_hour() {
        let mut rng = create_rng(99);
        for hour in 0..24 {
            let weekday = base_style(hour);
            let weekend = style_for_hour(hour, true, None, &mut rng);

            assert!(weekend.name.starts_with("Weekend "), "{}", weekend.name);
            let expected = (weekday.intensity + 0.1).min(1.0);
            assert!((weekend.intensity - expected).abs() < 1e-6);
            assert!((weekend.bpm_base - weekday.bpm_base).abs() <= 5.0);
            assert_eq!(weekend.mood, weekday.mood);
        }
    }

    #[test]
    fn weekend_jitter_is_reproducible_with_a_seed() {
        let a = style_for_hour(9, true, None, &mut create_rng(3));
        let b = style_for_hour(9, true, None, &mut create_rng(3));
        assert_eq!(a, b);
    }

    #[test]
    fn weekday_lookup_ignores_the_rng() {
        let a = style_for_hour(17, false, None, &mut create_rng(1));
        let b = style_for_hour(17, false, None, &mut create_rng(2));
        assert_eq!(a, b);
    }

    #[test]
    fn festive_prefix_and_flag() {
        let style = style_for_hour(20, false, Some(SpecialDate::Christmas), &mut create_rng(0));
        assert!(style.name.starts_with("Festive "));
        assert!(style.festive);
        assert_eq!(style.mood, Mood::Synthwave);
    }

    #[test]
    fn hours_wrap() {
        assert_eq!(base_style(36), base_style(12));
    }

    #[test]
    fn every_table_entry_is_valid() {
        for hour in 0..24 {
            base_style(hour).validate().unwrap();
        }
    }

    #[test]
    fn datetime_lookup_detects_weekend_and_holiday() {
        // 2026-12-26 is a Saturday
        let when = NaiveDate::from_ymd_opt(2026, 12, 26)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let style = style_for_datetime(&when, &mut create_rng(5));
        assert!(style.name.starts_with("Festive Weekend "));
        assert_eq!(style.mood, Mood::Combat);
        assert_eq!(style.intensity, 1.0);
    }

    #[test]
    fn validate_rejects_bad_styles() {
        let mut style = MusicStyle::reference();
        style.bpm_base = f32::NAN;
        assert!(style.validate().is_err());

        let mut style = MusicStyle::reference();
        style.intensity = 1.5;
        assert!(style.validate().is_err());
    }

    #[test]
    fn moods_parse_case_insensitively() {
        assert_eq!("Combat".parse::<Mood>(), Ok(Mood::Combat));
        assert!("polka".parse::<Mood>().is_err());
    }
}
