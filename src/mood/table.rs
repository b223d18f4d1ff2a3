//! The 24-hour style table.
//!
//! Energy follows the day: quiet ambience in the small hours, an awakening
//! at dawn, focus through the morning, peak combat at noon, grooves and
//! tension through the afternoon, synthwave and underground after dark.

use super::Mood;

/// (name, bpm, intensity, mood) for each hour, midnight first.
pub(crate) const HOURLY: [(&str, f32, f32, Mood); 24] = [
    ("Midnight Synthwave", 100.0, 0.55, Mood::Synthwave),
    ("Underground Pulse", 90.0, 0.45, Mood::Underground),
    ("Deep Night Ambient", 70.0, 0.25, Mood::Ambient),
    ("Void Drift", 65.0, 0.2, Mood::Ambient),
    ("Pre-Dawn Mystery", 72.0, 0.3, Mood::Mysterious),
    ("First Light", 80.0, 0.35, Mood::Awakening),
    ("Dawn Awakening", 88.0, 0.45, Mood::Awakening),
    ("Morning Rise", 100.0, 0.55, Mood::Energetic),
    ("Morning Drive", 110.0, 0.65, Mood::Energetic),
    ("Focus Flow", 105.0, 0.6, Mood::Focused),
    ("Deep Focus", 112.0, 0.7, Mood::Focused),
    ("Rising Rebellion", 125.0, 0.85, Mood::Rebellious),
    ("High Noon Combat", 140.0, 1.0, Mood::Combat),
    ("Afternoon Battle", 135.0, 0.95, Mood::Combat),
    ("Groove Session", 118.0, 0.75, Mood::Groovy),
    ("Tension Build", 122.0, 0.8, Mood::Tension),
    ("Stealth Ops", 100.0, 0.6, Mood::Stealth),
    ("Golden Hour Groove", 115.0, 0.7, Mood::Groovy),
    ("Twilight Rebellion", 128.0, 0.85, Mood::Rebellious),
    ("Evening Synthwave", 110.0, 0.7, Mood::Synthwave),
    ("Neon Nights", 115.0, 0.75, Mood::Synthwave),
    ("Underground Rave", 124.0, 0.8, Mood::Underground),
    ("Night Stealth", 95.0, 0.5, Mood::Stealth),
    ("Late Night Mystery", 85.0, 0.4, Mood::Mysterious),
];
