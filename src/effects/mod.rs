//! One-shot effect library.
//!
//! Every effect is a row in [`catalog::EFFECTS`]: a duration, a gain and a
//! few primitive layers. [`build_effect_catalog`] renders them all once at
//! startup; the controller then hands out shared references to the rendered
//! buffers.

pub mod catalog;
pub mod render;
pub mod spec;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::buffer::SoundBuffer;
use crate::error::SynthResult;

pub use catalog::EFFECTS;
pub use render::render_effect;
pub use spec::{EffectCategory, EffectSpec, Layer, Shape};

/// Rendered effects by name.
#[derive(Debug, Clone, Default)]
pub struct EffectCatalog {
    sample_rate: u32,
    effects: BTreeMap<&'static str, Arc<SoundBuffer>>,
}

impl EffectCatalog {
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Shared buffer for `name`, if the catalog has it.
    pub fn get(&self, name: &str) -> Option<Arc<SoundBuffer>> {
        self.effects.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.effects.contains_key(name)
    }

    /// Effect names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.effects.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Arc<SoundBuffer>)> + '_ {
        self.effects.iter().map(|(name, buffer)| (*name, buffer))
    }
}

/// Look up the table row for an effect.
pub fn find_spec(name: &str) -> Option<&'static EffectSpec> {
    EFFECTS.iter().find(|spec| spec.name == name)
}

/// Render every effect in the table at `sample_rate`.
pub fn build_effect_catalog(sample_rate: u32) -> SynthResult<EffectCatalog> {
    let started = Instant::now();

    let effects = EFFECTS
        .iter()
        .map(|spec| Ok((spec.name, Arc::new(render_effect(spec, sample_rate)?))))
        .collect::<SynthResult<BTreeMap<_, _>>>()?;

    debug!(
        count = effects.len(),
        sample_rate,
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "built effect catalog"
    );

    Ok(EffectCatalog {
        sample_rate,
        effects,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SynthError;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique_and_kebab_case() {
        let mut seen = HashSet::new();
        for spec in EFFECTS {
            assert!(seen.insert(spec.name), "duplicate effect {}", spec.name);
            assert!(
                spec.name
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c == '-'),
                "{} is not kebab-case",
                spec.name
            );
        }
    }

    #[test]
    fn durations_are_in_range_and_layers_fit() {
        for spec in EFFECTS {
            assert!(
                (80..=5_000).contains(&spec.duration_ms),
                "{} lasts {} ms",
                spec.name,
                spec.duration_ms
            );
            for layer in spec.layers {
                assert!(
                    layer.end() <= spec.duration_seconds() + 1e-3,
                    "{} has a layer ending at {}",
                    spec.name,
                    layer.end()
                );
            }
        }
    }

    #[test]
    fn every_category_is_populated() {
        let categories: HashSet<_> = EFFECTS.iter().map(|spec| spec.category).collect();
        assert_eq!(categories.len(), 8);
    }

    #[test]
    fn catalog_covers_the_table() {
        let catalog = build_effect_catalog(22_050).unwrap();
        assert_eq!(catalog.len(), EFFECTS.len());
        assert_eq!(catalog.sample_rate(), 22_050);
        for name in ["hover", "click", "touch-tap", "circuit-complete", "battle-win", "level-up"] {
            assert!(catalog.contains(name), "missing {name}");
        }
        assert!(catalog.get("nonexistent-effect").is_none());

        for (name, buffer) in catalog.iter() {
            assert!(buffer.peak() > 0.0, "{name} is silent");
            assert!(buffer.peak() <= 1.0);
        }
    }

    #[test]
    fn shared_buffers_are_not_copied() {
        let catalog = build_effect_catalog(8_000).unwrap();
        let first = catalog.get("click").unwrap();
        let second = catalog.get("click").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn find_spec_matches_the_catalog() {
        let spec = find_spec("victory").unwrap();
        assert_eq!(spec.category, EffectCategory::Outcome);
        assert!(find_spec("nope").is_none());
    }

    #[test]
    fn unsupported_rate_is_an_error() {
        assert_eq!(
            build_effect_catalog(1_000).unwrap_err(),
            SynthError::InvalidSampleRate { rate: 1_000 }
        );
    }
}
