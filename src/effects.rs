//! Destruction effect catalog
//!
//! Maps each destruction kind to its particle parameters and provides a
//! uniform random picker over the closed kind set.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Visual style of a destruction effect
///
/// The set is closed: every kind has a particle config and a sound cue.
/// Serialized as lowercase strings (`"explosion"`, `"blackhole"`, ...) for
/// front-end consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestructionKind {
    Explosion,
    Incineration,
    Disintegration,
    Blackhole,
    Lightning,
    Crushing,
}

/// Particle parameters for one destruction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParticleConfig {
    /// Number of particles to spawn
    pub count: u32,
    /// Palette cycled across particles, `#RRGGBB`
    pub colors: &'static [&'static str],
    /// Animation length in milliseconds
    pub duration_ms: u32,
    /// Maximum scatter radius in pixels
    pub spread_px: u32,
}

const EXPLOSION: ParticleConfig = ParticleConfig {
    count: 50,
    colors: &["#FF0040", "#FF6B00", "#FFD700", "#FFFFFF"],
    duration_ms: 1500,
    spread_px: 300,
};

const INCINERATION: ParticleConfig = ParticleConfig {
    count: 40,
    colors: &["#FF0040", "#FF6B00", "#FFD700", "#222222"],
    duration_ms: 2000,
    spread_px: 100,
};

const DISINTEGRATION: ParticleConfig = ParticleConfig {
    count: 80,
    colors: &["#FFFFFF", "#CCCCCC", "#888888", "#444444"],
    duration_ms: 1800,
    spread_px: 200,
};

const BLACKHOLE: ParticleConfig = ParticleConfig {
    count: 60,
    colors: &["#6B00FF", "#0040FF", "#00FFD7", "#FFFFFF"],
    duration_ms: 2000,
    spread_px: 150,
};

const LIGHTNING: ParticleConfig = ParticleConfig {
    count: 30,
    colors: &["#00D4FF", "#FFFFFF", "#FFD700", "#00FF6A"],
    duration_ms: 1200,
    spread_px: 250,
};

const CRUSHING: ParticleConfig = ParticleConfig {
    count: 35,
    colors: &["#888888", "#666666", "#444444", "#222222"],
    duration_ms: 1000,
    spread_px: 200,
};

impl DestructionKind {
    /// Every kind, in declaration order
    pub const ALL: [DestructionKind; 6] = [
        DestructionKind::Explosion,
        DestructionKind::Incineration,
        DestructionKind::Disintegration,
        DestructionKind::Blackhole,
        DestructionKind::Lightning,
        DestructionKind::Crushing,
    ];

    /// Get the particle config for this kind
    ///
    /// Total over the enum; configs are fixed at compile time.
    pub fn config(self) -> &'static ParticleConfig {
        match self {
            DestructionKind::Explosion => &EXPLOSION,
            DestructionKind::Incineration => &INCINERATION,
            DestructionKind::Disintegration => &DISINTEGRATION,
            DestructionKind::Blackhole => &BLACKHOLE,
            DestructionKind::Lightning => &LIGHTNING,
            DestructionKind::Crushing => &CRUSHING,
        }
    }

    /// Lowercase tag, matching the serde representation
    pub fn name(self) -> &'static str {
        match self {
            DestructionKind::Explosion => "explosion",
            DestructionKind::Incineration => "incineration",
            DestructionKind::Disintegration => "disintegration",
            DestructionKind::Blackhole => "blackhole",
            DestructionKind::Lightning => "lightning",
            DestructionKind::Crushing => "crushing",
        }
    }

    /// Parse a lowercase tag; unknown tags yield `None`
    pub fn from_name(name: &str) -> Option<DestructionKind> {
        DestructionKind::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Pick a kind uniformly at random (each has probability 1/6)
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> DestructionKind {
        DestructionKind::ALL[rng.random_range(0..DestructionKind::ALL.len())]
    }
}

/// Pick a kind uniformly at random using the thread-local RNG
pub fn pick_random() -> DestructionKind {
    DestructionKind::pick(&mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::HashMap;

    #[test]
    fn test_configs_are_sane() {
        for kind in DestructionKind::ALL {
            let config = kind.config();
            assert!(config.count > 0, "{kind:?} has no particles");
            assert!(!config.colors.is_empty(), "{kind:?} has no colors");
            assert!(config.duration_ms > 0, "{kind:?} has zero duration");
            assert!(config.spread_px > 0, "{kind:?} has zero spread");
            for color in config.colors {
                assert!(color.starts_with('#') && color.len() == 7, "bad color {color}");
            }
        }
    }

    #[test]
    fn test_config_literals() {
        let explosion = DestructionKind::Explosion.config();
        assert_eq!(explosion.count, 50);
        assert_eq!(explosion.spread_px, 300);
        assert_eq!(explosion.colors[0], "#FF0040");

        let crushing = DestructionKind::Crushing.config();
        assert_eq!(crushing.count, 35);
        assert_eq!(crushing.duration_ms, 1000);
    }

    #[test]
    fn test_pick_is_uniform() {
        const DRAWS: usize = 12_000;
        let mut rng = Pcg32::seed_from_u64(7);
        let mut counts: HashMap<DestructionKind, usize> = HashMap::new();

        for _ in 0..DRAWS {
            *counts.entry(DestructionKind::pick(&mut rng)).or_default() += 1;
        }

        // Expect DRAWS/6 = 2000 each; allow a generous band around it
        for kind in DestructionKind::ALL {
            let count = counts.get(&kind).copied().unwrap_or(0);
            assert!(
                (1700..=2300).contains(&count),
                "{kind:?} drawn {count} times out of {DRAWS}"
            );
        }
    }

    #[test]
    fn test_name_round_trip() {
        for kind in DestructionKind::ALL {
            assert_eq!(DestructionKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(DestructionKind::from_name("unknown-kind"), None);
        assert_eq!(DestructionKind::from_name("Explosion"), None);
    }

    #[test]
    fn test_serde_lowercase_tags() {
        let json = serde_json::to_string(&DestructionKind::Blackhole).unwrap();
        assert_eq!(json, "\"blackhole\"");

        let kind: DestructionKind = serde_json::from_str("\"lightning\"").unwrap();
        assert_eq!(kind, DestructionKind::Lightning);
    }

    #[test]
    fn test_config_serializes() {
        let json = serde_json::to_string(DestructionKind::Lightning.config()).unwrap();
        assert!(json.contains("\"count\":30"));
        assert!(json.contains("#00D4FF"));
    }
}
