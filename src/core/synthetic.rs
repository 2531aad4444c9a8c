//! Deterministic synthetic profiles.
//!
//! Profiles are fabricated from a ChaCha stream seeded with the first eight
//! bytes of SHA-256 over the profile id. This keeps a given link stable across
//! calls, processes and platforms. It is not a fairness or secrecy guarantee.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

use crate::models::{CoFounderProfile, Interest, Skill, Strength, Value, Weakness, WorkStyle};

/// Resolves a profile link to a synthetic `CoFounderProfile`
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticProfileResolver;

impl SyntheticProfileResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, profile_link: &str) -> CoFounderProfile {
        let id = profile_id(profile_link);
        let mut rng = ChaCha8Rng::seed_from_u64(seed_for(id));

        let skills = sample_tags(&mut rng, Skill::ALL, 2, 4);
        let experience_years = rng.gen_range(2..=15);
        let previous_startups = rng.gen_range(0..=3);
        let startup_interests = sample_tags(&mut rng, Interest::ALL, 1, 3);
        let strengths = sample_tags(&mut rng, Strength::ALL, 2, 3);
        let weaknesses = sample_tags(&mut rng, Weakness::ALL, 1, 2);
        let work_style = WorkStyle::ALL[rng.gen_range(0..WorkStyle::ALL.len())];
        let values = sample_tags(&mut rng, Value::ALL, 2, 4);

        tracing::debug!("Generated synthetic profile for id {:?}", id);

        CoFounderProfile {
            name: format!("User {}", id.chars().take(8).collect::<String>()),
            skills,
            experience_years,
            previous_startups,
            startup_interests,
            strengths,
            weaknesses,
            work_style,
            values,
        }
    }
}

/// Last non-empty path segment of a profile link
pub fn profile_id(profile_link: &str) -> &str {
    let trimmed = profile_link.trim().trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Stable 64-bit seed for a profile id
pub fn seed_for(id: &str) -> u64 {
    let digest = Sha256::digest(id.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

/// Draw between `min` and `max` distinct tags from `universe`, in universe order
fn sample_tags<T: Copy + Ord>(rng: &mut ChaCha8Rng, universe: &[T], min: usize, max: usize) -> Vec<T> {
    let count = rng.gen_range(min..=max);
    let mut tags: Vec<T> = universe.choose_multiple(rng, count).copied().collect();
    tags.sort();
    tags
}
