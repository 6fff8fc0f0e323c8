//! Idea hooks.
//!
//! An idea is one of five fixed hook phrasings, parameterized by niche and
//! pillar, followed by a format-specific suffix. The hook is chosen through a
//! [`HookPicker`] so callers decide between true randomness, a seeded
//! sequence, or a fixed choice.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::plan::PostFormat;

/// Number of hook templates in the catalog.
pub const HOOK_COUNT: usize = 5;

/// Chooses an index into a catalog of `len` entries.
pub trait HookPicker {
    /// Return an index in `0..len`. Implementations may return anything when
    /// `len == 0`; callers never pass an empty catalog.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform random choice backed by any [`Rng`].
#[derive(Debug, Clone)]
pub struct RandomPicker<R = ThreadRng> {
    rng: R,
}

impl RandomPicker<ThreadRng> {
    pub fn thread() -> Self {
        Self { rng: rand::rng() }
    }
}

impl RandomPicker<StdRng> {
    /// A reproducible picker: the same seed yields the same hook sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomPicker<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> HookPicker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// Always picks the same index (modulo the catalog length).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPicker(pub usize);

impl HookPicker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 { 0 } else { self.0 % len }
    }
}

/// The five hook phrasings for a niche and pillar, in catalog order.
pub fn hook_catalog(niche: &str, pillar: &str) -> [String; HOOK_COUNT] {
    [
        format!("3 {pillar} secrets in {niche} nobody shares"),
        format!("Common {pillar} mistakes in {niche}"),
        format!("Before/After: {pillar} transformation in {niche}"),
        format!("7-day {pillar} challenge for {niche}"),
        format!("Quick {pillar} strategy for {niche}"),
    ]
}

/// Generate an idea: a picked hook plus the format suffix.
pub fn generate_idea(
    picker: &mut dyn HookPicker,
    niche: &str,
    pillar: &str,
    format: PostFormat,
) -> String {
    let catalog = hook_catalog(niche, pillar);
    let hook = &catalog[picker.pick(catalog.len()) % catalog.len()];
    format!("{hook} {}", format.idea_suffix())
}
