//! Merge engine: blend synthetic domains into a real corpus
//!
//! Originals and the generated batch are concatenated and then shuffled with
//! a uniform permutation (Fisher–Yates), so downstream consumers cannot
//! recover provenance from position.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{GsdSynthesizer, Lexicon};
use crate::types::MergedEntry;

/// Combines a real domain corpus with freshly synthesized domains.
///
/// The engine shares one RNG with its synthesizer, so constructing it with a
/// seed makes both generation and the shuffle deterministic.
pub struct MergeEngine<R: Rng = StdRng> {
    synthesizer: GsdSynthesizer<R>,
}

impl MergeEngine<StdRng> {
    /// Create a merge engine with an entropy-seeded RNG
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            synthesizer: GsdSynthesizer::new(lexicon),
        }
    }

    /// Create a deterministic merge engine from an explicit seed
    pub fn with_seed(lexicon: Lexicon, seed: u64) -> Self {
        Self {
            synthesizer: GsdSynthesizer::with_seed(lexicon, seed),
        }
    }
}

impl<R: Rng> MergeEngine<R> {
    /// Create a merge engine over a caller-supplied synthesizer
    pub fn with_synthesizer(synthesizer: GsdSynthesizer<R>) -> Self {
        Self { synthesizer }
    }

    /// Merge `original` with `n` newly synthesized domains.
    ///
    /// Every original entry survives with multiplicity preserved and every
    /// synthetic entry appears exactly once:
    /// `result.len() == original.len() + n`. An empty original is accepted
    /// and yields a pure-synthetic corpus; callers are expected to warn.
    pub fn merge(&mut self, original: Vec<String>, n: usize) -> Vec<MergedEntry> {
        let original_count = original.len();

        let mut merged: Vec<MergedEntry> = original
            .into_iter()
            .map(MergedEntry::original)
            .collect();
        merged.extend(
            self.synthesizer
                .generate_batch(n)
                .into_iter()
                .map(MergedEntry::synthetic),
        );

        merged.shuffle(self.synthesizer.rng_mut());

        tracing::debug!(
            original = original_count,
            synthetic = n,
            total = merged.len(),
            "merged and shuffled corpus"
        );

        merged
    }
}

/// Strip provenance tags for persistence
pub fn into_domains(merged: Vec<MergedEntry>) -> Vec<String> {
    merged.into_iter().map(|entry| entry.domain).collect()
}
