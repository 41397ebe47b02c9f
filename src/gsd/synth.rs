//! Synthetic suspicious-domain generator
//!
//! Produces one domain string per call using one of four naming grammars
//! chosen uniformly at random. Tokens run together with no separators and a
//! numeric suffix, mimicking deceptive unbroken concatenation. Output is not
//! validated for registrability and duplicates across calls are possible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use super::Lexicon;

/// One of the four naming grammars.
///
/// The numeric suffix range differs per grammar, which keeps the length
/// profile of the suffix distinguishable across grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// `brand + action + int(100..=9999) + tld`
    BrandAction,
    /// `action + brand + int(10..=999) + tld`
    ActionBrand,
    /// `brand + modifier + int(100..=999) + tld`
    BrandModifier,
    /// `modifier + brand + int(1000..=9999) + tld`
    ModifierBrand,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::BrandAction,
        Pattern::ActionBrand,
        Pattern::BrandModifier,
        Pattern::ModifierBrand,
    ];

    /// Inclusive range of the numeric suffix for this grammar
    pub fn numeric_range(&self) -> RangeInclusive<u32> {
        match self {
            Pattern::BrandAction => 100..=9999,
            Pattern::ActionBrand => 10..=999,
            Pattern::BrandModifier => 100..=999,
            Pattern::ModifierBrand => 1000..=9999,
        }
    }

    /// The two token vocabularies this grammar concatenates, in order
    fn token_lists<'a>(&self, lexicon: &'a Lexicon) -> (&'a [String], &'a [String]) {
        match self {
            Pattern::BrandAction => (lexicon.brands(), lexicon.actions()),
            Pattern::ActionBrand => (lexicon.actions(), lexicon.brands()),
            Pattern::BrandModifier => (lexicon.brands(), lexicon.modifiers()),
            Pattern::ModifierBrand => (lexicon.modifiers(), lexicon.brands()),
        }
    }

    /// Map a domain string back to the grammar that could have produced it.
    ///
    /// Returns the first matching grammar, or `None` if the string does not
    /// decompose into `token + token + number + tld` over the given lexicon.
    /// Used by tests and audits; generation never calls this.
    pub fn classify(domain: &str, lexicon: &Lexicon) -> Option<Pattern> {
        let label = lexicon
            .tlds()
            .iter()
            .find_map(|tld| domain.strip_suffix(tld.as_str()))?;

        let digits: String = label
            .chars()
            .rev()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            return None;
        }
        let words = &label[..label.len() - digits.len()];
        let number: u32 = digits.chars().rev().collect::<String>().parse().ok()?;

        Pattern::ALL.into_iter().find(|pattern| {
            if !pattern.numeric_range().contains(&number) {
                return false;
            }
            let (firsts, seconds) = pattern.token_lists(lexicon);
            firsts.iter().any(|first| {
                words
                    .strip_prefix(first.as_str())
                    .map_or(false, |rest| seconds.iter().any(|s| s == rest))
            })
        })
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::BrandAction => write!(f, "brand_action_random"),
            Pattern::ActionBrand => write!(f, "action_brand_random"),
            Pattern::BrandModifier => write!(f, "brand_modifier_random"),
            Pattern::ModifierBrand => write!(f, "modifier_brand_random"),
        }
    }
}

/// Generator of synthetic suspicious domain names.
///
/// Generic over its random source so tests can inject a seeded RNG and assert
/// exact output. `new` draws from entropy; `with_seed` is fully
/// deterministic.
pub struct GsdSynthesizer<R: Rng = StdRng> {
    lexicon: Lexicon,
    rng: R,
}

impl GsdSynthesizer<StdRng> {
    /// Create a synthesizer with an entropy-seeded RNG
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_rng(lexicon, StdRng::from_entropy())
    }

    /// Create a deterministic synthesizer from an explicit seed
    pub fn with_seed(lexicon: Lexicon, seed: u64) -> Self {
        Self::with_rng(lexicon, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GsdSynthesizer<R> {
    /// Create a synthesizer over a caller-supplied random source
    pub fn with_rng(lexicon: Lexicon, rng: R) -> Self {
        Self { lexicon, rng }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The merge engine shuffles with the same RNG so a single seed
    /// determines the whole pipeline.
    pub(crate) fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Generate a single synthetic domain
    pub fn generate(&mut self) -> String {
        let pattern = Pattern::ALL[self.rng.gen_range(0..Pattern::ALL.len())];
        let (firsts, seconds) = pattern.token_lists(&self.lexicon);

        let first = pick(&mut self.rng, firsts);
        let second = pick(&mut self.rng, seconds);
        let number = self.rng.gen_range(pattern.numeric_range());
        let tld = pick(&mut self.rng, self.lexicon.tlds());

        format!("{}{}{}{}", first, second, number, tld)
    }

    /// Generate a batch of `n` synthetic domains (duplicates possible)
    pub fn generate_batch(&mut self, n: usize) -> Vec<String> {
        (0..n).map(|_| self.generate()).collect()
    }
}

/// Uniform pick from a lexicon collection.
/// Lexicon construction guarantees the slice is non-empty.
fn pick<'a, R: Rng>(rng: &mut R, tokens: &'a [String]) -> &'a str {
    &tokens[rng.gen_range(0..tokens.len())]
}
