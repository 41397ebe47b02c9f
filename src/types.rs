//! Core types and structures for gsd-forge

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Where a merged corpus entry came from.
///
/// Tags exist only for reporting; they are stripped before persistence so the
/// written file carries no provenance information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Original,
    Synthetic,
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provenance::Original => write!(f, "original"),
            Provenance::Synthetic => write!(f, "synthetic"),
        }
    }
}

/// A single entry in a merged corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedEntry {
    pub domain: String,
    pub provenance: Provenance,
}

impl MergedEntry {
    pub fn original(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            provenance: Provenance::Original,
        }
    }

    pub fn synthetic(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            provenance: Provenance::Synthetic,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.provenance == Provenance::Synthetic
    }
}

/// Blend profile: which kind of corpus is being enriched.
///
/// Carries the per-tool defaults (output name, GSD count, expected input
/// size) of the two original workflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Newly-registered legitimate domain lists
    Newly,
    /// Phishing feed exports
    Phishing,
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Profile::Newly => write!(f, "newly"),
            Profile::Phishing => write!(f, "phishing"),
        }
    }
}

impl Profile {
    pub fn default_output(&self) -> &'static str {
        match self {
            Profile::Newly => "new_domains_with_gsd.txt",
            Profile::Phishing => "phishing_domains_with_gsd.txt",
        }
    }

    pub fn default_num_gsd(&self) -> usize {
        match self {
            Profile::Newly => 522,
            Profile::Phishing => 4500,
        }
    }

    /// Minimum input size below which a soft warning is emitted
    pub fn expected_min(&self) -> Option<usize> {
        match self {
            Profile::Newly => None,
            Profile::Phishing => Some(25_500),
        }
    }
}

/// Configuration for the blend pipeline
#[derive(Debug, Clone)]
pub struct BlendConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub num_gsd: usize,
    pub profile: Profile,
    /// Explicit RNG seed for deterministic runs; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for BlendConfig {
    fn default() -> Self {
        let profile = Profile::Newly;
        Self {
            input: PathBuf::new(),
            output: PathBuf::from(profile.default_output()),
            num_gsd: profile.default_num_gsd(),
            profile,
            seed: None,
        }
    }
}

/// Configuration for CT log collection
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub targets: Vec<String>,
    pub output: PathBuf,
    pub retry_attempts: usize,
    pub timeout: Duration,
    /// Politeness delay between targets
    pub target_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            targets: crate::ct::DEFAULT_TARGETS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            output: PathBuf::from("domains.txt"),
            retry_attempts: 3,
            timeout: Duration::from_secs(30),
            target_delay: Duration::from_secs(2),
        }
    }
}

/// Counts produced by the line-parity filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStats {
    pub total: usize,
    pub kept: usize,
}
