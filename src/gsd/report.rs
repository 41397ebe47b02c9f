//! Merge result analysis
//!
//! Summary statistics computed from a merged corpus for audit and
//! sanity-check purposes. Rendered as text only, never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::MergedEntry;

/// Maximum number of synthetic samples shown in a report
const MAX_SAMPLES: usize = 10;

/// Read-only summary of a merge result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeReport {
    pub total: usize,
    pub original_count: usize,
    pub synthetic_count: usize,
    pub synthetic_pct: f64,
    /// Up to 10 synthetic entries, identified by provenance tag
    pub samples: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl MergeReport {
    /// Compute a report from the original count and the merged corpus.
    ///
    /// An empty merged corpus reports a 0% synthetic share rather than
    /// dividing by zero.
    pub fn from_merged(original_count: usize, merged: &[MergedEntry]) -> Self {
        let total = merged.len();
        let synthetic_count = total.saturating_sub(original_count);
        let synthetic_pct = if total == 0 {
            0.0
        } else {
            synthetic_count as f64 / total as f64 * 100.0
        };

        let samples: Vec<String> = merged
            .iter()
            .filter(|entry| entry.is_synthetic())
            .take(MAX_SAMPLES)
            .map(|entry| entry.domain.clone())
            .collect();

        Self {
            total,
            original_count,
            synthetic_count,
            synthetic_pct,
            samples,
            generated_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for MergeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "OUTPUT ANALYSIS")?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "Total domains: {}", group_thousands(self.total))?;
        writeln!(f, "Original domains: {}", group_thousands(self.original_count))?;
        writeln!(
            f,
            "GSD domains inserted: {}",
            group_thousands(self.synthetic_count)
        )?;
        writeln!(f, "GSD percentage: {:.2}%", self.synthetic_pct)?;

        if !self.samples.is_empty() {
            writeln!(f)?;
            writeln!(f, "Sample GSD domains generated:")?;
            for (i, sample) in self.samples.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, sample)?;
            }
        }

        Ok(())
    }
}

/// Format an integer with comma thousands separators
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
