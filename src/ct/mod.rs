//! Certificate-transparency log collection

mod fetcher;

pub use fetcher::{extract_domains, CtEntry, CtFetcher, CRT_SH_URL};

/// Popular domains whose certificates seed the collected corpus
pub const DEFAULT_TARGETS: &[&str] = &[
    "google.com", "facebook.com", "youtube.com", "amazon.com", "twitter.com",
    "instagram.com", "linkedin.com", "microsoft.com", "apple.com", "netflix.com",
    "github.com", "stackoverflow.com", "reddit.com", "wikipedia.org", "cloudflare.com",
];
