//! GSD Forge - synthetic suspicious-domain generation and corpus blending
//!
//! Generates "generic suspicious domain" names from phishing-style naming
//! grammars and blends them into real domain corpora to produce labeled
//! datasets, with auditable merge statistics.

pub mod corpus;
pub mod ct;
pub mod error;
pub mod gsd;
pub mod types;

// Re-export commonly used types
pub use error::{GsdForgeError, Result};
pub use gsd::{GsdSynthesizer, Lexicon, MergeEngine, MergeReport, Pattern};
pub use types::{BlendConfig, FetchConfig, FilterStats, MergedEntry, Profile, Provenance};

// Re-export main functionality
pub use ct::CtFetcher;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library: set up logging from `RUST_LOG` (default `warn`)
pub fn init() -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (e.g. in tests) is fine; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    Ok(())
}
