//! GSD generation and insertion
//!
//! Pattern-based synthetic suspicious-domain generation plus the
//! merge/shuffle pipeline that blends synthetic names into a real corpus.

mod lexicon;
mod merge;
mod report;
mod synth;

pub use lexicon::{Lexicon, ACTIONS, BRANDS, MODIFIERS, TLDS};
pub use merge::{into_domains, MergeEngine};
pub use report::MergeReport;
pub use synth::{GsdSynthesizer, Pattern};
