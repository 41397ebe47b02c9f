//! Line-oriented corpus I/O: loading, persistence, and the parity filter

mod filter;
mod loader;
mod writer;

pub use filter::keep_even_lines;
pub use loader::load;
pub use writer::save;
