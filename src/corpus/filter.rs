//! Line-parity filter
//!
//! Halves a list by keeping even-numbered lines (2, 4, 6, ... in 1-based
//! counting) and dropping the odd ones.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::writer::io_error;
use crate::error::{GsdForgeError, Result};
use crate::types::FilterStats;

/// Copy even-numbered lines of `input` to `output`, verbatim.
///
/// Blank lines are not special-cased: whatever lands on an even position is
/// kept, including empty lines.
pub fn keep_even_lines(input: &Path, output: &Path) -> Result<FilterStats> {
    let content = std::fs::read_to_string(input).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            GsdForgeError::not_found(input.to_string_lossy().to_string())
        }
        _ => io_error(e, input),
    })?;

    let lines: Vec<&str> = content.lines().collect();

    let file = File::create(output).map_err(|e| io_error(e, output))?;
    let mut writer = BufWriter::new(file);

    let mut kept = 0usize;
    for line in lines.iter().skip(1).step_by(2) {
        writeln!(writer, "{}", line).map_err(|e| io_error(e, output))?;
        kept += 1;
    }
    writer.flush().map_err(|e| io_error(e, output))?;

    let stats = FilterStats {
        total: lines.len(),
        kept,
    };

    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        total = stats.total,
        kept = stats.kept,
        "filtered even-numbered lines"
    );

    Ok(stats)
}
