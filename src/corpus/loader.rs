//! Line-oriented domain corpus loading

use std::path::Path;

use crate::error::{GsdForgeError, Result};

/// Load a domain corpus from a plain-text file, one domain per line.
///
/// Lines are trimmed of surrounding whitespace; lines empty after trimming
/// are dropped. No case normalization and no format validation — entries are
/// kept verbatim, duplicates included, in file order.
pub fn load(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            GsdForgeError::not_found(path.to_string_lossy().to_string())
        }
        _ => GsdForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string())),
    })?;

    let domains: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    tracing::debug!(
        path = %path.display(),
        count = domains.len(),
        "loaded domain corpus"
    );

    Ok(domains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_drops_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "  \n\nfoo.com\n").unwrap();

        let domains = load(file.path()).unwrap();
        assert_eq!(domains, vec!["foo.com".to_string()]);
    }

    #[test]
    fn test_load_preserves_order_and_duplicates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "b.com\na.com\nb.com\n").unwrap();

        let domains = load(file.path()).unwrap();
        assert_eq!(domains, vec!["b.com", "a.com", "b.com"]);
    }

    #[test]
    fn test_load_does_not_normalize_case() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Example.COM\n").unwrap();

        let domains = load(file.path()).unwrap();
        assert_eq!(domains, vec!["Example.COM"]);
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let result = load(Path::new("/nonexistent/domains.txt"));
        assert!(matches!(result, Err(GsdForgeError::NotFound { .. })));
    }
}
