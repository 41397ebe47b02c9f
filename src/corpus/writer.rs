//! Domain corpus persistence

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{GsdForgeError, Result};

/// Write a corpus to a plain-text file, one domain per line.
///
/// Overwrites an existing file. A failure mid-write may leave a truncated
/// file behind; no rollback is attempted.
pub fn save(domains: &[String], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| io_error(e, path))?;
    let mut writer = BufWriter::new(file);

    for domain in domains {
        writeln!(writer, "{}", domain).map_err(|e| io_error(e, path))?;
    }
    writer.flush().map_err(|e| io_error(e, path))?;

    tracing::debug!(
        path = %path.display(),
        count = domains.len(),
        "saved domain corpus"
    );

    Ok(())
}

pub(crate) fn io_error(err: std::io::Error, path: &Path) -> GsdForgeError {
    GsdForgeError::io(err.to_string(), Some(path.to_string_lossy().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::load;

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let corpus = vec![
            "good.com".to_string(),
            "safe.org".to_string(),
            "paypallogin123.icu".to_string(),
        ];
        save(&corpus, &path).unwrap();

        let reloaded = load(&path).unwrap();
        assert_eq!(reloaded, corpus);
    }

    #[test]
    fn test_save_newline_terminated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        save(&["a.com".to_string(), "b.net".to_string()], &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "a.com\nb.net\n");
    }

    #[test]
    fn test_save_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        save(&vec!["old.com".to_string(); 5], &path).unwrap();
        save(&["new.com".to_string()], &path).unwrap();

        assert_eq!(load(&path).unwrap(), vec!["new.com"]);
    }

    #[test]
    fn test_save_to_bad_path_is_io_error() {
        let result = save(
            &["a.com".to_string()],
            Path::new("/nonexistent/dir/out.txt"),
        );
        assert!(matches!(result, Err(GsdForgeError::Io { .. })));
    }
}
