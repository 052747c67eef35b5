//! Input file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists all CSV files in a directory.
///
/// Matching is case-insensitive on the `.csv` extension and skips
/// subdirectories. Files are returned sorted by file name so that
/// concatenation order (and therefore first-wins deduplication) is
/// stable across filesystems.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in &["sales_q2.csv", "sales_q1.csv", "notes.txt", "SALES_Q3.CSV"] {
            let path = dir.path().join(name);
            std::fs::write(&path, "order_id\n1").unwrap();
        }
        std::fs::create_dir(dir.path().join("archive.csv")).unwrap();
        dir
    }

    #[test]
    fn lists_only_csv_files_sorted_by_name() {
        let dir = create_test_dir();
        let files = list_csv_files(dir.path()).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["SALES_Q3.CSV", "sales_q1.csv", "sales_q2.csv"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = list_csv_files(&missing).unwrap_err();
        assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
    }
}
