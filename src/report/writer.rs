//! Report persistence
//!
//! Run-directory creation is deferred to this step: nothing on disk exists
//! for a run until its first report is written.

use crate::report::path::ReportDestination;
use std::path::PathBuf;

/// Writes a report payload to its destination, returning the written path
///
/// The destination directory is created recursively if missing (idempotent);
/// an existing file at the target path is overwritten.
pub fn write_report(
    dest: &ReportDestination,
    extension: &str,
    payload: &[u8],
) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(&dest.directory)?;

    let file_path = dest
        .directory
        .join(format!("{}.{}", dest.filename, extension));
    std::fs::write(&file_path, payload)?;

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_directories() {
        let tmp = TempDir::new().unwrap();
        let dest = ReportDestination {
            directory: tmp.path().join("run").join("blog"),
            filename: "post".to_string(),
        };

        let path = write_report(&dest, "html", b"<html></html>").unwrap();

        assert!(path.exists());
        assert_eq!(path, tmp.path().join("run/blog/post.html"));
    }

    #[test]
    fn test_second_write_wins() {
        let tmp = TempDir::new().unwrap();
        let dest = ReportDestination {
            directory: tmp.path().to_path_buf(),
            filename: "index".to_string(),
        };

        write_report(&dest, "html", b"first").unwrap();
        let path = write_report(&dest, "html", b"second").unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, "second");
    }
}
