//! Report destination derivation
//!
//! Purely string computation: no network or filesystem access. The mapping
//! from URL to destination depends only on the URL, the root URL, and the
//! run directory.

use std::path::{Path, PathBuf};

/// On-disk destination for one URL's report, without extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDestination {
    pub directory: PathBuf,
    pub filename: String,
}

/// Computes the (directory, filename) pair for a discovered URL
///
/// The root URL prefix is stripped from the URL (plain substring removal of
/// the first occurrence) and the remainder split on `/`. Only the first
/// segment forms a subdirectory under the run directory; deeper segments do
/// not nest, so URLs sharing a first segment land in the same directory.
/// The filename is the last segment, or `index` when the URL ends at the
/// root. A remainder without any `/` (root prefix absent from the URL)
/// becomes a filename directly under the run directory.
pub fn derive_destination(url: &str, root: &str, run_dir: &Path) -> ReportDestination {
    let stripped = url.replacen(root, "", 1);
    let segments: Vec<&str> = stripped.split('/').collect();

    let last = segments.last().copied().unwrap_or("");
    let filename = if last.is_empty() {
        "index".to_string()
    } else {
        last.to_string()
    };

    let directory = if segments.len() >= 2 && !segments[0].is_empty() {
        run_dir.join(segments[0])
    } else {
        run_dir.to_path_buf()
    };

    ReportDestination {
        directory,
        filename,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_dir() -> PathBuf {
        PathBuf::from("reports/T")
    }

    #[test]
    fn test_nested_path() {
        let dest = derive_destination(
            "https://example.com/blog/post-1",
            "https://example.com/",
            &run_dir(),
        );
        assert_eq!(dest.directory, PathBuf::from("reports/T/blog"));
        assert_eq!(dest.filename, "post-1");
    }

    #[test]
    fn test_root_url_maps_to_index() {
        let dest = derive_destination(
            "https://example.com/",
            "https://example.com/",
            &run_dir(),
        );
        assert_eq!(dest.directory, PathBuf::from("reports/T"));
        assert_eq!(dest.filename, "index");
    }

    #[test]
    fn test_single_segment_lands_in_run_dir() {
        let dest = derive_destination(
            "https://example.com/about",
            "https://example.com/",
            &run_dir(),
        );
        assert_eq!(dest.directory, PathBuf::from("reports/T"));
        assert_eq!(dest.filename, "about");
    }

    #[test]
    fn test_shared_first_segment_flattens() {
        // Intended-but-coarse: deeper path levels do not create deeper
        // directories, so both URLs share the same directory
        let a = derive_destination(
            "https://example.com/blog/a",
            "https://example.com/",
            &run_dir(),
        );
        let c = derive_destination(
            "https://example.com/blog/b/c",
            "https://example.com/",
            &run_dir(),
        );
        assert_eq!(a.directory, PathBuf::from("reports/T/blog"));
        assert_eq!(c.directory, PathBuf::from("reports/T/blog"));
        assert_eq!(a.filename, "a");
        assert_eq!(c.filename, "c");
    }

    #[test]
    fn test_trailing_slash_maps_to_index_in_subdirectory() {
        let dest = derive_destination(
            "https://example.com/blog/",
            "https://example.com/",
            &run_dir(),
        );
        assert_eq!(dest.directory, PathBuf::from("reports/T/blog"));
        assert_eq!(dest.filename, "index");
    }

    #[test]
    fn test_unmatched_root_without_separator() {
        // Root prefix absent and no '/' in the remainder: the whole
        // remainder is the filename, directly under the run directory
        let dest = derive_destination("about", "https://example.com/", &run_dir());
        assert_eq!(dest.directory, PathBuf::from("reports/T"));
        assert_eq!(dest.filename, "about");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let a = derive_destination(
            "https://example.com/docs/guide",
            "https://example.com/",
            &run_dir(),
        );
        let b = derive_destination(
            "https://example.com/docs/guide",
            "https://example.com/",
            &run_dir(),
        );
        assert_eq!(a, b);
    }
}
