use crate::config::types::Overrides;
use crate::ConfigError;
use std::path::Path;

/// Loads partial option overrides from a TOML file
///
/// Any field may be absent; the result is merged onto the documented
/// defaults by [`resolve`](crate::config::resolve).
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use sitelight::config::load_overrides;
///
/// let overrides = load_overrides(Path::new("sitelight.toml")).unwrap();
/// ```
pub fn load_overrides(path: &Path) -> Result<Overrides, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let overrides: Overrides = toml::from_str(&content)?;
    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolve;
    use crate::config::types::OutputFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_partial_overrides() {
        let content = r#"
url = "https://docs.example.org/"

[crawl]
max-depth = 4

[audit.flags]
output = "json"
"#;

        let file = create_temp_config(content);
        let overrides = load_overrides(file.path()).unwrap();
        let options = resolve(overrides);

        assert_eq!(options.url, "https://docs.example.org/");
        assert_eq!(options.crawl.max_depth, 4);
        // Sibling crawl defaults survive a single-key override
        assert_eq!(options.crawl.interval_ms, 1000);
        assert_eq!(options.audit.flags.output, OutputFormat::Json);
        assert_eq!(options.audit.config.extends, "default");
    }

    #[test]
    fn test_load_empty_file() {
        let file = create_temp_config("");
        let overrides = load_overrides(file.path()).unwrap();
        let options = resolve(overrides);

        assert_eq!(options.reports_directory, "reports");
        assert_eq!(options.crawl.max_concurrency, 3);
    }

    #[test]
    fn test_load_with_invalid_path() {
        let result = load_overrides(Path::new("/nonexistent/sitelight.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_overrides(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_non_table_group_value_rejected() {
        // A scalar where a group table is expected is a parse error, not a
        // silently-ignored override
        let file = create_temp_config("crawl = 3");
        let result = load_overrides(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
