use crate::config::types::Options;
use crate::ConfigError;
use url::Url;

/// Validates resolved options before the pipeline starts
pub fn validate(options: &Options) -> Result<(), ConfigError> {
    if options.reports_directory.is_empty() {
        return Err(ConfigError::Validation(
            "reports_directory cannot be empty".to_string(),
        ));
    }

    let url = Url::parse(&options.url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid root URL '{}': {}", options.url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "Root URL must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if options.crawl.max_concurrency < 1 || options.crawl.max_concurrency > 100 {
        return Err(ConfigError::Validation(format!(
            "max_concurrency must be between 1 and 100, got {}",
            options.crawl.max_concurrency
        )));
    }

    Ok(())
}
