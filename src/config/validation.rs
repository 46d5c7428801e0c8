use crate::config::types::{Config, CrawlerConfig, SearchConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_search_config(&config.search);
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    // max_depth >= 0 is always true for u32, so no check needed

    validate_domain_string(&config.domain)?;

    if let Some(base_url) = &config.base_url {
        validate_base_url(base_url)?;
    }

    if config.timeout == 0 {
        return Err(ConfigError::Validation(
            "timeout must be at least 1ms".to_string(),
        ));
    }

    if let Some(user_agent) = &config.user_agent {
        if user_agent.trim().is_empty() {
            return Err(ConfigError::Validation(
                "user-agent cannot be blank".to_string(),
            ));
        }
    }

    Ok(())
}

/// Search settings have no hard failures; an empty term just finds nothing
fn validate_search_config(config: &SearchConfig) {
    if config.term.is_empty() {
        tracing::warn!("Search term is empty; no matches will be recorded");
    }
}

/// Validates the base URL used for resolving relative links
fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let url = Url::parse(base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url '{}': {}", base_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' must use http or https",
            base_url
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' has no host",
            base_url
        )));
    }

    Ok(())
}

/// Validates the target hostname
fn validate_domain_string(domain: &str) -> Result<(), ConfigError> {
    if domain.is_empty() {
        return Err(ConfigError::InvalidPattern(
            "Domain cannot be empty".to_string(),
        ));
    }

    // Rejects schemes, ports and paths as well as stray punctuation
    if !domain
        .chars()
        .all(|c| c.is_alphanumeric() || c == '.' || c == '-')
    {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain '{}' contains invalid characters",
            domain
        )));
    }

    if domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-')
    {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain '{}' cannot start or end with '.' or '-'",
            domain
        )));
    }

    if domain.contains("..") {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain '{}' cannot contain consecutive dots",
            domain
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> Config {
        Config {
            crawler: CrawlerConfig {
                domain: "www.nytimes.com".to_string(),
                base_url: None,
                max_depth: 2,
                timeout: 10_000,
                user_agent: None,
            },
            search: SearchConfig {
                term: "trump".to_string(),
                context_chars: 10,
            },
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate(&create_test_config()).is_ok());
    }

    #[test]
    fn test_validate_domain_string() {
        assert!(validate_domain_string("example.com").is_ok());
        assert!(validate_domain_string("sub.example.com").is_ok());
        assert!(validate_domain_string("localhost").is_ok());
        assert!(validate_domain_string("127.0.0.1").is_ok());

        assert!(validate_domain_string("").is_err());
        assert!(validate_domain_string("http://example.com").is_err());
        assert!(validate_domain_string("example.com:8080").is_err());
        assert!(validate_domain_string("example.com/path").is_err());
        assert!(validate_domain_string(".example.com").is_err());
        assert!(validate_domain_string("example.com.").is_err());
        assert!(validate_domain_string("example..com").is_err());
    }

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("http://example.com").is_ok());
        assert!(validate_base_url("https://example.com/section/").is_ok());
        assert!(validate_base_url("http://127.0.0.1:4000").is_ok());

        assert!(validate_base_url("example.com").is_err());
        assert!(validate_base_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = create_test_config();
        config.crawler.timeout = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_blank_user_agent_rejected() {
        let mut config = create_test_config();
        config.crawler.user_agent = Some("   ".to_string());
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_term_allowed() {
        let mut config = create_test_config();
        config.search.term = String::new();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_internationalized_domain_accepted() {
        // Converted to punycode when the crawl scope is built
        let mut config = create_test_config();
        config.crawler.domain = "bücher.de".to_string();
        assert!(validate(&config).is_ok());
    }
}
