//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::{AppConfig, site_url};
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },

    #[error("missing required configuration: {field} ({hint})")]
    Missing { field: String, hint: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` for a site with a blank URL, and
    /// `ConfigError::Invalid` if:
    /// - `sites` is empty or any site URL is not an absolute http(s) URL
    /// - `max_bytes` is 0 or exceeds 50MB
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `user_agent` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sites.is_empty() {
            return Err(ConfigError::Invalid { field: "sites".into(), reason: "at least one site is required".into() });
        }
        for (name, site) in self.sites.iter() {
            if site.url.trim().is_empty() {
                return Err(ConfigError::Missing {
                    field: format!("sites.{name}.url"),
                    hint: format!("Set WXSCRAPE_SITES__{}__URL environment variable", name.to_uppercase()),
                });
            }
            let url = site_url(&site.url).map_err(|e| ConfigError::Invalid {
                field: format!("sites.{name}.url"),
                reason: format!("must be an absolute http(s) URL ({e})"),
            })?;
            if url.scheme() == "http" {
                tracing::warn!(site = name, %url, "site is configured without TLS");
            }
        }

        if self.max_bytes == 0 {
            return Err(ConfigError::Invalid { field: "max_bytes".into(), reason: "must be greater than 0".into() });
        }
        if self.max_bytes > 50 * 1024 * 1024 {
            return Err(ConfigError::Invalid { field: "max_bytes".into(), reason: "must not exceed 50MB".into() });
        }

        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteRegistry;

    #[test]
    fn test_validate_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_registry() {
        let config = AppConfig { sites: SiteRegistry::from_iter(Vec::<(String, String)>::new()), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "sites"));
    }

    #[test]
    fn test_validate_site_url_scheme() {
        let config = AppConfig { sites: SiteRegistry::from_iter([("wowt", "ftp://wowt.com")]), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "sites.wowt.url"));
    }

    #[test]
    fn test_validate_site_url_scheme_case() {
        let sites = SiteRegistry::from_iter([("wowt", "HTTPS://www.wowt.com/weather")]);
        let config = AppConfig { sites, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_site_url_without_scheme() {
        let config = AppConfig { sites: SiteRegistry::from_iter([("wowt", "www.wowt.com/weather")]), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "sites.wowt.url"));
    }

    #[test]
    fn test_validate_blank_site_url() {
        let config = AppConfig { sites: SiteRegistry::from_iter([("kwwl", " ")]), ..Default::default() };
        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::Missing { field, hint }) if field == "sites.kwwl.url" && hint.contains("WXSCRAPE_SITES__KWWL__URL")
        ));
    }

    #[test]
    fn test_validate_plain_http_site_allowed() {
        let config =
            AppConfig { sites: SiteRegistry::from_iter([("local", "http://localhost:8080/wx")]), ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_max_bytes_zero() {
        let config = AppConfig { max_bytes: 0, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "max_bytes"));
    }

    #[test]
    fn test_validate_max_bytes_exceeds_limit() {
        let config = AppConfig { max_bytes: 51 * 1024 * 1024, ..Default::default() }; // 51MB
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "max_bytes"));
    }

    #[test]
    fn test_validate_timeout_too_small() {
        let config = AppConfig { timeout_ms: 50, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "timeout_ms"));
    }

    #[test]
    fn test_validate_timeout_exceeds_limit() {
        let config = AppConfig { timeout_ms: 301_000, ..Default::default() }; // 5min 1sec
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "timeout_ms"));
    }

    #[test]
    fn test_validate_empty_user_agent() {
        let config = AppConfig { user_agent: String::new(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "user_agent"));
    }

    #[test]
    fn test_validate_edge_case_values() {
        let config = AppConfig { max_bytes: 1, timeout_ms: 100, ..Default::default() }; // minimum valid values
        assert!(config.validate().is_ok());
    }
}
